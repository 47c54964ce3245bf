use serde::{Deserialize, Serialize};
use serde_repr::Serialize_repr;

/// Interaction types the endpoint knows how to handle.
///
/// The wire discriminant stays a raw integer on the inbound envelope so an
/// unrecognized value lands in the explicit `Unsupported` arm instead of
/// failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionType {
    /// Platform-initiated liveness check; must be acknowledged immediately.
    Ping,
    /// User-initiated slash command carrying a command name to route.
    ApplicationCommand,
    /// Anything else; rejected as an unhandled command.
    Unsupported,
}

impl From<u64> for InteractionType {
    fn from(raw: u64) -> Self {
        match raw {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            _ => InteractionType::Unsupported,
        }
    }
}

/// Inbound interaction envelope, parsed from the verified request body.
///
/// Command options exist on the wire for application commands but no current
/// command consumes them, so they are tolerated rather than modeled.
#[derive(Debug, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub raw_type: u64,
    pub data: Option<CommandData>,
}

impl Interaction {
    pub fn interaction_type(&self) -> InteractionType {
        InteractionType::from(self.raw_type)
    }

    /// Command name for application commands, empty when absent.
    pub fn command_name(&self) -> &str {
        self.data.as_ref().map(|d| d.name.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct CommandData {
    pub name: String,
}

/// Response types this endpoint emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageData {
    pub content: String,
}

impl InteractionResponse {
    /// Handshake acknowledgement for ping interactions.
    pub fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    /// Channel-message reply carrying the given content.
    pub fn message(content: impl Into<String>) -> Self {
        Self {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(MessageData {
                content: content.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_ping() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1}"#).unwrap();
        assert_eq!(interaction.interaction_type(), InteractionType::Ping);
        assert!(interaction.data.is_none());
    }

    #[test]
    fn test_deserialize_application_command() {
        let body = json!({
            "type": 2,
            "data": {
                "name": "events",
                "options": [{"name": "verbose", "value": true}]
            },
            "guild_id": "1234"
        });
        let interaction: Interaction = serde_json::from_value(body).unwrap();
        assert_eq!(
            interaction.interaction_type(),
            InteractionType::ApplicationCommand
        );
        assert_eq!(interaction.command_name(), "events");
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":5}"#).unwrap();
        assert_eq!(interaction.interaction_type(), InteractionType::Unsupported);
    }

    #[test]
    fn test_serialize_pong() {
        let body = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(body, json!({"type": 1}));
    }

    #[test]
    fn test_serialize_message() {
        let body = serde_json::to_value(InteractionResponse::message("hello")).unwrap();
        assert_eq!(body, json!({"type": 4, "data": {"content": "hello"}}));
    }
}
