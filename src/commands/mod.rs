use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::brawl::client::BrawlApi;
use crate::brawl::events::format_event_rotation;
use crate::models::interaction::InteractionResponse;

/// The closed set of application commands this endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Events,
    Brawlers,
}

impl Command {
    pub fn parse(name: &str) -> Option<Command> {
        match name {
            "events" => Some(Command::Events),
            "brawlers" => Some(Command::Brawlers),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Events => "events",
            Command::Brawlers => "brawlers",
        }
    }
}

/// Map a command name to its reply. Each recognized command performs exactly
/// one upstream call; an unrecognized name performs none.
pub async fn route(name: &str, brawl: &dyn BrawlApi) -> ApiResult<InteractionResponse> {
    let Some(command) = Command::parse(name) else {
        return Err(ApiError::UnhandledCommand(format!(
            "unknown command name {:?}",
            name
        )));
    };

    info!(command = command.name(), "Dispatching command");

    match command {
        Command::Events => {
            let slots = brawl.event_rotation().await?;
            let content = format_event_rotation(&slots)?;
            Ok(InteractionResponse::message(content))
        }
        Command::Brawlers => {
            // The roster is forwarded unmodified.
            let roster = brawl.brawlers_raw().await?;
            Ok(InteractionResponse::message(roster))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brawl::client::UpstreamError;
    use crate::brawl::events::{EventDetails, EventSlot};
    use crate::models::interaction::InteractionResponseType;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingBrawlApi {
        brawlers_calls: AtomicUsize,
        events_calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl BrawlApi for CountingBrawlApi {
        async fn brawlers_raw(&self) -> Result<String, UpstreamError> {
            self.brawlers_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(UpstreamError::Status {
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                });
            }
            Ok(r#"{"items":[{"id":16000000,"name":"SHELLY"}]}"#.to_string())
        }

        async fn event_rotation(&self) -> Result<Vec<EventSlot>, UpstreamError> {
            self.events_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(UpstreamError::Status {
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                });
            }
            Ok(vec![EventSlot {
                start_time: "20240805T080000.000Z".to_string(),
                end_time: "20240805T100000.000Z".to_string(),
                event: EventDetails {
                    mode: "heist".to_string(),
                    map: "Safe Zone".to_string(),
                },
            }])
        }
    }

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("events"), Some(Command::Events));
        assert_eq!(Command::parse("brawlers"), Some(Command::Brawlers));
        assert_eq!(Command::parse("ranking"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[tokio::test]
    async fn test_events_makes_one_rotation_call() {
        let brawl = CountingBrawlApi::default();
        let response = route("events", &brawl).await.unwrap();

        assert_eq!(brawl.events_calls.load(Ordering::SeqCst), 1);
        assert_eq!(brawl.brawlers_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            response.kind,
            InteractionResponseType::ChannelMessageWithSource
        );
        let content = response.data.unwrap().content;
        assert!(content.contains("Mode: heist"));
        assert!(content.contains("Start Time: 08-05 08:00 | End Time: 08-05 10:00"));
    }

    #[tokio::test]
    async fn test_brawlers_passes_roster_through() {
        let brawl = CountingBrawlApi::default();
        let response = route("brawlers", &brawl).await.unwrap();

        assert_eq!(brawl.brawlers_calls.load(Ordering::SeqCst), 1);
        assert_eq!(brawl.events_calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            response.data.unwrap().content,
            r#"{"items":[{"id":16000000,"name":"SHELLY"}]}"#
        );
    }

    #[tokio::test]
    async fn test_unknown_command_makes_no_upstream_calls() {
        let brawl = CountingBrawlApi::default();
        let result = route("ranking", &brawl).await;

        assert_eq!(brawl.events_calls.load(Ordering::SeqCst), 0);
        assert_eq!(brawl.brawlers_calls.load(Ordering::SeqCst), 0);
        match result {
            Err(ApiError::UnhandledCommand(msg)) => assert!(msg.contains("ranking")),
            other => panic!("Expected UnhandledCommand error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let brawl = CountingBrawlApi {
            fail: true,
            ..Default::default()
        };
        match route("events", &brawl).await {
            Err(ApiError::Upstream(msg)) => assert!(msg.contains("503")),
            other => panic!("Expected Upstream error, got {:?}", other),
        }
    }
}
