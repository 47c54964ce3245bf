use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use tracing::{info, warn};

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::auth::signature::verify_interaction_signature;
use crate::commands;
use crate::models::interaction::{Interaction, InteractionResponse, InteractionType};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// POST /interactions
///
/// Entry point for interaction callbacks. The signature check runs before
/// the body is interpreted in any way; pings are acknowledged without
/// touching the router; application commands are dispatched by name.
/// Exactly one of handshake reply, router reply, or rejection is produced
/// per invocation, and nothing is remembered across invocations.
#[tracing::instrument(skip(state, headers, body), fields(body_bytes = body.len()))]
pub async fn interactions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<InteractionResponse>> {
    // 1. Extract the signature headers. Without both there is nothing to
    //    verify, so the request is rejected as unsigned.
    let signature = headers.get(SIGNATURE_HEADER).and_then(|h| h.to_str().ok());
    let timestamp = headers.get(TIMESTAMP_HEADER).and_then(|h| h.to_str().ok());

    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        warn!("Interaction request missing signature headers");
        return Err(ApiError::FailedSignature(
            "missing signature headers".to_string(),
        ));
    };

    // 2. Verify before parsing.
    if !verify_interaction_signature(
        signature,
        timestamp,
        &body,
        &state.config.discord_public_key,
    ) {
        warn!("Interaction signature verification failed");
        return Err(ApiError::FailedSignature(
            "signature verification failed".to_string(),
        ));
    }

    // 3. Parse the verified body and branch on interaction type.
    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid interaction body: {}", e)))?;

    match interaction.interaction_type() {
        InteractionType::Ping => {
            info!("Acknowledged ping interaction");
            Ok(Json(InteractionResponse::pong()))
        }
        InteractionType::ApplicationCommand => {
            let name = interaction.command_name();
            info!(command = name, "Routing application command");
            let response = commands::route(name, state.brawl.as_ref()).await?;
            Ok(Json(response))
        }
        InteractionType::Unsupported => {
            warn!(raw_type = interaction.raw_type, "Unsupported interaction type");
            Err(ApiError::UnhandledCommand(format!(
                "unsupported interaction type {}",
                interaction.raw_type
            )))
        }
    }
}
