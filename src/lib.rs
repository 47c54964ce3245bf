pub mod api;
pub mod auth;
pub mod brawl;
pub mod commands;
pub mod config;
pub mod models;

// Re-export commonly used types
pub use api::error::{ApiError, ApiResult};
pub use auth::signature::verify_interaction_signature;
pub use brawl::client::{BrawlApi, BrawlApiClient, UpstreamError};
pub use brawl::events::{format_event_rotation, EventDetails, EventSlot};
pub use brawl::time::{format_compact_timestamp, FormatError};
pub use commands::{route, Command};
pub use config::{AppConfig, ConfigError};
pub use models::interaction::{
    Interaction, InteractionResponse, InteractionResponseType, InteractionType,
};
