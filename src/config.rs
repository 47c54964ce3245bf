use std::env;
use thiserror::Error;

/// Default base URL for the Brawl Stars API.
pub const DEFAULT_BRAWLSTARS_API_URL: &str = "https://api.brawlstars.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable \"{0}\" not set")]
    MissingVar(&'static str),
}

/// Process-wide configuration, read once at startup and immutable afterwards.
/// Passed into the router state; nothing reads these values from ambient
/// globals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hex-encoded Ed25519 public key of the Discord application (64 hex chars).
    pub discord_public_key: String,
    /// Bearer token for the Brawl Stars API.
    pub brawlstars_api_token: String,
    /// Base URL of the Brawl Stars API. Overridable for local testing.
    pub brawlstars_api_url: String,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// `DISCORD_PUBLIC_KEY` and `BRAWLSTARS_API_TOKEN` are required; absence
    /// of either is startup-fatal. `BRAWLSTARS_API_URL` optionally overrides
    /// the upstream base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            discord_public_key: require_var("DISCORD_PUBLIC_KEY")?,
            brawlstars_api_token: require_var("BRAWLSTARS_API_TOKEN")?,
            brawlstars_api_url: env::var("BRAWLSTARS_API_URL")
                .unwrap_or_else(|_| DEFAULT_BRAWLSTARS_API_URL.to_string()),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
