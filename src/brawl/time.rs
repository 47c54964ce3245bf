use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid compact timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Length of the date-time prefix in the upstream compact format,
/// `YYYYMMDDTHHMMSS`. A trailing `.mmmZ` suffix is ignored.
const COMPACT_PREFIX_LEN: usize = 15;

/// Format an upstream compact UTC timestamp as `MM-DD HH:MM`.
///
/// The instant is reproduced as-is; no timezone conversion is performed.
/// Malformed input is a `FormatError` rather than garbage output.
pub fn format_compact_timestamp(raw: &str) -> Result<String, FormatError> {
    let prefix = raw
        .get(..COMPACT_PREFIX_LEN)
        .ok_or_else(|| FormatError::InvalidTimestamp(raw.to_string()))?;
    let parsed = NaiveDateTime::parse_from_str(prefix, "%Y%m%dT%H%M%S")
        .map_err(|_| FormatError::InvalidTimestamp(raw.to_string()))?;
    Ok(parsed.format("%m-%d %H:%M").to_string())
}
