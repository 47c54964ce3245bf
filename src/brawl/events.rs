use serde::Deserialize;

use crate::brawl::time::{format_compact_timestamp, FormatError};

/// One entry of the upstream event rotation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSlot {
    pub start_time: String,
    pub end_time: String,
    pub event: EventDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventDetails {
    pub mode: String,
    pub map: String,
}

const BLOCK_SEPARATOR: &str = "--------------------";

/// Render the event rotation as readable text, one block per slot in input
/// order.
///
/// `duoShowdown` slots are excluded entirely; `soloShowdown` is renamed to
/// `Showdown`. Every other mode passes through with its upstream casing
/// unmodified. Empty input yields empty output. A malformed timestamp fails
/// the whole pass.
pub fn format_event_rotation(slots: &[EventSlot]) -> Result<String, FormatError> {
    let mut out = String::new();
    for slot in slots {
        let mode = match slot.event.mode.as_str() {
            "duoShowdown" => continue,
            "soloShowdown" => "Showdown",
            other => other,
        };
        let start = format_compact_timestamp(&slot.start_time)?;
        let end = format_compact_timestamp(&slot.end_time)?;

        out.push_str(&format!("Mode: {}\n", mode));
        out.push_str(&format!("Map: {}\n", slot.event.map));
        out.push_str(&format!("Start Time: {} | End Time: {}\n", start, end));
        out.push_str(BLOCK_SEPARATOR);
        out.push('\n');
    }
    Ok(out)
}
