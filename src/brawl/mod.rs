pub mod client;
pub mod events;
pub mod time;

pub use client::{BrawlApi, BrawlApiClient, UpstreamError};
pub use events::{format_event_rotation, EventDetails, EventSlot};
pub use time::{format_compact_timestamp, FormatError};
