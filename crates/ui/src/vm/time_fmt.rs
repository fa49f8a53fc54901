use chrono::{DateTime, Utc};

/// Short wall-clock label shown next to a message.
#[must_use]
pub fn format_message_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M").to_string()
}
