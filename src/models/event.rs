use super::{action::Action, activity::Activity};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Storage format of `clock_records.timestamp`.
/// Fixed width, so lexicographic order is chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// An immutable clock fact: `activity` went `action` at `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockEvent {
    pub id: String,               // ⇔ clock_records.uuid
    pub activity: Activity,       // ⇔ clock_records.activity (0,1,2)
    pub action: Action,           // ⇔ clock_records.action (1 = in, 0 = out)
    pub timestamp: NaiveDateTime, // ⇔ clock_records.timestamp (local wall clock)
}

impl ClockEvent {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
    }
}
