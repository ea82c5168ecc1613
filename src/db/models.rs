//! Raw database rows, before decoding into domain types.

use crate::errors::{AppError, AppResult};
use crate::models::{action::Action, activity::Activity, event::ClockEvent};

#[derive(Debug, Clone)]
pub struct DbClockRow {
    pub uuid: String,
    pub activity: i64,
    pub action: i64,
    pub timestamp: String,
}

impl DbClockRow {
    /// Unknown ordinals or unreadable timestamps mean the file was damaged
    /// or written by something else.
    pub fn decode(self) -> AppResult<ClockEvent> {
        let activity = Activity::from_db_code(self.activity).ok_or_else(|| {
            AppError::CorruptRecord(format!(
                "record {} has unknown activity code {}",
                self.uuid, self.activity
            ))
        })?;

        let action = Action::from_db_code(self.action).ok_or_else(|| {
            AppError::CorruptRecord(format!(
                "record {} has unknown action code {}",
                self.uuid, self.action
            ))
        })?;

        let timestamp = ClockEvent::parse_timestamp(&self.timestamp).ok_or_else(|| {
            AppError::CorruptRecord(format!(
                "record {} has unreadable timestamp '{}'",
                self.uuid, self.timestamp
            ))
        })?;

        Ok(ClockEvent {
            id: self.uuid,
            activity,
            action,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(activity: i64, action: i64, timestamp: &str) -> DbClockRow {
        DbClockRow {
            uuid: "r-1".to_string(),
            activity,
            action,
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn decodes_a_well_formed_row() {
        let ev = row(1, 1, "2025-09-01T12:00:00.250000").decode().unwrap();
        assert_eq!(ev.id, "r-1");
        assert_eq!(ev.activity, Activity::Lunch);
        assert_eq!(ev.action, Action::In);
        assert_eq!(ev.timestamp_str(), "2025-09-01T12:00:00.250000");
    }

    #[test]
    fn unknown_activity_ordinal_is_corruption() {
        let err = row(7, 1, "2025-09-01T08:00:00.000000").decode().unwrap_err();
        assert!(matches!(err, AppError::CorruptRecord(ref msg) if msg.contains("activity code 7")));
    }

    #[test]
    fn unknown_action_ordinal_is_corruption() {
        let err = row(0, 5, "2025-09-01T08:00:00.000000").decode().unwrap_err();
        assert!(matches!(err, AppError::CorruptRecord(ref msg) if msg.contains("action code 5")));
    }

    #[test]
    fn unreadable_timestamp_is_corruption() {
        let err = row(0, 1, "garbage").decode().unwrap_err();
        assert!(matches!(err, AppError::CorruptRecord(ref msg) if msg.contains("'garbage'")));
    }
}
