//! The narrow storage interface the clock core runs against.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{action::Action, activity::Activity, event::ClockEvent};
use crate::utils::clock::Clock;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;
use uuid::Uuid;

pub trait ClockStore {
    /// Latest event recorded for `activity`, if any.
    fn most_recent(&self, activity: Activity) -> AppResult<Option<ClockEvent>>;

    /// Events with `start <= timestamp < end`, ascending.
    fn events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<ClockEvent>>;

    /// Every event, ascending. Index `i` is position `i + 1`.
    fn all_events(&self) -> AppResult<Vec<ClockEvent>>;

    /// Store a new event; the store picks the id and the timestamp.
    fn append(&mut self, activity: Activity, action: Action) -> AppResult<ClockEvent>;

    /// Delete the events at the given 1-based positions. Either every
    /// position is valid and all of them go, or nothing is deleted.
    fn delete_by_position(&mut self, positions: &BTreeSet<usize>) -> AppResult<Vec<ClockEvent>>;

    /// Remove every event. Returns how many were removed.
    fn truncate(&mut self) -> AppResult<usize>;
}

/// Resolve 1-based `positions` against `events`, rejecting anything outside `1..=len`.
pub fn resolve_positions<'a>(
    events: &'a [ClockEvent],
    positions: &BTreeSet<usize>,
) -> AppResult<Vec<&'a ClockEvent>> {
    let count = events.len();
    positions
        .iter()
        .map(|&position| {
            position
                .checked_sub(1)
                .and_then(|idx| events.get(idx))
                .ok_or(AppError::IndexOutOfRange { position, count })
        })
        .collect()
}

impl ClockStore for DbPool {
    fn most_recent(&self, activity: Activity) -> AppResult<Option<ClockEvent>> {
        queries::load_most_recent(&self.conn, activity)
    }

    fn events_in_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<ClockEvent>> {
        queries::load_in_range(&self.conn, &start, &end)
    }

    fn all_events(&self) -> AppResult<Vec<ClockEvent>> {
        queries::load_all(&self.conn)
    }

    fn append(&mut self, activity: Activity, action: Action) -> AppResult<ClockEvent> {
        let candidate = ClockEvent {
            id: Uuid::new_v4().to_string(),
            activity,
            action,
            timestamp: Clock::now(self.clock()),
        };

        let tx = self.conn.transaction()?;
        queries::insert_record(&tx, &candidate)?;
        // Read back what SQLite actually holds (timestamp precision is the
        // storage format's, not the clock's).
        let stored = queries::load_by_uuid(&tx, &candidate.id)?.ok_or_else(|| {
            AppError::CorruptRecord(format!("record {} vanished after insert", candidate.id))
        })?;
        tx.commit()?;

        tracing::debug!(id = %stored.id, %activity, %action, "appended clock record");
        Ok(stored)
    }

    fn delete_by_position(&mut self, positions: &BTreeSet<usize>) -> AppResult<Vec<ClockEvent>> {
        let events = queries::load_all(&self.conn)?;
        let doomed: Vec<ClockEvent> = resolve_positions(&events, positions)?
            .into_iter()
            .cloned()
            .collect();

        let tx = self.conn.transaction()?;
        for ev in &doomed {
            queries::delete_record(&tx, &ev.id)?;
        }
        tx.commit()?;

        tracing::debug!(removed = doomed.len(), "deleted clock records by position");
        Ok(doomed)
    }

    fn truncate(&mut self) -> AppResult<usize> {
        let removed = queries::delete_all(&self.conn)?;
        tracing::debug!(removed, "truncated clock records");
        Ok(removed)
    }
}
