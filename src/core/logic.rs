use crate::core::calculator::totals;
use crate::db::store::ClockStore;
use crate::errors::AppResult;
use crate::models::summary::DaySummary;
use crate::utils::date;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Per-activity totals for one local calendar day. Missing data is just zero.
    pub fn summarize<S: ClockStore + ?Sized>(store: &S, day: NaiveDate) -> AppResult<DaySummary> {
        let (start, end) = date::day_bounds(day);
        let events = store.events_in_range(start, end)?;
        tracing::debug!(%day, events = events.len(), "summarizing day");

        Ok(DaySummary::new(day, totals::tally(start, &events)))
    }

    /// Seven independent daily summaries ending with `last`, oldest first.
    pub fn summarize_week<S: ClockStore + ?Sized>(
        store: &S,
        last: NaiveDate,
    ) -> AppResult<Vec<DaySummary>> {
        date::week_ending(last)
            .into_iter()
            .map(|day| Self::summarize(store, day))
            .collect()
    }
}
