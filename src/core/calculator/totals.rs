//! Pairs IN/OUT events of one day into per-activity totals.
//!
//! Known limitations, kept on purpose:
//! - an OUT with no earlier event in the window counts from `day_start`
//!   (a period left open the previous day is cut at midnight);
//! - an IN still open at the end of the window adds nothing;
//! - WORK is reduced by LUNCH and BREAK without checking that those periods
//!   actually fall inside a WORK period.

use crate::models::activity::Activity;
use crate::models::event::ClockEvent;
use chrono::{NaiveDateTime, TimeDelta};

/// Totals in whole seconds, indexed by [`Activity::index`].
pub fn tally(day_start: NaiveDateTime, events: &[ClockEvent]) -> [i64; 3] {
    let mut pending: [Option<NaiveDateTime>; 3] = [None; 3];
    let mut totals = [TimeDelta::zero(); 3];

    for ev in events {
        let slot = ev.activity.index();

        if ev.action.is_out() {
            let since = pending[slot].unwrap_or(day_start);
            totals[slot] = totals[slot] + (ev.timestamp - since);
        }

        // Updated on every event, IN or OUT.
        pending[slot] = Some(ev.timestamp);
    }

    let work = Activity::Work.index();
    totals[work] = totals[work] - totals[Activity::Lunch.index()];
    totals[work] = totals[work] - totals[Activity::Break.index()];

    totals.map(|t| t.num_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::action::Action;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, s).unwrap()
    }

    fn ev(activity: Activity, action: Action, ts: NaiveDateTime) -> ClockEvent {
        ClockEvent {
            id: format!("{activity}-{action}-{ts}"),
            activity,
            action,
            timestamp: ts,
        }
    }

    fn midnight() -> NaiveDateTime {
        at(0, 0, 0)
    }

    #[test]
    fn empty_day_is_all_zero() {
        assert_eq!(tally(midnight(), &[]), [0, 0, 0]);
    }

    #[test]
    fn plain_work_day() {
        let events = [
            ev(Activity::Work, Action::In, at(9, 0, 0)),
            ev(Activity::Work, Action::Out, at(17, 0, 0)),
        ];
        assert_eq!(tally(midnight(), &events), [8 * 3600, 0, 0]);
    }

    #[test]
    fn lunch_is_taken_out_of_work() {
        let events = [
            ev(Activity::Work, Action::In, at(9, 0, 0)),
            ev(Activity::Lunch, Action::In, at(12, 0, 0)),
            ev(Activity::Lunch, Action::Out, at(12, 30, 0)),
            ev(Activity::Work, Action::Out, at(17, 0, 0)),
        ];
        assert_eq!(tally(midnight(), &events), [7 * 3600 + 1800, 1800, 0]);
    }

    #[test]
    fn lunch_and_breaks_accumulate() {
        let events = [
            ev(Activity::Work, Action::In, at(8, 0, 0)),
            ev(Activity::Break, Action::In, at(10, 0, 0)),
            ev(Activity::Break, Action::Out, at(10, 15, 0)),
            ev(Activity::Lunch, Action::In, at(12, 0, 0)),
            ev(Activity::Lunch, Action::Out, at(13, 0, 0)),
            ev(Activity::Break, Action::In, at(15, 0, 0)),
            ev(Activity::Break, Action::Out, at(15, 10, 30)),
            ev(Activity::Work, Action::Out, at(17, 0, 0)),
        ];
        let breaks = 15 * 60 + 10 * 60 + 30;
        assert_eq!(
            tally(midnight(), &events),
            [9 * 3600 - 3600 - breaks, 3600, breaks]
        );
    }

    #[test]
    fn out_without_in_counts_from_midnight() {
        let events = [ev(Activity::Work, Action::Out, at(2, 0, 0))];
        assert_eq!(tally(midnight(), &events), [2 * 3600, 0, 0]);
    }

    #[test]
    fn open_in_contributes_nothing() {
        let events = [
            ev(Activity::Work, Action::In, at(9, 0, 0)),
            ev(Activity::Work, Action::Out, at(12, 0, 0)),
            ev(Activity::Work, Action::In, at(13, 0, 0)),
        ];
        assert_eq!(tally(midnight(), &events), [3 * 3600, 0, 0]);
    }

    #[test]
    fn fractions_are_truncated() {
        let events = [
            ev(Activity::Work, Action::In, at(9, 0, 0)),
            ev(
                Activity::Work,
                Action::Out,
                at(9, 0, 1) + TimeDelta::milliseconds(999),
            ),
        ];
        assert_eq!(tally(midnight(), &events), [1, 0, 0]);
    }

    #[test]
    fn lunch_outside_work_still_reduces_work() {
        let events = [
            ev(Activity::Work, Action::In, at(9, 0, 0)),
            ev(Activity::Work, Action::Out, at(10, 0, 0)),
            ev(Activity::Lunch, Action::Out, at(2, 0, 0)),
        ];
        // Lunch OUT with no IN that day: two hours from midnight.
        assert_eq!(tally(midnight(), &events), [3600 - 2 * 3600, 2 * 3600, 0]);
    }
}
