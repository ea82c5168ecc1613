use super::activity::Activity;
use chrono::NaiveDate;

/// Hours / minutes / seconds split of a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeParts {
    /// Floor division, so a negative total keeps `h*3600 + m*60 + s == total`.
    pub fn from_seconds(total: i64) -> Self {
        Self {
            hours: total.div_euclid(3600),
            minutes: total.rem_euclid(3600) / 60,
            seconds: total.rem_euclid(60),
        }
    }
}

/// Per-activity totals for one calendar day, in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    totals: [i64; 3],
}

impl DaySummary {
    pub fn new(date: NaiveDate, totals: [i64; 3]) -> Self {
        Self { date, totals }
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, [0; 3])
    }

    pub fn seconds(&self, activity: Activity) -> i64 {
        self.totals[activity.index()]
    }

    pub fn parts(&self, activity: Activity) -> TimeParts {
        TimeParts::from_seconds(self.seconds(activity))
    }

    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(|t| *t == 0)
    }
}
