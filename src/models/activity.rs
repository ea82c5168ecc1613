use serde::Serialize;
use std::fmt;

/// The thing being clocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Activity {
    Work,  // 0
    Lunch, // 1
    Break, // 2
}

impl Activity {
    pub const ALL: [Activity; 3] = [Activity::Work, Activity::Lunch, Activity::Break];

    pub fn name(&self) -> &'static str {
        match self {
            Activity::Work => "WORK",
            Activity::Lunch => "LUNCH",
            Activity::Break => "BREAK",
        }
    }

    /// Convert enum → DB ordinal
    pub fn to_db_code(&self) -> i64 {
        match self {
            Activity::Work => 0,
            Activity::Lunch => 1,
            Activity::Break => 2,
        }
    }

    /// Convert DB ordinal → enum
    pub fn from_db_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Activity::Work),
            1 => Some(Activity::Lunch),
            2 => Some(Activity::Break),
            _ => None,
        }
    }

    /// Slot used by per-activity accumulators.
    pub fn index(&self) -> usize {
        self.to_db_code() as usize
    }

    /// LUNCH and BREAK can only start while WORK is running.
    pub fn requires_work(&self) -> bool {
        matches!(self, Activity::Lunch | Activity::Break)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
