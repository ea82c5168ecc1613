use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    In,
    Out,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::In => "IN",
            Action::Out => "OUT",
        }
    }

    /// Convert enum → DB ordinal (IN = 1, OUT = 0)
    pub fn to_db_code(&self) -> i64 {
        match self {
            Action::In => 1,
            Action::Out => 0,
        }
    }

    /// Convert DB ordinal → enum
    pub fn from_db_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Action::In),
            0 => Some(Action::Out),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, Action::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, Action::Out)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
