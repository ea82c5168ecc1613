//! Decides whether a clock event may be recorded, given what is already stored.
//!
//! Two independent rules:
//! 1. per activity, actions alternate and start with IN;
//! 2. LUNCH/BREAK can only clock IN while WORK's latest event is IN.
//!
//! Both rules are always checked and every broken one is reported.

use crate::db::store::ClockStore;
use crate::errors::{AppError, AppResult};
use crate::models::{action::Action, activity::Activity};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("already clocked {action} for {activity}; cannot clock {action} again")]
    DuplicateAction { activity: Activity, action: Action },

    #[error("cannot clock OUT for {activity} when not clocked IN")]
    OutWithoutIn { activity: Activity },

    #[error("cannot clock IN for {activity} when not clocked IN for WORK")]
    WorkNotActive { activity: Activity },
}

/// Non-empty list of broken rules, in rule order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejections(Vec<Rejection>);

impl Rejections {
    pub fn reasons(&self) -> &[Rejection] {
        &self.0
    }

    pub fn contains(&self, reason: &Rejection) -> bool {
        self.0.contains(reason)
    }
}

impl fmt::Display for Rejections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reason) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{reason}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejections {}

pub fn validate<S: ClockStore + ?Sized>(
    store: &S,
    activity: Activity,
    action: Action,
) -> AppResult<()> {
    let mut reasons = Vec::new();

    match store.most_recent(activity)? {
        Some(last) if last.action == action => {
            reasons.push(Rejection::DuplicateAction { activity, action });
        }
        None if action.is_out() => {
            reasons.push(Rejection::OutWithoutIn { activity });
        }
        _ => {}
    }

    if activity.requires_work() && action.is_in() {
        let work_active = store
            .most_recent(Activity::Work)?
            .is_some_and(|ev| ev.action.is_in());
        if !work_active {
            reasons.push(Rejection::WorkNotActive { activity });
        }
    }

    if reasons.is_empty() {
        Ok(())
    } else {
        tracing::debug!(%activity, %action, ?reasons, "clock event rejected");
        Err(AppError::Rejected(Rejections(reasons)))
    }
}
