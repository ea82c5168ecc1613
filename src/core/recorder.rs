use crate::core::validator::validate;
use crate::db::store::ClockStore;
use crate::errors::AppResult;
use crate::models::{action::Action, activity::Activity, event::ClockEvent};

/// High-level business logic for clocking in and out.
pub struct Recorder;

impl Recorder {
    /// Validate, then append. A rejected event never reaches the store.
    pub fn record<S: ClockStore + ?Sized>(
        store: &mut S,
        activity: Activity,
        action: Action,
    ) -> AppResult<ClockEvent> {
        validate(store, activity, action)?;
        store.append(activity, action)
    }
}
