use crate::db::store::ClockStore;
use crate::errors::AppResult;
use crate::models::event::ClockEvent;
use std::collections::BTreeSet;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the records at the given 1-based positions (duplicates collapse).
    pub fn remove<S: ClockStore + ?Sized>(
        store: &mut S,
        positions: &[usize],
    ) -> AppResult<Vec<ClockEvent>> {
        let positions: BTreeSet<usize> = positions.iter().copied().collect();
        store.delete_by_position(&positions)
    }

    pub fn clear<S: ClockStore + ?Sized>(store: &mut S) -> AppResult<usize> {
        store.truncate()
    }
}
