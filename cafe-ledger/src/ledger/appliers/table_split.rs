//! TableSplit event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::models::DiningTable;
use shared::order::{EventPayload, LedgerEvent};

/// TableSplit applier - clears the survivor's link and appends the
/// re-created table at the end of the listing
pub struct TableSplitApplier;

impl EventApplier for TableSplitApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        let EventPayload::TableSplit {
            table_id,
            restored_id,
            capacity,
        } = &event.payload
        else {
            return;
        };
        let Some(survivor) = state.table_mut(*table_id) else {
            return;
        };

        survivor.merged_with = None;
        state.tables.push(DiningTable::new(*restored_id, *capacity));
    }
}
