//! TablesMerged event applier
//!
//! Removes the absorbed table and folds it into the target in one step.
//! Pending orders of the absorbed table follow it to the target so the
//! order book never points at a table that is gone.

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::order::{EventPayload, LedgerEvent};

/// TablesMerged applier
pub struct TablesMergedApplier;

impl EventApplier for TablesMergedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        let EventPayload::TablesMerged { target_id, source } = &event.payload else {
            return;
        };
        if !state.contains_table(*target_id) {
            return;
        }
        let Some(absorbed) = state.remove_table(source.id) else {
            return;
        };

        if let Some(target) = state.table_mut(*target_id) {
            target.occupancy += absorbed.occupancy;
            target.capacity += absorbed.capacity;
            target.running_total += absorbed.running_total;
            target.order_history.extend(absorbed.order_history);
            target.merged_with = Some(absorbed.id);
        }

        for order in state
            .pending_orders
            .iter_mut()
            .filter(|o| o.table_id == absorbed.id)
        {
            order.table_id = *target_id;
        }
    }
}
