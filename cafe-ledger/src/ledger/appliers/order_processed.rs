//! OrderProcessed event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::order::{EventPayload, LedgerEvent};

/// OrderProcessed applier - drops the order from the book, leaving the
/// remaining orders in their original order
pub struct OrderProcessedApplier;

impl EventApplier for OrderProcessedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::OrderProcessed { order_id, .. } = &event.payload {
            state.pending_orders.retain(|o| o.order_id != *order_id);
        }
    }
}
