//! BillPaid event applier

use rust_decimal::Decimal;

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::order::{EventPayload, LedgerEvent};

/// BillPaid applier - zeroes the running total and marks every line as
/// settled; the lines themselves stay in the history
pub struct BillPaidApplier;

impl EventApplier for BillPaidApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        let EventPayload::BillPaid { table_id, .. } = &event.payload else {
            return;
        };
        if let Some(table) = state.table_mut(*table_id) {
            table.running_total = Decimal::ZERO;
            for line in table.order_history.iter_mut() {
                line.settled = true;
            }
        }
    }
}
