//! OccupancyAdjusted event applier

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::order::{EventPayload, LedgerEvent};

/// OccupancyAdjusted applier
pub struct OccupancyAdjustedApplier;

impl EventApplier for OccupancyAdjustedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        if let EventPayload::OccupancyAdjusted {
            table_id,
            occupancy,
            ..
        } = &event.payload
            && let Some(table) = state.table_mut(*table_id)
        {
            table.occupancy = *occupancy;
        }
    }
}
