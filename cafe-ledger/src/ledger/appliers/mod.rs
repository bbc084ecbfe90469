//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions of
//! (state, event).

use enum_dispatch::enum_dispatch;

use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::order::{EventPayload, LedgerEvent};

mod bill_paid;
mod occupancy_adjusted;
mod order_placed;
mod order_processed;
mod table_split;
mod tables_merged;

pub use bill_paid::BillPaidApplier;
pub use occupancy_adjusted::OccupancyAdjustedApplier;
pub use order_placed::OrderPlacedApplier;
pub use order_processed::OrderProcessedApplier;
pub use table_split::TableSplitApplier;
pub use tables_merged::TablesMergedApplier;

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    OccupancyAdjusted(OccupancyAdjustedApplier),
    TablesMerged(TablesMergedApplier),
    TableSplit(TableSplitApplier),
    OrderPlaced(OrderPlacedApplier),
    OrderProcessed(OrderProcessedApplier),
    BillPaid(BillPaidApplier),
}

/// Convert LedgerEvent reference to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&LedgerEvent> for EventAction {
    fn from(event: &LedgerEvent) -> Self {
        match &event.payload {
            EventPayload::OccupancyAdjusted { .. } => {
                EventAction::OccupancyAdjusted(OccupancyAdjustedApplier)
            }
            EventPayload::TablesMerged { .. } => EventAction::TablesMerged(TablesMergedApplier),
            EventPayload::TableSplit { .. } => EventAction::TableSplit(TableSplitApplier),
            EventPayload::OrderPlaced { .. } => EventAction::OrderPlaced(OrderPlacedApplier),
            EventPayload::OrderProcessed { .. } => {
                EventAction::OrderProcessed(OrderProcessedApplier)
            }
            EventPayload::BillPaid { .. } => EventAction::BillPaid(BillPaidApplier),
        }
    }
}

/// Apply a batch of events in sequence order
pub fn apply_all(state: &mut LedgerState, events: &[LedgerEvent]) {
    for event in events {
        EventAction::from(event).apply(state, event);
    }
}
