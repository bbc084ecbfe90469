//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use enum_dispatch::enum_dispatch;

use crate::ledger::error::LedgerResult;
use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::order::{LedgerCommandPayload, LedgerEvent};

mod adjust_occupancy;
mod merge_tables;
mod pay_bill;
mod place_order;
mod process_order;
mod split_table;

pub use adjust_occupancy::AdjustOccupancyAction;
pub use merge_tables::MergeTablesAction;
pub use pay_bill::PayBillAction;
pub use place_order::PlaceOrderAction;
pub use process_order::ProcessOrderAction;
pub use split_table::SplitTableAction;

/// CommandAction enum - dispatches to concrete action implementations
#[enum_dispatch(CommandHandler)]
pub enum CommandAction {
    AdjustOccupancy(AdjustOccupancyAction),
    MergeTables(MergeTablesAction),
    SplitTable(SplitTableAction),
    PlaceOrder(PlaceOrderAction),
    ProcessOrder(ProcessOrderAction),
    PayBill(PayBillAction),
}

/// Convert a command payload to its CommandAction
///
/// This is the ONLY place with a match on LedgerCommandPayload.
impl From<&LedgerCommandPayload> for CommandAction {
    fn from(payload: &LedgerCommandPayload) -> Self {
        match payload {
            LedgerCommandPayload::AdjustOccupancy { table_id, delta } => {
                CommandAction::AdjustOccupancy(AdjustOccupancyAction {
                    table_id: *table_id,
                    delta: *delta,
                })
            }
            LedgerCommandPayload::MergeTables {
                target_id,
                source_id,
            } => CommandAction::MergeTables(MergeTablesAction {
                target_id: *target_id,
                source_id: *source_id,
            }),
            LedgerCommandPayload::SplitTable { table_id } => {
                CommandAction::SplitTable(SplitTableAction {
                    table_id: *table_id,
                })
            }
            LedgerCommandPayload::PlaceOrder { table_id, items } => {
                CommandAction::PlaceOrder(PlaceOrderAction {
                    table_id: *table_id,
                    items: items.clone(),
                })
            }
            LedgerCommandPayload::ProcessOrder { order } => {
                CommandAction::ProcessOrder(ProcessOrderAction { order: *order })
            }
            LedgerCommandPayload::PayBill { table_id } => CommandAction::PayBill(PayBillAction {
                table_id: *table_id,
            }),
        }
    }
}

/// Run a payload's action against the context
pub fn execute(
    payload: &LedgerCommandPayload,
    ctx: &mut CommandContext<'_>,
    metadata: &CommandMetadata,
) -> LedgerResult<Vec<LedgerEvent>> {
    CommandAction::from(payload).execute(ctx, metadata)
}
