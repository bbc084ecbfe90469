//! ProcessOrder command handler
//!
//! Marks a pending order as handled by the kitchen. Billing is untouched:
//! the lines were committed to the table when the order was placed.

use crate::ledger::error::LedgerResult;
use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::order::{EventPayload, LedgerEvent, OrderRef};

/// ProcessOrder action
#[derive(Debug, Clone)]
pub struct ProcessOrderAction {
    pub order: OrderRef,
}

impl CommandHandler for ProcessOrderAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> LedgerResult<Vec<LedgerEvent>> {
        let (_, pending) = ctx.load_pending(self.order)?;
        let payload = EventPayload::OrderProcessed {
            order_id: pending.order_id,
            table_id: pending.table_id,
        };

        let seq = ctx.next_sequence();
        Ok(vec![LedgerEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.client_timestamp),
            payload,
        )])
    }
}
