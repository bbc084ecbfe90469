//! PlaceOrder command handler
//!
//! Validation order:
//! 1. table exists
//! 2. zero/negative quantities dropped; nothing left → EmptyOrder
//! 3. every remaining item priced from the menu → UnknownItem otherwise
//!
//! Lines are billed to the table at placement time; the pending order is
//! only the kitchen's to-do entry.

use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::money;
use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::order::{EventPayload, LedgerEvent, OrderLine, PendingOrder};

/// PlaceOrder action
#[derive(Debug, Clone)]
pub struct PlaceOrderAction {
    pub table_id: i64,
    pub items: Vec<OrderLine>,
}

impl CommandHandler for PlaceOrderAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> LedgerResult<Vec<LedgerEvent>> {
        ctx.load_table(self.table_id)?;

        let requested: Vec<&OrderLine> = self.items.iter().filter(|l| l.quantity > 0).collect();
        if requested.is_empty() {
            return Err(LedgerError::EmptyOrder(self.table_id));
        }

        let items = requested
            .into_iter()
            .map(|line| {
                let unit_price = ctx
                    .menu()
                    .price_of(&line.name)
                    .ok_or_else(|| LedgerError::UnknownItem(line.name.clone()))?;
                money::price_line(line, unit_price)
            })
            .collect::<LedgerResult<Vec<_>>>()?;

        let order = PendingOrder {
            order_id: ctx.next_order_id(),
            table_id: self.table_id,
            items,
            placed_at: metadata.timestamp,
        };

        let seq = ctx.next_sequence();
        Ok(vec![LedgerEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.client_timestamp),
            EventPayload::OrderPlaced { order },
        )])
    }
}
