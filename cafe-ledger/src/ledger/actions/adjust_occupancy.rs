//! AdjustOccupancy command handler
//!
//! Moves a table's guest count by `delta`, clamped to `[0, capacity]`.
//! A change that lands on the current value emits no event.

use crate::ledger::error::LedgerResult;
use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::order::{EventPayload, LedgerEvent};

/// AdjustOccupancy action
#[derive(Debug, Clone)]
pub struct AdjustOccupancyAction {
    pub table_id: i64,
    pub delta: i32,
}

impl CommandHandler for AdjustOccupancyAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> LedgerResult<Vec<LedgerEvent>> {
        let table = ctx.load_table(self.table_id)?;

        // i64 keeps i32::MIN / i32::MAX deltas from overflowing
        let wanted = i64::from(table.occupancy) + i64::from(self.delta);
        let occupancy = wanted.clamp(0, i64::from(table.capacity)) as i32;

        if occupancy == table.occupancy {
            return Ok(vec![]);
        }

        let previous = table.occupancy;
        let seq = ctx.next_sequence();
        Ok(vec![LedgerEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.client_timestamp),
            EventPayload::OccupancyAdjusted {
                table_id: self.table_id,
                previous,
                occupancy,
            },
        )])
    }
}
