//! SplitTable command handler
//!
//! Re-creates the table recorded in `merged_with` as a fresh, empty table
//! at the configured split capacity, and clears the survivor's link. The
//! survivor keeps every guest, seat, line and cent it gathered while
//! merged; nothing is subtracted.

use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::order::{EventPayload, LedgerEvent};

/// SplitTable action
#[derive(Debug, Clone)]
pub struct SplitTableAction {
    pub table_id: i64,
}

impl CommandHandler for SplitTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> LedgerResult<Vec<LedgerEvent>> {
        let table = ctx.load_table(self.table_id)?;
        let restored_id = table
            .merged_with
            .ok_or(LedgerError::NotMerged(self.table_id))?;

        if ctx.state().contains_table(restored_id) {
            return Err(LedgerError::TableAlreadyExists(restored_id));
        }

        let capacity = ctx.split_capacity();
        let seq = ctx.next_sequence();
        Ok(vec![LedgerEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.client_timestamp),
            EventPayload::TableSplit {
                table_id: self.table_id,
                restored_id,
                capacity,
            },
        )])
    }
}
