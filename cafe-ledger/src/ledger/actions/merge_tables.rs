//! MergeTables command handler
//!
//! Folds the source table into the target: occupancy, capacity, running
//! total and order history move over, the source leaves the registry and
//! the target remembers the source id in its single `merged_with` slot.
//! Both changes travel in one `TablesMerged` event so they are applied
//! together.

use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::order::{EventPayload, LedgerEvent};

/// MergeTables action
#[derive(Debug, Clone)]
pub struct MergeTablesAction {
    pub target_id: i64,
    pub source_id: i64,
}

impl CommandHandler for MergeTablesAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> LedgerResult<Vec<LedgerEvent>> {
        // 1. Cannot merge a table into itself
        if self.target_id == self.source_id {
            return Err(LedgerError::SameTable(self.target_id));
        }

        // 2. Both tables must be in the registry
        let target = ctx.load_table(self.target_id)?;
        let (occupancy, capacity) = (target.occupancy, target.capacity);
        let source = ctx.load_table(self.source_id)?.clone();

        // 3. Combined seats must stay representable
        if occupancy.checked_add(source.occupancy).is_none()
            || capacity.checked_add(source.capacity).is_none()
        {
            return Err(LedgerError::MergeTooLarge {
                target_id: self.target_id,
                source_id: self.source_id,
            });
        }

        let seq = ctx.next_sequence();
        Ok(vec![LedgerEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.client_timestamp),
            EventPayload::TablesMerged {
                target_id: self.target_id,
                source,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::fixtures::{billed, test_menu, test_metadata, test_state};
    use crate::ledger::state::LedgerState;

    fn run(state: &LedgerState, target_id: i64, source_id: i64) -> LedgerResult<Vec<LedgerEvent>> {
        let menu = test_menu();
        let mut ctx = CommandContext::new(state, &menu, 4, 1, 1);
        MergeTablesAction {
            target_id,
            source_id,
        }
        .execute(&mut ctx, &test_metadata())
    }

    #[test]
    fn test_merge_carries_source_snapshot() {
        let mut state = test_state();
        let source = state.table_mut(2).unwrap();
        source.occupancy = 3;
        source.order_history.push(billed("Tea", 2, 2));
        source.running_total = 4.into();

        let events = run(&state, 1, 2).unwrap();
        assert_eq!(events.len(), 1);
        match &events[0].payload {
            EventPayload::TablesMerged { target_id, source } => {
                assert_eq!(*target_id, 1);
                assert_eq!(source.id, 2);
                assert_eq!(source.occupancy, 3);
                assert_eq!(source.order_history.len(), 1);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_merge_same_table() {
        let state = test_state();
        assert_eq!(run(&state, 1, 1).unwrap_err(), LedgerError::SameTable(1));
        // Same-table is reported even for ids that do not exist
        assert_eq!(run(&state, 9, 9).unwrap_err(), LedgerError::SameTable(9));
    }

    #[test]
    fn test_merge_missing_tables() {
        let state = test_state();
        assert_eq!(run(&state, 9, 1).unwrap_err(), LedgerError::TableNotFound(9));
        assert_eq!(run(&state, 1, 9).unwrap_err(), LedgerError::TableNotFound(9));
    }

    #[test]
    fn test_merge_beyond_seat_limit() {
        let mut state = test_state();
        state.table_mut(1).unwrap().capacity = i32::MAX;
        let expected = LedgerError::MergeTooLarge {
            target_id: 1,
            source_id: 2,
        };
        assert_eq!(run(&state, 1, 2).unwrap_err(), expected);

        state.table_mut(1).unwrap().capacity = 4;
        state.table_mut(1).unwrap().occupancy = 4;
        state.table_mut(2).unwrap().capacity = i32::MAX;
        state.table_mut(2).unwrap().occupancy = i32::MAX;
        assert_eq!(run(&state, 1, 2).unwrap_err(), expected);
    }
}
