//! PayBill command handler
//!
//! Settles whatever the table currently owes. The running total goes back
//! to zero; the order history stays as the table's audit trail.

use crate::ledger::error::LedgerResult;
use crate::ledger::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::order::{EventPayload, LedgerEvent};

/// PayBill action
#[derive(Debug, Clone)]
pub struct PayBillAction {
    pub table_id: i64,
}

impl CommandHandler for PayBillAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> LedgerResult<Vec<LedgerEvent>> {
        let amount = ctx.load_table(self.table_id)?.running_total;

        let seq = ctx.next_sequence();
        Ok(vec![LedgerEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.client_timestamp),
            EventPayload::BillPaid {
                table_id: self.table_id,
                amount,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::error::LedgerError;
    use crate::ledger::fixtures::{test_menu, test_metadata, test_state};
    use rust_decimal::Decimal;

    #[test]
    fn test_pay_bill_records_amount() {
        let mut state = test_state();
        state.table_mut(4).unwrap().running_total = Decimal::new(1250, 2);
        let menu = test_menu();
        let mut ctx = CommandContext::new(&state, &menu, 4, 1, 1);

        let events = PayBillAction { table_id: 4 }
            .execute(&mut ctx, &test_metadata())
            .unwrap();
        match &events[0].payload {
            EventPayload::BillPaid { table_id, amount } => {
                assert_eq!(*table_id, 4);
                assert_eq!(*amount, Decimal::new(1250, 2));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_pay_bill_missing_table() {
        let state = test_state();
        let menu = test_menu();
        let mut ctx = CommandContext::new(&state, &menu, 4, 1, 1);
        let err = PayBillAction { table_id: 8 }
            .execute(&mut ctx, &test_metadata())
            .unwrap_err();
        assert_eq!(err, LedgerError::TableNotFound(8));
    }
}
