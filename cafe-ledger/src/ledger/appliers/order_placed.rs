//! OrderPlaced event applier
//!
//! Bills the order's lines to the table and queues the order for the
//! kitchen.

use crate::ledger::money;
use crate::ledger::state::LedgerState;
use crate::ledger::traits::EventApplier;
use shared::order::{EventPayload, LedgerEvent};

/// OrderPlaced applier
pub struct OrderPlacedApplier;

impl EventApplier for OrderPlacedApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent) {
        let EventPayload::OrderPlaced { order } = &event.payload else {
            return;
        };
        let Some(table) = state.table_mut(order.table_id) else {
            return;
        };

        table.running_total += money::sum_prices(&order.items);
        table.order_history.extend(order.items.iter().cloned());
        state.pending_orders.push(order.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::fixtures::{billed, test_state};
    use rust_decimal::Decimal;
    use shared::order::PendingOrder;

    fn placed_event(order_id: u64, table_id: i64) -> LedgerEvent {
        LedgerEvent::new(
            order_id,
            "cmd-1".to_string(),
            None,
            EventPayload::OrderPlaced {
                order: PendingOrder {
                    order_id,
                    table_id,
                    items: vec![billed("Coffee", 2, 3), billed("Cake", 1, 4)],
                    placed_at: 0,
                },
            },
        )
    }

    #[test]
    fn test_order_placed_bills_table_and_queues_order() {
        let mut state = test_state();
        OrderPlacedApplier.apply(&mut state, &placed_event(1, 1));

        let t1 = state.table(1).unwrap();
        assert_eq!(t1.running_total, Decimal::from(10));
        assert_eq!(t1.order_history.len(), 2);
        assert_eq!(state.pending_orders.len(), 1);
        assert_eq!(state.pending_orders[0].table_id, 1);
    }

    #[test]
    fn test_orders_accumulate_in_order() {
        let mut state = test_state();
        OrderPlacedApplier.apply(&mut state, &placed_event(1, 1));
        OrderPlacedApplier.apply(&mut state, &placed_event(2, 1));

        let t1 = state.table(1).unwrap();
        assert_eq!(t1.running_total, Decimal::from(20));
        assert_eq!(t1.order_history.len(), 4);
        let ids: Vec<u64> = state.pending_orders.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
