//! In-memory session state
//!
//! Registry and order book live side by side so a single applier can move
//! a merged table's pending orders together with the table itself.

use shared::models::DiningTable;
use shared::order::{OrderRef, PendingOrder};

/// Table registry plus order book, owned by one ledger session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerState {
    /// Tables in listing order
    pub tables: Vec<DiningTable>,
    /// Pending orders in placement order
    pub pending_orders: Vec<PendingOrder>,
}

impl LedgerState {
    pub fn new(tables: Vec<DiningTable>) -> Self {
        Self {
            tables,
            pending_orders: Vec::new(),
        }
    }

    pub fn table(&self, table_id: i64) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    pub fn table_mut(&mut self, table_id: i64) -> Option<&mut DiningTable> {
        self.tables.iter_mut().find(|t| t.id == table_id)
    }

    pub fn contains_table(&self, table_id: i64) -> bool {
        self.table(table_id).is_some()
    }

    /// Remove a table, keeping the relative order of the rest
    pub fn remove_table(&mut self, table_id: i64) -> Option<DiningTable> {
        let index = self.tables.iter().position(|t| t.id == table_id)?;
        Some(self.tables.remove(index))
    }

    /// Resolve a pending order reference to its position and entry
    pub fn find_pending(&self, order: OrderRef) -> Option<(usize, &PendingOrder)> {
        match order {
            OrderRef::Position(index) => self.pending_orders.get(index).map(|o| (index, o)),
            OrderRef::Id(order_id) => self
                .pending_orders
                .iter()
                .enumerate()
                .find(|(_, o)| o.order_id == order_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(order_id: u64, table_id: i64) -> PendingOrder {
        PendingOrder {
            order_id,
            table_id,
            items: Vec::new(),
            placed_at: 0,
        }
    }

    #[test]
    fn test_remove_table_keeps_order() {
        let mut state = LedgerState::new(vec![
            DiningTable::new(1, 4),
            DiningTable::new(2, 4),
            DiningTable::new(3, 3),
        ]);
        let removed = state.remove_table(2).unwrap();
        assert_eq!(removed.id, 2);
        let ids: Vec<i64> = state.tables.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(state.remove_table(2).is_none());
    }

    #[test]
    fn test_find_pending_by_position_and_id() {
        let mut state = LedgerState::default();
        state.pending_orders = vec![pending(7, 1), pending(9, 2)];

        let (index, order) = state.find_pending(OrderRef::Position(1)).unwrap();
        assert_eq!((index, order.order_id), (1, 9));

        let (index, order) = state.find_pending(OrderRef::Id(7)).unwrap();
        assert_eq!((index, order.table_id), (0, 1));

        assert!(state.find_pending(OrderRef::Position(2)).is_none());
        assert!(state.find_pending(OrderRef::Id(8)).is_none());
    }
}
