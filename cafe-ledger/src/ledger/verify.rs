//! Invariant verification
//!
//! `runningTotal` is stored rather than recomputed, so every mutation has to
//! keep it in step with the order history. `verify_state` recomputes what
//! can be recomputed and reports every disagreement it finds.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use super::money;
use super::state::LedgerState;

/// A broken ledger invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvariantViolation {
    #[error("table {table_id}: occupancy {occupancy} outside 0..={capacity}")]
    OccupancyOutOfRange {
        table_id: i64,
        occupancy: i32,
        capacity: i32,
    },

    #[error("table {table_id}: capacity {capacity} is not positive")]
    NonPositiveCapacity { table_id: i64, capacity: i32 },

    #[error("table {table_id}: running total {running_total} is negative")]
    NegativeTotal {
        table_id: i64,
        running_total: Decimal,
    },

    #[error("table {table_id}: running total {running_total} != unsettled lines {expected}")]
    TotalMismatch {
        table_id: i64,
        running_total: Decimal,
        expected: Decimal,
    },

    #[error("table {table_id}: line {item} priced {price}, expected {expected}")]
    LinePriceMismatch {
        table_id: i64,
        item: String,
        price: Decimal,
        expected: Decimal,
    },

    #[error("table id {table_id} appears more than once")]
    DuplicateTable { table_id: i64 },

    #[error("pending order {order_id} references missing table {table_id}")]
    DanglingOrder { order_id: u64, table_id: i64 },

    #[error("pending order {order_id} has no items")]
    EmptyPendingOrder { order_id: u64 },
}

/// Check every table and pending order; empty result means consistent
pub fn verify_state(state: &LedgerState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for table in &state.tables {
        if !seen.insert(table.id) {
            violations.push(InvariantViolation::DuplicateTable { table_id: table.id });
        }
        if table.capacity <= 0 {
            violations.push(InvariantViolation::NonPositiveCapacity {
                table_id: table.id,
                capacity: table.capacity,
            });
        }
        if table.occupancy < 0 || table.occupancy > table.capacity {
            violations.push(InvariantViolation::OccupancyOutOfRange {
                table_id: table.id,
                occupancy: table.occupancy,
                capacity: table.capacity,
            });
        }
        if table.running_total < Decimal::ZERO {
            violations.push(InvariantViolation::NegativeTotal {
                table_id: table.id,
                running_total: table.running_total,
            });
        }

        for line in &table.order_history {
            let expected = money::line_price(line.unit_price, line.quantity);
            if line.price != expected {
                violations.push(InvariantViolation::LinePriceMismatch {
                    table_id: table.id,
                    item: line.menu_item_name.clone(),
                    price: line.price,
                    expected,
                });
            }
        }

        let expected = table.unsettled_total();
        if table.running_total != expected {
            violations.push(InvariantViolation::TotalMismatch {
                table_id: table.id,
                running_total: table.running_total,
                expected,
            });
        }
    }

    for order in &state.pending_orders {
        if !seen.contains(&order.table_id) {
            violations.push(InvariantViolation::DanglingOrder {
                order_id: order.order_id,
                table_id: order.table_id,
            });
        }
        if order.items.is_empty() {
            violations.push(InvariantViolation::EmptyPendingOrder {
                order_id: order.order_id,
            });
        }
    }

    for violation in &violations {
        tracing::error!(violation = %violation, "Ledger invariant violated");
    }

    violations
}
