//! Dining Table Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::LineItem;

/// Dining table entity with its seating and running tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    /// Guests currently seated, always within `0..=capacity`
    pub occupancy: i32,
    pub capacity: i32,
    /// Id of the table most recently absorbed by a merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_with: Option<i64>,
    /// Every line billed to this table, across payments
    pub order_history: Vec<LineItem>,
    /// Unpaid amount owed by the table
    pub running_total: Decimal,
}

impl DiningTable {
    /// Fresh, empty table
    pub fn new(id: i64, capacity: i32) -> Self {
        Self {
            id,
            occupancy: 0,
            capacity,
            merged_with: None,
            order_history: Vec::new(),
            running_total: Decimal::ZERO,
        }
    }

    pub fn is_merged(&self) -> bool {
        self.merged_with.is_some()
    }

    /// Sum of lines not yet covered by a payment
    pub fn unsettled_total(&self) -> Decimal {
        self.order_history
            .iter()
            .filter(|line| !line.settled)
            .map(|line| line.price)
            .sum()
    }

    /// Sum of lines already paid for
    pub fn settled_total(&self) -> Decimal {
        self.order_history
            .iter()
            .filter(|line| line.settled)
            .map(|line| line.price)
            .sum()
    }

    pub fn billing_state(&self) -> BillingState {
        if self.running_total > Decimal::ZERO {
            BillingState::Accruing
        } else {
            BillingState::Open
        }
    }
}

/// Billing dimension of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingState {
    /// Nothing owed
    Open,
    /// Orders placed since the last payment
    Accruing,
}

/// Seed entry used to lay out the café at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSeed {
    pub id: i64,
    pub capacity: i32,
}

/// Read-only projection of a table's bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillView {
    pub table_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_with: Option<i64>,
    pub running_total: Decimal,
    pub settled_total: Decimal,
    pub order_history: Vec<LineItem>,
}

impl From<&DiningTable> for BillView {
    fn from(table: &DiningTable) -> Self {
        Self {
            table_id: table.id,
            merged_with: table.merged_with,
            running_total: table.running_total,
            settled_total: table.settled_total(),
            order_history: table.order_history.clone(),
        }
    }
}
