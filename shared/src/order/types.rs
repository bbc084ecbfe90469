//! Order and command value types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Line items
// ============================================================================

/// Priced line on a table's bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub menu_item_name: String,
    pub quantity: i32,
    /// Unit price captured when the order was placed
    pub unit_price: Decimal,
    /// `unit_price * quantity`
    pub price: Decimal,
    /// Covered by a payment
    #[serde(default)]
    pub settled: bool,
}

/// Requested quantity for one menu item (input, not yet priced)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: i32,
}

impl OrderLine {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

// ============================================================================
// Order book
// ============================================================================

/// Order waiting for kitchen/staff action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    /// Session-unique id, assigned in placement order
    pub order_id: u64,
    pub table_id: i64,
    pub items: Vec<LineItem>,
    /// Server timestamp (Unix milliseconds)
    pub placed_at: i64,
}

impl PendingOrder {
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// Reference to a pending order: by position in the book or by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum OrderRef {
    Position(usize),
    Id(u64),
}

impl std::fmt::Display for OrderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderRef::Position(index) => write!(f, "position {}", index),
            OrderRef::Id(id) => write!(f, "id {}", id),
        }
    }
}

// ============================================================================
// Command response
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Table affected (adjust/merge/split/pay)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<i64>,
    /// Pending order created by PlaceOrder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, table_id: Option<i64>, order_id: Option<u64>) -> Self {
        Self {
            command_id,
            success: true,
            table_id,
            order_id,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            table_id: None,
            order_id: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            table_id: None,
            order_id: None,
            error: None,
        }
    }
}

/// Command error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    TableNotFound,
    OrderNotFound,
    SameTable,
    TableNotMerged,
    TableAlreadyExists,
    /// Merged table would exceed the seat limit
    MergeTooLarge,
    EmptyOrder,
    UnknownItem,
    InvalidQuantity,
    InvalidPrice,
    InvalidConfig,
    /// Input could not be parsed as a command
    InvalidRequest,
}
