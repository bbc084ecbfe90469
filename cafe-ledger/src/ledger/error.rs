//! Ledger errors
//!
//! Every failure is returned to the caller of the operation that caused it.
//! Nothing is retried: all operations are deterministic given their inputs.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::order::{CommandError, CommandErrorCode, OrderRef};
use thiserror::Error;

/// Ledger errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Table not found: {0}")]
    TableNotFound(i64),

    #[error("Pending order not found: {0}")]
    OrderNotFound(OrderRef),

    #[error("Cannot merge table {0} with itself")]
    SameTable(i64),

    #[error("Table {0} is not merged")]
    NotMerged(i64),

    #[error("Table {0} already exists")]
    TableAlreadyExists(i64),

    #[error("Merging table {source_id} into {target_id} exceeds the seat limit")]
    MergeTooLarge { target_id: i64, source_id: i64 },

    #[error("Order for table {0} has no items with a positive quantity")]
    EmptyOrder(i64),

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Invalid quantity for {name}: {quantity}")]
    InvalidQuantity { name: String, quantity: i32 },

    #[error("Invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: Decimal },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LedgerError {
    /// Code carried by `CommandResponse`
    pub fn command_code(&self) -> CommandErrorCode {
        match self {
            LedgerError::TableNotFound(_) => CommandErrorCode::TableNotFound,
            LedgerError::OrderNotFound(_) => CommandErrorCode::OrderNotFound,
            LedgerError::SameTable(_) => CommandErrorCode::SameTable,
            LedgerError::NotMerged(_) => CommandErrorCode::TableNotMerged,
            LedgerError::TableAlreadyExists(_) => CommandErrorCode::TableAlreadyExists,
            LedgerError::MergeTooLarge { .. } => CommandErrorCode::MergeTooLarge,
            LedgerError::EmptyOrder(_) => CommandErrorCode::EmptyOrder,
            LedgerError::UnknownItem(_) => CommandErrorCode::UnknownItem,
            LedgerError::InvalidQuantity { .. } => CommandErrorCode::InvalidQuantity,
            LedgerError::InvalidPrice { .. } => CommandErrorCode::InvalidPrice,
            LedgerError::InvalidConfig(_) => CommandErrorCode::InvalidConfig,
        }
    }

    /// Unified error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LedgerError::TableNotFound(_) => ErrorCode::TableNotFound,
            LedgerError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            LedgerError::SameTable(_) => ErrorCode::TableSameTarget,
            LedgerError::NotMerged(_) => ErrorCode::TableNotMerged,
            LedgerError::TableAlreadyExists(_) => ErrorCode::TableAlreadyExists,
            LedgerError::MergeTooLarge { .. } => ErrorCode::ValueOutOfRange,
            LedgerError::EmptyOrder(_) => ErrorCode::OrderEmpty,
            LedgerError::UnknownItem(_) => ErrorCode::ProductNotFound,
            LedgerError::InvalidQuantity { .. } => ErrorCode::OrderInvalidQuantity,
            LedgerError::InvalidPrice { .. } => ErrorCode::ProductInvalidPrice,
            LedgerError::InvalidConfig(_) => ErrorCode::ConfigError,
        }
    }
}

impl From<LedgerError> for CommandError {
    fn from(err: LedgerError) -> Self {
        CommandError::new(err.command_code(), err.to_string())
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let base = AppError::with_message(err.error_code(), err.to_string());
        match err {
            LedgerError::TableNotFound(id)
            | LedgerError::SameTable(id)
            | LedgerError::NotMerged(id)
            | LedgerError::TableAlreadyExists(id)
            | LedgerError::EmptyOrder(id) => base.with_detail("table_id", id),
            LedgerError::OrderNotFound(OrderRef::Id(id)) => base.with_detail("order_id", id),
            LedgerError::OrderNotFound(OrderRef::Position(index)) => {
                base.with_detail("position", index)
            }
            LedgerError::UnknownItem(name) => base.with_detail("item", name),
            LedgerError::InvalidQuantity { name, quantity } => base
                .with_detail("item", name)
                .with_detail("quantity", quantity),
            LedgerError::MergeTooLarge {
                target_id,
                source_id,
            } => base
                .with_detail("table_id", target_id)
                .with_detail("source_id", source_id),
            LedgerError::InvalidPrice { name, price } => base
                .with_detail("item", name)
                .with_detail("price", price.to_string()),
            LedgerError::InvalidConfig(_) => base,
        }
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
