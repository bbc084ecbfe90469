//! Shared types for the café ledger
//!
//! Common types used by the ledger and any presentation layer: table and
//! menu models, ledger commands and events, and the unified error codes.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{BillView, DiningTable, MenuCatalog, TableSeed};
pub use order::{LedgerCommand, LedgerCommandPayload, LedgerEvent, LineItem, PendingOrder};
