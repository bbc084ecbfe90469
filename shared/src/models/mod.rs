//! Data models
//!
//! Shared between the ledger and any presentation layer.
//! Table ids are `i64`; money is `rust_decimal::Decimal`.

pub mod dining_table;
pub mod menu;

// Re-exports
pub use dining_table::*;
pub use menu::*;
