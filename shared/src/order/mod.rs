//! Ledger Event Sourcing Module
//!
//! This module provides types for the café ledger:
//! - Commands: Requests from the presentation layer to change ledger state
//! - Events: Immutable facts recorded after command processing
//! - Types: Line items, pending orders and command responses

pub mod command;
pub mod event;
pub mod types;

// Re-exports
pub use command::{LedgerCommand, LedgerCommandPayload};
pub use event::{EventPayload, LedgerEvent, LedgerEventType};
pub use types::*;
