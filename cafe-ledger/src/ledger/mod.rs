//! Café ledger core
//!
//! Command-driven state machine for one café session.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      CafeLedger                         │
//! ├─────────────────────────────────────────────────────────┤
//! │  LedgerCommand ─► CommandAction (validate, no writes)   │
//! │                        │                                │
//! │                        ▼ Vec<LedgerEvent>               │
//! │                   EventAction (apply to LedgerState)    │
//! │                        │                                │
//! │                        ▼                                │
//! │                    journal (session lifetime)           │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! `SharedLedger` wraps a session in a single coarse lock for callers on
//! more than one thread.

pub mod traits;

pub mod actions;
pub mod appliers;
pub mod error;
pub mod manager;
pub mod money;
pub mod shared_ledger;
pub mod state;
pub mod verify;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-exports
pub use error::{LedgerError, LedgerResult};
pub use manager::CafeLedger;
pub use shared_ledger::SharedLedger;
pub use state::LedgerState;
pub use traits::{CommandContext, CommandHandler, CommandMetadata, EventApplier};
pub use verify::{InvariantViolation, verify_state};
