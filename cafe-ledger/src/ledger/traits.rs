//! Command handling and event application traits
//!
//! ```text
//! LedgerCommand ─► CommandAction::execute(ctx) ─► Vec<LedgerEvent>
//!                                                      │
//!                     LedgerState ◄─ EventAction::apply ┘
//! ```
//!
//! Actions only read state; appliers only write it. An action either
//! returns all of its events or an error, so a rejected command never
//! leaves partial changes behind.

use enum_dispatch::enum_dispatch;
use shared::models::{DiningTable, MenuCatalog};
use shared::order::{LedgerEvent, OrderRef, PendingOrder};

use super::error::{LedgerError, LedgerResult};
use super::state::LedgerState;

/// Metadata attached to every command execution
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub client_timestamp: i64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
}

/// Read-only view of the session handed to actions, plus the id counters
pub struct CommandContext<'a> {
    state: &'a LedgerState,
    menu: &'a MenuCatalog,
    split_capacity: i32,
    next_sequence: u64,
    next_order_id: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        state: &'a LedgerState,
        menu: &'a MenuCatalog,
        split_capacity: i32,
        next_sequence: u64,
        next_order_id: u64,
    ) -> Self {
        Self {
            state,
            menu,
            split_capacity,
            next_sequence,
            next_order_id,
        }
    }

    pub fn state(&self) -> &LedgerState {
        self.state
    }

    pub fn menu(&self) -> &MenuCatalog {
        self.menu
    }

    /// Capacity given to a table re-created by a split
    pub fn split_capacity(&self) -> i32 {
        self.split_capacity
    }

    pub fn load_table(&self, table_id: i64) -> LedgerResult<&DiningTable> {
        self.state
            .table(table_id)
            .ok_or(LedgerError::TableNotFound(table_id))
    }

    pub fn load_pending(&self, order: OrderRef) -> LedgerResult<(usize, &PendingOrder)> {
        self.state
            .find_pending(order)
            .ok_or(LedgerError::OrderNotFound(order))
    }

    pub fn next_sequence(&mut self) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        seq
    }

    pub fn next_order_id(&mut self) -> u64 {
        let id = self.next_order_id;
        self.next_order_id += 1;
        id
    }

    /// Counters after execution: (next_sequence, next_order_id)
    pub fn counters(&self) -> (u64, u64) {
        (self.next_sequence, self.next_order_id)
    }
}

/// Validates a command against current state and produces events
#[enum_dispatch]
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> LedgerResult<Vec<LedgerEvent>>;
}

/// Applies one event to the session state. Appliers are infallible:
/// everything they rely on was validated by the action.
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, state: &mut LedgerState, event: &LedgerEvent);
}
