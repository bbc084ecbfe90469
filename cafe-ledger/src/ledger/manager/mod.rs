//! CafeLedger - the café session
//!
//! Owns the table registry, the order book and the billing state for one
//! session, and is the only mutation surface for them.
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Idempotency check (command_id)
//!     ├─ 2. Create CommandContext over current state
//!     ├─ 3. Convert payload to action and execute (validation only)
//!     ├─ 4. Apply events to state via EventApplier
//!     ├─ 5. Append events to the journal, mark command processed
//!     └─ 6. Return response
//! ```
//!
//! Steps 4-5 only run once step 3 has produced every event, so a rejected
//! command leaves the session exactly as it was.

use chrono::Utc;
use rust_decimal::Decimal;
use shared::models::{BillView, DiningTable, MenuCatalog, TableSeed};
use shared::order::{
    CommandResponse, EventPayload, LedgerCommand, LedgerCommandPayload, LedgerEvent, OrderLine,
    OrderRef, PendingOrder,
};
use std::collections::HashSet;

use super::actions;
use super::appliers;
use super::error::{LedgerError, LedgerResult};
use super::money;
use super::state::LedgerState;
use super::traits::{CommandContext, CommandMetadata};
use super::verify::{InvariantViolation, verify_state};
use crate::core::Config;

/// Ids surfaced to the caller by a successful command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CommandOutcome {
    table_id: Option<i64>,
    order_id: Option<u64>,
}

/// One café session: tables, pending orders, bills, and the event journal
pub struct CafeLedger {
    state: LedgerState,
    menu: MenuCatalog,
    split_capacity: i32,
    journal: Vec<LedgerEvent>,
    next_sequence: u64,
    next_order_id: u64,
    processed_commands: HashSet<String>,
    /// Session id - unique per ledger instance
    epoch: String,
}

impl std::fmt::Debug for CafeLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CafeLedger")
            .field("tables", &self.state.tables.len())
            .field("pending_orders", &self.state.pending_orders.len())
            .field("journal", &self.journal.len())
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl CafeLedger {
    /// Create a session from the seed layout and menu
    pub fn new(seed: &[TableSeed], menu: MenuCatalog, split_capacity: i32) -> LedgerResult<Self> {
        validate_seed(seed)?;
        validate_menu(&menu)?;
        if split_capacity <= 0 {
            return Err(LedgerError::InvalidConfig(format!(
                "split table capacity must be positive, got {}",
                split_capacity
            )));
        }

        let tables = seed
            .iter()
            .map(|s| DiningTable::new(s.id, s.capacity))
            .collect();
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            epoch = %epoch,
            tables = seed.len(),
            menu_items = menu.len(),
            "CafeLedger session started"
        );

        Ok(Self {
            state: LedgerState::new(tables),
            menu,
            split_capacity,
            journal: Vec::new(),
            next_sequence: 1,
            next_order_id: 1,
            processed_commands: HashSet::new(),
            epoch,
        })
    }

    /// Create a session from configuration
    pub fn from_config(config: &Config) -> LedgerResult<Self> {
        Self::new(&config.tables, config.menu.clone(), config.split_table_capacity)
    }

    /// Session id
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    // ========================================================================
    // Command entry point
    // ========================================================================

    /// Execute a command and return the response
    pub fn execute_command(&mut self, cmd: LedgerCommand) -> CommandResponse {
        if self.processed_commands.contains(&cmd.command_id) {
            tracing::debug!(command_id = %cmd.command_id, "Duplicate command ignored");
            return CommandResponse::duplicate(cmd.command_id);
        }

        match self.run(&cmd) {
            Ok(outcome) => {
                CommandResponse::success(cmd.command_id, outcome.table_id, outcome.order_id)
            }
            Err(err) => CommandResponse::error(cmd.command_id, err.into()),
        }
    }

    fn run(&mut self, cmd: &LedgerCommand) -> LedgerResult<CommandOutcome> {
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            client_timestamp: cmd.timestamp,
            timestamp: Utc::now().timestamp_millis(),
        };

        let (events, counters) = {
            let mut ctx = CommandContext::new(
                &self.state,
                &self.menu,
                self.split_capacity,
                self.next_sequence,
                self.next_order_id,
            );
            match actions::execute(&cmd.payload, &mut ctx, &metadata) {
                Ok(events) => (events, ctx.counters()),
                Err(err) => {
                    tracing::warn!(
                        command_id = %cmd.command_id,
                        error = %err,
                        "Command rejected"
                    );
                    return Err(err);
                }
            }
        };

        appliers::apply_all(&mut self.state, &events);
        (self.next_sequence, self.next_order_id) = counters;

        let outcome = outcome_of(&cmd.payload, &events);
        for event in &events {
            tracing::info!(
                command_id = %cmd.command_id,
                sequence = event.sequence,
                event_type = %event.event_type,
                "Ledger event applied"
            );
        }
        self.journal.extend(events);
        self.processed_commands.insert(cmd.command_id.clone());

        Ok(outcome)
    }

    // ========================================================================
    // Table registry
    // ========================================================================

    /// Move a table's guest count by `delta`, clamped to `[0, capacity]`
    pub fn adjust_occupancy(&mut self, table_id: i64, delta: i32) -> LedgerResult<DiningTable> {
        self.run(&LedgerCommand::new(LedgerCommandPayload::AdjustOccupancy {
            table_id,
            delta,
        }))?;
        self.require_table(table_id)
    }

    /// Fold `source_id` into `target_id`; returns the merged target
    pub fn merge_tables(&mut self, target_id: i64, source_id: i64) -> LedgerResult<DiningTable> {
        self.run(&LedgerCommand::new(LedgerCommandPayload::MergeTables {
            target_id,
            source_id,
        }))?;
        self.require_table(target_id)
    }

    /// Re-create the table absorbed by `table_id`'s last merge; returns it
    pub fn split_table(&mut self, table_id: i64) -> LedgerResult<DiningTable> {
        let outcome = self.run(&LedgerCommand::new(LedgerCommandPayload::SplitTable {
            table_id,
        }))?;
        self.require_table(outcome.table_id.unwrap_or(table_id))
    }

    // ========================================================================
    // Order book
    // ========================================================================

    /// Bill the requested items to a table and queue them for the kitchen
    pub fn place_order<I, S>(&mut self, table_id: i64, items: I) -> LedgerResult<PendingOrder>
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        let items = items
            .into_iter()
            .map(|(name, quantity)| OrderLine::new(name, quantity))
            .collect();
        let outcome = self.run(&LedgerCommand::new(LedgerCommandPayload::PlaceOrder {
            table_id,
            items,
        }))?;

        outcome
            .order_id
            .and_then(|id| self.state.find_pending(OrderRef::Id(id)))
            .map(|(_, order)| order.clone())
            .ok_or(LedgerError::TableNotFound(table_id))
    }

    /// Remove a pending order from the book; returns the removed order
    pub fn process_order(&mut self, order: OrderRef) -> LedgerResult<PendingOrder> {
        let pending = self
            .state
            .find_pending(order)
            .map(|(_, o)| o.clone())
            .ok_or(LedgerError::OrderNotFound(order))?;
        self.run(&LedgerCommand::new(LedgerCommandPayload::ProcessOrder {
            order,
        }))?;
        Ok(pending)
    }

    // ========================================================================
    // Billing
    // ========================================================================

    /// Read-only bill projection
    pub fn bill(&self, table_id: i64) -> LedgerResult<BillView> {
        self.state
            .table(table_id)
            .map(BillView::from)
            .ok_or(LedgerError::TableNotFound(table_id))
    }

    /// Settle a table's bill; returns the amount that was owed
    pub fn pay_bill(&mut self, table_id: i64) -> LedgerResult<Decimal> {
        let owed = self.bill(table_id)?.running_total;
        self.run(&LedgerCommand::new(LedgerCommandPayload::PayBill {
            table_id,
        }))?;
        Ok(owed)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Tables in listing order
    pub fn list_tables(&self) -> &[DiningTable] {
        &self.state.tables
    }

    /// Pending orders in placement order
    pub fn list_pending_orders(&self) -> &[PendingOrder] {
        &self.state.pending_orders
    }

    pub fn table(&self, table_id: i64) -> Option<&DiningTable> {
        self.state.table(table_id)
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    /// Every event applied in this session
    pub fn events(&self) -> &[LedgerEvent] {
        &self.journal
    }

    /// Events with a sequence strictly greater than `sequence`
    pub fn events_since(&self, sequence: u64) -> &[LedgerEvent] {
        let start = self.journal.partition_point(|e| e.sequence <= sequence);
        &self.journal[start..]
    }

    /// Last applied sequence (0 when nothing happened yet)
    pub fn last_sequence(&self) -> u64 {
        self.next_sequence - 1
    }

    /// Check all ledger invariants against the current state
    pub fn verify(&self) -> Vec<InvariantViolation> {
        verify_state(&self.state)
    }

    fn require_table(&self, table_id: i64) -> LedgerResult<DiningTable> {
        self.state
            .table(table_id)
            .cloned()
            .ok_or(LedgerError::TableNotFound(table_id))
    }
}

/// Table/order ids reported back for a successful command
fn outcome_of(payload: &LedgerCommandPayload, events: &[LedgerEvent]) -> CommandOutcome {
    let mut outcome = match payload {
        LedgerCommandPayload::AdjustOccupancy { table_id, .. }
        | LedgerCommandPayload::SplitTable { table_id }
        | LedgerCommandPayload::PlaceOrder { table_id, .. }
        | LedgerCommandPayload::PayBill { table_id } => CommandOutcome {
            table_id: Some(*table_id),
            order_id: None,
        },
        LedgerCommandPayload::MergeTables { target_id, .. } => CommandOutcome {
            table_id: Some(*target_id),
            order_id: None,
        },
        LedgerCommandPayload::ProcessOrder { .. } => CommandOutcome::default(),
    };

    for event in events {
        match &event.payload {
            EventPayload::TableSplit { restored_id, .. } => outcome.table_id = Some(*restored_id),
            EventPayload::OrderPlaced { order } => outcome.order_id = Some(order.order_id),
            EventPayload::OrderProcessed { order_id, table_id } => {
                outcome.table_id = Some(*table_id);
                outcome.order_id = Some(*order_id);
            }
            _ => {}
        }
    }
    outcome
}

fn validate_seed(seed: &[TableSeed]) -> LedgerResult<()> {
    let mut seen = HashSet::new();
    for table in seed {
        if table.capacity <= 0 {
            return Err(LedgerError::InvalidConfig(format!(
                "table {} capacity must be positive, got {}",
                table.id, table.capacity
            )));
        }
        if !seen.insert(table.id) {
            return Err(LedgerError::InvalidConfig(format!(
                "table {} is listed more than once",
                table.id
            )));
        }
    }
    Ok(())
}

fn validate_menu(menu: &MenuCatalog) -> LedgerResult<()> {
    for item in menu.items() {
        if item.name.trim().is_empty() {
            return Err(LedgerError::InvalidConfig(
                "menu item name must not be empty".to_string(),
            ));
        }
        money::validate_unit_price(&item.name, item.unit_price)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
