//! Ledger events - immutable facts recorded after command processing

use super::types::PendingOrder;
use crate::models::DiningTable;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ledger event - immutable audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    /// Event unique ID
    pub event_id: String,
    /// Session-global sequence number, the authoritative ordering
    pub sequence: u64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Client timestamp carried over from the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<i64>,
    /// Command that triggered this event
    pub command_id: String,
    pub event_type: LedgerEventType,
    pub payload: EventPayload,
}

impl LedgerEvent {
    pub fn new(
        sequence: u64,
        command_id: String,
        client_timestamp: Option<i64>,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: chrono::Utc::now().timestamp_millis(),
            client_timestamp,
            command_id,
            event_type: payload.event_type(),
            payload,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEventType {
    // Tables
    OccupancyAdjusted,
    TablesMerged,
    TableSplit,

    // Orders
    OrderPlaced,
    OrderProcessed,

    // Billing
    BillPaid,
}

impl std::fmt::Display for LedgerEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerEventType::OccupancyAdjusted => write!(f, "OCCUPANCY_ADJUSTED"),
            LedgerEventType::TablesMerged => write!(f, "TABLES_MERGED"),
            LedgerEventType::TableSplit => write!(f, "TABLE_SPLIT"),
            LedgerEventType::OrderPlaced => write!(f, "ORDER_PLACED"),
            LedgerEventType::OrderProcessed => write!(f, "ORDER_PROCESSED"),
            LedgerEventType::BillPaid => write!(f, "BILL_PAID"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Tables ==========
    OccupancyAdjusted {
        table_id: i64,
        previous: i32,
        occupancy: i32,
    },

    /// `source` is the absorbed table as it was just before the merge
    TablesMerged {
        target_id: i64,
        source: DiningTable,
    },

    TableSplit {
        table_id: i64,
        restored_id: i64,
        capacity: i32,
    },

    // ========== Orders ==========
    OrderPlaced {
        order: PendingOrder,
    },

    OrderProcessed {
        order_id: u64,
        table_id: i64,
    },

    // ========== Billing ==========
    BillPaid {
        table_id: i64,
        amount: Decimal,
    },
}

impl EventPayload {
    pub fn event_type(&self) -> LedgerEventType {
        match self {
            EventPayload::OccupancyAdjusted { .. } => LedgerEventType::OccupancyAdjusted,
            EventPayload::TablesMerged { .. } => LedgerEventType::TablesMerged,
            EventPayload::TableSplit { .. } => LedgerEventType::TableSplit,
            EventPayload::OrderPlaced { .. } => LedgerEventType::OrderPlaced,
            EventPayload::OrderProcessed { .. } => LedgerEventType::OrderProcessed,
            EventPayload::BillPaid { .. } => LedgerEventType::BillPaid,
        }
    }
}
