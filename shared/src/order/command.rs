//! Ledger commands - requests from the presentation layer

use super::types::{OrderLine, OrderRef};
use serde::{Deserialize, Serialize};

/// Ledger command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerCommand {
    /// Client-generated id, used to drop retransmissions
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: LedgerCommandPayload,
}

impl LedgerCommand {
    pub fn new(payload: LedgerCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            payload,
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerCommandPayload {
    // ========== Table registry ==========
    AdjustOccupancy {
        table_id: i64,
        delta: i32,
    },
    MergeTables {
        target_id: i64,
        source_id: i64,
    },
    SplitTable {
        table_id: i64,
    },

    // ========== Order book ==========
    PlaceOrder {
        table_id: i64,
        items: Vec<OrderLine>,
    },
    ProcessOrder {
        order: OrderRef,
    },

    // ========== Billing ==========
    PayBill {
        table_id: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_json_shape() {
        let json = r#"{
            "command_id": "cmd-1",
            "timestamp": 0,
            "payload": {"type": "PLACE_ORDER", "table_id": 1, "items": [{"name": "Coffee", "quantity": 2}]}
        }"#;
        let cmd: LedgerCommand = serde_json::from_str(json).unwrap();
        match cmd.payload {
            LedgerCommandPayload::PlaceOrder { table_id, items } => {
                assert_eq!(table_id, 1);
                assert_eq!(items, vec![OrderLine::new("Coffee", 2)]);
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_process_order_by_position() {
        let json = r#"{"type": "PROCESS_ORDER", "order": {"by": "position", "value": 0}}"#;
        let payload: LedgerCommandPayload = serde_json::from_str(json).unwrap();
        assert!(matches!(
            payload,
            LedgerCommandPayload::ProcessOrder {
                order: OrderRef::Position(0)
            }
        ));
    }
}
