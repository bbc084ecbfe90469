use super::*;
use crate::ledger::fixtures::{test_menu, test_seed};
use shared::order::{CommandErrorCode, LedgerEventType};

fn create_test_ledger() -> CafeLedger {
    CafeLedger::new(&test_seed(), test_menu(), 4).unwrap()
}

fn command(payload: LedgerCommandPayload) -> LedgerCommand {
    LedgerCommand::new(payload)
}

fn place_cmd(table_id: i64, items: &[(&str, i32)]) -> LedgerCommand {
    command(LedgerCommandPayload::PlaceOrder {
        table_id,
        items: items
            .iter()
            .map(|(name, quantity)| OrderLine::new(*name, *quantity))
            .collect(),
    })
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Order on `table_id` that must succeed
fn order_on(ledger: &mut CafeLedger, table_id: i64, items: &[(&str, i32)]) -> PendingOrder {
    ledger
        .place_order(table_id, items.iter().copied())
        .unwrap_or_else(|e| panic!("order on table {} failed: {}", table_id, e))
}

fn history_names(ledger: &CafeLedger, table_id: i64) -> Vec<String> {
    ledger
        .table(table_id)
        .unwrap()
        .order_history
        .iter()
        .map(|line| line.menu_item_name.clone())
        .collect()
}

fn assert_consistent(ledger: &CafeLedger) {
    let violations = ledger.verify();
    assert!(violations.is_empty(), "invariants broken: {:?}", violations);
}
