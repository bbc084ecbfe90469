//! Test fixtures shared by action, applier and manager tests

use rust_decimal::Decimal;
use shared::models::{DiningTable, MenuCatalog, TableSeed};
use shared::order::{LineItem, OrderLine};

use super::state::LedgerState;
use super::traits::CommandMetadata;

pub fn test_menu() -> MenuCatalog {
    MenuCatalog::new([
        ("Coffee", Decimal::from(3)),
        ("Tea", Decimal::new(25, 1)),
        ("Sandwich", Decimal::from(5)),
        ("Cake", Decimal::from(4)),
    ])
}

pub fn test_seed() -> Vec<TableSeed> {
    [(1, 4), (2, 4), (3, 3), (4, 4), (5, 3)]
        .into_iter()
        .map(|(id, capacity)| TableSeed { id, capacity })
        .collect()
}

pub fn test_state() -> LedgerState {
    LedgerState::new(
        test_seed()
            .into_iter()
            .map(|seed| DiningTable::new(seed.id, seed.capacity))
            .collect(),
    )
}

pub fn test_metadata() -> CommandMetadata {
    CommandMetadata {
        command_id: "cmd-1".to_string(),
        client_timestamp: 1234567890,
        timestamp: 1234567890,
    }
}

pub fn line(name: &str, quantity: i32) -> OrderLine {
    OrderLine::new(name, quantity)
}

/// Billed line with `price == unit_price * quantity`
pub fn billed(name: &str, quantity: i32, unit_price: i64) -> LineItem {
    LineItem {
        menu_item_name: name.to_string(),
        quantity,
        unit_price: Decimal::from(unit_price),
        price: Decimal::from(unit_price * quantity as i64),
        settled: false,
    }
}
