//! Money calculation utilities using rust_decimal for precision

use rust_decimal::prelude::*;
use shared::order::{LineItem, OrderLine};

use super::error::{LedgerError, LedgerResult};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price
const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Round to cents, midpoint away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line price: unit_price * quantity
pub fn line_price(unit_price: Decimal, quantity: i32) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Price a requested line against its catalog unit price
pub fn price_line(line: &OrderLine, unit_price: Decimal) -> LedgerResult<LineItem> {
    validate_quantity(line)?;
    Ok(LineItem {
        menu_item_name: line.name.clone(),
        quantity: line.quantity,
        unit_price,
        price: line_price(unit_price, line.quantity),
        settled: false,
    })
}

/// Quantity must be positive and within bounds
pub fn validate_quantity(line: &OrderLine) -> LedgerResult<()> {
    if line.quantity <= 0 || line.quantity > MAX_QUANTITY {
        return Err(LedgerError::InvalidQuantity {
            name: line.name.clone(),
            quantity: line.quantity,
        });
    }
    Ok(())
}

/// Catalog prices must be strictly positive and below the cap
pub fn validate_unit_price(name: &str, price: Decimal) -> LedgerResult<()> {
    if price <= Decimal::ZERO || price > MAX_PRICE {
        return Err(LedgerError::InvalidPrice {
            name: name.to_string(),
            price,
        });
    }
    Ok(())
}

/// Sum line prices with exact arithmetic
pub fn sum_prices<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Decimal {
    items.into_iter().map(|item| item.price).sum()
}
