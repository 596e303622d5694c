//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for storage/serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per product
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed base salary of one payroll run
pub const MAX_SALARY: f64 = 100_000_000.0;
/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i64 = 9999;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Priced order line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAmounts {
    /// price × quantity, unrounded
    pub subtotal: Decimal,
    pub barber_bonus: f64,
    pub cashier_bonus: f64,
}

/// Price one line: subtotal and both role bonuses.
///
/// Bonuses are `subtotal × percent / 100`, each rounded once here.
pub fn price_line(
    unit_price: f64,
    quantity: i64,
    barber_percent: f64,
    cashier_percent: f64,
) -> LineAmounts {
    let subtotal = to_decimal(unit_price) * Decimal::from(quantity);
    LineAmounts {
        subtotal,
        barber_bonus: to_f64(subtotal * to_decimal(barber_percent) / HUNDRED),
        cashier_bonus: to_f64(subtotal * to_decimal(cashier_percent) / HUNDRED),
    }
}

/// Sum stored amounts exactly
pub fn sum(amounts: impl IntoIterator<Item = f64>) -> f64 {
    to_f64(amounts.into_iter().map(to_decimal).sum())
}
