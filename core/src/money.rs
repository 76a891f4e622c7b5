// core/src/money.rs

//! Currency arithmetic. Amounts are `Decimal` with exactly two fractional digits.

use rust_decimal::Decimal;

pub const CURRENCY_SCALE: u32 = 2;

/// Rounds to cents and pins the scale so `220` renders as `220.00`.
pub fn normalize(amount: Decimal) -> Decimal {
  let mut cents = amount.round_dp(CURRENCY_SCALE);
  cents.rescale(CURRENCY_SCALE);
  cents
}

pub fn zero() -> Decimal {
  normalize(Decimal::ZERO)
}

pub fn line_total(price_each: Decimal, quantity: u32) -> Decimal {
  normalize(price_each * Decimal::from(quantity))
}
