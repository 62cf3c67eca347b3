//! Money formatting helpers.
//!
//! Leafline handles a single configured currency; amounts are plain
//! [`Decimal`] values and the currency symbol is supplied by configuration.
//! This module only deals with display formatting - arithmetic stays on
//! `Decimal` so totals are exact.

use rust_decimal::Decimal;

/// Format an amount for display with a currency symbol, always showing two
/// decimal places (e.g., `"₦1250.50"`).
#[must_use]
pub fn format(amount: Decimal, symbol: &str) -> String {
    format!("{symbol}{:.2}", amount.round_dp(2))
}
