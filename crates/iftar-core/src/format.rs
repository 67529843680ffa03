//! Display formatting for amounts.
//!
//! Whole amounts are shown without decimals (`25`), anything with cents is
//! shown with exactly two (`22.50`). The same rule is used on every screen,
//! so "18 / day × 30 days = 540" reads consistently.

use crate::money::Money;

/// Currency symbol shown in front of amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// ISO 4217 code shown after totals.
pub const CURRENCY_CODE: &str = "CAD";

/// Renders an amount in compact form.
///
/// ```rust
/// use iftar_core::format::format_amount;
/// use iftar_core::money::Money;
///
/// assert_eq!(format_amount(Money::from_major(25)), "25");
/// assert_eq!(format_amount(Money::from_cents(2250)), "22.50");
/// ```
pub fn format_amount(amount: Money) -> String {
    amount.to_string()
}

/// `$22.50`
pub fn format_price(amount: Money) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// `$22.50 CAD`, used for totals.
pub fn format_total(amount: Money, currency_code: &str) -> String {
    format!("{CURRENCY_SYMBOL}{amount} {currency_code}")
}

/// `$18 / day`
pub fn format_per_day(amount: Money) -> String {
    format!("{CURRENCY_SYMBOL}{amount} / day")
}
