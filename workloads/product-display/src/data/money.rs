//! Money values parsed from currency-prefixed strings.
//!
//! Amounts are held as integer cents; the currency prefix found in the
//! source string (e.g. `$`) is kept for display.

use std::fmt;

/// Error returned when a price string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {0:?}")]
pub struct MoneyParseError(pub String);

/// A monetary amount with its display prefix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// Currency prefix (e.g. "$").
    pub prefix: String,
}

impl Money {
    /// Create a Money value from cents.
    pub fn new(amount_cents: i64, prefix: impl Into<String>) -> Self {
        Self {
            amount_cents,
            prefix: prefix.into(),
        }
    }

    /// Parse a string such as `"$80.00"` or `"$1,299.5"`.
    ///
    /// ```
    /// use product_display::data::Money;
    /// let price = Money::parse("$49.99").unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// assert_eq!(price.prefix, "$");
    /// ```
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError(input.to_string());
        let trimmed = input.trim();
        let split = trimmed
            .find(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
            .ok_or_else(invalid)?;
        let (prefix, number) = trimmed.split_at(split);

        // Plain decimal only: no sign, no exponent.
        let number: String = number.chars().filter(|c| *c != ',').collect();
        if !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }
        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok(Self::new((value * 100.0).round() as i64, prefix.trim()))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format with the prefix and two decimals (e.g. "$49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.prefix, self.to_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Whole-number discount of `final_price` against `initial_price`.
///
/// Returns 0 when the initial price is zero; a final price above the
/// initial one gives a negative discount.
pub fn discount_percent(final_price: &Money, initial_price: &Money) -> i64 {
    if initial_price.amount_cents <= 0 {
        return 0;
    }
    let saved = (initial_price.amount_cents - final_price.amount_cents) as f64;
    (saved / initial_price.amount_cents as f64 * 100.0).round() as i64
}
