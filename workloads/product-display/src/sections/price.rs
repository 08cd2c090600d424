//! Price section renderer.

use crate::data::{discount_percent, Money};

/// The three independent price displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceView {
    /// Price before discount, e.g. "$100.00".
    pub initial: String,
    /// Discount label, e.g. "20% off".
    pub discount: String,
    /// Price the customer pays, e.g. "$80.00".
    pub final_price: String,
}

/// Render the price, discount and discounted price.
pub fn render_price(final_price: &Money, initial_price: &Money) -> PriceView {
    PriceView {
        initial: initial_price.display(),
        discount: format!("{}% off", discount_percent(final_price, initial_price)),
        final_price: final_price.display(),
    }
}
