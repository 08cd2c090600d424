//! Quantity renderer.

/// `data-step` value of the increment control.
pub const STEP_INCREMENT: &str = "increment";
/// `data-step` value of the decrement control.
pub const STEP_DECREMENT: &str = "decrement";

pub fn render_quantity(quantity: u32) -> String {
    quantity.to_string()
}

/// Render the +/- controls.
pub fn render_quantity_controls() -> String {
    format!(
        r#"<button type="button" class="quantity-step" data-step="{dec}" aria-label="Decrease quantity">&minus;</button><button type="button" class="quantity-step" data-step="{inc}" aria-label="Increase quantity">+</button>"#,
        dec = STEP_DECREMENT,
        inc = STEP_INCREMENT,
    )
}

/// Quantity delta for a `data-step` value.
pub fn step_delta(step: &str) -> Option<i64> {
    match step {
        STEP_INCREMENT => Some(1),
        STEP_DECREMENT => Some(-1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quantity() {
        assert_eq!(render_quantity(4), "4");
    }

    #[test]
    fn test_controls_carry_steps() {
        let html = render_quantity_controls();
        assert!(html.contains(r#"data-step="increment""#));
        assert!(html.contains(r#"data-step="decrement""#));
    }

    #[test]
    fn test_step_delta() {
        assert_eq!(step_delta("increment"), Some(1));
        assert_eq!(step_delta("decrement"), Some(-1));
        assert_eq!(step_delta("reset"), None);
    }
}
