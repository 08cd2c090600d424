//! Notification renderer.

use super::escape_html;

/// Confirmation text for an add-to-cart action.
pub fn cart_message(product_name: &str, color: &str, size: &str) -> String {
    format!(
        "{} with Color {} and size {} added to cart",
        product_name, color, size
    )
}

/// Render a success notification.
pub fn render_notification(message: &str) -> String {
    format!(
        r#"<div class="notification notification--success" role="status">{}</div>"#,
        escape_html(message)
    )
}

/// Render an error notification.
pub fn render_error_notification(message: &str) -> String {
    format!(
        r#"<div class="notification notification--error" role="alert">{}</div>"#,
        escape_html(message)
    )
}
