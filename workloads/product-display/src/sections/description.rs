//! Description renderer.

use widget_sdk::widget_core::DescriptionPolicy;

use super::escape_html;

/// Render the product description.
///
/// `Trusted` inserts the HTML as-is and must only be used with an endpoint
/// whose content is controlled by the shop.
pub fn render_description(html: &str, policy: DescriptionPolicy) -> String {
    match policy {
        DescriptionPolicy::Trusted => html.to_string(),
        DescriptionPolicy::Escaped => escape_html(html),
    }
}
