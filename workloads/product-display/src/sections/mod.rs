//! Section renderers for the product display widget.
//!
//! Every renderer is a pure function of its inputs.

mod description;
mod gallery;
mod notification;
mod price;
mod quantity;
mod sizes;
mod swatches;

pub use description::*;
pub use gallery::*;
pub use notification::*;
pub use price::*;
pub use quantity::*;
pub use sizes::*;
pub use swatches::*;

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }
}
