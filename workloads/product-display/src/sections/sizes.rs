//! Size option renderer.

use super::escape_html;

/// Inline style of the selected size. Unselected sizes stay transparent.
const SELECTED_STYLE: &str = "background-color: #1d1d1f; color: #ffffff";
const UNSELECTED_STYLE: &str = "background-color: transparent";

/// Render one option per size; the selected one is marked and checked.
pub fn render_size_options(sizes: &[String], selected: usize) -> String {
    sizes
        .iter()
        .enumerate()
        .map(|(i, size)| {
            let label = escape_html(size);
            if i == selected {
                format!(
                    r#"<li class="size-option selected" data-index="{}" style="{}"><span class="size-option__label">{}</span><span class="size-option__check">&#10003;</span></li>"#,
                    i, SELECTED_STYLE, label
                )
            } else {
                format!(
                    r#"<li class="size-option" data-index="{}" style="{}"><span class="size-option__label">{}</span></li>"#,
                    i, UNSELECTED_STYLE, label
                )
            }
        })
        .collect()
}
