//! Color swatch renderer.

use crate::data::ColorOption;

use super::escape_html;

/// Render one swatch per color; the selected one gets a border in its own color.
pub fn render_color_swatches(colors: &[ColorOption], selected: usize) -> String {
    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let code = escape_html(&color.code);
            let (class, border) = if i == selected {
                ("color-swatch selected", format!("2px solid {}", code))
            } else {
                ("color-swatch", "2px solid transparent".to_string())
            };
            format!(
                r#"<li class="{class}" data-index="{i}" title="{name}" style="border: {border}"><span class="color-swatch__fill" style="background-color: {code}"></span></li>"#,
                class = class,
                i = i,
                name = escape_html(&color.name),
                border = border,
                code = code,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<ColorOption> {
        vec![
            ColorOption { name: "Red".into(), code: "#ff0000".into() },
            ColorOption { name: "Blue".into(), code: "#0000ff".into() },
            ColorOption { name: "Sand".into(), code: "rgb(194, 178, 128)".into() },
        ]
    }

    #[test]
    fn test_exactly_one_selected() {
        for selected in 0..3 {
            let html = render_color_swatches(&colors(), selected);
            assert_eq!(html.matches("selected").count(), 1);
            assert_eq!(html.matches("<li ").count(), 3);
            assert!(html.contains(&format!(
                r#"class="color-swatch selected" data-index="{}""#,
                selected
            )));
        }
    }

    #[test]
    fn test_selected_border_uses_own_color() {
        let html = render_color_swatches(&colors(), 1);
        assert!(html.contains("border: 2px solid #0000ff"));
        assert!(!html.contains("border: 2px solid #ff0000"));
        assert_eq!(html.matches("2px solid transparent").count(), 2);
    }

    #[test]
    fn test_out_of_range_selects_nothing() {
        let html = render_color_swatches(&colors(), 9);
        assert!(!html.contains("selected"));
    }
}
