//! Image gallery renderer.

use widget_sdk::widget_core::ImagePolicy;

use super::escape_html;

/// One image of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// 1-based identifier, also the thumbnail's `data-image` value.
    pub id: usize,
    pub src: String,
    pub thumbnail: String,
}

/// Main image and thumbnail strip markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub main: String,
    pub thumbnails: String,
}

/// Build the gallery's image set from the configured policy.
pub fn resolve_images(policy: &ImagePolicy, fetched: &[String]) -> Vec<GalleryImage> {
    match policy {
        ImagePolicy::LocalAssets { base_path, count } => {
            let base = base_path.trim_end_matches('/');
            (1..=*count)
                .map(|id| GalleryImage {
                    id,
                    src: format!("{}/image-product-{}.jpg", base, id),
                    thumbnail: format!("{}/image-product-{}-thumbnail.jpg", base, id),
                })
                .collect()
        }
        ImagePolicy::Fetched => fetched
            .iter()
            .enumerate()
            .map(|(i, src)| GalleryImage {
                id: i + 1,
                src: src.clone(),
                thumbnail: src.clone(),
            })
            .collect(),
    }
}

/// Render the main image for `active` and the thumbnail strip.
pub fn render_image_gallery(images: &[GalleryImage], active: usize) -> GalleryView {
    let main = match images.iter().find(|img| img.id == active) {
        Some(img) => format!(
            r#"<img class="main-image" src="{}" alt="Product image {}">"#,
            escape_html(&img.src),
            img.id
        ),
        None => r#"<div class="main-image main-image--placeholder">No image available</div>"#
            .to_string(),
    };

    let thumbnails = images
        .iter()
        .map(|img| {
            let class = if img.id == active {
                "thumbnail active"
            } else {
                "thumbnail"
            };
            format!(
                r#"<img class="{}" src="{}" alt="Product thumbnail {}" data-image="{}">"#,
                class,
                escape_html(&img.thumbnail),
                img.id,
                img.id
            )
        })
        .collect();

    GalleryView { main, thumbnails }
}
