//! Page regions the widget renders into.

use std::fmt;

/// A named region of the host page.
///
/// The host document marks each region with `data-role="<name>"`; exactly
/// one element per role is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Price,
    Discount,
    DiscountedPrice,
    Colors,
    Sizes,
    Quantity,
    QuantityControls,
    MainImage,
    Thumbnails,
    Description,
    AddToCart,
    Notification,
}

impl Region {
    /// Every region, in render order.
    pub const ALL: [Region; 12] = [
        Region::Price,
        Region::Discount,
        Region::DiscountedPrice,
        Region::Colors,
        Region::Sizes,
        Region::Quantity,
        Region::QuantityControls,
        Region::MainImage,
        Region::Thumbnails,
        Region::Description,
        Region::AddToCart,
        Region::Notification,
    ];

    /// Regions that take a delegated click listener.
    pub const INTERACTIVE: [Region; 5] = [
        Region::Thumbnails,
        Region::Colors,
        Region::Sizes,
        Region::QuantityControls,
        Region::AddToCart,
    ];

    /// Role name used in the host document.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Discount => "discount",
            Self::DiscountedPrice => "discounted-price",
            Self::Colors => "colors",
            Self::Sizes => "sizes",
            Self::Quantity => "quantity",
            Self::QuantityControls => "quantity-controls",
            Self::MainImage => "main-image",
            Self::Thumbnails => "thumbnails",
            Self::Description => "description",
            Self::AddToCart => "add-to-cart",
            Self::Notification => "notification",
        }
    }

    /// CSS selector for the region's container.
    pub fn selector(&self) -> String {
        format!(r#"[data-role="{}"]"#, self.name())
    }

    /// Attribute carried by the clickable items of a delegated region.
    ///
    /// `AddToCart` is a plain trigger and carries none.
    pub fn item_attribute(&self) -> Option<&'static str> {
        match self {
            Self::Colors | Self::Sizes => Some("data-index"),
            Self::QuantityControls => Some("data-step"),
            Self::Thumbnails => Some("data-image"),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Something regions can be rendered into.
///
/// Rendering replaces the whole content of a region.
pub trait Surface {
    fn replace(&mut self, region: Region, html: &str);
}
