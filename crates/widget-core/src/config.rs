//! Widget configuration.

use serde::{Deserialize, Serialize};

/// Default product endpoint.
pub const DEFAULT_ENDPOINT: &str = "/products/embrace-sideboard.json";

/// Default product name used in cart notifications.
pub const DEFAULT_PRODUCT_NAME: &str = "Embrace side board";

/// Where the gallery takes its images from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImagePolicy {
    /// Fixed local asset set, named `image-product-{n}.jpg` under `base_path`.
    LocalAssets {
        /// Directory holding the assets.
        #[serde(default = "default_asset_path")]
        base_path: String,
        /// Number of images in the set.
        #[serde(default = "default_asset_count")]
        count: usize,
    },
    /// The image URLs returned by the product endpoint.
    Fetched,
}

fn default_asset_path() -> String {
    "./images".to_string()
}

fn default_asset_count() -> usize {
    4
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::LocalAssets {
            base_path: default_asset_path(),
            count: default_asset_count(),
        }
    }
}

/// How the product description is inserted into the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionPolicy {
    /// Insert the HTML verbatim. Only safe for a trusted endpoint.
    #[default]
    Trusted,
    /// Escape the description and show it as text.
    Escaped,
}

/// Configuration for one widget instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Product endpoint (single GET).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Product name shown in the add-to-cart notification.
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// Gallery image source.
    #[serde(default)]
    pub image_policy: ImagePolicy,
    /// Description insertion policy.
    #[serde(default)]
    pub description_policy: DescriptionPolicy,
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub log_json: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_product_name() -> String {
    DEFAULT_PRODUCT_NAME.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            product_name: default_product_name(),
            image_policy: ImagePolicy::default(),
            description_policy: DescriptionPolicy::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl WidgetConfig {
    /// Create a configuration for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set the product name used in notifications.
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Set the image policy.
    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Self {
        self.image_policy = policy;
        self
    }

    /// Set the description policy.
    pub fn with_description_policy(mut self, policy: DescriptionPolicy) -> Self {
        self.description_policy = policy;
        self
    }
}
