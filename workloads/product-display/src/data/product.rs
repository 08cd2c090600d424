//! Product data models.

use std::collections::BTreeMap;

use serde::Deserialize;
use widget_sdk::widget_core::WidgetError;

use super::money::{Money, MoneyParseError};

/// Product document as served by the product endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub product: RawProduct,
}

/// The `product` object of the document, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub price: String,
    pub compare_at_price: String,
    pub options: Vec<RawOption>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    pub description: String,
}

/// One option group (`options[0]` is colors, `options[1]` is sizes).
#[derive(Debug, Clone, Deserialize)]
pub struct RawOption {
    pub values: Vec<OptionValue>,
}

/// An option value: a `{name: css-color}` map for colors, a string for sizes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Swatch(BTreeMap<String, String>),
    Plain(String),
}

/// Product image reference.
#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub src: String,
}

/// A selectable color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOption {
    pub name: String,
    /// CSS color string (e.g. "#ff0000").
    pub code: String,
}

/// Error type for product document validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Field {field}: {source}")]
    InvalidPrice {
        field: &'static str,
        #[source]
        source: MoneyParseError,
    },

    #[error("Missing {0} options")]
    MissingOptions(&'static str),

    #[error("Empty {0} options")]
    EmptyOptions(&'static str),

    #[error("Color value {0} is not a single name/color pair")]
    InvalidColor(usize),

    #[error("Size value {0} is not a string")]
    InvalidSize(usize),
}

impl From<PayloadError> for WidgetError {
    fn from(err: PayloadError) -> Self {
        WidgetError::MalformedResponse(err.to_string())
    }
}

/// Validated product details. Read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    /// Price the customer pays.
    pub price: Money,
    /// Price before discount.
    pub compare_at_price: Money,
    pub colors: Vec<ColorOption>,
    pub sizes: Vec<String>,
    /// Image URLs from the endpoint.
    pub images: Vec<String>,
    /// Description HTML.
    pub description: String,
}

impl ProductDetails {
    /// Decode and validate a product document body.
    pub fn from_json(body: &[u8]) -> Result<Self, PayloadError> {
        let payload: ProductPayload =
            serde_json::from_slice(body).map_err(|e| PayloadError::Decode(e.to_string()))?;
        Self::from_payload(payload)
    }

    /// Validate an already decoded document.
    pub fn from_payload(payload: ProductPayload) -> Result<Self, PayloadError> {
        let raw = payload.product;

        let price = Money::parse(&raw.price).map_err(|source| PayloadError::InvalidPrice {
            field: "price",
            source,
        })?;
        let compare_at_price =
            Money::parse(&raw.compare_at_price).map_err(|source| PayloadError::InvalidPrice {
                field: "compare_at_price",
                source,
            })?;

        let mut options = raw.options.into_iter();
        let colors = options
            .next()
            .ok_or(PayloadError::MissingOptions("color"))?
            .values
            .into_iter()
            .enumerate()
            .map(|(i, value)| parse_color(i, value))
            .collect::<Result<Vec<_>, _>>()?;
        let sizes = options
            .next()
            .ok_or(PayloadError::MissingOptions("size"))?
            .values
            .into_iter()
            .enumerate()
            .map(|(i, value)| match value {
                OptionValue::Plain(size) => Ok(size),
                OptionValue::Swatch(_) => Err(PayloadError::InvalidSize(i)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if colors.is_empty() {
            return Err(PayloadError::EmptyOptions("color"));
        }
        if sizes.is_empty() {
            return Err(PayloadError::EmptyOptions("size"));
        }

        Ok(Self {
            price,
            compare_at_price,
            colors,
            sizes,
            images: raw.images.into_iter().map(|img| img.src).collect(),
            description: raw.description,
        })
    }
}

fn parse_color(index: usize, value: OptionValue) -> Result<ColorOption, PayloadError> {
    match value {
        OptionValue::Swatch(map) if map.len() == 1 => {
            let (name, code) = map
                .into_iter()
                .next()
                .ok_or(PayloadError::InvalidColor(index))?;
            Ok(ColorOption { name, code })
        }
        _ => Err(PayloadError::InvalidColor(index)),
    }
}
