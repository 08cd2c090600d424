//! Data access for the product display widget.
//!
//! This crate provides:
//! - `ProductSource` - The seam the widget loads its product through
//! - `HttpProductSource` - One-shot GET against the product endpoint
//! - `StaticProductSource` - Fixed response, for tests and offline demos
//! - `FetchClient` / `FetchError` - Browser fetch with status classification

mod client;
mod source;

pub use client::*;
pub use source::*;
