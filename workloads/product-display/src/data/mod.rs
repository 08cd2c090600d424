//! Data models for the product display widget.

mod money;
mod product;

pub use money::*;
pub use product::*;
