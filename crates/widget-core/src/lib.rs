//! Core abstractions for the product display widget.
//!
//! This crate provides the fundamental types shared by the widget crates:
//! - `WidgetConfig` - Endpoint, naming and rendering policies
//! - `WidgetPhase` - Load lifecycle (`Loading -> Ready -> Interactive`)
//! - `SessionId` - Correlation id for one page view
//! - `WidgetError` - Errors that end the initialization flow

mod config;
mod context;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
