//! Observability for the product display widget.
//!
//! This crate provides:
//! - `StructuredLogger` - Session-correlated structured logging
//! - `LogBuilder` - Fluent typed fields for a single entry
//! - `LogLevel` / `LogFormat` - Filtering and output format

mod logging;

pub use logging::*;

// Re-export SessionId from widget-core for convenience
pub use widget_core::SessionId;
