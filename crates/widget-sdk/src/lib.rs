//! Public SDK for the product display widget.
//!
//! This crate re-exports the widget platform crates:
//!
//! ```ignore
//! use widget_sdk::prelude::*;
//!
//! let session = SessionId::generate();
//! let logger = StructuredLogger::new(session.clone()).with_widget("product-display");
//! let source = HttpProductSource::new(config.endpoint.clone(), FetchClient::new(session));
//! ```

pub use widget_core;
pub use widget_data;
pub use widget_observability;

/// Prelude for convenient imports.
pub mod prelude {
    pub use widget_core::*;
    pub use widget_data::*;
    pub use widget_observability::*;
}
