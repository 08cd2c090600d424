//! Product display widget.
//!
//! Loads one product document, renders the price block, color and size
//! pickers, quantity stepper, image gallery and description into the host
//! page, then handles clicks through one delegated listener per region.
//!
//! The browser binding lives behind `wasm32`; everything else is plain Rust
//! and is driven in tests through a [`surface::Surface`] implementation.

pub mod controller;
pub mod data;
pub mod sections;
pub mod state;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use controller::{logger_for, ClickOutcome, Controller};
pub use state::SelectionState;
pub use surface::{Region, Surface};
