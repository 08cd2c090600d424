//! Error types for the widget lifecycle.

use thiserror::Error;

/// Errors that end the widget's initialization flow.
///
/// All of these are terminal: the widget does not retry and does not
/// become interactive after one is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The product source answered with a failure (transport or HTTP status).
    #[error("Product fetch failed: {0}")]
    FetchFailure(String),

    /// The product document did not have the expected shape.
    #[error("Malformed product response: {0}")]
    MalformedResponse(String),

    /// A page region the widget renders into is missing.
    #[error("Missing page region: {0}")]
    MissingRegion(String),

    /// A lifecycle step was attempted from the wrong phase.
    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
