//! Error types for view layout.

use thiserror::Error;

/// Errors that can occur while laying out views.
///
/// Every variant is fatal to the call that produced it: no partial layout
/// is ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The direction is not one the requested table has a row for.
    #[error("unknown view direction: {0}")]
    UnknownDirection(String),

    /// The page-relative coordinate variant needs the page height.
    #[error("page height is required for the page-relative coordinate variant")]
    MissingPageHeight,

    /// Spacing, scale or dimensions out of range.
    #[error("invalid layout parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
