#![warn(missing_docs)]

//! View placement for orthographic drawing sheets.
//!
//! This crate computes where the standard views of an object go on a
//! drawing sheet, in first-angle or third-angle projection:
//!
//! - **Six-view layout**: placement, rotation and line attributes for the
//!   views along ±X, ±Y and ±Z
//! - **Projection symbol**: the two-view truncated-cone symbol that declares
//!   the convention
//! - **Coordinate variants**: corner-positioned Y-down output or
//!   centre-positioned, page-relative Y-up output
//! - **Sheets**: a symbol plus several parts, assembled group by group
//!
//! Nothing here builds geometry or touches a document; the output is a list
//! of [`ViewPlacementRecord`]s for a [`PageAssembler`] to apply.
//!
//! # Example
//!
//! ```
//! use orthosheet_layout::{
//!     place_views, BoundingBox, CoordinateVariant, LayoutParameters, ProjectionConvention,
//!     ViewDirection,
//! };
//!
//! let views = place_views(
//!     &BoundingBox::cube(100.0),
//!     &LayoutParameters::new(100.0, 40.0, 5.0, 0.5),
//!     ProjectionConvention::FirstAngle,
//!     CoordinateVariant::CornerYDown,
//! )
//! .unwrap();
//!
//! assert_eq!(views[0].direction, ViewDirection::NegZ);
//! assert_eq!(views[0].x, 155.0);
//! assert_eq!(views[0].rotation_degrees, 180.0);
//! ```

pub mod assemble;
pub mod coords;
pub mod error;
mod log;
pub mod placement;
pub mod sheet;
pub mod symbol;
pub mod table;
pub mod types;

// Re-export main types and functions for convenience
pub use assemble::{assemble, PageAssembler, PlacedGroup, SheetPlan};
pub use coords::{from_render_coordinates, render_position, to_render_coordinates};
pub use error::{LayoutError, Result};
pub use placement::{footprints, place_view, place_view_along, place_views, ViewLayout};
pub use sheet::{Orientation, PaperSize, PartRequest, SheetRequest, SymbolRequest};
pub use symbol::{place_symbol_views, SymbolLayout, TruncatedCone, SYMBOL_GAP_FACTOR};
pub use table::{lookup, symbol_lookup, Footprint, OffsetCoefficients, ViewCoefficientRow};
pub use types::{
    BoundingBox, CoordinateVariant, LayoutParameters, ProjectionConvention, Rect, Vec3,
    ViewDirection, ViewPlacementRecord, LINE_WIDTH_THICK, LINE_WIDTH_THIN,
};
