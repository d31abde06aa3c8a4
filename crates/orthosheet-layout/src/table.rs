//! Per-view layout coefficients for first- and third-angle projection.
//!
//! Each view's sheet offset from the group origin is a linear combination
//! of the object's scaled depth, width and height plus a multiple of the
//! view spacing. The tables below hold those multiples. They are fixed
//! data: nothing here depends on the object being drawn.
//!
//! Coordinates in this module are Y-down (Y grows away from the top edge
//! of the sheet). In the first-angle arrangement the views unfold around
//! the `-Y` view like this, with one spacing between neighbours:
//!
//! ```text
//!              [-Z]
//!   [-X]  [-Y]  [+X]  [+Y]
//!              [+Z]
//! ```
//!
//! `-Z` and `+Z` sit over and under `-Y`. The third-angle arrangement is
//! the point reflection of that group through its centre: every view
//! rectangle lands on the opposite side, but keeps its anchor corner and
//! rotation.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::types::{BoundingBox, CoordinateVariant, ProjectionConvention, Rect, ViewDirection};

/// Multiples of depth, width, height and spacing along one sheet axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OffsetCoefficients {
    /// Multiple of the scaled depth.
    pub depth: f64,
    /// Multiple of the scaled width.
    pub width: f64,
    /// Multiple of the scaled height.
    pub height: f64,
    /// Multiple of the view spacing.
    pub gap: f64,
}

impl OffsetCoefficients {
    /// All-zero coefficients.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a coefficient set.
    pub const fn new(depth: f64, width: f64, height: f64, gap: f64) -> Self {
        Self {
            depth,
            width,
            height,
            gap,
        }
    }

    /// Offset for a box drawn at `scale` with `spacing` between views.
    ///
    /// Only the box terms are scaled; the spacing is in sheet units.
    pub fn evaluate(&self, bbox: &BoundingBox, scale: f64, spacing: f64) -> f64 {
        scale * (self.depth * bbox.depth + self.width * bbox.width + self.height * bbox.height)
            + self.gap * spacing
    }

    /// Component-wise sum.
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(
            self.depth + other.depth,
            self.width + other.width,
            self.height + other.height,
            self.gap + other.gap,
        )
    }

    /// Component-wise difference.
    pub fn minus(&self, other: &Self) -> Self {
        Self::new(
            self.depth - other.depth,
            self.width - other.width,
            self.height - other.height,
            self.gap - other.gap,
        )
    }

    /// Every coefficient multiplied by `k`.
    pub fn times(&self, k: f64) -> Self {
        Self::new(self.depth * k, self.width * k, self.height * k, self.gap * k)
    }
}

const fn k(depth: f64, width: f64, height: f64, gap: f64) -> OffsetCoefficients {
    OffsetCoefficients::new(depth, width, height, gap)
}

/// Which box dimension a view spans along one sheet axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extent {
    /// The object's width (X).
    Width,
    /// The object's depth (Y).
    Depth,
    /// The object's height (Z).
    Height,
}

impl Extent {
    /// Unscaled length of this extent for `bbox`.
    pub fn length(&self, bbox: &BoundingBox) -> f64 {
        match self {
            Extent::Width => bbox.width,
            Extent::Depth => bbox.depth,
            Extent::Height => bbox.height,
        }
    }

    /// This extent as a coefficient set with a single unit term.
    pub fn unit(&self) -> OffsetCoefficients {
        match self {
            Extent::Width => k(0.0, 1.0, 0.0, 0.0),
            Extent::Depth => k(1.0, 0.0, 0.0, 0.0),
            Extent::Height => k(0.0, 0.0, 1.0, 0.0),
        }
    }
}

/// Horizontal side of a view that its corner coordinate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorX {
    /// Corner X is the view's left edge.
    Left,
    /// Corner X is the view's right edge.
    Right,
}

/// Vertical side of a view that its corner coordinate refers to (Y-down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorY {
    /// Corner Y is the view's top edge.
    Top,
    /// Corner Y is the view's bottom edge.
    Bottom,
}

/// The rectangle a view occupies and which corner its position denotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Dimension spanned along sheet X.
    pub horizontal: Extent,
    /// Dimension spanned along sheet Y.
    pub vertical: Extent,
    /// Horizontal anchor side.
    pub anchor_x: AnchorX,
    /// Vertical anchor side.
    pub anchor_y: AnchorY,
}

impl Footprint {
    const fn new(horizontal: Extent, vertical: Extent, anchor_x: AnchorX, anchor_y: AnchorY) -> Self {
        Self {
            horizontal,
            vertical,
            anchor_x,
            anchor_y,
        }
    }

    /// Offset from the anchor corner to the view centre along X.
    pub fn half_x(&self) -> OffsetCoefficients {
        let half = self.horizontal.unit().times(0.5);
        match self.anchor_x {
            AnchorX::Left => half,
            AnchorX::Right => half.times(-1.0),
        }
    }

    /// Offset from the anchor corner to the view centre along Y (Y-down).
    pub fn half_y(&self) -> OffsetCoefficients {
        let half = self.vertical.unit().times(0.5);
        match self.anchor_y {
            AnchorY::Top => half,
            AnchorY::Bottom => half.times(-1.0),
        }
    }

    /// Sheet rectangle of a view whose anchor corner is at `(x, y)`.
    pub fn rect(&self, x: f64, y: f64, bbox: &BoundingBox, scale: f64) -> Rect {
        let w = scale * self.horizontal.length(bbox);
        let h = scale * self.vertical.length(bbox);
        let (min_x, max_x) = match self.anchor_x {
            AnchorX::Left => (x, x + w),
            AnchorX::Right => (x - w, x),
        };
        let (min_y, max_y) = match self.anchor_y {
            AnchorY::Top => (y, y + h),
            AnchorY::Bottom => (y - h, y),
        };
        Rect::new(min_x, min_y, max_x, max_y)
    }
}

/// Layout coefficients for one view in one convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewCoefficientRow {
    /// View the row belongs to.
    pub direction: ViewDirection,
    /// Corner X coefficients (`kxDepth`, `kxWidth`, `kxGap`).
    pub x: OffsetCoefficients,
    /// Corner Y coefficients (`kyDepth`, `kyHeight`, `kyGap`).
    pub y: OffsetCoefficients,
    /// Centre X coefficients.
    pub center_x: OffsetCoefficients,
    /// Centre Y coefficients, still Y-down.
    pub center_y: OffsetCoefficients,
    /// Space the view occupies.
    pub footprint: Footprint,
    /// Rotation for the corner-positioned back end (degrees).
    pub rotation_corner: f64,
    /// Rotation for the centre-positioned back end (degrees).
    pub rotation_center: f64,
}

impl ViewCoefficientRow {
    /// Coefficients that position this view under `variant`.
    pub fn offsets(&self, variant: CoordinateVariant) -> (&OffsetCoefficients, &OffsetCoefficients) {
        match variant {
            CoordinateVariant::CornerYDown => (&self.x, &self.y),
            CoordinateVariant::CenterYUpPageRelative => (&self.center_x, &self.center_y),
        }
    }

    /// Rotation for `variant`.
    pub fn rotation(&self, variant: CoordinateVariant) -> f64 {
        match variant {
            CoordinateVariant::CornerYDown => self.rotation_corner,
            CoordinateVariant::CenterYUpPageRelative => self.rotation_center,
        }
    }

    /// Whether the view is drawn from the reflected solid.
    pub fn mirrored_source(&self) -> bool {
        self.direction.is_x_axis()
    }
}

macro_rules! row {
    (
        $dir:ident,
        x: $x:expr, y: $y:expr,
        cx: $cx:expr, cy: $cy:expr,
        $h:ident x $v:ident @ $ax:ident, $ay:ident,
        rot: $rot:expr
    ) => {
        ViewCoefficientRow {
            direction: ViewDirection::$dir,
            x: $x,
            y: $y,
            center_x: $cx,
            center_y: $cy,
            footprint: Footprint::new(Extent::$h, Extent::$v, AnchorX::$ax, AnchorY::$ay),
            rotation_corner: $rot,
            rotation_center: 0.0,
        }
    };
}

/// Horizontal span of the six-view group.
pub const GROUP_SPAN_X: OffsetCoefficients = k(2.0, 2.0, 0.0, 3.0);

/// Vertical span of the six-view group.
pub const GROUP_SPAN_Y: OffsetCoefficients = k(2.0, 0.0, 1.0, 2.0);

/// Horizontal span of the two-view symbol.
pub const SYMBOL_SPAN_X: OffsetCoefficients = k(1.0, 1.0, 0.0, 1.0);

#[rustfmt::skip]
static FIRST_ANGLE: [ViewCoefficientRow; 6] = [
    row!(NegZ, x: k(1.0, 0.0, 0.0, 1.0), y: k(0.0, 0.0, 0.0, 0.0),
         cx: k(1.0, 0.5, 0.0, 1.0), cy: k(0.5, 0.0, 0.0, 0.0),
         Width x Depth @ Left, Top, rot: 180.0),
    row!(NegX, x: k(0.0, 0.0, 0.0, 0.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(0.5, 0.0, 0.0, 0.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Depth x Height @ Left, Bottom, rot: 270.0),
    row!(NegY, x: k(1.0, 0.0, 0.0, 1.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(1.0, 0.5, 0.0, 1.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Width x Height @ Left, Bottom, rot: 90.0),
    row!(PosX, x: k(2.0, 1.0, 0.0, 2.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(1.5, 1.0, 0.0, 2.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Depth x Height @ Right, Bottom, rot: 90.0),
    row!(PosY, x: k(2.0, 2.0, 0.0, 3.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(2.0, 1.5, 0.0, 3.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Width x Height @ Right, Bottom, rot: 270.0),
    row!(PosZ, x: k(1.0, 0.0, 0.0, 1.0), y: k(2.0, 0.0, 1.0, 2.0),
         cx: k(1.0, 0.5, 0.0, 1.0), cy: k(1.5, 0.0, 1.0, 2.0),
         Width x Depth @ Left, Bottom, rot: 0.0),
];

#[rustfmt::skip]
static THIRD_ANGLE: [ViewCoefficientRow; 6] = [
    row!(NegZ, x: k(1.0, 1.0, 0.0, 2.0), y: k(1.0, 0.0, 1.0, 2.0),
         cx: k(1.0, 1.5, 0.0, 2.0), cy: k(1.5, 0.0, 1.0, 2.0),
         Width x Depth @ Left, Top, rot: 180.0),
    row!(NegX, x: k(1.0, 2.0, 0.0, 3.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(1.5, 2.0, 0.0, 3.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Depth x Height @ Left, Bottom, rot: 270.0),
    row!(NegY, x: k(1.0, 1.0, 0.0, 2.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(1.0, 1.5, 0.0, 2.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Width x Height @ Left, Bottom, rot: 90.0),
    row!(PosX, x: k(1.0, 1.0, 0.0, 1.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(0.5, 1.0, 0.0, 1.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Depth x Height @ Right, Bottom, rot: 90.0),
    row!(PosY, x: k(0.0, 1.0, 0.0, 0.0), y: k(1.0, 0.0, 1.0, 1.0),
         cx: k(0.0, 0.5, 0.0, 0.0), cy: k(1.0, 0.0, 0.5, 1.0),
         Width x Height @ Right, Bottom, rot: 270.0),
    row!(PosZ, x: k(1.0, 1.0, 0.0, 2.0), y: k(1.0, 0.0, 0.0, 0.0),
         cx: k(1.0, 1.5, 0.0, 2.0), cy: k(0.5, 0.0, 0.0, 0.0),
         Width x Depth @ Left, Bottom, rot: 0.0),
];

// Symbol rows are evaluated against a cube whose side is the cone height,
// so depth, width and height terms all measure the same length.

#[rustfmt::skip]
static FIRST_ANGLE_SYMBOL: [ViewCoefficientRow; 2] = [
    row!(NegX, x: k(0.0, 0.0, 0.0, 0.0), y: k(0.0, 0.0, 0.0, 0.0),
         cx: k(0.5, 0.0, 0.0, 0.0), cy: k(0.0, 0.0, -0.5, 0.0),
         Depth x Height @ Left, Bottom, rot: 270.0),
    row!(NegY, x: k(1.0, 0.0, 0.0, 1.0), y: k(0.0, 0.0, 0.0, 0.0),
         cx: k(1.0, 0.5, 0.0, 1.0), cy: k(0.0, 0.0, -0.5, 0.0),
         Width x Height @ Left, Bottom, rot: 90.0),
];

#[rustfmt::skip]
static THIRD_ANGLE_SYMBOL: [ViewCoefficientRow; 2] = [
    row!(NegY, x: k(0.0, 0.0, 0.0, 0.0), y: k(0.0, 0.0, 0.0, 0.0),
         cx: k(0.0, 0.5, 0.0, 0.0), cy: k(0.0, 0.0, -0.5, 0.0),
         Width x Height @ Left, Bottom, rot: 90.0),
    row!(PosX, x: k(1.0, 1.0, 0.0, 1.0), y: k(0.0, 0.0, 0.0, 0.0),
         cx: k(0.5, 1.0, 0.0, 1.0), cy: k(0.0, 0.0, -0.5, 0.0),
         Depth x Height @ Right, Bottom, rot: 90.0),
];

/// All six rows of the main layout, in placement order.
pub fn rows(convention: ProjectionConvention) -> &'static [ViewCoefficientRow] {
    match convention {
        ProjectionConvention::FirstAngle => &FIRST_ANGLE,
        ProjectionConvention::ThirdAngle => &THIRD_ANGLE,
    }
}

/// Both rows of the projection symbol, in placement order.
pub fn symbol_rows(convention: ProjectionConvention) -> &'static [ViewCoefficientRow] {
    match convention {
        ProjectionConvention::FirstAngle => &FIRST_ANGLE_SYMBOL,
        ProjectionConvention::ThirdAngle => &THIRD_ANGLE_SYMBOL,
    }
}

fn find(
    table: &'static [ViewCoefficientRow],
    direction: ViewDirection,
    what: &str,
) -> Result<&'static ViewCoefficientRow> {
    table
        .iter()
        .find(|row| row.direction == direction)
        .ok_or_else(|| LayoutError::UnknownDirection(format!("{direction} has no {what} row")))
}

/// Row for `direction` in the main six-view table.
pub fn lookup(
    convention: ProjectionConvention,
    direction: ViewDirection,
) -> Result<&'static ViewCoefficientRow> {
    find(rows(convention), direction, "view")
}

/// Row for `direction` in the projection-symbol table.
pub fn symbol_lookup(
    convention: ProjectionConvention,
    direction: ViewDirection,
) -> Result<&'static ViewCoefficientRow> {
    find(symbol_rows(convention), direction, "symbol")
}
