//! Core types for view layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// The wider of the two line weights for drawing sheets (mm).
pub const LINE_WIDTH_THICK: f64 = 0.7;

/// The narrower of the two line weights for drawing sheets (mm).
pub const LINE_WIDTH_THIN: f64 = 0.35;

/// Tolerance used when matching a raw vector against the six view axes.
const AXIS_TOLERANCE: f64 = 1e-9;

/// Axis-aligned extent of the object being drawn.
///
/// `width` runs along X, `depth` along Y and `height` along Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub depth: f64,
    /// Extent along Z.
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// A box with equal sides.
    pub fn cube(side: f64) -> Self {
        Self::new(side, side, side)
    }

    /// This box with every axis multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        Self::new(self.width * k, self.depth * k, self.height * k)
    }

    /// Check that every dimension is finite and non-negative.
    ///
    /// A zero-sized box is valid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("depth", self.depth),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParameters(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Where and how large the view group is drawn on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    /// Sheet X of the group anchor.
    pub origin_x: f64,
    /// Sheet Y of the group anchor.
    pub origin_y: f64,
    /// Gap between adjacent views (sheet units, not scaled).
    pub spacing: f64,
    /// Uniform scale applied to the bounding box.
    pub scale: f64,
    /// Total sheet height; only the page-relative variant needs it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_height: Option<f64>,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            spacing: 5.0,
            scale: 1.0,
            page_height: None,
        }
    }
}

impl LayoutParameters {
    /// Create parameters without a page height.
    pub fn new(origin_x: f64, origin_y: f64, spacing: f64, scale: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            spacing,
            scale,
            page_height: None,
        }
    }

    /// Set the page height.
    pub fn with_page_height(mut self, page_height: f64) -> Self {
        self.page_height = Some(page_height);
        self
    }

    /// Validate parameters.
    ///
    /// Spacing and scale must be strictly positive; they are never clamped.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(LayoutError::InvalidParameters(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(LayoutError::InvalidParameters(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(LayoutError::InvalidParameters(
                "origin must be finite".into(),
            ));
        }
        if let Some(h) = self.page_height {
            if !h.is_finite() {
                return Err(LayoutError::InvalidParameters(
                    "page_height must be finite".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Arrangement of views around the principal view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionConvention {
    /// Each view is placed on the side opposite the one it is viewed from.
    #[default]
    FirstAngle,
    /// Each view is placed on the side it is viewed from.
    ThirdAngle,
}

impl fmt::Display for ProjectionConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionConvention::FirstAngle => f.write_str("first angle"),
            ProjectionConvention::ThirdAngle => f.write_str("third angle"),
        }
    }
}

/// Coordinate convention of the page back end that consumes the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateVariant {
    /// Position is a view's reference corner; Y grows away from the top edge.
    #[default]
    CornerYDown,
    /// Position is a view's centre; Y grows up from the bottom of the page.
    CenterYUpPageRelative,
}

/// One of the six axis directions a view can look along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewDirection {
    /// Along +X.
    #[serde(rename = "+x")]
    PosX,
    /// Along -X.
    #[serde(rename = "-x")]
    NegX,
    /// Along +Y.
    #[serde(rename = "+y")]
    PosY,
    /// Along -Y.
    #[serde(rename = "-y")]
    NegY,
    /// Along +Z.
    #[serde(rename = "+z")]
    PosZ,
    /// Along -Z.
    #[serde(rename = "-z")]
    NegZ,
}

impl ViewDirection {
    /// Order in which a six-view layout emits its records.
    pub const PLACEMENT_ORDER: [ViewDirection; 6] = [
        ViewDirection::NegZ,
        ViewDirection::NegX,
        ViewDirection::NegY,
        ViewDirection::PosX,
        ViewDirection::PosY,
        ViewDirection::PosZ,
    ];

    /// The unit vector for this direction.
    pub fn vector(&self) -> Vec3 {
        match self {
            ViewDirection::PosX => Vec3::new(1.0, 0.0, 0.0),
            ViewDirection::NegX => Vec3::new(-1.0, 0.0, 0.0),
            ViewDirection::PosY => Vec3::new(0.0, 1.0, 0.0),
            ViewDirection::NegY => Vec3::new(0.0, -1.0, 0.0),
            ViewDirection::PosZ => Vec3::new(0.0, 0.0, 1.0),
            ViewDirection::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }

    /// Match a raw vector against the six axis unit vectors.
    pub fn from_vector(v: Vec3) -> Result<Self> {
        let unit = |c: f64| (c.abs() - 1.0).abs() < AXIS_TOLERANCE;
        let zero = |c: f64| c.abs() < AXIS_TOLERANCE;
        let dir = match (v.x, v.y, v.z) {
            (x, y, z) if unit(x) && zero(y) && zero(z) => {
                if x > 0.0 {
                    ViewDirection::PosX
                } else {
                    ViewDirection::NegX
                }
            }
            (x, y, z) if zero(x) && unit(y) && zero(z) => {
                if y > 0.0 {
                    ViewDirection::PosY
                } else {
                    ViewDirection::NegY
                }
            }
            (x, y, z) if zero(x) && zero(y) && unit(z) => {
                if z > 0.0 {
                    ViewDirection::PosZ
                } else {
                    ViewDirection::NegZ
                }
            }
            _ => {
                return Err(LayoutError::UnknownDirection(format!(
                    "({}, {}, {})",
                    v.x, v.y, v.z
                )))
            }
        };
        Ok(dir)
    }

    /// The direction pointing the other way along the same axis.
    pub fn opposite(&self) -> Self {
        match self {
            ViewDirection::PosX => ViewDirection::NegX,
            ViewDirection::NegX => ViewDirection::PosX,
            ViewDirection::PosY => ViewDirection::NegY,
            ViewDirection::NegY => ViewDirection::PosY,
            ViewDirection::PosZ => ViewDirection::NegZ,
            ViewDirection::NegZ => ViewDirection::PosZ,
        }
    }

    /// Whether this view looks along the X axis.
    ///
    /// Those views are drawn from a copy of the solid reflected through the
    /// XY plane.
    pub fn is_x_axis(&self) -> bool {
        matches!(self, ViewDirection::PosX | ViewDirection::NegX)
    }

    /// Human-readable suffix used in view labels.
    pub fn label(&self) -> &'static str {
        match self {
            ViewDirection::PosX => "from positive x",
            ViewDirection::NegX => "from negative x",
            ViewDirection::PosY => "from positive y",
            ViewDirection::NegY => "from negative y",
            ViewDirection::PosZ => "from positive z",
            ViewDirection::NegZ => "from negative z",
        }
    }
}

impl fmt::Display for ViewDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewDirection::PosX => "+X",
            ViewDirection::NegX => "-X",
            ViewDirection::PosY => "+Y",
            ViewDirection::NegY => "-Y",
            ViewDirection::PosZ => "+Z",
            ViewDirection::NegZ => "-Z",
        };
        f.write_str(s)
    }
}

/// Everything a page back end needs to place one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewPlacementRecord {
    /// Direction the view looks along.
    pub direction: ViewDirection,
    /// Name of the view object.
    pub label: String,
    /// Sheet X in the requested coordinate variant.
    pub x: f64,
    /// Sheet Y in the requested coordinate variant.
    pub y: f64,
    /// Rotation applied by the back end, in degrees.
    pub rotation_degrees: f64,
    /// Scale the view is drawn at.
    pub scale: f64,
    /// Whether hidden edges are drawn.
    pub hidden_lines_visible: bool,
    /// Width of visible lines.
    pub line_width_thick: f64,
    /// Width of hidden lines.
    pub line_width_thin: f64,
    /// Whether the view is drawn from the solid reflected through the XY plane.
    pub mirrored_source: bool,
}

/// 2D axis-aligned rectangle on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum X coordinate.
    pub min_x: f64,
    /// Minimum Y coordinate.
    pub min_y: f64,
    /// Maximum X coordinate.
    pub max_x: f64,
    /// Maximum Y coordinate.
    pub max_y: f64,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Centre of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether the interiors of two rectangles intersect.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}
