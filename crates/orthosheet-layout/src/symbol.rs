//! Projection-convention symbol.
//!
//! The symbol is two views of a truncated cone lying along +Y: an
//! elevation showing the trapezoidal profile and an end view showing two
//! concentric circles. First angle puts the elevation on the left; third
//! angle puts the end view on the left and looks at the elevation from the
//! other side. The symbol is always drawn at full size without hidden
//! lines.

use serde::{Deserialize, Serialize};

use crate::coords::page_height_for;
use crate::error::{LayoutError, Result};
use crate::log::debug;
use crate::placement::place_with_row;
use crate::table;
use crate::types::{
    BoundingBox, CoordinateVariant, LayoutParameters, ProjectionConvention, ViewPlacementRecord,
};

/// Gap between the two symbol views, in multiples of the spacing unit.
pub const SYMBOL_GAP_FACTOR: f64 = 3.0;

/// The reference solid the symbol views are drawn from.
///
/// The large end sits on the XZ plane and the cone narrows along +Y, so
/// its bounding box is a cube with the large diameter as its side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruncatedCone {
    /// Radius of the small end.
    pub base_radius: f64,
    /// Radius of the large end.
    pub top_radius: f64,
    /// Distance between the two ends.
    pub length: f64,
    /// Centre of the large end [x, y, z].
    pub top_centre: [f64; 3],
    /// Axis from the large end towards the small end [x, y, z].
    pub axis: [f64; 3],
}

impl TruncatedCone {
    /// Cone whose large end has diameter `large_diameter`, narrowing to
    /// `small_diameter` over a length equal to `large_diameter`.
    pub fn new(large_diameter: f64, small_diameter: f64) -> Self {
        let top_radius = 0.5 * large_diameter;
        Self {
            base_radius: 0.5 * small_diameter,
            top_radius,
            length: large_diameter,
            top_centre: [top_radius, 0.0, top_radius],
            axis: [0.0, 1.0, 0.0],
        }
    }

    /// Bounding box of the cone.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::cube(self.length)
    }
}

/// The two symbol views plus the solid they show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolLayout {
    /// Convention the symbol declares.
    pub convention: ProjectionConvention,
    /// Solid to build for the views.
    pub cone: TruncatedCone,
    /// Elevation and end view, in placement order.
    pub views: Vec<ViewPlacementRecord>,
}

pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LayoutError::InvalidParameters(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Lay out the projection symbol.
///
/// `cone_height` is both the length of the cone and its large diameter,
/// `cone_base_diameter` its small diameter and `spacing_unit` the unit the
/// gap between the views is measured in. Only the origin and page height
/// are taken from `params`: the symbol is drawn at scale 1 with
/// `3 * spacing_unit` between views.
pub fn place_symbol_views(
    cone_height: f64,
    cone_base_diameter: f64,
    spacing_unit: f64,
    params: &LayoutParameters,
    convention: ProjectionConvention,
    variant: CoordinateVariant,
) -> Result<SymbolLayout> {
    check_positive("cone height", cone_height)?;
    check_positive("cone base diameter", cone_base_diameter)?;
    check_positive("spacing unit", spacing_unit)?;

    let params = LayoutParameters {
        spacing: SYMBOL_GAP_FACTOR * spacing_unit,
        scale: 1.0,
        ..*params
    };
    params.validate()?;
    page_height_for(variant, params.page_height)?;

    let cone = TruncatedCone::new(cone_height, cone_base_diameter);
    let bbox = cone.bounds();
    debug!(%convention, cone_height, cone_base_diameter, "laying out projection symbol");

    let views = table::symbol_rows(convention)
        .iter()
        .map(|row| {
            let label = format!("{convention} projection symbol {}", row.direction.label());
            place_with_row(row, &bbox, &params, variant, false, label)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SymbolLayout {
        convention,
        cone,
        views,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ViewDirection;
    use approx::assert_relative_eq;

    fn params() -> LayoutParameters {
        LayoutParameters::new(190.0, 280.0, 99.0, 0.2)
    }

    #[test]
    fn test_first_angle_symbol() {
        let symbol = place_symbol_views(
            15.0,
            7.5,
            5.0 / 3.0,
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CornerYDown,
        )
        .unwrap();

        assert_eq!(symbol.views.len(), 2);
        let elevation = &symbol.views[0];
        assert_eq!(elevation.direction, ViewDirection::NegX);
        assert_relative_eq!(elevation.x, 190.0);
        assert_relative_eq!(elevation.y, 280.0);
        assert_eq!(elevation.rotation_degrees, 270.0);
        assert!(elevation.mirrored_source);

        let end = &symbol.views[1];
        assert_eq!(end.direction, ViewDirection::NegY);
        assert_relative_eq!(end.x, 190.0 + 15.0 + 5.0, epsilon = 1e-12);
        assert_relative_eq!(end.y, 280.0);
        assert_eq!(end.rotation_degrees, 90.0);
        assert!(!end.mirrored_source);

        for v in &symbol.views {
            assert_eq!(v.scale, 1.0);
            assert!(!v.hidden_lines_visible);
            assert_eq!(v.line_width_thick, 0.7);
            assert_eq!(v.line_width_thin, 0.35);
        }
        assert_eq!(
            symbol.views[0].label,
            "first angle projection symbol from negative x"
        );
    }

    #[test]
    fn test_third_angle_symbol_swaps_sides() {
        let symbol = place_symbol_views(
            15.0,
            7.5,
            1.0,
            &params(),
            ProjectionConvention::ThirdAngle,
            CoordinateVariant::CornerYDown,
        )
        .unwrap();

        let dirs: Vec<_> = symbol.views.iter().map(|v| v.direction).collect();
        assert_eq!(dirs, [ViewDirection::NegY, ViewDirection::PosX]);
        assert_relative_eq!(symbol.views[0].x, 190.0);
        // right-anchored elevation: 2H + 3d from the origin
        assert_relative_eq!(symbol.views[1].x, 190.0 + 30.0 + 3.0);
        assert!(symbol.views.iter().all(|v| !v.hidden_lines_visible));
    }

    #[test]
    fn test_cone_description() {
        let cone = TruncatedCone::new(15.0, 7.5);
        assert_relative_eq!(cone.top_radius, 7.5);
        assert_relative_eq!(cone.base_radius, 3.75);
        assert_relative_eq!(cone.length, 15.0);
        assert_eq!(cone.top_centre, [7.5, 0.0, 7.5]);
        assert_eq!(cone.axis, [0.0, 1.0, 0.0]);
        assert_eq!(cone.bounds(), BoundingBox::cube(15.0));
    }

    #[test]
    fn test_symbol_rejects_bad_input() {
        for (big, small, unit) in [(0.0, 7.5, 1.0), (15.0, -1.0, 1.0), (15.0, 7.5, 0.0)] {
            let err = place_symbol_views(
                big,
                small,
                unit,
                &params(),
                ProjectionConvention::FirstAngle,
                CoordinateVariant::CornerYDown,
            )
            .unwrap_err();
            assert!(matches!(err, LayoutError::InvalidParameters(_)));
        }
    }

    #[test]
    fn test_symbol_page_relative() {
        let err = place_symbol_views(
            15.0,
            7.5,
            1.0,
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CenterYUpPageRelative,
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::MissingPageHeight);

        let symbol = place_symbol_views(
            15.0,
            7.5,
            1.0,
            &params().with_page_height(297.0),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CenterYUpPageRelative,
        )
        .unwrap();
        // centre of a bottom-anchored 15mm view sitting on y = 280
        assert_relative_eq!(symbol.views[0].x, 197.5);
        assert_relative_eq!(symbol.views[0].y, 297.0 - 272.5);
    }

    #[test]
    fn test_third_angle_symbol_page_relative() {
        let symbol = place_symbol_views(
            15.0,
            7.5,
            1.0,
            &params().with_page_height(297.0),
            ProjectionConvention::ThirdAngle,
            CoordinateVariant::CenterYUpPageRelative,
        )
        .unwrap();

        let (end, elevation) = (&symbol.views[0], &symbol.views[1]);
        assert_eq!(end.direction, ViewDirection::NegY);
        assert_relative_eq!(end.x, 197.5);
        assert_relative_eq!(end.y, 24.5);

        // right edge at 190 + 30 + 3, half of the 15mm width back from it
        assert_eq!(elevation.direction, ViewDirection::PosX);
        assert_relative_eq!(elevation.x, 215.5);
        assert_relative_eq!(elevation.y, 24.5);
        assert!(symbol.views.iter().all(|v| v.rotation_degrees == 0.0));
    }
}
