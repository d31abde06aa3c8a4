//! Conversion between layout coordinates and page back-end coordinates.
//!
//! Layout arithmetic is done Y-down from the group origin. The corner back
//! end takes those numbers as they are. The page-relative back end places
//! a view by its centre and measures Y upward from the bottom of the page,
//! so it needs the centre coefficients and the page height.

use crate::error::{LayoutError, Result};
use crate::table::ViewCoefficientRow;
use crate::types::{BoundingBox, CoordinateVariant, LayoutParameters};

/// Page height to use for `variant`, or `MissingPageHeight`.
///
/// Returns `None` for the corner variant, which does not need one.
pub fn page_height_for(variant: CoordinateVariant, page_height: Option<f64>) -> Result<Option<f64>> {
    match variant {
        CoordinateVariant::CornerYDown => Ok(None),
        CoordinateVariant::CenterYUpPageRelative => {
            page_height.map(Some).ok_or(LayoutError::MissingPageHeight)
        }
    }
}

/// Map a raw Y-down layout coordinate to back-end coordinates.
pub fn to_render_coordinates(
    raw_x: f64,
    raw_y: f64,
    variant: CoordinateVariant,
    page_height: Option<f64>,
) -> Result<(f64, f64)> {
    match page_height_for(variant, page_height)? {
        None => Ok((raw_x, raw_y)),
        Some(h) => Ok((raw_x, h - raw_y)),
    }
}

/// Inverse of [`to_render_coordinates`].
pub fn from_render_coordinates(
    x: f64,
    y: f64,
    variant: CoordinateVariant,
    page_height: Option<f64>,
) -> Result<(f64, f64)> {
    // y -> h - y is its own inverse
    to_render_coordinates(x, y, variant, page_height)
}

/// Raw Y-down position of the view described by `row`.
///
/// Uses the corner coefficients for the corner variant and the centre
/// coefficients for the page-relative one.
pub fn raw_position(
    row: &ViewCoefficientRow,
    bbox: &BoundingBox,
    params: &LayoutParameters,
    variant: CoordinateVariant,
) -> (f64, f64) {
    let (kx, ky) = row.offsets(variant);
    (
        params.origin_x + kx.evaluate(bbox, params.scale, params.spacing),
        params.origin_y + ky.evaluate(bbox, params.scale, params.spacing),
    )
}

/// Final back-end position of the view described by `row`.
pub fn render_position(
    row: &ViewCoefficientRow,
    bbox: &BoundingBox,
    params: &LayoutParameters,
    variant: CoordinateVariant,
) -> Result<(f64, f64)> {
    let (raw_x, raw_y) = raw_position(row, bbox, params, variant);
    to_render_coordinates(raw_x, raw_y, variant, params.page_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::lookup;
    use crate::types::{ProjectionConvention, ViewDirection};
    use approx::assert_relative_eq;

    #[test]
    fn test_corner_variant_is_identity() {
        let (x, y) = to_render_coordinates(12.5, 40.0, CoordinateVariant::CornerYDown, None).unwrap();
        assert_eq!((x, y), (12.5, 40.0));
    }

    #[test]
    fn test_page_relative_flips_y() {
        let (x, y) = to_render_coordinates(
            12.5,
            40.0,
            CoordinateVariant::CenterYUpPageRelative,
            Some(297.0),
        )
        .unwrap();
        assert_relative_eq!(x, 12.5);
        assert_relative_eq!(y, 257.0);
    }

    #[test]
    fn test_page_relative_requires_height() {
        let err = to_render_coordinates(0.0, 0.0, CoordinateVariant::CenterYUpPageRelative, None)
            .unwrap_err();
        assert_eq!(err, LayoutError::MissingPageHeight);
    }

    #[test]
    fn test_corner_variant_ignores_height() {
        assert_eq!(
            page_height_for(CoordinateVariant::CornerYDown, Some(297.0)).unwrap(),
            None
        );
    }

    #[test]
    fn test_round_trip() {
        for variant in [
            CoordinateVariant::CornerYDown,
            CoordinateVariant::CenterYUpPageRelative,
        ] {
            for raw_y in [0.0, 40.0, 123.25, 297.0] {
                let (x, y) = to_render_coordinates(7.0, raw_y, variant, Some(297.0)).unwrap();
                let (bx, by) = from_render_coordinates(x, y, variant, Some(297.0)).unwrap();
                assert_eq!(bx, 7.0);
                assert_eq!(by, raw_y);
            }
        }
    }

    #[test]
    fn test_render_position_uses_centre_row() {
        let row = lookup(ProjectionConvention::FirstAngle, ViewDirection::NegY).unwrap();
        let bbox = BoundingBox::new(40.0, 20.0, 10.0);
        let params = LayoutParameters::new(0.0, 0.0, 5.0, 1.0).with_page_height(200.0);

        let corner = render_position(row, &bbox, &params, CoordinateVariant::CornerYDown).unwrap();
        assert_relative_eq!(corner.0, 25.0);
        assert_relative_eq!(corner.1, 35.0);

        let centre =
            render_position(row, &bbox, &params, CoordinateVariant::CenterYUpPageRelative).unwrap();
        assert_relative_eq!(centre.0, 45.0);
        assert_relative_eq!(centre.1, 200.0 - 30.0);
    }
}
