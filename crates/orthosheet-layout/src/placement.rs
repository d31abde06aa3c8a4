//! Six-view placement.
//!
//! Every view goes through [`place_with_row`]: look up the row, evaluate its
//! coefficients, convert to the back end's coordinates and fill in the
//! fixed drawing attributes. The symbol layout in [`crate::symbol`] calls
//! the same function with its own table.

use crate::coords::{page_height_for, raw_position, render_position};
use crate::error::Result;
use crate::log::debug;
use crate::table::{self, ViewCoefficientRow};
use crate::types::{
    BoundingBox, CoordinateVariant, LayoutParameters, ProjectionConvention, Rect, Vec3,
    ViewDirection, ViewPlacementRecord, LINE_WIDTH_THICK, LINE_WIDTH_THIN,
};

/// Build the record for one view from its coefficient row.
///
/// `params` must already be validated.
pub(crate) fn place_with_row(
    row: &ViewCoefficientRow,
    bbox: &BoundingBox,
    params: &LayoutParameters,
    variant: CoordinateVariant,
    hidden_lines_visible: bool,
    label: String,
) -> Result<ViewPlacementRecord> {
    let (x, y) = render_position(row, bbox, params, variant)?;
    let rotation_degrees = row.rotation(variant);

    debug!(
        direction = %row.direction,
        x,
        y,
        rotation_degrees,
        scale = params.scale,
        "placed view"
    );

    Ok(ViewPlacementRecord {
        direction: row.direction,
        label,
        x,
        y,
        rotation_degrees,
        scale: params.scale,
        hidden_lines_visible,
        line_width_thick: LINE_WIDTH_THICK,
        line_width_thin: LINE_WIDTH_THIN,
        mirrored_source: row.mirrored_source(),
    })
}

fn view_label(title: Option<&str>, direction: ViewDirection) -> String {
    match title {
        Some(title) => format!("{title} {}", direction.label()),
        None => direction.label().to_string(),
    }
}

/// A six-view layout request for one object.
///
/// # Example
///
/// ```
/// use orthosheet_layout::{BoundingBox, LayoutParameters, ProjectionConvention, ViewLayout};
///
/// let views = ViewLayout::new(
///     BoundingBox::cube(100.0),
///     LayoutParameters::new(100.0, 40.0, 5.0, 0.5),
/// )
/// .title("C2")
/// .convention(ProjectionConvention::ThirdAngle)
/// .place()
/// .unwrap();
///
/// assert_eq!(views.len(), 6);
/// assert_eq!(views[0].label, "C2 from negative z");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLayout {
    bbox: BoundingBox,
    params: LayoutParameters,
    convention: ProjectionConvention,
    variant: CoordinateVariant,
    title: Option<String>,
}

impl ViewLayout {
    /// First-angle, corner-positioned layout of `bbox`.
    pub fn new(bbox: BoundingBox, params: LayoutParameters) -> Self {
        Self {
            bbox,
            params,
            convention: ProjectionConvention::default(),
            variant: CoordinateVariant::default(),
            title: None,
        }
    }

    /// Set the projection convention.
    pub fn convention(mut self, convention: ProjectionConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Set the coordinate variant.
    pub fn variant(mut self, variant: CoordinateVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Prefix view labels with a part title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn validate(&self) -> Result<()> {
        self.bbox.validate()?;
        self.params.validate()?;
        page_height_for(self.variant, self.params.page_height)?;
        Ok(())
    }

    /// Place a single view.
    pub fn place_one(&self, direction: ViewDirection) -> Result<ViewPlacementRecord> {
        self.validate()?;
        let row = table::lookup(self.convention, direction)?;
        place_with_row(
            row,
            &self.bbox,
            &self.params,
            self.variant,
            true,
            view_label(self.title.as_deref(), direction),
        )
    }

    /// Place all six views in [`ViewDirection::PLACEMENT_ORDER`].
    pub fn place(&self) -> Result<Vec<ViewPlacementRecord>> {
        self.validate()?;
        debug!(
            convention = %self.convention,
            variant = ?self.variant,
            title = ?self.title,
            "laying out six views"
        );
        ViewDirection::PLACEMENT_ORDER
            .iter()
            .map(|&direction| {
                let row = table::lookup(self.convention, direction)?;
                place_with_row(
                    row,
                    &self.bbox,
                    &self.params,
                    self.variant,
                    true,
                    view_label(self.title.as_deref(), direction),
                )
            })
            .collect()
    }

    /// Sheet rectangles of the six views, Y-down, in placement order.
    ///
    /// These are independent of the coordinate variant.
    pub fn footprints(&self) -> Result<Vec<(ViewDirection, Rect)>> {
        self.bbox.validate()?;
        self.params.validate()?;
        table::rows(self.convention)
            .iter()
            .map(|row| {
                let (x, y) = raw_position(row, &self.bbox, &self.params, CoordinateVariant::CornerYDown);
                Ok((
                    row.direction,
                    row.footprint.rect(x, y, &self.bbox, self.params.scale),
                ))
            })
            .collect()
    }

    /// Smallest rectangle containing every view, Y-down.
    pub fn bounds(&self) -> Result<Rect> {
        let footprints = self.footprints()?;
        let mut rects = footprints.into_iter().map(|(_, r)| r);
        // PLACEMENT_ORDER is never empty
        let first = rects.next().unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        Ok(rects.fold(first, |acc, r| acc.union(&r)))
    }
}

/// Place the six standard views of `bbox`.
pub fn place_views(
    bbox: &BoundingBox,
    params: &LayoutParameters,
    convention: ProjectionConvention,
    variant: CoordinateVariant,
) -> Result<Vec<ViewPlacementRecord>> {
    ViewLayout::new(*bbox, *params)
        .convention(convention)
        .variant(variant)
        .place()
}

/// Place one of the six standard views.
pub fn place_view(
    bbox: &BoundingBox,
    params: &LayoutParameters,
    convention: ProjectionConvention,
    variant: CoordinateVariant,
    direction: ViewDirection,
) -> Result<ViewPlacementRecord> {
    ViewLayout::new(*bbox, *params)
        .convention(convention)
        .variant(variant)
        .place_one(direction)
}

/// Place the view looking along a raw vector.
///
/// Fails with `UnknownDirection` unless `v` is one of the six axis unit
/// vectors.
pub fn place_view_along(
    bbox: &BoundingBox,
    params: &LayoutParameters,
    convention: ProjectionConvention,
    variant: CoordinateVariant,
    v: Vec3,
) -> Result<ViewPlacementRecord> {
    let direction = ViewDirection::from_vector(v)?;
    place_view(bbox, params, convention, variant, direction)
}

/// Sheet rectangles of the six views, Y-down.
pub fn footprints(
    bbox: &BoundingBox,
    params: &LayoutParameters,
    convention: ProjectionConvention,
) -> Result<Vec<(ViewDirection, Rect)>> {
    ViewLayout::new(*bbox, *params)
        .convention(convention)
        .footprints()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use approx::assert_relative_eq;

    fn params() -> LayoutParameters {
        LayoutParameters::new(100.0, 40.0, 5.0, 0.5)
    }

    fn record<'a>(records: &'a [ViewPlacementRecord], dir: ViewDirection) -> &'a ViewPlacementRecord {
        records.iter().find(|r| r.direction == dir).unwrap()
    }

    #[test]
    fn test_first_angle_cube_positions() {
        let views = place_views(
            &BoundingBox::cube(100.0),
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CornerYDown,
        )
        .unwrap();

        let expected = [
            (ViewDirection::NegZ, 155.0, 40.0, 180.0),
            (ViewDirection::NegX, 100.0, 145.0, 270.0),
            (ViewDirection::NegY, 155.0, 145.0, 90.0),
            (ViewDirection::PosX, 260.0, 145.0, 90.0),
            (ViewDirection::PosY, 315.0, 145.0, 270.0),
            (ViewDirection::PosZ, 155.0, 200.0, 0.0),
        ];
        for (dir, x, y, rot) in expected {
            let r = record(&views, dir);
            assert_relative_eq!(r.x, x);
            assert_relative_eq!(r.y, y);
            assert_eq!(r.rotation_degrees, rot, "rotation of {dir}");
        }
    }

    #[test]
    fn test_attributes_fixed_for_main_views() {
        let views = place_views(
            &BoundingBox::new(30.0, 20.0, 10.0),
            &params(),
            ProjectionConvention::ThirdAngle,
            CoordinateVariant::CornerYDown,
        )
        .unwrap();
        for v in &views {
            assert!(v.hidden_lines_visible);
            assert_eq!(v.line_width_thick, 0.7);
            assert_eq!(v.line_width_thin, 0.35);
            assert_eq!(v.scale, 0.5);
            assert_eq!(v.mirrored_source, v.direction.is_x_axis());
        }
    }

    #[test]
    fn test_order_is_stable() {
        let views = ViewLayout::new(BoundingBox::cube(10.0), params())
            .place()
            .unwrap();
        let dirs: Vec<_> = views.iter().map(|v| v.direction).collect();
        assert_eq!(dirs, ViewDirection::PLACEMENT_ORDER);
    }

    #[test]
    fn test_labels() {
        let views = ViewLayout::new(BoundingBox::cube(10.0), params())
            .title("S1")
            .place()
            .unwrap();
        assert_eq!(views[1].label, "S1 from negative x");

        let bare = place_view(
            &BoundingBox::cube(10.0),
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CornerYDown,
            ViewDirection::PosZ,
        )
        .unwrap();
        assert_eq!(bare.label, "from positive z");
    }

    #[test]
    fn test_degenerate_box_collapses_to_anchors() {
        let views = place_views(
            &BoundingBox::cube(0.0),
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CornerYDown,
        )
        .unwrap();
        let neg_y = record(&views, ViewDirection::NegY);
        assert_relative_eq!(neg_y.x, 105.0);
        assert_relative_eq!(neg_y.y, 45.0);
        let rects = footprints(&BoundingBox::cube(0.0), &params(), ProjectionConvention::FirstAngle)
            .unwrap();
        for (_, r) in rects {
            assert_eq!(r.width(), 0.0);
            assert_eq!(r.height(), 0.0);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        for p in [
            LayoutParameters::new(0.0, 0.0, 0.0, 1.0),
            LayoutParameters::new(0.0, 0.0, -5.0, 1.0),
            LayoutParameters::new(0.0, 0.0, 5.0, 0.0),
        ] {
            let err = place_views(
                &BoundingBox::cube(10.0),
                &p,
                ProjectionConvention::FirstAngle,
                CoordinateVariant::CornerYDown,
            )
            .unwrap_err();
            assert!(matches!(err, LayoutError::InvalidParameters(_)));
        }
    }

    #[test]
    fn test_missing_page_height() {
        let err = place_views(
            &BoundingBox::cube(10.0),
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CenterYUpPageRelative,
        )
        .unwrap_err();
        assert_eq!(err, LayoutError::MissingPageHeight);
    }

    #[test]
    fn test_page_relative_positions_are_centres() {
        let bbox = BoundingBox::new(60.0, 40.0, 20.0);
        let p = params().with_page_height(297.0);
        let layout = ViewLayout::new(bbox, p).variant(CoordinateVariant::CenterYUpPageRelative);
        let views = layout.place().unwrap();
        let rects = layout.footprints().unwrap();
        for (view, (dir, rect)) in views.iter().zip(&rects) {
            assert_eq!(view.direction, *dir);
            let (cx, cy) = rect.center();
            assert_relative_eq!(view.x, cx, epsilon = 1e-9);
            assert_relative_eq!(view.y, 297.0 - cy, epsilon = 1e-9);
            assert_eq!(view.rotation_degrees, 0.0);
        }
    }

    #[test]
    fn test_place_view_along_vector() {
        let bbox = BoundingBox::cube(10.0);
        let r = place_view_along(
            &bbox,
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CornerYDown,
            Vec3::new(0.0, -1.0, 0.0),
        )
        .unwrap();
        assert_eq!(r.direction, ViewDirection::NegY);

        let err = place_view_along(
            &bbox,
            &params(),
            ProjectionConvention::FirstAngle,
            CoordinateVariant::CornerYDown,
            Vec3::zeros(),
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::UnknownDirection(_)));
    }

    #[test]
    fn test_bounds_span_group() {
        let bbox = BoundingBox::new(30.0, 20.0, 10.0);
        let p = LayoutParameters::new(0.0, 0.0, 5.0, 1.0);
        let b = ViewLayout::new(bbox, p).bounds().unwrap();
        // 2d + 2w + 3g by 2d + h + 2g
        assert_relative_eq!(b.width(), 40.0 + 60.0 + 15.0);
        assert_relative_eq!(b.height(), 40.0 + 10.0 + 10.0);
        assert_relative_eq!(b.min_x, 0.0);
        assert_relative_eq!(b.min_y, 0.0);
    }
}
