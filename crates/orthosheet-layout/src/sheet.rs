//! Whole-sheet requests: a convention symbol plus any number of parts.

use serde::{Deserialize, Serialize};

use crate::assemble::{assemble, SheetPlan};
use crate::error::{LayoutError, Result};
use crate::log::debug;
use crate::placement::ViewLayout;
use crate::symbol::{check_positive, place_symbol_views};
use crate::types::{BoundingBox, CoordinateVariant, LayoutParameters, ProjectionConvention};

/// ISO 216 A-series sheet sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// 841 x 1189 mm.
    A0,
    /// 594 x 841 mm.
    A1,
    /// 420 x 594 mm.
    A2,
    /// 297 x 420 mm.
    #[default]
    A3,
    /// 210 x 297 mm.
    A4,
}

impl PaperSize {
    /// Short and long side in millimetres.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PaperSize::A0 => (841.0, 1189.0),
            PaperSize::A1 => (594.0, 841.0),
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
        }
    }

    /// Page width and height for `orientation`.
    pub fn page_size(&self, orientation: Orientation) -> (f64, f64) {
        let (short, long) = self.dimensions();
        match orientation {
            Orientation::Landscape => (long, short),
            Orientation::Portrait => (short, long),
        }
    }

    /// Page height for `orientation`.
    pub fn page_height(&self, orientation: Orientation) -> f64 {
        self.page_size(orientation).1
    }
}

/// Sheet orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Long side horizontal.
    #[default]
    Landscape,
    /// Long side vertical.
    Portrait,
}

/// The projection symbol's size and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRequest {
    /// Large diameter of the cone (also its length).
    pub large_diameter: f64,
    /// Small diameter of the cone.
    pub small_diameter: f64,
    /// Spacing unit; the views are three units apart.
    pub spacing_unit: f64,
    /// Sheet X of the symbol.
    pub x: f64,
    /// Sheet Y of the symbol.
    pub y: f64,
}

impl SymbolRequest {
    /// Check the cone dimensions, spacing unit and position.
    pub fn validate(&self) -> Result<()> {
        check_positive("symbol large diameter", self.large_diameter)?;
        check_positive("symbol small diameter", self.small_diameter)?;
        check_positive("symbol spacing unit", self.spacing_unit)?;
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(LayoutError::InvalidParameters(
                "symbol position must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// One part to draw on the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRequest {
    /// Part number or name; prefixes the view labels.
    pub title: String,
    /// Measured extent of the part.
    pub bounds: BoundingBox,
    /// Sheet X of the view group.
    pub x: f64,
    /// Sheet Y of the view group.
    pub y: f64,
    /// Drawing scale (e.g. 0.2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Inverse drawing scale (e.g. 5 for 1:5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_scale: Option<f64>,
    /// Spacing override for this part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
}

impl PartRequest {
    /// Effective drawing scale.
    ///
    /// At most one of `scale` and `inverse_scale` may be given; with neither
    /// the part is drawn full size.
    pub fn scale(&self) -> Result<f64> {
        match (self.scale, self.inverse_scale) {
            (Some(_), Some(_)) => Err(LayoutError::InvalidParameters(format!(
                "part {}: set either scale or inverse_scale, not both",
                self.title
            ))),
            (Some(s), None) => Ok(s),
            (None, Some(inv)) if inv.is_finite() && inv > 0.0 => Ok(1.0 / inv),
            (None, Some(inv)) => Err(LayoutError::InvalidParameters(format!(
                "part {}: inverse_scale must be positive, got {inv}",
                self.title
            ))),
            (None, None) => Ok(1.0),
        }
    }
}

fn default_spacing() -> f64 {
    5.0
}

/// A complete drawing sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRequest {
    /// Sheet size.
    #[serde(default)]
    pub paper: PaperSize,
    /// Sheet orientation.
    #[serde(default)]
    pub orientation: Orientation,
    /// Projection convention for every part and the symbol.
    #[serde(default)]
    pub convention: ProjectionConvention,
    /// Coordinate convention of the consuming back end.
    #[serde(default)]
    pub variant: CoordinateVariant,
    /// Default spacing between views.
    #[serde(default = "default_spacing")]
    pub spacing: f64,
    /// Page height override; defaults to the paper's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_height: Option<f64>,
    /// Convention symbol, if drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolRequest>,
    /// Parts to lay out.
    #[serde(default)]
    pub parts: Vec<PartRequest>,
}

impl Default for SheetRequest {
    fn default() -> Self {
        Self {
            paper: PaperSize::default(),
            orientation: Orientation::default(),
            convention: ProjectionConvention::default(),
            variant: CoordinateVariant::default(),
            spacing: default_spacing(),
            page_height: None,
            symbol: None,
            parts: Vec::new(),
        }
    }
}

impl SheetRequest {
    /// Page height the layout is computed against.
    pub fn page_height(&self) -> f64 {
        self.page_height
            .unwrap_or_else(|| self.paper.page_height(self.orientation))
    }

    /// Name of the symbol group on the sheet.
    pub fn symbol_title(&self) -> String {
        format!("{} projection symbol", self.convention)
    }

    /// Validate the request without laying anything out.
    pub fn validate(&self) -> Result<()> {
        if let Some(h) = self.page_height {
            check_positive("page_height", h)?;
        }
        if let Some(symbol) = &self.symbol {
            symbol.validate()?;
        }
        let mut titles = std::collections::HashSet::new();
        for part in &self.parts {
            if !titles.insert(part.title.as_str()) {
                return Err(LayoutError::InvalidParameters(format!(
                    "duplicate part title {}",
                    part.title
                )));
            }
            self.part_params(part)?.validate()?;
            part.bounds.validate()?;
        }
        Ok(())
    }

    fn part_params(&self, part: &PartRequest) -> Result<LayoutParameters> {
        Ok(LayoutParameters {
            origin_x: part.x,
            origin_y: part.y,
            spacing: part.spacing.unwrap_or(self.spacing),
            scale: part.scale()?,
            page_height: Some(self.page_height()),
        })
    }

    /// Lay out the symbol and every part, in that order.
    ///
    /// Each group is assembled as a unit; any failure aborts the whole sheet.
    pub fn lay_out(&self) -> Result<SheetPlan> {
        self.validate()?;
        let mut plan = SheetPlan {
            page_height: Some(self.page_height()),
            ..SheetPlan::default()
        };

        if let Some(symbol) = &self.symbol {
            let params = LayoutParameters::new(symbol.x, symbol.y, self.spacing, 1.0)
                .with_page_height(self.page_height());
            let layout = place_symbol_views(
                symbol.large_diameter,
                symbol.small_diameter,
                symbol.spacing_unit,
                &params,
                self.convention,
                self.variant,
            )?;
            assemble(&mut plan, &self.symbol_title(), &layout.views)
                .unwrap_or_else(|never| match never {});
        }

        for part in &self.parts {
            debug!(title = %part.title, "laying out part");
            let views = ViewLayout::new(part.bounds, self.part_params(part)?)
                .convention(self.convention)
                .variant(self.variant)
                .title(part.title.clone())
                .place()?;
            assemble(&mut plan, &part.title, &views).unwrap_or_else(|never| match never {});
        }

        Ok(plan)
    }
}
