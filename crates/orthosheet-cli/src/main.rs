//! orthosheet CLI - orthographic drawing sheet layout
//!
//! Computes where the views of a part, or of a whole sheet of parts, go
//! and prints the placement records for a drawing front end to apply.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use orthosheet_layout::{
    assemble, place_symbol_views, BoundingBox, CoordinateVariant, LayoutParameters,
    ProjectionConvention, SheetPlan, SheetRequest, ViewLayout, ViewPlacementRecord,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Parser)]
#[command(name = "orthosheet")]
#[command(about = "Lay out first- and third-angle orthographic views", long_about = None)]
struct Cli {
    /// Log every placed view to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ConventionArg {
    First,
    Third,
}

impl From<ConventionArg> for ProjectionConvention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::First => ProjectionConvention::FirstAngle,
            ConventionArg::Third => ProjectionConvention::ThirdAngle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    /// View corners, Y down from the top edge
    Corner,
    /// View centres, Y up from the bottom edge
    Center,
}

impl From<VariantArg> for CoordinateVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Corner => CoordinateVariant::CornerYDown,
            VariantArg::Center => CoordinateVariant::CenterYUpPageRelative,
        }
    }
}

/// Where the group goes and which conventions to use.
#[derive(Debug, Args)]
struct Placement {
    /// Sheet X of the group anchor
    #[arg(long, default_value_t = 0.0)]
    x: f64,
    /// Sheet Y of the group anchor
    #[arg(long, default_value_t = 0.0)]
    y: f64,
    /// Projection convention
    #[arg(long, value_enum, default_value_t = ConventionArg::First)]
    convention: ConventionArg,
    /// Coordinate convention of the drawing back end
    #[arg(long, value_enum, default_value_t = VariantArg::Corner)]
    variant: VariantArg,
    /// Page height (required with --variant center)
    #[arg(long)]
    page_height: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a whole sheet described in a TOML file
    Layout {
        /// Sheet description (.toml)
        file: PathBuf,
    },
    /// Lay out the six views of one part
    Views {
        /// Extent along X
        #[arg(long)]
        width: f64,
        /// Extent along Y
        #[arg(long)]
        depth: f64,
        /// Extent along Z
        #[arg(long)]
        height: f64,
        /// Gap between views
        #[arg(long, default_value_t = 5.0)]
        spacing: f64,
        /// Drawing scale
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Part title used in view labels
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        placement: Placement,
    },
    /// Lay out the projection-convention symbol
    Symbol {
        /// Large diameter (and length) of the cone
        #[arg(long, default_value_t = 15.0)]
        large_diameter: f64,
        /// Small diameter of the cone
        #[arg(long, default_value_t = 7.5)]
        small_diameter: f64,
        /// Spacing unit; the views are three units apart
        #[arg(long, default_value_t = 1.0)]
        spacing_unit: f64,
        #[command(flatten)]
        placement: Placement,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let plan = run(cli.command)?;
    println!("{}", output::render(&plan, cli.format)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<SheetPlan> {
    match command {
        Commands::Layout { file } => {
            let request = load_sheet(&file)?;
            tracing::info!(
                file = %file.display(),
                parts = request.parts.len(),
                convention = %request.convention,
                "laying out sheet"
            );
            request
                .lay_out()
                .with_context(|| format!("laying out {}", file.display()))
        }
        Commands::Views {
            width,
            depth,
            height,
            spacing,
            scale,
            title,
            placement,
        } => {
            let params = layout_parameters(&placement, spacing, scale);
            let mut layout = ViewLayout::new(BoundingBox::new(width, depth, height), params)
                .convention(placement.convention.into())
                .variant(placement.variant.into());
            if let Some(title) = &title {
                layout = layout.title(title.clone());
            }
            let views = layout.place().context("placing views")?;
            Ok(single_group(
                title.unwrap_or_else(|| "views".to_string()),
                placement.page_height,
                views,
            ))
        }
        Commands::Symbol {
            large_diameter,
            small_diameter,
            spacing_unit,
            placement,
        } => {
            let params = layout_parameters(&placement, spacing_unit, 1.0);
            let convention: ProjectionConvention = placement.convention.into();
            let symbol = place_symbol_views(
                large_diameter,
                small_diameter,
                spacing_unit,
                &params,
                convention,
                placement.variant.into(),
            )
            .context("placing projection symbol")?;
            Ok(single_group(
                format!("{convention} projection symbol"),
                placement.page_height,
                symbol.views,
            ))
        }
    }
}

fn layout_parameters(placement: &Placement, spacing: f64, scale: f64) -> LayoutParameters {
    LayoutParameters {
        origin_x: placement.x,
        origin_y: placement.y,
        spacing,
        scale,
        page_height: placement.page_height,
    }
}

fn single_group(
    title: String,
    page_height: Option<f64>,
    views: Vec<ViewPlacementRecord>,
) -> SheetPlan {
    let mut plan = SheetPlan {
        page_height,
        ..SheetPlan::default()
    };
    assemble(&mut plan, &title, &views).unwrap_or_else(|never| match never {});
    plan
}

fn load_sheet(path: &Path) -> Result<SheetRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_sheet(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse_sheet(text: &str) -> Result<SheetRequest> {
    let request: SheetRequest = toml::from_str(text)?;
    request.validate()?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthosheet_layout::ViewDirection;

    const TWO_PARTS: &str = include_str!("../sheets/two_parts.toml");

    #[test]
    fn test_sample_sheet_parses() {
        let request = parse_sheet(TWO_PARTS).unwrap();
        assert_eq!(request.parts.len(), 2);
        assert!(request.symbol.is_some());
        let plan = request.lay_out().unwrap();
        assert_eq!(plan.num_views(), 14);
    }

    #[test]
    fn test_views_command() {
        let cli = Cli::try_parse_from([
            "orthosheet",
            "views",
            "--width",
            "100",
            "--depth",
            "100",
            "--height",
            "100",
            "--scale",
            "0.5",
            "--x",
            "100",
            "--y",
            "40",
        ])
        .unwrap();
        let plan = run(cli.command).unwrap();
        let first = plan.views().next().unwrap();
        assert_eq!(first.direction, ViewDirection::NegZ);
        assert_eq!(first.x, 155.0);
        assert_eq!(first.y, 40.0);
    }

    #[test]
    fn test_center_variant_needs_page_height() {
        let cli = Cli::try_parse_from([
            "orthosheet",
            "views",
            "--width",
            "1",
            "--depth",
            "1",
            "--height",
            "1",
            "--variant",
            "center",
        ])
        .unwrap();
        let err = run(cli.command).unwrap_err();
        assert!(format!("{err:#}").contains("page height"));
    }

    #[test]
    fn test_symbol_command_third_angle() {
        let cli = Cli::try_parse_from([
            "orthosheet",
            "--format",
            "table",
            "symbol",
            "--convention",
            "third",
        ])
        .unwrap();
        assert_eq!(cli.format, Format::Table);
        let plan = run(cli.command).unwrap();
        assert_eq!(plan.groups[0].title, "third angle projection symbol");
        let dirs: Vec<_> = plan.views().map(|v| v.direction).collect();
        assert_eq!(dirs, [ViewDirection::NegY, ViewDirection::PosX]);
    }

    #[test]
    fn test_invalid_sheet_rejected() {
        let err = parse_sheet(
            r#"
            [[parts]]
            title = "P"
            bounds = { width = 1.0, depth = 1.0, height = 1.0 }
            x = 0.0
            y = 0.0
            spacing = -2.0
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("spacing"));
    }

    #[test]
    fn test_invalid_symbol_rejected_on_load() {
        let err = parse_sheet(
            r#"
            page_height = 297.0

            [symbol]
            large_diameter = -1.0
            small_diameter = 7.5
            spacing_unit = 1.0
            x = 190.0
            y = 280.0
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("large diameter"));
    }
}
