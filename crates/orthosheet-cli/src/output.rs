//! Rendering placement results for the terminal.

use std::fmt::Write;

use anyhow::Result;
use orthosheet_layout::SheetPlan;

use crate::Format;

/// Render a plan in the requested format.
pub fn render(plan: &SheetPlan, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(plan)?),
        Format::Table => Ok(render_table(plan)),
    }
}

fn render_table(plan: &SheetPlan) -> String {
    let mut out = String::new();
    if let Some(h) = plan.page_height {
        let _ = writeln!(out, "page height: {h}");
    }
    for group in &plan.groups {
        let _ = writeln!(out, "\n{} ({} views)", group.title, group.views.len());
        let _ = writeln!(
            out,
            "  {:<4} {:>10} {:>10} {:>6} {:>6} {:>7} {:>6}",
            "dir", "x", "y", "rot", "scale", "hidden", "mirror"
        );
        for v in &group.views {
            let _ = writeln!(
                out,
                "  {:<4} {:>10.3} {:>10.3} {:>6} {:>6} {:>7} {:>6}",
                v.direction.to_string(),
                v.x,
                v.y,
                v.rotation_degrees,
                v.scale,
                if v.hidden_lines_visible { "yes" } else { "no" },
                if v.mirrored_source { "yes" } else { "no" },
            );
        }
    }
    out
}
