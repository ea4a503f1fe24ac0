//! Standalone SVG rendering of the radar chart.

use crate::dataset::Dataset;
use crate::domain::Category;
use crate::projection::{format_coord, path_data, points_attr, RadarGeometry, DEFAULT_SIZE};
use std::fmt::Write;

const GRID_STROKE: &str = "rgba(255,255,255,0.07)";
const AXIS_STROKE: &str = "rgba(255,255,255,0.1)";
const LABEL_FILL: &str = "rgba(255,255,255,0.85)";
const DOT_RADIUS: u32 = 4;

/// Renders every selected system onto a 280x280 radar chart. Unknown names
/// are skipped.
pub fn render_radar_svg(dataset: &Dataset, selected: &[String]) -> String {
    render_radar_svg_with(dataset, selected, &RadarGeometry::default(), DEFAULT_SIZE)
}

pub fn render_radar_svg_with(
    dataset: &Dataset,
    selected: &[String],
    geometry: &RadarGeometry,
    size: f64,
) -> String {
    let axes = Category::ALL.len();
    let size = format_coord(size);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );

    for ring in geometry.grid_rings(axes) {
        let _ = writeln!(
            svg,
            r#"  <polygon points="{}" fill="none" stroke="{GRID_STROKE}" stroke-width="1"/>"#,
            points_attr(&ring)
        );
    }

    let anchors = geometry.label_anchors(axes);
    for ((line, anchor), category) in geometry
        .axis_lines(axes)
        .iter()
        .zip(&anchors)
        .zip(Category::ALL)
    {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{AXIS_STROKE}" stroke-width="1"/>"#,
            format_coord(line.from.x),
            format_coord(line.from.y),
            format_coord(line.to.x),
            format_coord(line.to.y)
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="{LABEL_FILL}" font-size="11" font-family="'IBM Plex Mono', monospace">{}</text>"#,
            format_coord(anchor.x),
            format_coord(anchor.y),
            escape_xml(category.short_label())
        );
    }

    let plotted: Vec<_> = selected
        .iter()
        .filter_map(|name| dataset.get(name))
        .map(|system| {
            let scores = system.scores().map(f64::from);
            (system, geometry.project_scores(&scores))
        })
        .collect();

    for (system, points) in &plotted {
        let color = escape_xml(&system.color);
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="{color}22" stroke="{color}" stroke-width="2" stroke-linejoin="round"><title>{}</title></path>"#,
            path_data(points),
            escape_xml(&system.name)
        );
    }

    for (system, points) in &plotted {
        let color = escape_xml(&system.color);
        for point in points {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{DOT_RADIUS}" fill="{color}"/>"#,
                format_coord(point.x),
                format_coord(point.y)
            );
        }
    }

    svg.push_str("</svg>\n");
    svg
}

pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
