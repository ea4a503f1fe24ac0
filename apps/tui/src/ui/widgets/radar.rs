use crate::ui::theme::{system_color, GRID, MUTED, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::Frame;
use storage_compare::projection::{Point, RadarGeometry, DEFAULT_SIZE};
use storage_compare::{Category, System};

const DOT_RADIUS: f64 = 4.0;

/// Largest rect inside `area` that shows the chart square, given cells about
/// twice as tall as wide
pub fn chart_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Chart coordinates grow downwards, canvas coordinates upwards
fn flip(point: Point) -> (f64, f64) {
    (point.x, DEFAULT_SIZE - point.y)
}

fn outline(points: &[Point], color: Color) -> Vec<CanvasLine> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(from, to)| {
            let (x1, y1) = flip(*from);
            let (x2, y2) = flip(*to);
            CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color,
            }
        })
        .collect()
}

/// Radar of every system in `systems` over the four categories
pub fn render_radar_chart(f: &mut Frame<'_>, area: Rect, systems: &[&System]) {
    let square = chart_rect(area);
    if square.width < 8 || square.height < 4 {
        return;
    }

    let geometry = RadarGeometry::default();
    let axes = Category::ALL.len();
    let rings = geometry.grid_rings(axes);
    let spokes = geometry.axis_lines(axes);
    let anchors = geometry.label_anchors(axes);
    let polygons: Vec<(Color, Vec<Point>)> = systems
        .iter()
        .map(|system| {
            let scores = system.scores().map(f64::from);
            (system_color(system), geometry.project_scores(&scores))
        })
        .collect();

    // Chart units covered by one terminal column
    let unit = DEFAULT_SIZE / f64::from(square.width);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, DEFAULT_SIZE])
        .y_bounds([0.0, DEFAULT_SIZE])
        .paint(|ctx| {
            for ring in &rings {
                for line in outline(ring, GRID) {
                    ctx.draw(&line);
                }
            }
            for spoke in &spokes {
                let (x1, y1) = flip(spoke.from);
                let (x2, y2) = flip(spoke.to);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: MUTED,
                });
            }

            ctx.layer();
            for (color, points) in &polygons {
                for line in outline(points, *color) {
                    ctx.draw(&line);
                }
                for point in points {
                    let (x, y) = flip(*point);
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: DOT_RADIUS,
                        color: *color,
                    });
                }
            }

            for (anchor, category) in anchors.iter().zip(Category::ALL) {
                let label = category.short_label();
                #[allow(clippy::cast_precision_loss)]
                let half_width = label.len() as f64 * unit / 2.0;
                let (x, y) = flip(*anchor);
                ctx.print(
                    x - half_width,
                    y,
                    Span::styled(label, Style::default().fg(TEXT)),
                );
            }
        });

    f.render_widget(canvas, square);
}
