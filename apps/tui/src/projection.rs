//! Radar chart geometry.
//!
//! Scores (0-100) are projected onto the spokes of a regular N-gon. Angle 0
//! points up and angles grow clockwise in screen coordinates (y grows
//! downward). Inputs outside 0-100 are scaled linearly without clamping.

use std::fmt::Write;

/// Point in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

pub const DEFAULT_SIZE: f64 = 280.0;
pub const DEFAULT_RADIUS: f64 = 100.0;
pub const DEFAULT_LEVELS: u32 = 5;
pub const DEFAULT_LABEL_OFFSET: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    pub radius: f64,
    pub levels: u32,
    pub label_offset: f64,
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self {
            center: Point::new(DEFAULT_SIZE / 2.0, DEFAULT_SIZE / 2.0),
            radius: DEFAULT_RADIUS,
            levels: DEFAULT_LEVELS,
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }
}

impl RadarGeometry {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            levels: DEFAULT_LEVELS,
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }

    pub const fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    pub const fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    /// Converts a polar coordinate to chart coordinates, with angle 0 pointing
    /// up.
    pub fn polar_to_cartesian(&self, angle_degrees: f64, radius: f64) -> Point {
        let radians = (angle_degrees - 90.0).to_radians();
        Point::new(
            radians.cos().mul_add(radius, self.center.x),
            radians.sin().mul_add(radius, self.center.y),
        )
    }

    /// Projects one score per axis. Axis count is the number of scores.
    pub fn project_scores(&self, scores: &[f64]) -> Vec<Point> {
        let axes = scores.len();
        scores
            .iter()
            .enumerate()
            .map(|(index, score)| {
                self.polar_to_cartesian(axis_angle(index, axes), score / 100.0 * self.radius)
            })
            .collect()
    }

    /// Concentric grid polygons, innermost first. The last ring sits on the
    /// outer radius.
    pub fn grid_rings(&self, axes: usize) -> Vec<Vec<Point>> {
        if axes == 0 || self.levels == 0 {
            return Vec::new();
        }

        (1..=self.levels)
            .map(|level| {
                let ring_radius = self.radius * f64::from(level) / f64::from(self.levels);
                self.ring(axes, ring_radius)
            })
            .collect()
    }

    /// Spokes from the center to the outer ring.
    pub fn axis_lines(&self, axes: usize) -> Vec<Segment> {
        (0..axes)
            .map(|index| Segment {
                from: self.center,
                to: self.polar_to_cartesian(axis_angle(index, axes), self.radius),
            })
            .collect()
    }

    /// Anchor points for axis labels, just outside the outer ring.
    pub fn label_anchors(&self, axes: usize) -> Vec<Point> {
        (0..axes)
            .map(|index| {
                self.polar_to_cartesian(axis_angle(index, axes), self.radius + self.label_offset)
            })
            .collect()
    }

    fn ring(&self, axes: usize, radius: f64) -> Vec<Point> {
        (0..axes)
            .map(|index| self.polar_to_cartesian(axis_angle(index, axes), radius))
            .collect()
    }
}

/// Angle in degrees of spoke `index` out of `axes` evenly spaced spokes.
#[allow(clippy::cast_precision_loss)]
pub fn axis_angle(index: usize, axes: usize) -> f64 {
    if axes == 0 {
        return 0.0;
    }
    360.0 / axes as f64 * index as f64
}

/// Closed path data for a polygon: `M x,y L x,y ... Z`.
pub fn path_data(points: &[Point]) -> String {
    let mut path = String::new();
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { "M" } else { " L" };
        let _ = write!(path, "{command} {}", format_point(*point));
    }
    if !points.is_empty() {
        path.push_str(" Z");
    }
    path
}

/// Space separated `x,y` pairs for an SVG `points` attribute.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format_point(*point))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_point(point: Point) -> String {
    format!("{},{}", format_coord(point.x), format_coord(point.y))
}

/// Two decimals, trailing zeros trimmed, no negative zero.
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    fn assert_point(actual: Point, expected: Point) {
        assert_close(actual.x, expected.x);
        assert_close(actual.y, expected.y);
    }

    #[test]
    fn angle_zero_points_straight_up() {
        let geometry = RadarGeometry::default();
        for radius in [0.0, 1.0, 42.5, 100.0, 250.0] {
            let point = geometry.polar_to_cartesian(0.0, radius);
            assert_point(point, Point::new(140.0, 140.0 - radius));
        }
    }

    #[test]
    fn quarter_turns_land_on_compass_points() {
        let geometry = RadarGeometry::default();
        assert_point(geometry.polar_to_cartesian(90.0, 100.0), Point::new(240.0, 140.0));
        assert_point(geometry.polar_to_cartesian(180.0, 100.0), Point::new(140.0, 240.0));
        assert_point(geometry.polar_to_cartesian(270.0, 100.0), Point::new(40.0, 140.0));
    }

    #[test]
    fn polar_to_cartesian_is_deterministic() {
        let geometry = RadarGeometry::new(Point::new(-3.0, 7.5), 12.0);
        let first = geometry.polar_to_cartesian(123.4, 9.87);
        let second = geometry.polar_to_cartesian(123.4, 9.87);
        assert_eq!(first, second);
    }

    #[test]
    fn axis_angles_are_evenly_spaced() {
        assert_close(axis_angle(0, 4), 0.0);
        assert_close(axis_angle(1, 4), 90.0);
        assert_close(axis_angle(3, 4), 270.0);
        assert_close(axis_angle(2, 5), 144.0);
        assert_close(axis_angle(1, 0), 0.0);
    }

    #[test]
    fn zero_scores_collapse_to_center() {
        let geometry = RadarGeometry::default();
        for axes in 1..=8 {
            let points = geometry.project_scores(&vec![0.0; axes]);
            assert_eq!(points.len(), axes);
            for point in points {
                assert_point(point, geometry.center);
            }
        }
    }

    #[test]
    fn full_scores_sit_on_outer_ring() {
        let geometry = RadarGeometry::default();
        for axes in 1..=8 {
            let points = geometry.project_scores(&vec![100.0; axes]);
            let rings = geometry.grid_rings(axes);
            let outer = rings.last().expect("outer ring");
            for (point, ring_point) in points.iter().zip(outer) {
                assert_close(point.distance_to(geometry.center), geometry.radius);
                assert_point(*point, *ring_point);
            }
        }
    }

    #[test]
    fn half_scores_on_four_axes_form_a_square() {
        let geometry = RadarGeometry::default();
        let points = geometry.project_scores(&[50.0, 50.0, 50.0, 50.0]);
        assert_eq!(points.len(), 4);

        for point in &points {
            assert_close(point.distance_to(geometry.center), 50.0);
        }

        for index in 0..4 {
            let a = points[index];
            let b = points[(index + 1) % 4];
            let va = (a.x - geometry.center.x, a.y - geometry.center.y);
            let vb = (b.x - geometry.center.x, b.y - geometry.center.y);
            assert_close(va.0.mul_add(vb.0, va.1 * vb.1), 0.0);
        }
    }

    #[test]
    fn identical_scores_give_identical_polygons() {
        let geometry = RadarGeometry::default();
        let a = geometry.project_scores(&[85.0, 87.0, 74.0, 78.0]);
        let b = geometry.project_scores(&[85.0, 87.0, 74.0, 78.0]);
        assert_eq!(path_data(&a), path_data(&b));
    }

    #[test]
    fn out_of_range_scores_are_not_clamped() {
        let geometry = RadarGeometry::default();
        let points = geometry.project_scores(&[150.0, -20.0]);
        assert_point(points[0], Point::new(140.0, -10.0));
        assert_point(points[1], Point::new(140.0, 120.0));
    }

    #[test]
    fn grid_rings_are_evenly_spaced_up_to_outer_radius() {
        let geometry = RadarGeometry::default();
        let rings = geometry.grid_rings(4);
        assert_eq!(rings.len(), 5);
        for (index, ring) in rings.iter().enumerate() {
            assert_eq!(ring.len(), 4);
            #[allow(clippy::cast_precision_loss)]
            let expected = 20.0 * (index + 1) as f64;
            for point in ring {
                assert_close(point.distance_to(geometry.center), expected);
            }
        }
    }

    #[test]
    fn no_axes_means_no_geometry() {
        let geometry = RadarGeometry::default();
        assert!(geometry.grid_rings(0).is_empty());
        assert!(geometry.axis_lines(0).is_empty());
        assert!(geometry.label_anchors(0).is_empty());
        assert!(geometry.project_scores(&[]).is_empty());
        assert_eq!(path_data(&[]), "");
    }

    #[test]
    fn labels_sit_beyond_the_outer_ring() {
        let geometry = RadarGeometry::default();
        let anchors = geometry.label_anchors(4);
        assert_point(anchors[0], Point::new(140.0, 18.0));
        assert_point(anchors[1], Point::new(262.0, 140.0));

        let custom = geometry.with_label_offset(10.0).label_anchors(4);
        assert_point(custom[2], Point::new(140.0, 250.0));
    }

    #[test]
    fn axis_lines_start_at_center() {
        let geometry = RadarGeometry::default();
        let lines = geometry.axis_lines(4);
        assert_eq!(lines.len(), 4);
        assert_point(lines[0].from, geometry.center);
        assert_point(lines[0].to, Point::new(140.0, 40.0));
    }

    #[test]
    fn custom_level_count() {
        let geometry = RadarGeometry::default().with_levels(2);
        let rings = geometry.grid_rings(3);
        assert_eq!(rings.len(), 2);
        assert_close(rings[0][0].distance_to(geometry.center), 50.0);
        assert!(geometry.with_levels(0).grid_rings(3).is_empty());
    }

    #[test]
    fn path_data_closes_polygon() {
        let geometry = RadarGeometry::default();
        let points = geometry.project_scores(&[50.0, 50.0, 50.0, 50.0]);
        assert_eq!(path_data(&points), "M 140,90 L 190,140 L 140,190 L 90,140 Z");
        assert_eq!(points_attr(&points), "140,90 190,140 140,190 90,140");
    }

    #[test]
    fn format_coord_trims_and_rounds() {
        assert_eq!(format_coord(140.0), "140");
        assert_eq!(format_coord(53.400_1), "53.4");
        assert_eq!(format_coord(12.345_678), "12.35");
        assert_eq!(format_coord(-0.000_001), "0");
        assert_eq!(format_coord(-2.5), "-2.5");
    }
}
