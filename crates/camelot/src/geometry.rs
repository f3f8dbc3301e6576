//! Wheel geometry: polar mapping, ring-sector outlines and per-key placement.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock, so angle 0
//! points up and angle 90 points right. Coordinates are canvas units with
//! the y axis pointing down (SVG convention).
//!
//! ```rust
//! use camelot::geometry::{WheelLayout, arc_path};
//!
//! let layout = WheelLayout::default();
//! let path = arc_path(layout.center(), 280.0, 180.0, 345.0, 375.0);
//! assert!(path.to_string().starts_with("M "));
//! assert!(!path.large_arc);
//! ```
use std::fmt;

use crate::key::{Key, Mode, Position};

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A polar coordinate relative to some center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub radius: f64,
    /// Degrees clockwise from 12 o'clock, in `[0, 360)`.
    pub angle: f64,
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let a = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

/// Convert a polar coordinate to canvas coordinates.
///
/// The conventional trig angle is rotated by -90° so angle 0 points up.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// Inverse of `polar_to_cartesian`.
pub fn cartesian_to_polar(center: Point, point: Point) -> Polar {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Polar {
        radius: dx.hypot(dy),
        angle: normalize_angle(dy.atan2(dx).to_degrees() + 90.0),
    }
}

/// One drawing command of an `ArcPath`, in SVG path semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    Arc {
        radius: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    LineTo(Point),
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::Arc {
                radius,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {} {} {} {} {} {} {}",
                radius,
                radius,
                x_axis_rotation,
                u8::from(*large_arc),
                u8::from(*sweep),
                to.x,
                to.y
            ),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCommand::Close => write!(f, "Z"),
        }
    }
}

/// Closed outline of an annular sector (a "ring slice").
///
/// The outline runs along the outer arc from `end_angle` back to
/// `start_angle` (sweep 0), inward along the radius, along the inner arc from
/// `start_angle` to `end_angle` (sweep 1), then back out. The two arcs must
/// keep opposite sweep directions for the fill to be a ring sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    /// Outer arc at `end_angle` (path start).
    pub outer_start: Point,
    /// Outer arc at `start_angle`.
    pub outer_end: Point,
    /// Inner arc at `end_angle`.
    pub inner_start: Point,
    /// Inner arc at `start_angle`.
    pub inner_end: Point,
}

/// Build the ring-sector outline between `inner_radius` and `outer_radius`
/// spanning `start_angle..end_angle`.
pub fn arc_path(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> ArcPath {
    ArcPath {
        center,
        outer_radius,
        inner_radius,
        start_angle,
        end_angle,
        large_arc: end_angle - start_angle > 180.0,
        outer_start: polar_to_cartesian(center, outer_radius, end_angle),
        outer_end: polar_to_cartesian(center, outer_radius, start_angle),
        inner_start: polar_to_cartesian(center, inner_radius, end_angle),
        inner_end: polar_to_cartesian(center, inner_radius, start_angle),
    }
}

impl ArcPath {
    pub fn commands(&self) -> [PathCommand; 6] {
        [
            PathCommand::MoveTo(self.outer_start),
            PathCommand::Arc {
                radius: self.outer_radius,
                x_axis_rotation: 0.0,
                large_arc: self.large_arc,
                sweep: false,
                to: self.outer_end,
            },
            PathCommand::LineTo(self.inner_end),
            PathCommand::Arc {
                radius: self.inner_radius,
                x_axis_rotation: 0.0,
                large_arc: self.large_arc,
                sweep: true,
                to: self.inner_start,
            },
            PathCommand::LineTo(self.outer_start),
            PathCommand::Close,
        ]
    }

    /// Corner points in drawing order.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.outer_start,
            self.outer_end,
            self.inner_end,
            self.inner_start,
        ]
    }

    /// Flatten the outline into a polygon, `steps` line segments per arc.
    ///
    /// Points follow the same order as the path commands; the closing point
    /// is not repeated.
    pub fn outline(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let span = self.end_angle - self.start_angle;
        let mut points = Vec::with_capacity(2 * (steps + 1));
        for i in 0..=steps {
            let angle = self.end_angle - span * (i as f64) / (steps as f64);
            points.push(polar_to_cartesian(self.center, self.outer_radius, angle));
        }
        for i in 0..=steps {
            let angle = self.start_angle + span * (i as f64) / (steps as f64);
            points.push(polar_to_cartesian(self.center, self.inner_radius, angle));
        }
        points
    }
}

impl fmt::Display for ArcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

/// Radial bounds of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner: f64,
    pub outer: f64,
}

impl Ring {
    pub fn mid(&self) -> f64 {
        (self.inner + self.outer) / 2.0
    }

    /// `true` when `radius` falls in `[inner, outer)`.
    pub fn contains(&self, radius: f64) -> bool {
        radius >= self.inner && radius < self.outer
    }
}

/// Canvas constants for the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    /// Width and height of the square canvas.
    pub size: f64,
    /// Outer edge of the major ring.
    pub outer_radius: f64,
    /// Boundary between the major and minor rings.
    pub inner_radius: f64,
    /// Inner edge of the minor ring (the empty hub).
    pub hub_radius: f64,
    pub segments: u32,
    /// Rotation applied to every segment boundary, in degrees.
    pub angle_offset: f64,
    /// Short label distance from the ring's inner bound.
    pub short_label_offset: f64,
    /// Long label distance from the inner bound, minor ring.
    pub long_label_offset_inner_ring: f64,
    /// Long label distance from the inner bound, major ring.
    pub long_label_offset_outer_ring: f64,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            size: 600.0,
            outer_radius: 280.0,
            inner_radius: 180.0,
            hub_radius: 90.0,
            segments: 12,
            angle_offset: -15.0,
            short_label_offset: 25.0,
            long_label_offset_inner_ring: 60.0,
            long_label_offset_outer_ring: 65.0,
        }
    }
}

/// Everything needed to draw one key's segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGeometry {
    pub key: Key,
    pub ring: Ring,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: ArcPath,
    pub short_label: Point,
    pub long_label: Point,
    pub gradient_axis: GradientAxis,
}

impl SegmentGeometry {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Line along which a segment's gradient runs: the ring's mid radius from
/// the start angle to the end angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientAxis {
    pub start: Point,
    pub end: Point,
}

impl GradientAxis {
    /// Position of `point` projected onto the axis, clamped to `[0, 1]`.
    ///
    /// Matches SVG `linearGradient` with `gradientUnits="userSpaceOnUse"`
    /// and the default `pad` spread method.
    pub fn parameter_at(&self, point: Point) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return 0.0;
        }
        let t = ((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / len_sq;
        t.clamp(0.0, 1.0)
    }
}

impl WheelLayout {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    pub fn segment_angle(&self) -> f64 {
        360.0 / f64::from(self.segments)
    }

    /// Major keys sit in the outer ring, minor keys in the inner ring.
    pub fn ring(&self, mode: Mode) -> Ring {
        match mode {
            Mode::Major => Ring {
                inner: self.inner_radius,
                outer: self.outer_radius,
            },
            Mode::Minor => Ring {
                inner: self.hub_radius,
                outer: self.inner_radius,
            },
        }
    }

    /// Angular span of a position: centered on its clock-hour tick.
    pub fn angles(&self, position: Position) -> (f64, f64) {
        let start = f64::from(position.number()) * self.segment_angle() + self.angle_offset;
        (start, start + self.segment_angle())
    }

    pub fn segment(&self, key: Key) -> SegmentGeometry {
        let center = self.center();
        let ring = self.ring(key.mode());
        let (start_angle, end_angle) = self.angles(key.position());
        let mid_angle = start_angle + self.segment_angle() / 2.0;
        let long_offset = match key.mode() {
            Mode::Major => self.long_label_offset_outer_ring,
            Mode::Minor => self.long_label_offset_inner_ring,
        };
        SegmentGeometry {
            key,
            ring,
            start_angle,
            end_angle,
            path: arc_path(center, ring.outer, ring.inner, start_angle, end_angle),
            short_label: polar_to_cartesian(center, ring.inner + self.short_label_offset, mid_angle),
            long_label: polar_to_cartesian(center, ring.inner + long_offset, mid_angle),
            gradient_axis: GradientAxis {
                start: polar_to_cartesian(center, ring.mid(), start_angle),
                end: polar_to_cartesian(center, ring.mid(), end_angle),
            },
        }
    }

    /// The key whose segment contains `point`, if any.
    ///
    /// Points in the hub or beyond the outer edge hit nothing. The outer edge
    /// itself still belongs to the major ring. A layout with no segments
    /// hits nothing.
    pub fn key_at(&self, point: Point) -> Option<Key> {
        if self.segments == 0 {
            return None;
        }
        let polar = cartesian_to_polar(self.center(), point);
        let mode = if self.ring(Mode::Minor).contains(polar.radius) {
            Mode::Minor
        } else if polar.radius >= self.inner_radius && polar.radius <= self.outer_radius {
            Mode::Major
        } else {
            return None;
        };
        let step = self.segment_angle();
        let relative = normalize_angle(polar.angle - self.angle_offset);
        let slot = (relative / step).floor() as i64 % i64::from(self.segments);
        // Slot 0 is the span that starts at `angle_offset`, i.e. the top position.
        let number = if slot == 0 { 12 } else { slot as u8 };
        Position::from_number(number).map(|p| Key::new(p, mode))
    }
}
