//! Painter-based wheel.
//!
//! Ring sectors are not convex, so each segment is drawn as a triangle strip
//! between its outer and inner arcs. Vertex colors sample the segment's
//! gradient along its axis, which reproduces the SVG `linearGradient`.
use eframe::egui::{self, Align2, Color32, FontId, Mesh, Pos2, Rect, Sense, Shape, Stroke};

use camelot::geometry::{Point, WheelLayout};
use camelot::highlight::TRANSITION_SECS;
use camelot::svg::{LONG_LABEL_FONT_SIZE, SHORT_LABEL_FONT_SIZE};
use camelot::{HighlightSnapshot, Key, PointerEvent, WHEEL_LABEL, WheelSegment, WheelView};

use super::{hover_transition, to_color32};

/// Line segments per arc when flattening a segment outline.
const ARC_STEPS: usize = 12;
const MIN_SIDE: f32 = 240.0;
const OUTLINE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

/// Maps wheel canvas units to screen points: the canvas is fitted into the
/// largest centered square of the widget rect.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CanvasTransform {
    origin: Pos2,
    scale: f32,
}

impl CanvasTransform {
    fn fit(rect: Rect, layout: &WheelLayout) -> Self {
        let side = rect.width().min(rect.height());
        Self {
            origin: rect.center() - egui::vec2(side / 2.0, side / 2.0),
            scale: side / layout.size as f32,
        }
    }

    fn to_screen(&self, p: Point) -> Pos2 {
        Pos2::new(
            self.origin.x + p.x as f32 * self.scale,
            self.origin.y + p.y as f32 * self.scale,
        )
    }

    fn to_canvas(&self, p: Pos2) -> Point {
        Point::new(
            f64::from((p.x - self.origin.x) / self.scale),
            f64::from((p.y - self.origin.y) / self.scale),
        )
    }
}

/// Triangles covering the polygon returned by `ArcPath::outline(steps)`:
/// outer points `0..=steps` run end to start, inner points run start to end.
fn strip_triangles(steps: usize) -> Vec<[u32; 3]> {
    let n = steps as u32;
    let inner = |i: u32| (n + 1) + (n - i);
    (0..n)
        .flat_map(|i| [[i, i + 1, inner(i)], [i + 1, inner(i + 1), inner(i)]])
        .collect()
}

fn segment_mesh(segment: &WheelSegment, transform: &CanvasTransform, opacity: f32) -> Mesh {
    let axis = segment.geometry.gradient_axis;
    let mut mesh = Mesh::default();
    for p in segment.geometry.path.outline(ARC_STEPS) {
        let color = to_color32(segment.gradient.color_at(axis.parameter_at(p)));
        mesh.colored_vertex(transform.to_screen(p), color.gamma_multiply(opacity));
    }
    for [a, b, c] in strip_triangles(ARC_STEPS) {
        mesh.add_triangle(a, b, c);
    }
    mesh
}

/// Name reported to assistive technology: the wheel, plus the segment under
/// the pointer when there is one.
fn accessible_label(view: &WheelView, hovered: Option<Key>) -> String {
    match hovered {
        Some(key) => format!("{}: {}", WHEEL_LABEL, view.segment(key).aria_label()),
        None => WHEEL_LABEL.to_string(),
    }
}

pub struct WheelWidget {
    hovered: Option<Key>,
}

impl WheelWidget {
    pub const PANEL_WIDTH: f32 = 640.0;

    pub fn new() -> Self {
        Self { hovered: None }
    }

    /// Paint the wheel for `snapshot` and report hover transitions.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        view: &WheelView,
        snapshot: &HighlightSnapshot,
    ) -> Vec<PointerEvent> {
        let side = ui
            .available_width()
            .min(ui.available_height())
            .max(MIN_SIDE);
        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());

        let transform = CanvasTransform::fit(rect, view.layout());
        let painter = ui.painter_at(rect);
        let ctx = ui.ctx().clone();

        for (segment, (key, state)) in view.segments().iter().zip(view.segment_states(snapshot)) {
            let opacity = ctx.animate_value_with_time(
                egui::Id::new(("segment", key.index())),
                state.opacity(),
                TRANSITION_SECS,
            );
            painter.add(Shape::mesh(segment_mesh(segment, &transform, opacity)));

            let outline: Vec<Pos2> = segment
                .geometry
                .path
                .outline(ARC_STEPS)
                .into_iter()
                .map(|p| transform.to_screen(p))
                .collect();
            painter.add(Shape::closed_line(
                outline,
                Stroke::new(1.0, OUTLINE.gamma_multiply(opacity)),
            ));

            let label = Color32::WHITE.gamma_multiply(opacity);
            painter.text(
                transform.to_screen(segment.geometry.short_label),
                Align2::CENTER_CENTER,
                segment.notation.short,
                FontId::proportional(SHORT_LABEL_FONT_SIZE as f32 * transform.scale),
                label,
            );
            painter.text(
                transform.to_screen(segment.geometry.long_label),
                Align2::CENTER_CENTER,
                segment.notation.long,
                FontId::proportional(LONG_LABEL_FONT_SIZE as f32 * transform.scale),
                label,
            );
        }

        // Labels are painted, not allocated, so only the segment shapes are hit.
        let hovered = response
            .hover_pos()
            .and_then(|pos| view.hit_test(transform.to_canvas(pos)));
        let label = accessible_label(view, hovered);
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Other, &label));
        let events = hover_transition(self.hovered, hovered, PointerEvent::Enter);
        self.hovered = hovered;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_round_trips() {
        let layout = WheelLayout::default();
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(300.0, 400.0));
        let t = CanvasTransform::fit(rect, &layout);
        assert_eq!(t.scale, 0.5);
        // Centered vertically in the taller rect.
        assert_eq!(t.origin, Pos2::new(10.0, 70.0));
        let p = Point::new(123.0, 456.0);
        let back = t.to_canvas(t.to_screen(p));
        assert!((back.x - p.x).abs() < 1e-3 && (back.y - p.y).abs() < 1e-3);
    }

    #[test]
    fn accessible_label_names_hovered_segment() {
        let coordinator = camelot::HighlightCoordinator::new();
        let view = WheelView::new(
            WheelLayout::default(),
            coordinator.reader(),
            coordinator.writer(),
        );
        assert_eq!(accessible_label(&view, None), WHEEL_LABEL);
        assert_eq!(
            accessible_label(&view, Some("8B".parse().unwrap())),
            "Camelot Wheel for harmonic mixing: 8B C Major"
        );
    }

    #[test]
    fn strip_covers_every_outline_vertex() {
        let steps = 4;
        let triangles = strip_triangles(steps);
        assert_eq!(triangles.len(), 2 * steps);
        let mut used = vec![false; 2 * (steps + 1)];
        for tri in &triangles {
            for &i in tri {
                used[i as usize] = true;
            }
        }
        assert!(used.iter().all(|u| *u));
    }

    #[test]
    fn strip_pairs_outer_and_inner_at_same_angle() {
        // For two steps the inner arc indices run 3, 4, 5 from start to end,
        // while the outer ones run 0, 1, 2 from end to start.
        assert_eq!(
            strip_triangles(2),
            vec![[0, 1, 5], [1, 4, 5], [1, 2, 4], [2, 3, 4]]
        );
    }
}
