//! Wheel view model.
//!
//! Precomputes the 24 segments (outline, gradient, labels) once, and derives
//! each segment's state from a highlight snapshot:
//!
//! - nothing highlighted: every segment is `Normal`;
//! - key `K` highlighted: `K` and its seven relation targets are `Normal`,
//!   everything else is `Dimmed`.
//!
//! Pointer enter/leave on a segment shape is the view's only way to write
//! the shared highlight slot. Labels never receive pointer events.
use crate::color::{GradientStops, gradient_stops_of};
use crate::geometry::{Point, SegmentGeometry, WheelLayout};
use crate::highlight::{
    DIMMED_OPACITY, HighlightReader, HighlightSnapshot, HighlightWriter, PointerEvent,
};
use crate::key::{Key, KeySet};
use crate::notation::KeyNotation;
use crate::relation::compatible_keys;

/// Accessible label of the whole wheel.
pub const WHEEL_LABEL: &str = "Camelot Wheel for harmonic mixing";

/// Visual state of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    Normal,
    Dimmed,
}

impl SegmentState {
    pub fn opacity(self) -> f32 {
        match self {
            SegmentState::Normal => 1.0,
            SegmentState::Dimmed => DIMMED_OPACITY,
        }
    }
}

/// `key`'s state given the full-opacity set (`None`: nothing highlighted).
fn state_within(highlighted: Option<KeySet>, key: Key) -> SegmentState {
    match highlighted {
        Some(set) if !set.contains(key) => SegmentState::Dimmed,
        _ => SegmentState::Normal,
    }
}

/// One drawable segment of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSegment {
    pub geometry: SegmentGeometry,
    pub notation: KeyNotation,
    pub gradient: GradientStops,
}

impl WheelSegment {
    fn new(layout: &WheelLayout, key: Key) -> Self {
        Self {
            geometry: layout.segment(key),
            notation: key.notation(),
            gradient: gradient_stops_of(key),
        }
    }

    pub fn key(&self) -> Key {
        self.geometry.key
    }

    /// Element id of the segment group, e.g. `segment-8A`.
    pub fn element_id(&self) -> String {
        format!("segment-{}", self.notation.short)
    }

    /// Id of the segment's gradient definition, e.g. `grad-8A`.
    pub fn gradient_id(&self) -> String {
        format!("grad-{}", self.notation.short)
    }

    /// Label for assistive technology, e.g. `8A A Minor`.
    pub fn aria_label(&self) -> String {
        format!("{} {}", self.notation.short, self.notation.long)
    }
}

/// The wheel: 24 segments reading and writing the shared highlight slot.
pub struct WheelView {
    layout: WheelLayout,
    segments: Vec<WheelSegment>,
    reader: HighlightReader,
    writer: HighlightWriter,
}

impl WheelView {
    pub fn new(layout: WheelLayout, reader: HighlightReader, writer: HighlightWriter) -> Self {
        let segments = Key::all().map(|k| WheelSegment::new(&layout, k)).collect();
        Self {
            layout,
            segments,
            reader,
            writer,
        }
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    /// Segments in domain order (minor block first).
    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    pub fn segment(&self, key: Key) -> &WheelSegment {
        &self.segments[key.index()]
    }

    /// Current value of the shared slot.
    pub fn snapshot(&self) -> HighlightSnapshot {
        self.reader.snapshot()
    }

    /// Keys rendered at full opacity, or `None` when nothing is highlighted.
    pub fn highlighted_keys(&self, snapshot: &HighlightSnapshot) -> Option<KeySet> {
        snapshot.key().map(compatible_keys)
    }

    pub fn segment_state(&self, snapshot: &HighlightSnapshot, key: Key) -> SegmentState {
        state_within(self.highlighted_keys(snapshot), key)
    }

    /// State of every segment, in domain order.
    pub fn segment_states(&self, snapshot: &HighlightSnapshot) -> Vec<(Key, SegmentState)> {
        let highlighted = self.highlighted_keys(snapshot);
        self.segments
            .iter()
            .map(|s| (s.key(), state_within(highlighted, s.key())))
            .collect()
    }

    /// Keys whose segment is at full opacity.
    pub fn normal_keys(&self, snapshot: &HighlightSnapshot) -> KeySet {
        self.segment_states(snapshot)
            .into_iter()
            .filter(|(_, state)| *state == SegmentState::Normal)
            .map(|(key, _)| key)
            .collect()
    }

    /// The segment shape under `point` (canvas coordinates).
    pub fn hit_test(&self, point: Point) -> Option<Key> {
        self.layout.key_at(point)
    }

    pub fn on_pointer_enter(&self, key: Key) {
        self.writer.set(Some(key));
    }

    pub fn on_pointer_leave(&self) {
        self.writer.clear();
    }

    pub fn handle(&self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(key) => self.on_pointer_enter(key),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }
}
