//! egui widgets for the two views.
//!
//! Widgets never write the highlight themselves. They compare what the
//! pointer (or keyboard focus) is over now with what it was over last frame
//! and report the difference as `PointerEvent`s.

mod table;
mod wheel;

use camelot::{Column, PointerEvent, Srgb};
use eframe::egui::Color32;

pub use table::TableWidget;
pub use wheel::WheelWidget;

/// Which element an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    Wheel,
    Row,
    /// A single table cell, for cell-level emphasis.
    Cell(Column),
}

/// Events for a hover target moving from `previous` to `current`.
///
/// `enter` maps the new target to the key it stands for.
fn hover_transition<T: PartialEq + Copy>(
    previous: Option<T>,
    current: Option<T>,
    enter: impl Fn(T) -> PointerEvent,
) -> Vec<PointerEvent> {
    match (previous, current) {
        (a, b) if a == b => Vec::new(),
        (None, Some(b)) => vec![enter(b)],
        (Some(_), None) => vec![PointerEvent::Leave],
        (Some(_), Some(b)) => vec![PointerEvent::Leave, enter(b)],
        (None, None) => Vec::new(),
    }
}

fn to_color32(c: Srgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}
