#![doc = include_str!("../README.md")]
//!
//! The crate is split leaf-first:
//!
//! - `key` / `notation`: the 24 keys and their names.
//! - `relation`: the seven harmonic mixing rules.
//! - `geometry`: where each key's segment and labels go on the canvas.
//! - `color`: key colors and segment gradients.
//! - `highlight`: the shared highlighted-key slot.
//! - `wheel` / `table`: view models reading (and writing) that slot.
//! - `svg`: a static SVG rendering of the wheel.
//!
//! Example: highlight a key and ask both views what to draw
//!
//! ```rust
//! use camelot::{HighlightCoordinator, Key, RowState, SegmentState, TableOptions, TableView, WheelView};
//! use camelot::geometry::WheelLayout;
//!
//! let coordinator = HighlightCoordinator::new();
//! let wheel = WheelView::new(WheelLayout::default(), coordinator.reader(), coordinator.writer());
//! let table = TableView::new(TableOptions::default(), coordinator.reader(), coordinator.writer());
//!
//! let c_major: Key = "8B".parse().unwrap();
//! wheel.on_pointer_enter(c_major);
//!
//! // One snapshot drives both views for this frame.
//! let snapshot = coordinator.snapshot();
//! assert_eq!(wheel.segment_state(&snapshot, c_major), SegmentState::Normal);
//! assert_eq!(wheel.segment_state(&snapshot, "1B".parse().unwrap()), SegmentState::Dimmed);
//! assert_eq!(table.row_state(&snapshot, c_major), RowState::Highlighted);
//! assert_eq!(table.row_state(&snapshot, "8A".parse().unwrap()), RowState::Dimmed);
//!
//! table.on_pointer_leave();
//! assert_eq!(coordinator.read(), None);
//! ```
//!
//! Example: export the wheel as SVG
//!
//! ```rust
//! use camelot::{HighlightCoordinator, WheelView};
//! use camelot::geometry::WheelLayout;
//! use camelot::svg::render_wheel_svg;
//!
//! let coordinator = HighlightCoordinator::new();
//! let wheel = WheelView::new(WheelLayout::default(), coordinator.reader(), coordinator.writer());
//! let svg = render_wheel_svg(&wheel, &coordinator.snapshot());
//! assert!(svg.contains(r#"id="segment-8A""#));
//! ```
pub mod color;
pub mod geometry;
pub mod highlight;
mod key;
mod notation;
mod relation;
pub mod svg;
mod table;
mod wheel;

pub use color::{GradientStops, Oklch, Srgb, color_of, gradient_stops_of};
pub use highlight::{
    HighlightCoordinator, HighlightReader, HighlightSnapshot, HighlightWriter, PointerEvent,
};
pub use key::{Key, KeyParseError, KeySet, Mode, Position};
pub use notation::{KeyNotation, long_name, notation, short_name};
pub use relation::{
    HarmonicMixing, Relation, RelationParseError, compatible_keys, harmonic_mixing,
};
pub use table::{
    CellFocus, CellStyle, Column, Paint, RowState, TableCell, TableOptions, TableRow, TableView,
};
pub use wheel::{SegmentState, WHEEL_LABEL, WheelSegment, WheelView};
