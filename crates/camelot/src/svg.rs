//! Standalone SVG rendering of the wheel.
//!
//! Produces the same structure an interactive host would mount: gradient
//! definitions, then one `<g>` per segment holding the ring-sector path and
//! two labels. Segment opacity reflects the snapshot passed in.
use std::fmt::Write;

use crate::highlight::{HighlightSnapshot, TRANSITION_SECS};
use crate::wheel::{WHEEL_LABEL, WheelSegment, WheelView};

pub const SHORT_LABEL_FONT_SIZE: u32 = 28;
pub const LONG_LABEL_FONT_SIZE: u32 = 14;
pub const SEGMENT_STROKE: &str = "#333";
pub const LABEL_FILL: &str = "#fff";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_gradient(out: &mut String, segment: &WheelSegment) -> std::fmt::Result {
    let axis = segment.geometry.gradient_axis;
    writeln!(
        out,
        r#"    <linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        segment.gradient_id(),
        axis.start.x,
        axis.start.y,
        axis.end.x,
        axis.end.y
    )?;
    for (offset, color) in ["0%", "50%", "100%"].iter().zip(segment.gradient.css()) {
        writeln!(out, r#"      <stop offset="{}" stop-color="{}" />"#, offset, color)?;
    }
    writeln!(out, "    </linearGradient>")
}

fn write_segment(out: &mut String, segment: &WheelSegment, opacity: f32) -> std::fmt::Result {
    let g = &segment.geometry;
    writeln!(
        out,
        r#"  <g id="{}" role="img" aria-label="{}" style="opacity: {}; transition: opacity {}s">"#,
        segment.element_id(),
        escape(&segment.aria_label()),
        opacity,
        TRANSITION_SECS
    )?;
    writeln!(
        out,
        r#"    <path d="{}" fill="url(#{})" stroke="{}" stroke-width="1" />"#,
        g.path,
        segment.gradient_id(),
        SEGMENT_STROKE
    )?;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}" font-weight="bold" fill="{}" pointer-events="none">{}</text>"#,
        g.short_label.x,
        g.short_label.y,
        SHORT_LABEL_FONT_SIZE,
        LABEL_FILL,
        escape(segment.notation.short)
    )?;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{}" fill="{}" pointer-events="none">{}</text>"#,
        g.long_label.x,
        g.long_label.y,
        LONG_LABEL_FONT_SIZE,
        LABEL_FILL,
        escape(segment.notation.long)
    )?;
    writeln!(out, "  </g>")
}

/// Render `view` as an SVG document, dimming segments per `snapshot`.
pub fn render_wheel_svg(view: &WheelView, snapshot: &HighlightSnapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, view, snapshot);
    out
}

fn write_document(
    out: &mut String,
    view: &WheelView,
    snapshot: &HighlightSnapshot,
) -> std::fmt::Result {
    let size = view.layout().size;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="{}">"#,
        WHEEL_LABEL
    )?;
    writeln!(out, "  <defs>")?;
    for segment in view.segments() {
        write_gradient(out, segment)?;
    }
    writeln!(out, "  </defs>")?;
    for (segment, (_, state)) in view.segments().iter().zip(view.segment_states(snapshot)) {
        write_segment(out, segment, state.opacity())?;
    }
    writeln!(out, "</svg>")
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
