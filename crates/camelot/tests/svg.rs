use camelot::geometry::WheelLayout;
use camelot::svg::render_wheel_svg;
use camelot::{HighlightCoordinator, Key, WheelView};

fn render(highlight: Option<&str>) -> String {
    let c = HighlightCoordinator::new();
    let view = WheelView::new(WheelLayout::default(), c.reader(), c.writer());
    c.set(highlight.map(|s| s.parse::<Key>().unwrap()));
    render_wheel_svg(&view, &c.snapshot())
}

fn segment_opening(svg: &str, id: &str) -> String {
    let needle = format!(r#"<g id="{}""#, id);
    let start = svg.find(&needle).expect("segment present");
    let end = start + svg[start..].find('>').expect("tag closed");
    svg[start..=end].to_string()
}

#[test]
fn document_structure() {
    let svg = render(None);
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 600 600""#));
    assert!(svg.contains(r#"aria-label="Camelot Wheel for harmonic mixing""#));
    assert_eq!(svg.matches("<linearGradient ").count(), 24);
    assert_eq!(svg.matches("<path ").count(), 24);
    assert_eq!(svg.matches("<text ").count(), 48);
    assert_eq!(svg.matches(r#"pointer-events="none""#).count(), 48);
    for k in Key::all() {
        assert!(svg.contains(&format!(r#"id="segment-{}""#, k)));
        assert!(svg.contains(&format!(r#"id="grad-{}""#, k)));
        assert!(svg.contains(&format!(r#"fill="url(#grad-{})""#, k)));
    }
}

#[test]
fn segments_carry_accessible_labels() {
    let svg = render(None);
    let tag = segment_opening(&svg, "segment-5A");
    assert!(tag.contains(r#"aria-label="5A C Minor""#), "{}", tag);
    assert!(tag.contains(r#"role="img""#));
}

#[test]
fn dimmed_segments_use_reduced_opacity() {
    let svg = render(Some("8A"));
    assert!(segment_opening(&svg, "segment-8A").contains("opacity: 1;"));
    assert!(segment_opening(&svg, "segment-6B").contains("opacity: 1;"));
    assert!(segment_opening(&svg, "segment-1B").contains("opacity: 0.3;"));
    assert!(segment_opening(&svg, "segment-1B").contains("transition: opacity 0.2s"));
    assert_eq!(svg.matches("opacity: 0.3;").count(), 16);
}

#[test]
fn gradient_stops_in_order() {
    let svg = render(None);
    let start = svg.find(r#"<linearGradient id="grad-8A""#).unwrap();
    let block = &svg[start..start + svg[start..].find("</linearGradient>").unwrap()];
    let stops: Vec<&str> = block.matches("<stop ").collect();
    assert_eq!(stops.len(), 3);
    assert!(block.contains(r#"offset="0%" stop-color="oklch(0.75 0.2 315)""#));
    assert!(block.contains(r#"offset="50%" stop-color="oklch(0.75 0.2 300)""#));
    assert!(block.contains(r#"offset="100%" stop-color="oklch(0.75 0.2 285)""#));
}

#[test]
fn label_font_sizes() {
    let svg = render(None);
    let tag = segment_opening(&svg, "segment-8A");
    let start = svg.find(&tag).unwrap();
    let group = &svg[start..start + svg[start..].find("</g>").unwrap()];
    assert!(group.contains(r#"font-size="28" font-weight="bold""#), "{}", group);
    assert!(group.contains(r##"font-size="14" fill="#fff""##), "{}", group);
    assert!(group.contains(">8A</text>"));
    assert!(group.contains(">A Minor</text>"));
}
