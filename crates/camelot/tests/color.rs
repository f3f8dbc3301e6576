use camelot::color::{CHROMA, MAJOR_LIGHTNESS, MINOR_LIGHTNESS, hue_of};
use camelot::{Key, Oklch, Srgb, color_of, gradient_stops_of};

fn key(s: &str) -> Key {
    s.parse().unwrap()
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn css_form() {
    assert_eq!(color_of(key("8A")).to_css(), "oklch(0.75 0.2 300)");
    assert_eq!(color_of(key("8B")).to_css(), "oklch(0.65 0.2 300)");
    assert_eq!(color_of(key("1A")).to_css(), "oklch(0.75 0.2 150)");
    assert_eq!(color_of(key("6B")).to_css(), "oklch(0.65 0.2 0)");
}

#[test]
fn lightness_tier_per_mode() {
    for k in Key::all() {
        let c = k.color();
        assert_eq!(c.c, CHROMA);
        if k.is_minor() {
            assert_eq!(c.l, MINOR_LIGHTNESS);
        } else {
            assert_eq!(c.l, MAJOR_LIGHTNESS);
        }
    }
    assert!(MINOR_LIGHTNESS > MAJOR_LIGHTNESS);
}

#[test]
fn adjacent_positions_are_thirty_degrees_apart() {
    for k in Key::all() {
        let next = k.shift(1);
        let d = (k.color().h - next.color().h).rem_euclid(360.0);
        assert!((d - 30.0).abs() < 1e-9, "{} -> {}: {}", k, next, d);
        // Same position in the other ring shares the hue.
        assert_eq!(k.color().h, k.flip_mode().color().h);
    }
}

#[test]
fn hues_stay_in_range() {
    for n in 1..=12 {
        let h = hue_of(n);
        assert!((0.0..360.0).contains(&h), "{}: {}", n, h);
    }
}

#[test]
fn gradient_spreads_hue_both_ways() {
    for k in Key::all() {
        let g = gradient_stops_of(k);
        let base = k.color();
        assert_eq!(g.mid, base);
        assert!((hue_distance(g.start.h, base.h) - 15.0).abs() < 1e-9);
        assert!((hue_distance(g.end.h, base.h) - 15.0).abs() < 1e-9);
        assert_eq!((g.start.l, g.start.c), (base.l, base.c));
        assert_eq!((g.end.l, g.end.c), (base.l, base.c));
    }
    // Hue 0 wraps in both directions.
    let g = gradient_stops_of(key("6A"));
    assert_eq!(g.start.h, 15.0);
    assert_eq!(g.end.h, 345.0);
    assert_eq!(
        g.css(),
        ["oklch(0.75 0.2 15)", "oklch(0.75 0.2 0)", "oklch(0.75 0.2 345)"]
    );
}

#[test]
fn srgb_conversion_endpoints() {
    assert_eq!(Oklch::new(1.0, 0.0, 0.0).to_srgb(), Srgb::WHITE);
    assert_eq!(Oklch::new(0.0, 0.0, 0.0).to_srgb(), Srgb { r: 0, g: 0, b: 0 });
    assert_eq!(Srgb::WHITE.to_hex(), "#ffffff");
    assert_eq!(Srgb { r: 1, g: 171, b: 255 }.to_hex(), "#01abff");
}

#[test]
fn gradient_color_at_hits_stops() {
    let g = gradient_stops_of(key("3B"));
    assert_eq!(g.color_at(0.0), g.start.to_srgb());
    assert_eq!(g.color_at(0.5), g.mid.to_srgb());
    assert_eq!(g.color_at(1.0), g.end.to_srgb());
    assert_eq!(g.color_at(-1.0), g.start.to_srgb());
    assert_eq!(g.color_at(2.0), g.end.to_srgb());
}

#[test]
fn srgb_lerp_midpoint() {
    let black = Srgb { r: 0, g: 0, b: 0 };
    assert_eq!(black.lerp(Srgb::WHITE, 0.5), Srgb { r: 128, g: 128, b: 128 });
    assert_eq!(black.lerp(Srgb::WHITE, 0.0), black);
}
