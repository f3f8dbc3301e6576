//! Key colors in OKLCH and the three-stop gradients used to shade segments.
//!
//! Each mode has its own lightness tier and all keys share one chroma. Hue
//! steps 30° per clock position, so the twelve keys of a mode go once around
//! the hue circle. Position 1 sits at 150° and each step subtracts 30°.
//!
//! Raster back-ends need sRGB; `Oklch::to_srgb` converts through OKLab and
//! linear sRGB and clamps anything outside the gamut.
use std::fmt;

use crate::key::{Key, Mode};

pub const MINOR_LIGHTNESS: f64 = 0.75;
pub const MAJOR_LIGHTNESS: f64 = 0.65;
pub const CHROMA: f64 = 0.2;
/// Hue change from one clock position to the next.
pub const HUE_STEP: f64 = -30.0;
/// Hue rotation of the gradient's start and end stops around the base hue.
pub const GRADIENT_HUE_SPREAD: f64 = 15.0;

/// A color in the OKLCH cylindrical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, 0 to 1.
    pub l: f64,
    /// Chroma, 0 and up.
    pub c: f64,
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Same lightness and chroma, hue rotated by `degrees` and wrapped.
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: (self.h + degrees).rem_euclid(360.0),
            ..self
        }
    }

    /// CSS color function form, e.g. `oklch(0.75 0.2 300)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    pub fn to_srgb(self) -> Srgb {
        let (sin_h, cos_h) = self.h.to_radians().sin_cos();
        let a = self.c * cos_h;
        let b = self.c * sin_h;

        let l_ = self.l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
        let m_ = self.l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
        let s_ = self.l - 0.089_484_177_5 * a - 1.291_485_548_0 * b;
        let (l3, m3, s3) = (l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);

        let r = 4.076_741_662_1 * l3 - 3.307_711_591_3 * m3 + 0.230_969_929_2 * s3;
        let g = -1.268_438_004_6 * l3 + 2.609_757_401_1 * m3 - 0.341_319_396_5 * s3;
        let b = -0.004_196_086_3 * l3 - 0.703_418_614_7 * m3 + 1.707_614_701_0 * s3;

        Srgb {
            r: encode_channel(r),
            g: encode_channel(g),
            b: encode_channel(b),
        }
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({} {} {})", self.l, self.c, self.h)
    }
}

// Linear light -> gamma-encoded 8-bit channel.
fn encode_channel(linear: f64) -> u8 {
    let v = linear.clamp(0.0, 1.0);
    let encoded = if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (encoded.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// 8-bit gamma-encoded sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Srgb {
    pub const WHITE: Srgb = Srgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Channel-wise linear interpolation, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Srgb, t: f64) -> Srgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Srgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Base hue for a clock position.
pub fn hue_of(position_number: u8) -> f64 {
    (180.0 + HUE_STEP * f64::from(position_number)).rem_euclid(360.0)
}

/// The fixed color of `key`.
pub fn color_of(key: Key) -> Oklch {
    let l = match key.mode() {
        Mode::Minor => MINOR_LIGHTNESS,
        Mode::Major => MAJOR_LIGHTNESS,
    };
    Oklch::new(l, CHROMA, hue_of(key.position().number()))
}

impl Key {
    pub fn color(self) -> Oklch {
        color_of(self)
    }
}

/// Start, middle and end colors of a segment gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStops {
    pub start: Oklch,
    pub mid: Oklch,
    pub end: Oklch,
}

/// Stop offsets, as fractions of the gradient axis.
pub const GRADIENT_OFFSETS: [f64; 3] = [0.0, 0.5, 1.0];

impl GradientStops {
    pub fn stops(&self) -> [Oklch; 3] {
        [self.start, self.mid, self.end]
    }

    /// CSS strings for the three stops, in order.
    pub fn css(&self) -> [String; 3] {
        self.stops().map(|c| c.to_css())
    }

    /// Color at `t` along the axis, interpolated in sRGB between the stops.
    pub fn color_at(&self, t: f64) -> Srgb {
        let t = t.clamp(0.0, 1.0);
        let [start, mid, end] = self.stops().map(Oklch::to_srgb);
        if t <= GRADIENT_OFFSETS[1] {
            start.lerp(mid, t / GRADIENT_OFFSETS[1])
        } else {
            mid.lerp(end, (t - GRADIENT_OFFSETS[1]) / (GRADIENT_OFFSETS[2] - GRADIENT_OFFSETS[1]))
        }
    }
}

/// Gradient for `key`: hue +15°, base hue, hue -15°.
pub fn gradient_stops_of(key: Key) -> GradientStops {
    let base = color_of(key);
    GradientStops {
        start: base.rotate_hue(GRADIENT_HUE_SPREAD),
        mid: base,
        end: base.rotate_hue(-GRADIENT_HUE_SPREAD),
    }
}
