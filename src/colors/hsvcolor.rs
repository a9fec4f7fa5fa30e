//! This module implements HSV, a cylindrical transformation of sRGB that shares its hue with HSL.
//! The difference is in the other two components: *value* is simply the largest RGB component, and
//! saturation is chroma relative to value. Fully saturated colors and white are therefore both at
//! the top of the cylinder, and every color with value 0 is black.

use crate::color::{clamp_unit, Color, RGBColor};
use crate::colors::{hexagon_point, hexagonal_hue, max_and_chroma, normalize_hue};

/// A color in the HSV color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct HSVColor {
    h: f64,
    s: f64,
    v: f64,
}

impl HSVColor {
    /// Creates a new HSV color. The hue is wrapped into `[0, 360)`; saturation and value are clamped
    /// into `[0, 1]`.
    pub fn new(h: f64, s: f64, v: f64) -> HSVColor {
        HSVColor {
            h: normalize_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
        }
    }

    /// The hue, in degrees from 0 (inclusive) to 360 (exclusive).
    pub fn h(&self) -> f64 {
        self.h
    }

    /// The saturation, from 0 to 1.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// The value, from 0 to 1: the largest of the RGB components.
    pub fn v(&self) -> f64 {
        self.v
    }
}

impl Color for HSVColor {
    fn from_rgb(rgb: RGBColor) -> HSVColor {
        let (r, g, b) = (rgb.red(), rgb.green(), rgb.blue());
        let (max_c, chroma) = max_and_chroma(r, g, b);
        // black falls in here too, so the division below is safe
        if chroma == 0.0 {
            return HSVColor::new(0.0, 0.0, max_c);
        }
        HSVColor::new(hexagonal_hue(r, g, b, max_c, chroma), chroma / max_c, max_c)
    }

    fn to_rgb(&self) -> RGBColor {
        if self.s == 0.0 {
            return RGBColor::new(self.v, self.v, self.v);
        }
        let chroma = self.v * self.s;
        let (r1, g1, b1) = hexagon_point(self.h, chroma);
        let offset = self.v - chroma;
        RGBColor::new(r1 + offset, g1 + offset, b1 + offset)
    }
}

impl From<[f64; 3]> for HSVColor {
    fn from(hsv: [f64; 3]) -> HSVColor {
        HSVColor::new(hsv[0], hsv[1], hsv[2])
    }
}

impl From<HSVColor> for [f64; 3] {
    fn from(hsv: HSVColor) -> [f64; 3] {
        [hsv.h, hsv.s, hsv.v]
    }
}

impl RGBColor {
    /// Creates a color from HSV components and an alpha. The components are normalized as in
    /// [`HSVColor::new`].
    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> RGBColor {
        HSVColor::new(h, s, v).to_rgb().with_alpha(a)
    }

    /// This color in HSV. Alpha is dropped.
    pub fn to_hsv(&self) -> HSVColor {
        HSVColor::from_rgb(*self)
    }
}
