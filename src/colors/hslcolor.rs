//! This file implements HSL: a simple transformation of sRGB that creates a cylindrical space. HSL has
//! the same problems with perceptual uniformity as sRGB does, but it has the advantage of being easy
//! to display on a monitor and of matching common ideas about color attributes. HSL and HSV are very
//! similar but have an important difference: *value* in HSV runs from black to fully saturated
//! colors, whereas *lightness* in HSL runs from black to fully saturated in the middle to white at
//! the end. This makes saturation in HSL very rough, because light colors can have a very high
//! saturation even if they are extremely close to white.
//!
//! This implementation is hexagonal rather than circular: values are first put on a hexagon, and
//! then that hexagon is "squeezed" into a circle. Converting gray into HSL or HSV gives a hue of 0
//! degrees, although any hue could be used in its place.

use crate::color::{clamp_unit, Color, RGBColor};
use crate::colors::{hexagon_point, hexagonal_hue, max_and_chroma, normalize_hue};

/// A color in the HSL color space, a direct transformation of the sRGB space.
///
/// # Example
///
/// ```
/// # use swatch::prelude::*;
/// # use swatch::colors::HSLColor;
/// let steel = HSLColor::new(210.0, 0.5, 0.4);
/// assert_eq!(steel.to_rgb().to_hex(), "#336699");
/// // hue wraps, the other components clamp
/// let wrapped = HSLColor::new(-150.0, 1.7, 0.4);
/// assert_eq!(wrapped.h(), 210.0);
/// assert_eq!(wrapped.s(), 1.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct HSLColor {
    h: f64,
    s: f64,
    l: f64,
}

impl HSLColor {
    /// Creates a new HSL color. The hue is wrapped into `[0, 360)`; saturation and lightness are
    /// clamped into `[0, 1]`.
    pub fn new(h: f64, s: f64, l: f64) -> HSLColor {
        HSLColor {
            h: normalize_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    /// The hue, in degrees from 0 (inclusive) to 360 (exclusive). Exactly the same as the hue of
    /// [`HSVColor`](crate::colors::HSVColor).
    pub fn h(&self) -> f64 {
        self.h
    }

    /// The saturation, from 0 to 1.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// The lightness, from 0 (black) to 1 (white). Defined as the average of the largest and
    /// smallest RGB components.
    pub fn l(&self) -> f64 {
        self.l
    }
}

impl Color for HSLColor {
    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let (r, g, b) = (rgb.red(), rgb.green(), rgb.blue());
        let (max_c, chroma) = max_and_chroma(r, g, b);
        let lightness = max_c - chroma / 2.0;
        if chroma == 0.0 {
            return HSLColor::new(0.0, 0.0, lightness);
        }
        // saturation is chroma relative to the largest chroma possible at this lightness, which
        // is what gives HSL its double cone
        let saturation = chroma / (1.0 - (2.0 * lightness - 1.0).abs());
        HSLColor::new(hexagonal_hue(r, g, b, max_c, chroma), saturation, lightness)
    }

    fn to_rgb(&self) -> RGBColor {
        if self.s == 0.0 {
            return RGBColor::new(self.l, self.l, self.l);
        }
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let (r1, g1, b1) = hexagon_point(self.h, chroma);
        // shift up to the right lightness
        let offset = self.l - chroma / 2.0;
        RGBColor::new(r1 + offset, g1 + offset, b1 + offset)
    }
}

impl From<[f64; 3]> for HSLColor {
    fn from(hsl: [f64; 3]) -> HSLColor {
        HSLColor::new(hsl[0], hsl[1], hsl[2])
    }
}

impl From<HSLColor> for [f64; 3] {
    fn from(hsl: HSLColor) -> [f64; 3] {
        [hsl.h, hsl.s, hsl.l]
    }
}

impl RGBColor {
    /// Creates a color from HSL components and an alpha. The components are normalized as in
    /// [`HSLColor::new`].
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> RGBColor {
        HSLColor::new(h, s, l).to_rgb().with_alpha(a)
    }

    /// This color in HSL. Alpha is dropped.
    pub fn to_hsl(&self) -> HSLColor {
        HSLColor::from_rgb(*self)
    }

    /// The color as a CSS `hsl(h, s%, l%)` string, with every component rounded to the nearest
    /// integer, or `hsla(h, s%, l%, a)` with alpha to two decimal places if the color isn't opaque.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert_eq!(RGBColor::RED.to_css_hsl(), "hsl(0, 100%, 50%)");
    /// let faded = RGBColor::from_hex("#33669980").unwrap();
    /// assert_eq!(faded.to_css_hsl(), "hsla(210, 50%, 40%, 0.50)");
    /// ```
    pub fn to_css_hsl(&self) -> String {
        let hsl = self.to_hsl();
        // a hue just under 360 rounds up to a full turn, which is hue 0 again
        let hue = hsl.h.round() as i64 % 360;
        let sat = (hsl.s * 100.0).round() as i64;
        let light = (hsl.l * 100.0).round() as i64;
        if self.is_opaque() {
            format!("hsl({}, {}%, {}%)", hue, sat, light)
        } else {
            format!("hsla({}, {}%, {}%, {:.2})", hue, sat, light, self.alpha())
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_rgb_conversion() {
        let red_hsl = RGBColor::RED.to_hsl();
        assert!(red_hsl.h().abs() <= 0.0001);
        assert!((red_hsl.s() - 1.0).abs() <= 0.0001);
        assert!((red_hsl.l() - 0.5).abs() <= 0.0001);
        let steel_rgb: RGBColor = HSLColor::new(210.0, 0.5, 0.4).convert();
        assert_eq!(steel_rgb.to_string(), "#336699");
        let back = steel_rgb.to_hsl();
        assert!((back.h() - 210.0).abs() <= 1e-9);
        assert!((back.s() - 0.5).abs() <= 1e-9);
        assert!((back.l() - 0.4).abs() <= 1e-9);
    }

    #[test]
    fn test_gray_has_no_hue() {
        let gray = RGBColor::GRAY.to_hsl();
        assert_eq!(gray.h(), 0.0);
        assert_eq!(gray.s(), 0.0);
        assert_eq!(gray.l(), 0.5);
        assert_eq!(HSLColor::new(123.0, 0.0, 0.25).to_rgb(), RGBColor::new(0.25, 0.25, 0.25));
        assert_eq!(RGBColor::WHITE.to_hsl().s(), 0.0);
        assert_eq!(RGBColor::BLACK.to_hsl().l(), 0.0);
    }

    #[test]
    fn test_from_hsla() {
        assert_eq!(RGBColor::from_hsla(0.0, 1.0, 0.5, 1.0), RGBColor::RED);
        assert_eq!(RGBColor::from_hsla(480.0, 1.0, 0.5, 1.0), RGBColor::GREEN);
        let faded = RGBColor::from_hsla(240.0, 1.0, 0.5, 0.25);
        assert_eq!(faded, RGBColor::BLUE.with_alpha(0.25));
    }

    #[test]
    fn test_css_hsl() {
        assert_eq!(RGBColor::GREEN.to_css_hsl(), "hsl(120, 100%, 50%)");
        assert_eq!(RGBColor::WHITE.to_css_hsl(), "hsl(0, 0%, 100%)");
        assert_eq!(RGBColor::GRAY.to_css_hsl(), "hsl(0, 0%, 50%)");
        assert_eq!(RGBColor::BLUE.with_alpha(0.25).to_css_hsl(), "hsla(240, 100%, 50%, 0.25)");
        // 359.8 degrees is printed as 0, not 360
        let nearly_red = HSLColor::new(359.8, 1.0, 0.5).to_rgb();
        assert!(nearly_red.to_css_hsl().starts_with("hsl(0,"));
    }

    #[test]
    fn test_serde() {
        let hsl = HSLColor::new(210.0, 0.5, 0.4);
        assert_eq!(serde_json::to_string(&hsl).unwrap(), "[210.0,0.5,0.4]");
        let parsed: HSLColor = serde_json::from_str("[-90.0,2.0,0.5]").unwrap();
        assert_eq!(parsed, HSLColor::new(270.0, 1.0, 0.5));
    }
}
