//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB is a device-independent color
//! space with an L value for lightness and two opponent color axes for chromaticity. Formally the
//! three values are called L\*, a\*, and b\*, but for convenience they are just `l`, `a`, and `b`
//! here. Everything in this module is relative to the D65 white point, the one sRGB is defined
//! against, so no chromatic adaptation is needed on the way in or out.
//!
//! CIELAB is close enough to perceptually uniform that straight-line distance in it is a usable
//! measure of how different two colors look (CIE76 Delta-E), and that interpolating in it gives
//! gradients without the muddy middle that interpolating in RGB often has.

use crate::color::{Color, RGBColor};
use crate::colors::xyzcolor::XYZColor;
use crate::consts::{D65_WHITE_POINT, LAB_DELTA};
use crate::coord::Coord;

/// A color in the CIELAB color space.
///
/// # Example
///
/// ```
/// # use swatch::prelude::*;
/// # use swatch::colors::CIELABColor;
/// let lab = RGBColor::RED.to_lab();
/// assert!((lab.l() - 53.24).abs() <= 0.01);
/// assert!((lab.a() - 80.09).abs() <= 0.01);
/// assert!((lab.b() - 67.20).abs() <= 0.01);
/// assert!(RGBColor::from_laba(lab.l(), lab.a(), lab.b(), 1.0).approx_eq(&RGBColor::RED, 1e-4));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct CIELABColor {
    l: f64,
    a: f64,
    b: f64,
}

/// Clamps a CIELAB or CIELCH lightness into `[0, 100]`, with NaN going to 0.
pub(crate) fn clamp_lightness(l: f64) -> f64 {
    if l.is_nan() {
        0.0
    } else {
        num::clamp(l, 0.0, 100.0)
    }
}

// the CIE companding function and its inverse, which model the eye's nonlinear response
fn lab_f(t: f64) -> f64 {
    if t > LAB_DELTA.powi(3) {
        t.cbrt()
    } else {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > LAB_DELTA {
        t * t * t
    } else {
        3.0 * LAB_DELTA * LAB_DELTA * (t - 4.0 / 29.0)
    }
}

impl CIELABColor {
    /// Creates a new CIELAB color. Lightness is clamped into `[0, 100]`; `a` and `b` are unbounded,
    /// so it is possible to describe colors that no screen can show.
    pub fn new(l: f64, a: f64, b: f64) -> CIELABColor {
        CIELABColor {
            l: clamp_lightness(l),
            a,
            b,
        }
    }

    /// The lightness, from 0 (black) to 100 (diffuse white).
    pub fn l(&self) -> f64 {
        self.l
    }

    /// The green-red opponent axis. Negative values are green, positive values are red/magenta.
    /// Colors on a screen fall roughly between -128 and 127.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The blue-yellow opponent axis. Negative values are blue, positive values are yellow.
    pub fn b(&self) -> f64 {
        self.b
    }

    pub(crate) fn from_xyz(xyz: XYZColor) -> CIELABColor {
        let fx = lab_f(xyz.x / D65_WHITE_POINT[0]);
        let fy = lab_f(xyz.y / D65_WHITE_POINT[1]);
        let fz = lab_f(xyz.z / D65_WHITE_POINT[2]);
        CIELABColor::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    pub(crate) fn to_xyz(&self) -> XYZColor {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        XYZColor {
            x: lab_f_inv(fx) * D65_WHITE_POINT[0],
            y: lab_f_inv(fy) * D65_WHITE_POINT[1],
            z: lab_f_inv(fz) * D65_WHITE_POINT[2],
        }
    }
}

impl Color for CIELABColor {
    fn from_rgb(rgb: RGBColor) -> CIELABColor {
        CIELABColor::from_xyz(XYZColor::from_rgb(rgb))
    }

    /// Colors outside the sRGB gamut are clamped channel by channel.
    fn to_rgb(&self) -> RGBColor {
        self.to_xyz().to_rgb(1.0)
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor::new(c.x, c.y, c.z)
    }
}

impl From<CIELABColor> for Coord {
    fn from(lab: CIELABColor) -> Coord {
        Coord {
            x: lab.l,
            y: lab.a,
            z: lab.b,
        }
    }
}

impl From<[f64; 3]> for CIELABColor {
    fn from(lab: [f64; 3]) -> CIELABColor {
        CIELABColor::new(lab[0], lab[1], lab[2])
    }
}

impl From<CIELABColor> for [f64; 3] {
    fn from(lab: CIELABColor) -> [f64; 3] {
        [lab.l, lab.a, lab.b]
    }
}

impl RGBColor {
    /// Creates a color from CIELAB components and an alpha.
    pub fn from_laba(l: f64, a: f64, b: f64, alpha: f64) -> RGBColor {
        CIELABColor::new(l, a, b).to_rgb().with_alpha(alpha)
    }

    /// This color in CIELAB. Alpha is dropped.
    pub fn to_lab(&self) -> CIELABColor {
        CIELABColor::from_rgb(*self)
    }

    /// The CIE76 color difference: the straight-line distance between two colors in CIELAB. A
    /// difference below 1 is generally not noticeable; alpha is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert_eq!(RGBColor::RED.delta_e(RGBColor::RED), 0.0);
    /// assert!((RGBColor::BLACK.delta_e(RGBColor::WHITE) - 100.0).abs() <= 0.01);
    /// ```
    pub fn delta_e(&self, other: RGBColor) -> f64 {
        let c1: Coord = self.to_lab().into();
        let c2: Coord = other.to_lab().into();
        c1.euclidean_distance(&c2)
    }

    /// Mixes two colors by interpolating in CIELAB, which tends to keep the midpoints of a blend
    /// as bright and saturated as the ends. `ratio` is clamped into `[0, 1]`: 0 gives `self` and 1
    /// gives `other`. Alpha is interpolated linearly.
    pub fn mix_lab(&self, other: RGBColor, ratio: f64) -> RGBColor {
        let t = crate::color::clamp_unit(ratio);
        let c1: Coord = self.to_lab().into();
        let c2: Coord = other.to_lab().into();
        let alpha = self.alpha() + (other.alpha() - self.alpha()) * t;
        CIELABColor::from(c1.lerp(&c2, t)).to_rgb().with_alpha(alpha)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lab_reference_values() {
        let green = RGBColor::GREEN.to_lab();
        assert!((green.l() - 87.73).abs() <= 0.01);
        let blue = RGBColor::BLUE.to_lab();
        assert!((blue.l() - 32.30).abs() <= 0.01);
        assert!((blue.a() - 79.19).abs() <= 0.01);
        assert!((blue.b() + 107.86).abs() <= 0.01);
        let white = RGBColor::WHITE.to_lab();
        assert_eq!(white.l(), 100.0);
        assert!(white.a().abs() <= 0.01);
        assert!(white.b().abs() <= 0.01);
        assert_eq!(RGBColor::BLACK.to_lab().l(), 0.0);
    }

    #[test]
    fn test_lab_round_trip() {
        for hex in ["#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#123456", "#FEDCBA", "#808080", "#010203"].iter() {
            let color = RGBColor::from_hex(hex).unwrap();
            let back: RGBColor = color.to_lab().convert();
            assert!(back.approx_eq(&color, 0.02), "{}", hex);
        }
    }

    #[test]
    fn test_lightness_clamping() {
        assert_eq!(CIELABColor::new(120.0, -300.0, 5.0).l(), 100.0);
        assert_eq!(CIELABColor::new(-3.0, 0.0, 0.0).l(), 0.0);
        // a and b aren't clamped at all
        assert_eq!(CIELABColor::new(50.0, -300.0, 250.0).a(), -300.0);
        // but converting an impossible color to RGB still gives a valid one
        let out_of_gamut = CIELABColor::new(50.0, -300.0, 250.0).to_rgb();
        assert!(out_of_gamut.red() >= 0.0 && out_of_gamut.red() <= 1.0);
    }

    #[test]
    fn test_delta_e() {
        let a = RGBColor::from_hex("#336699").unwrap();
        let b = RGBColor::from_hex("#663399").unwrap();
        assert!((a.delta_e(b) - b.delta_e(a)).abs() <= 1e-12);
        assert!(a.delta_e(b) > 10.0);
        assert_eq!(a.delta_e(a.with_alpha(0.1)), 0.0);
    }

    #[test]
    fn test_mix_lab() {
        let red = RGBColor::RED;
        let blue = RGBColor::BLUE.with_alpha(0.0);
        assert!(red.mix_lab(blue, 0.0).approx_eq(&red, 1e-4));
        assert!(red.mix_lab(blue, 1.0).approx_eq(&blue, 1e-4));
        assert!(red.mix_lab(blue, 7.0).approx_eq(&blue, 1e-4));
        let mid = red.mix_lab(blue, 0.5);
        assert!((mid.alpha() - 0.5).abs() <= 1e-12);
        // the LAB midpoint is lighter than the RGB one, #800080
        assert!(mid.to_lab().l() > RGBColor::new(0.5, 0.0, 0.5).to_lab().l());
    }

    #[test]
    fn test_coord_conversion() {
        let lab = CIELABColor::new(50.0, 20.0, -30.0);
        let coord: Coord = lab.into();
        assert_eq!(coord, Coord{x: 50.0, y: 20.0, z: -30.0});
        assert_eq!(CIELABColor::from(coord), lab);
    }
}
