//! This module implements CIELCH, the cylindrical form of [CIELAB](crate::colors::CIELABColor): the
//! same lightness, with the two opponent axes restated as a distance from gray (chroma) and an angle
//! around it (hue). Because CIELAB is close to perceptually uniform, so is this: changing the hue
//! while keeping lightness and chroma fixed gives colors that look about as bright and as vivid as
//! each other, which HSL can't promise.

use crate::color::{Color, RGBColor};
use crate::colors::cielabcolor::{clamp_lightness, CIELABColor};
use crate::colors::normalize_hue;
use crate::coord::Coord;

/// A color in the CIELCH color space.
///
/// # Example
///
/// ```
/// # use swatch::prelude::*;
/// # use swatch::colors::CIELCHColor;
/// let lch = RGBColor::RED.to_lch();
/// assert!((lch.c() - 104.55).abs() <= 0.01);
/// assert!((lch.h() - 40.0).abs() <= 0.01);
/// // rotating the hue keeps lightness and chroma
/// let rotated = CIELCHColor::new(lch.l(), lch.c(), lch.h() + 400.0);
/// assert!((rotated.h() - 80.0).abs() <= 0.01);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct CIELCHColor {
    l: f64,
    c: f64,
    h: f64,
}

impl CIELCHColor {
    /// Creates a new CIELCH color. Lightness is clamped into `[0, 100]`, chroma is kept
    /// non-negative, and the hue is wrapped into `[0, 360)`.
    pub fn new(l: f64, c: f64, h: f64) -> CIELCHColor {
        CIELCHColor {
            l: clamp_lightness(l),
            c: if c > 0.0 { c } else { 0.0 },
            h: normalize_hue(h),
        }
    }

    /// The lightness, the same as CIELAB's.
    pub fn l(&self) -> f64 {
        self.l
    }

    /// The chroma: how far the color is from the gray of the same lightness.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The hue angle in degrees, from 0 (inclusive) to 360 (exclusive). This is not the same
    /// angle as the HSL hue.
    pub fn h(&self) -> f64 {
        self.h
    }
}

impl From<CIELABColor> for CIELCHColor {
    fn from(lab: CIELABColor) -> CIELCHColor {
        let c = lab.a().hypot(lab.b());
        let h = lab.b().atan2(lab.a()).to_degrees();
        CIELCHColor::new(lab.l(), c, h)
    }
}

impl From<CIELCHColor> for CIELABColor {
    fn from(lch: CIELCHColor) -> CIELABColor {
        let (sin, cos) = lch.h.to_radians().sin_cos();
        CIELABColor::new(lch.l, lch.c * cos, lch.c * sin)
    }
}

impl Color for CIELCHColor {
    fn from_rgb(rgb: RGBColor) -> CIELCHColor {
        CIELABColor::from_rgb(rgb).into()
    }

    fn to_rgb(&self) -> RGBColor {
        CIELABColor::from(*self).to_rgb()
    }
}

impl From<Coord> for CIELCHColor {
    fn from(c: Coord) -> CIELCHColor {
        CIELCHColor::new(c.x, c.y, c.z)
    }
}

impl From<CIELCHColor> for Coord {
    fn from(lch: CIELCHColor) -> Coord {
        Coord {
            x: lch.l,
            y: lch.c,
            z: lch.h,
        }
    }
}

impl From<[f64; 3]> for CIELCHColor {
    fn from(lch: [f64; 3]) -> CIELCHColor {
        CIELCHColor::new(lch[0], lch[1], lch[2])
    }
}

impl From<CIELCHColor> for [f64; 3] {
    fn from(lch: CIELCHColor) -> [f64; 3] {
        [lch.l, lch.c, lch.h]
    }
}

impl RGBColor {
    /// Creates a color from CIELCH components and an alpha.
    pub fn from_lcha(l: f64, c: f64, h: f64, alpha: f64) -> RGBColor {
        CIELCHColor::new(l, c, h).to_rgb().with_alpha(alpha)
    }

    /// This color in CIELCH. Alpha is dropped.
    pub fn to_lch(&self) -> CIELCHColor {
        CIELCHColor::from_rgb(*self)
    }
}
