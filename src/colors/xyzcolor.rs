//! The CIE 1931 XYZ space, relative to the D65 white point. Nothing outside the crate sees it: it's
//! the stage between gamma-encoded sRGB and CIELAB, and it's where sRGB's transfer function is
//! undone and redone.

use nalgebra::Vector3;

use crate::color::RGBColor;
use crate::consts::{SRGB_TO_XYZ_MAT, XYZ_TO_SRGB_MAT};

/// A color in CIE XYZ, scaled so that D65 white has `y = 100`. Components are unbounded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct XYZColor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Undoes the sRGB gamma curve.
pub(crate) fn linearize(channel: f64) -> f64 {
    if channel > 0.04045 {
        ((channel + 0.055) / 1.055).powf(2.4)
    } else {
        channel / 12.92
    }
}

/// Reapplies the sRGB gamma curve.
pub(crate) fn delinearize(value: f64) -> f64 {
    if value > 0.0031308 {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * value
    }
}

impl XYZColor {
    /// Converts a gamma-encoded sRGB color to XYZ. Alpha is dropped.
    pub(crate) fn from_rgb(rgb: RGBColor) -> XYZColor {
        let linear = Vector3::new(
            linearize(rgb.red()) * 100.0,
            linearize(rgb.green()) * 100.0,
            linearize(rgb.blue()) * 100.0,
        );
        let xyz = SRGB_TO_XYZ_MAT() * linear;
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }

    /// Converts back to sRGB. XYZ values outside the sRGB gamut are clamped, so this is only an
    /// exact inverse of [`from_rgb`](XYZColor::from_rgb) for colors that started in RGB.
    pub(crate) fn to_rgb(&self, alpha: f64) -> RGBColor {
        let xyz = Vector3::new(self.x / 100.0, self.y / 100.0, self.z / 100.0);
        let linear = XYZ_TO_SRGB_MAT() * xyz;
        RGBColor::rgba(
            delinearize(linear[0]),
            delinearize(linear[1]),
            delinearize(linear[2]),
            alpha,
        )
    }
}
