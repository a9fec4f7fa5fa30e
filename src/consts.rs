//! This file provides the fixed constants used for color space conversion and simulation. The
//! matrices are given explicitly in both directions instead of inverting one of them at runtime:
//! the published sRGB pair is what every other implementation uses, and inverting numerically would
//! introduce small disagreements with them in the last few digits.

use nalgebra::Matrix3;

/// The D65 reference white, in XYZ scaled so that Y is 100.
pub const D65_WHITE_POINT: [f64; 3] = [95.047, 100.000, 108.883];

/// The threshold of the piecewise CIELAB companding function.
pub const LAB_DELTA: f64 = 6.0 / 29.0;

/// Backgrounds with a relative luminance above this get black text, the rest white. This is the
/// luminance at which black and white text have the same contrast ratio.
pub const TEXT_LUMINANCE_CUTOFF: f64 = 0.179;

/// When no lightness gives enough contrast, backgrounds with a relative luminance above this get
/// black and the rest white.
pub const FALLBACK_LUMINANCE_CUTOFF: f64 = 0.5;

/// The fractional part of the golden ratio. Stepping around the hue circle by this fraction of a
/// turn spreads any number of hues about as far apart as they can be.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

/// Linear sRGB (scaled to 0-100) to XYZ under D65.
#[allow(non_snake_case)]
pub fn SRGB_TO_XYZ_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.4124564, 0.3575761, 0.1804375,
        0.2126729, 0.7151522, 0.0721750,
        0.0193339, 0.1191920, 0.9503041,
    )
}

/// XYZ under D65 (scaled to 0-1) to linear sRGB.
#[allow(non_snake_case)]
pub fn XYZ_TO_SRGB_MAT() -> Matrix3<f64> {
    Matrix3::new(
        03.2404542, -1.5371385, -0.4985314,
        -0.9692660, 01.8760108, 00.0415560,
        00.0556434, -0.2040259, 01.0572252,
    )
}

// The three color-blindness approximations below work directly on gamma-encoded channels. They are
// coarse, but cheap and good enough to preview whether two colors stay distinguishable.

#[allow(non_snake_case)]
pub fn PROTANOPIA_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.567, 0.433, 0.000,
        0.558, 0.442, 0.000,
        0.000, 0.242, 0.758,
    )
}

#[allow(non_snake_case)]
pub fn DEUTERANOPIA_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.625, 0.375, 0.000,
        0.700, 0.300, 0.000,
        0.000, 0.300, 0.700,
    )
}

#[allow(non_snake_case)]
pub fn TRITANOPIA_MAT() -> Matrix3<f64> {
    Matrix3::new(
        0.950, 0.050, 0.000,
        0.000, 0.433, 0.567,
        0.000, 0.475, 0.525,
    )
}
