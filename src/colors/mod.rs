//! This module contains the alternate representations of a color, each of which implements
//! [`Color`](crate::color::Color). For convenience, each main type is imported into this module's
//! namespace directly. The XYZ space is only an intermediate step on the way to CIELAB and is not
//! exported.

pub mod cielabcolor;
pub mod cielchcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub(crate) mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;

/// Wraps any angle in degrees into `[0, 360)`. A non-finite angle has no meaningful hue and becomes
/// 0.
pub(crate) fn normalize_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // tiny negative inputs can round up to exactly 360 after wrapping
    if wrapped.is_finite() && wrapped < 360.0 {
        wrapped + 0.0
    } else {
        0.0
    }
}

// HSL and HSV share the same hexagonal hue: the RGB cube is tilted onto one of its corners and
// projected onto a hexagon, and hue is the proportion of the way around that hexagon, treated as
// degrees. No trig involved. More info:
// https://en.wikipedia.org/wiki/HSL_and_HSV#Formal_derivation

/// The largest component, and the difference between the largest and smallest (the hexagonal
/// chroma), of a set of RGB channels.
pub(crate) fn max_and_chroma(r: f64, g: f64, b: f64) -> (f64, f64) {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    (max_c, max_c - min_c)
}

/// The hexagonal hue of a set of RGB channels, given their largest component and chroma. Gray has
/// no hue: it gets 0.
pub(crate) fn hexagonal_hue(r: f64, g: f64, b: f64, max_c: f64, chroma: f64) -> f64 {
    let hue = if chroma == 0.0 {
        0.0
    } else if max_c == r {
        // in red sector: adding green moves up on the hexagon, adding blue moves down
        ((g - b) / chroma % 6.0) * 60.0
    } else if max_c == g {
        ((b - r) / chroma + 2.0) * 60.0
    } else {
        ((r - g) / chroma + 4.0) * 60.0
    };
    normalize_hue(hue)
}

/// The inverse of [`hexagonal_hue`]: the RGB channels of the point with the given hue and chroma
/// whose smallest component is 0. Adding the same offset to each gives the final color.
pub(crate) fn hexagon_point(hue: f64, chroma: f64) -> (f64, f64, f64) {
    // the second-largest component; the largest is the chroma itself
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hue_normalization() {
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(45.5), 45.5);
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert_eq!(normalize_hue(std::f64::NAN), 0.0);
        assert_eq!(normalize_hue(std::f64::INFINITY), 0.0);
    }

    #[test]
    fn test_hexagon_sectors() {
        assert_eq!(hexagon_point(0.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hexagon_point(60.0, 1.0), (1.0, 1.0, 0.0));
        assert_eq!(hexagon_point(120.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(hexagon_point(180.0, 0.5), (0.0, 0.5, 0.5));
        assert_eq!(hexagon_point(240.0, 1.0), (0.0, 0.0, 1.0));
        assert_eq!(hexagon_point(300.0, 1.0), (1.0, 0.0, 1.0));
    }

    #[test]
    fn test_hue_of_primaries() {
        let hue = |r: f64, g: f64, b: f64| {
            let (max_c, chroma) = max_and_chroma(r, g, b);
            hexagonal_hue(r, g, b, max_c, chroma)
        };
        assert_eq!(hue(1.0, 0.0, 0.0), 0.0);
        assert_eq!(hue(0.0, 1.0, 0.0), 120.0);
        assert_eq!(hue(0.0, 0.0, 1.0), 240.0);
        assert_eq!(hue(1.0, 0.0, 1.0), 300.0);
        assert_eq!(hue(0.3, 0.3, 0.3), 0.0);
    }
}
