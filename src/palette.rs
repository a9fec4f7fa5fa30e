//! Palettes built from a single color, or from nothing at all.
//!
//! The harmonies rotate the HSL hue of a color by fixed angles and keep its saturation, lightness
//! and alpha, so `RGBColor::RED.triadic()` is red, green and blue. The first color of every
//! harmony except [`analogous`](RGBColor::analogous) is the original color itself.
//!
//! The random constructors draw from [`rand::thread_rng`]; each has a `_with` twin that takes any
//! [`Rng`] instead, so that results can be reproduced from a seed.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::color::{clamp_unit, RGBColor};
use crate::consts::GOLDEN_RATIO_CONJUGATE;

// a uniform sample between the bounds, in either order, that never panics on an empty range
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f64>) -> f64 {
    let (lo, hi) = if range.start() <= range.end() {
        (*range.start(), *range.end())
    } else {
        (*range.end(), *range.start())
    };
    if lo < hi {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

impl RGBColor {
    /// This color and its complement.
    pub fn complementary(&self) -> Vec<RGBColor> {
        vec![*self, self.complement()]
    }

    /// Three colors evenly spaced around the hue wheel, starting with this one.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let triad = RGBColor::RED.triadic();
    /// assert_eq!(triad, vec![RGBColor::RED, RGBColor::GREEN, RGBColor::BLUE]);
    /// ```
    pub fn triadic(&self) -> Vec<RGBColor> {
        vec![*self, self.adjust_hue(120.0), self.adjust_hue(240.0)]
    }

    /// Four colors evenly spaced around the hue wheel, starting with this one.
    pub fn tetradic(&self) -> Vec<RGBColor> {
        vec![
            *self,
            self.adjust_hue(90.0),
            self.adjust_hue(180.0),
            self.adjust_hue(270.0),
        ]
    }

    /// This color and the two hues on either side of its complement, 150 and 210 degrees away.
    pub fn split_complementary(&self) -> Vec<RGBColor> {
        vec![*self, self.adjust_hue(150.0), self.adjust_hue(210.0)]
    }

    /// `count` colors whose hues are `angle` degrees apart, centered on this color's hue. The first
    /// hue is `count / 2` steps below (rounding down), so for an even count the palette leans
    /// towards the lower hues. A count of 0 gives an empty palette.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let hues: Vec<f64> = RGBColor::GREEN
    ///     .analogous(3, 30.0)
    ///     .iter()
    ///     .map(|c| c.to_hsl().h().round())
    ///     .collect();
    /// assert_eq!(hues, vec![90.0, 120.0, 150.0]);
    /// ```
    pub fn analogous(&self, count: usize, angle: f64) -> Vec<RGBColor> {
        let start = -((count / 2) as f64) * angle;
        (0..count)
            .map(|i| self.adjust_hue(start + i as f64 * angle))
            .collect()
    }

    /// An opaque-or-not color with uniformly random red, green and blue channels.
    pub fn random(alpha: f64) -> RGBColor {
        RGBColor::random_with(&mut rand::thread_rng(), alpha)
    }

    /// [`random`](RGBColor::random), drawing from the given generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, alpha: f64) -> RGBColor {
        RGBColor::rgba(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
            alpha,
        )
    }

    /// An opaque color with the given HSL hue and a saturation and lightness drawn uniformly from
    /// the given ranges. Ranges whose bounds are swapped are read the other way round, and bounds
    /// outside `[0, 1]` clamp like any other HSL input.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let c = RGBColor::random_with_hue(200.0, 0.5..=1.0, 0.4..=0.6);
    /// assert!((c.to_hsl().h() - 200.0).abs() < 1e-6);
    /// assert!(c.to_hsl().l() >= 0.4 - 1e-9 && c.to_hsl().l() <= 0.6 + 1e-9);
    /// ```
    pub fn random_with_hue(
        hue: f64,
        saturation: RangeInclusive<f64>,
        lightness: RangeInclusive<f64>,
    ) -> RGBColor {
        RGBColor::random_with_hue_with(&mut rand::thread_rng(), hue, saturation, lightness)
    }

    /// [`random_with_hue`](RGBColor::random_with_hue), drawing from the given generator.
    pub fn random_with_hue_with<R: Rng + ?Sized>(
        rng: &mut R,
        hue: f64,
        saturation: RangeInclusive<f64>,
        lightness: RangeInclusive<f64>,
    ) -> RGBColor {
        let s = sample(rng, &saturation);
        let l = sample(rng, &lightness);
        RGBColor::from_hsla(hue, s, l, 1.0)
    }

    /// `count` opaque colors with the given HSL saturation and lightness whose hues are spread out
    /// by repeatedly stepping around the wheel by the golden ratio, starting from a random hue.
    /// Consecutive colors are always far apart in hue, and no two colors share a hue no matter how
    /// many are asked for.
    pub fn distinct_palette(count: usize, saturation: f64, lightness: f64) -> Vec<RGBColor> {
        RGBColor::distinct_palette_with(&mut rand::thread_rng(), count, saturation, lightness)
    }

    /// [`distinct_palette`](RGBColor::distinct_palette), drawing the starting hue from the given
    /// generator.
    pub fn distinct_palette_with<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        saturation: f64,
        lightness: f64,
    ) -> Vec<RGBColor> {
        let (s, l) = (clamp_unit(saturation), clamp_unit(lightness));
        let mut hue: f64 = rng.gen_range(0.0..=1.0);
        (0..count)
            .map(|_| {
                hue = (hue + GOLDEN_RATIO_CONJUGATE) % 1.0;
                RGBColor::from_hsla(hue * 360.0, s, l, 1.0)
            })
            .collect()
    }
}
