//! Single-color adjustments: lightness and saturation in HSL, hue rotation, inversion and grayscale.
//! Every method keeps the color's alpha and returns a new color.

use crate::color::{clamp_unit, RGBColor};

impl RGBColor {
    // rebuilds from HSL with this color's alpha
    fn with_hsl(&self, h: f64, s: f64, l: f64) -> RGBColor {
        RGBColor::from_hsla(h, s, l, self.alpha())
    }

    /// Raises HSL lightness by `amount`, which is clamped into `[0, 1]`. Lightness stops at 1.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert_eq!(RGBColor::RED.lighten(0.25).to_hex(), "#FF8080");
    /// assert_eq!(RGBColor::RED.lighten(1.0), RGBColor::WHITE);
    /// ```
    pub fn lighten(&self, amount: f64) -> RGBColor {
        let hsl = self.to_hsl();
        self.with_hsl(hsl.h(), hsl.s(), hsl.l() + clamp_unit(amount))
    }

    /// Lowers HSL lightness by `amount`, which is clamped into `[0, 1]`. Lightness stops at 0.
    pub fn darken(&self, amount: f64) -> RGBColor {
        let hsl = self.to_hsl();
        self.with_hsl(hsl.h(), hsl.s(), hsl.l() - clamp_unit(amount))
    }

    /// Raises HSL saturation by `amount`, which is clamped into `[0, 1]`. Saturation stops at 1.
    pub fn saturate(&self, amount: f64) -> RGBColor {
        let hsl = self.to_hsl();
        self.with_hsl(hsl.h(), hsl.s() + clamp_unit(amount), hsl.l())
    }

    /// Lowers HSL saturation by `amount`, which is clamped into `[0, 1]`. Saturation stops at 0.
    pub fn desaturate(&self, amount: f64) -> RGBColor {
        let hsl = self.to_hsl();
        self.with_hsl(hsl.h(), hsl.s() - clamp_unit(amount), hsl.l())
    }

    /// Rotates the HSL hue by some number of degrees, which can be negative or larger than a full
    /// turn. Saturation and lightness are kept.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert_eq!(RGBColor::RED.adjust_hue(120.0), RGBColor::GREEN);
    /// assert_eq!(RGBColor::RED.adjust_hue(-120.0), RGBColor::BLUE);
    /// ```
    pub fn adjust_hue(&self, degrees: f64) -> RGBColor {
        let hsl = self.to_hsl();
        self.with_hsl(hsl.h() + degrees, hsl.s(), hsl.l())
    }

    /// The color on the opposite side of the HSL hue wheel.
    pub fn complement(&self) -> RGBColor {
        self.adjust_hue(180.0)
    }

    /// The negative of this color: every channel `c` becomes `1 - c`. Unlike
    /// [`complement`](RGBColor::complement) this also flips lightness, so white becomes black.
    pub fn inverted(&self) -> RGBColor {
        RGBColor::rgba(
            1.0 - self.red(),
            1.0 - self.green(),
            1.0 - self.blue(),
            self.alpha(),
        )
    }

    /// A gray with the Rec. 709 weighted average of this color's channels. The weights are applied
    /// to the stored, gamma-encoded channels, so this is a quick approximation rather than the
    /// exact relative luminance of [`luminance`](RGBColor::luminance).
    pub fn grayscale(&self) -> RGBColor {
        let gray = 0.2126 * self.red() + 0.7152 * self.green() + 0.0722 * self.blue();
        RGBColor::rgba(gray, gray, gray, self.alpha())
    }
}
