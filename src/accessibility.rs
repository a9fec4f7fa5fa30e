//! This module answers the question of whether people can actually read or tell apart a set of
//! colors. The contrast checks follow [WCAG 2.1](https://www.w3.org/TR/WCAG21/#contrast-minimum):
//! relative luminance, the contrast ratio between two luminances, and the minimum ratios for the AA
//! and AAA conformance levels. The color-blindness simulations are simple linear approximations
//! applied straight to sRGB channels: good enough to preview whether two colors stay
//! distinguishable, not a physiological model.

use nalgebra::{Matrix3, Vector3};

use crate::color::RGBColor;
use crate::consts;

/// A WCAG conformance level, which sets the minimum contrast ratio between text and its
/// background.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum WcagLevel {
    /// The usual target: 4.5:1 for normal text, 3:1 for large text.
    AA,
    /// The enhanced level: 7:1 for normal text, 4.5:1 for large text.
    AAA,
}

impl WcagLevel {
    /// The minimum contrast ratio for normal text.
    pub fn normal_text_ratio(self) -> f64 {
        match self {
            WcagLevel::AA => 4.5,
            WcagLevel::AAA => 7.0,
        }
    }

    /// The minimum contrast ratio for large text: at least 18 point, or 14 point bold.
    pub fn large_text_ratio(self) -> f64 {
        match self {
            WcagLevel::AA => 3.0,
            WcagLevel::AAA => 4.5,
        }
    }
}

/// A kind of dichromatic color blindness that [`RGBColor::simulate`] can approximate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorBlindness {
    /// No working long-wavelength (red) cones.
    Protanopia,
    /// No working medium-wavelength (green) cones.
    Deuteranopia,
    /// No working short-wavelength (blue) cones.
    Tritanopia,
}

impl ColorBlindness {
    fn matrix(self) -> Matrix3<f64> {
        match self {
            ColorBlindness::Protanopia => consts::PROTANOPIA_MAT(),
            ColorBlindness::Deuteranopia => consts::DEUTERANOPIA_MAT(),
            ColorBlindness::Tritanopia => consts::TRITANOPIA_MAT(),
        }
    }
}

// WCAG's own linearization. Its threshold is 0.03928 instead of sRGB's 0.04045, a leftover from an
// older draft of sRGB; no 8-bit channel value falls between the two.
fn wcag_linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

impl RGBColor {
    /// The WCAG relative luminance, from 0 for black to 1 for white. Alpha is ignored.
    pub fn luminance(&self) -> f64 {
        0.2126 * wcag_linearize(self.red())
            + 0.7152 * wcag_linearize(self.green())
            + 0.0722 * wcag_linearize(self.blue())
    }

    /// The WCAG contrast ratio between two colors, from 1 (identical luminance) to 21 (black
    /// against white). Symmetric in its arguments.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert!((RGBColor::BLACK.contrast_ratio(RGBColor::WHITE) - 21.0).abs() <= 1e-9);
    /// assert_eq!(RGBColor::RED.contrast_ratio(RGBColor::RED), 1.0);
    /// ```
    pub fn contrast_ratio(&self, other: RGBColor) -> f64 {
        let l1 = self.luminance();
        let l2 = other.luminance();
        (l1.max(l2) + 0.05) / (l1.min(l2) + 0.05)
    }

    /// Returns `true` if this color, used as text, has enough contrast against `background` to meet
    /// the given level. Large text has a lower bar.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let gray = RGBColor::from_hex("#777777").unwrap();
    /// assert!(!gray.is_accessible(RGBColor::WHITE, WcagLevel::AA, false));
    /// assert!(gray.is_accessible(RGBColor::WHITE, WcagLevel::AA, true));
    /// ```
    pub fn is_accessible(&self, background: RGBColor, level: WcagLevel, large_text: bool) -> bool {
        let required = if large_text {
            level.large_text_ratio()
        } else {
            level.normal_text_ratio()
        };
        self.contrast_ratio(background) >= required
    }

    /// Black or white, whichever reads better as text on this color.
    pub fn contrasting_text_color(&self) -> RGBColor {
        if self.luminance() > consts::TEXT_LUMINANCE_CUTOFF {
            RGBColor::BLACK
        } else {
            RGBColor::WHITE
        }
    }

    /// Finds a version of this color that meets the level's normal-text contrast ratio against
    /// `background`, changing only its HSL lightness. Colors that already pass are returned
    /// unchanged. Otherwise the lightness is moved in steps of 0.01, trying darker before lighter
    /// at each distance, and the first color that passes wins, so the result stays close to the
    /// original.
    ///
    /// The search never touches hue or saturation, so it can come up empty even when some other
    /// color would do. In that case the result is black on backgrounds with a luminance above 0.5
    /// and white otherwise, which may itself not pass.
    pub fn adjusted_for_accessibility(&self, background: RGBColor, level: WcagLevel) -> RGBColor {
        let required = level.normal_text_ratio();
        if self.contrast_ratio(background) >= required {
            return *self;
        }

        let hsl = self.to_hsl();
        for step in 1..=100 {
            let delta = f64::from(step) / 100.0;
            let darker = RGBColor::from_hsla(hsl.h(), hsl.s(), hsl.l() - delta, self.alpha());
            if darker.contrast_ratio(background) >= required {
                return darker;
            }
            let lighter = RGBColor::from_hsla(hsl.h(), hsl.s(), hsl.l() + delta, self.alpha());
            if lighter.contrast_ratio(background) >= required {
                return lighter;
            }
        }

        trace!(
            "no lightness of {} reaches {}:1 against {}, falling back",
            self,
            required,
            background
        );
        if background.luminance() > consts::FALLBACK_LUMINANCE_CUTOFF {
            RGBColor::BLACK
        } else {
            RGBColor::WHITE
        }
    }

    /// An approximation of how this color looks to someone with the given kind of color
    /// blindness. Alpha is kept.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// # use swatch::accessibility::ColorBlindness;
    /// // red and green are hard to tell apart without red cones
    /// let red = RGBColor::RED.simulate(ColorBlindness::Protanopia);
    /// let green = RGBColor::from_hex("#008000").unwrap().simulate(ColorBlindness::Protanopia);
    /// assert!(red.delta_e(green) < RGBColor::RED.delta_e(RGBColor::from_hex("#008000").unwrap()));
    /// ```
    pub fn simulate(&self, kind: ColorBlindness) -> RGBColor {
        let rgb = kind.matrix() * Vector3::new(self.red(), self.green(), self.blue());
        RGBColor::rgba(rgb[0], rgb[1], rgb[2], self.alpha())
    }

    /// Shorthand for [`simulate`](RGBColor::simulate) with [`ColorBlindness::Protanopia`].
    pub fn simulated_protanopia(&self) -> RGBColor {
        self.simulate(ColorBlindness::Protanopia)
    }

    /// Shorthand for [`simulate`](RGBColor::simulate) with [`ColorBlindness::Deuteranopia`].
    pub fn simulated_deuteranopia(&self) -> RGBColor {
        self.simulate(ColorBlindness::Deuteranopia)
    }

    /// Shorthand for [`simulate`](RGBColor::simulate) with [`ColorBlindness::Tritanopia`].
    pub fn simulated_tritanopia(&self) -> RGBColor {
        self.simulate(ColorBlindness::Tritanopia)
    }
}
