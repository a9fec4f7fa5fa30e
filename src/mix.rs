//! This module combines two colors into one. Mixing interpolates between them channel by channel in
//! gamma-encoded sRGB, which is cheap and matches what CSS and most design tools do; for a mix that
//! stays bright through the middle, see [`RGBColor::mix_lab`]. The blend modes treat one color as a
//! base and the other as a layer painted over it, the way image editors do, and always keep the
//! base color's alpha.
//!
//! Note that none of this behaves like mixing paint: monitors mix light additively, so blue mixed
//! with yellow gives gray, not green.

use crate::color::{clamp_unit, RGBColor};

/// A way of combining a base color with a layer color, as in image editors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Multiplies the channels. Never lighter than either input: white leaves a color unchanged and
    /// black gives black.
    Multiply,
    /// Inverts both colors, multiplies, and inverts the result. Never darker than either input:
    /// black leaves a color unchanged and white gives white.
    Screen,
    /// Multiplies where the base is dark and screens where it's light, which raises contrast while
    /// keeping the base's highlights and shadows.
    Overlay,
}

impl BlendMode {
    /// Blends a single channel of a base color with the matching channel of a layer.
    pub fn blend_channel(self, base: f64, layer: f64) -> f64 {
        match self {
            BlendMode::Multiply => base * layer,
            BlendMode::Screen => 1.0 - (1.0 - base) * (1.0 - layer),
            BlendMode::Overlay => {
                if base < 0.5 {
                    2.0 * base * layer
                } else {
                    1.0 - 2.0 * (1.0 - base) * (1.0 - layer)
                }
            }
        }
    }
}

impl RGBColor {
    /// Mixes two colors by linear interpolation of every channel, alpha included. `ratio` is
    /// clamped into `[0, 1]`: 0 gives `self` and 1 gives `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let purple = RGBColor::RED.mix(RGBColor::BLUE, 0.5);
    /// assert_eq!(purple.to_hex(), "#800080");
    /// assert_eq!(RGBColor::RED.mix(RGBColor::BLUE, 2.0), RGBColor::BLUE);
    /// ```
    pub fn mix(&self, other: RGBColor, ratio: f64) -> RGBColor {
        let t = clamp_unit(ratio);
        // weighted sum rather than a + (b - a) * t, so that both ends are exact
        let lerp = |a: f64, b: f64| a * (1.0 - t) + b * t;
        RGBColor::rgba(
            lerp(self.red(), other.red()),
            lerp(self.green(), other.green()),
            lerp(self.blue(), other.blue()),
            lerp(self.alpha(), other.alpha()),
        )
    }

    /// Mixes with white: `amount` is how much white to add, from 0 to 1.
    pub fn tint(&self, amount: f64) -> RGBColor {
        self.mix(RGBColor::WHITE, amount)
    }

    /// Mixes with black: `amount` is how much black to add, from 0 to 1.
    pub fn shade(&self, amount: f64) -> RGBColor {
        self.mix(RGBColor::BLACK, amount)
    }

    /// Blends `other` onto this color with the given mode, keeping this color's alpha.
    pub fn blend(&self, other: RGBColor, mode: BlendMode) -> RGBColor {
        RGBColor::rgba(
            mode.blend_channel(self.red(), other.red()),
            mode.blend_channel(self.green(), other.green()),
            mode.blend_channel(self.blue(), other.blue()),
            self.alpha(),
        )
    }

    /// Shorthand for [`blend`](RGBColor::blend) with [`BlendMode::Multiply`].
    pub fn multiply(&self, other: RGBColor) -> RGBColor {
        self.blend(other, BlendMode::Multiply)
    }

    /// Shorthand for [`blend`](RGBColor::blend) with [`BlendMode::Screen`].
    pub fn screen(&self, other: RGBColor) -> RGBColor {
        self.blend(other, BlendMode::Screen)
    }

    /// Shorthand for [`blend`](RGBColor::blend) with [`BlendMode::Overlay`].
    pub fn overlay(&self, other: RGBColor) -> RGBColor {
        self.blend(other, BlendMode::Overlay)
    }
}
