//! This module defines a generalized trait for a colormap, a mapping of the numbers between 0 and 1
//! to colors in a continuous way, along with the one colormap most uses need: a gradient between
//! two colors. The discrete gradients on [`RGBColor`] (stepped gradients, multi-stop gradients,
//! tints, shades and tonal scales) all sample such a gradient at evenly spaced points.

use crate::color::{clamp_unit, Color, RGBColor};

/// A trait that models a colormap, a continuous mapping of the numbers between 0 and 1 to
/// colors. Any color output format is supported, but it must be consistent.
pub trait ColorMap<T: Color> {
    /// Maps a given number between 0 and 1 to a given output color. This should never fail or panic:
    /// numbers outside the range should map to some color that marks them as out of range, or be
    /// clamped.
    fn transform_single(&self, x: f64) -> T;
    /// Maps a given collection of numbers between 0 and 1 to a vector of colors. Does not evaluate
    /// lazily, because the colormap could have some sort of state that changes between iterations
    /// otherwise.
    fn transform<U: IntoIterator<Item = f64>>(&self, inputs: U) -> Vec<T> {
        inputs.into_iter().map(|x| self.transform_single(x)).collect()
    }
}

/// The space a gradient interpolates in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Interpolation {
    /// Straight lines between gamma-encoded sRGB channels: what CSS gradients do.
    Linear,
    /// Straight lines in CIELAB, which keeps the middle of the gradient from turning dark and
    /// muddy between very different hues.
    Perceptual,
}

impl From<bool> for Interpolation {
    /// `true` means perceptual.
    fn from(perceptual: bool) -> Interpolation {
        if perceptual {
            Interpolation::Perceptual
        } else {
            Interpolation::Linear
        }
    }
}

/// A gradient colormap: a continuous, evenly-spaced shift between two colors A and B such that 0 maps
/// to A, 1 maps to B, and any number in between maps to a weighted mix of them. Out-of-range values
/// are simply clamped to the correct range: calling this on negative numbers will return A, and
/// calling this on numbers larger than 1 will return B. Alpha is interpolated along with the color.
///
/// # Example
///
/// ```
/// # use swatch::prelude::*;
/// # use swatch::colormap::{ColorMap, GradientColorMap};
/// let cmap = GradientColorMap::new_linear(RGBColor::RED, RGBColor::BLUE);
/// let colors: Vec<RGBColor> = cmap.transform(vec![-1.0, 0.2, 0.8, 1.0]);
/// let hexes: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
/// assert_eq!(hexes, vec!["#FF0000", "#CC0033", "#3300CC", "#0000FF"]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientColorMap {
    /// The start of the gradient. Calling this colormap on 0 or any negative number returns this color.
    pub start: RGBColor,
    /// The end of the gradient. Calling this colormap on 1 or any larger number returns this color.
    pub end: RGBColor,
    /// The space the gradient runs through.
    pub interpolation: Interpolation,
}

impl GradientColorMap {
    /// Constructs a new gradient from two colors in the given space.
    pub fn new(start: RGBColor, end: RGBColor, interpolation: Interpolation) -> GradientColorMap {
        GradientColorMap {
            start,
            end,
            interpolation,
        }
    }
    /// Constructs a new gradient that interpolates in sRGB.
    pub fn new_linear(start: RGBColor, end: RGBColor) -> GradientColorMap {
        GradientColorMap::new(start, end, Interpolation::Linear)
    }
    /// Constructs a new gradient that interpolates in CIELAB.
    pub fn new_perceptual(start: RGBColor, end: RGBColor) -> GradientColorMap {
        GradientColorMap::new(start, end, Interpolation::Perceptual)
    }

    /// Samples the gradient at `steps` evenly spaced points, both ends included. Fewer than two
    /// steps can't include both ends, so they give just the start color.
    pub fn steps(&self, steps: usize) -> Vec<RGBColor> {
        if steps <= 1 {
            return vec![self.start];
        }
        let last = (steps - 1) as f64;
        ColorMap::<RGBColor>::transform(self, (0..steps).map(|i| i as f64 / last))
    }
}

impl<T: Color> ColorMap<T> for GradientColorMap {
    fn transform_single(&self, x: f64) -> T {
        let t = clamp_unit(x);
        let rgb = match self.interpolation {
            Interpolation::Linear => self.start.mix(self.end, t),
            Interpolation::Perceptual => self.start.mix_lab(self.end, t),
        };
        T::from_rgb(rgb)
    }
}

impl RGBColor {
    /// A gradient from this color to `end` with `steps` colors, both ends included. With
    /// `perceptual` the steps are evenly spaced in CIELAB, otherwise in sRGB. A `steps` of 0 or 1
    /// gives just this color.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let steps = RGBColor::RED.gradient(RGBColor::BLUE, 5, false);
    /// assert_eq!(steps.len(), 5);
    /// assert_eq!(steps[2], RGBColor::new(0.5, 0.0, 0.5));
    /// assert_eq!(RGBColor::RED.gradient(RGBColor::BLUE, 0, true), vec![RGBColor::RED]);
    /// ```
    pub fn gradient(&self, end: RGBColor, steps: usize, perceptual: bool) -> Vec<RGBColor> {
        GradientColorMap::new(*self, end, perceptual.into()).steps(steps)
    }

    /// A gradient that runs from this color through each of `stops` in turn, with
    /// `steps_per_segment` colors between each consecutive pair. Each color where two segments
    /// meet appears once, so three colors with five steps per segment give nine colors. With no
    /// stops the result is just this color.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let rainbow = RGBColor::RED.multi_gradient(&[RGBColor::YELLOW, RGBColor::BLUE], 5, false);
    /// assert_eq!(rainbow.len(), 9);
    /// assert_eq!(rainbow[4], RGBColor::YELLOW);
    /// assert_eq!(rainbow[8], RGBColor::BLUE);
    /// ```
    pub fn multi_gradient(
        &self,
        stops: &[RGBColor],
        steps_per_segment: usize,
        perceptual: bool,
    ) -> Vec<RGBColor> {
        if stops.is_empty() {
            return vec![*self];
        }
        let mut all = Vec::with_capacity(stops.len() + 1);
        all.push(*self);
        all.extend_from_slice(stops);

        let segments = all.len() - 1;
        let mut result = Vec::new();
        for (i, pair) in all.windows(2).enumerate() {
            let mut segment = pair[0].gradient(pair[1], steps_per_segment, perceptual);
            // the end of this segment is the start of the next
            if i + 1 < segments {
                segment.pop();
            }
            result.append(&mut segment);
        }
        result
    }

    /// `count` colors running from this color to white in sRGB.
    pub fn tints(&self, count: usize) -> Vec<RGBColor> {
        self.gradient(RGBColor::WHITE, count, false)
    }

    /// `count` colors running from this color to black in sRGB.
    pub fn shades(&self, count: usize) -> Vec<RGBColor> {
        self.gradient(RGBColor::BLACK, count, false)
    }

    /// `count` colors running from black, through this color, to white. This color sits at index
    /// `count / 2`, which is the exact middle when `count` is odd.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let scale = RGBColor::RED.tonal_scale(5);
    /// let hexes: Vec<String> = scale.iter().map(|c| c.to_hex()).collect();
    /// assert_eq!(hexes, vec!["#000000", "#800000", "#FF0000", "#FF8080", "#FFFFFF"]);
    /// ```
    pub fn tonal_scale(&self, count: usize) -> Vec<RGBColor> {
        let half = count / 2;
        let mut scale = RGBColor::BLACK.gradient(*self, half + 1, false);
        scale.pop();
        scale.extend(self.gradient(RGBColor::WHITE, count - half, false));
        scale
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::HSLColor;

    #[test]
    fn test_linear_gradient() {
        let red = RGBColor::from_hex("#ff0000").unwrap();
        let blue = RGBColor::from_hex("#0000ff").unwrap();
        let cmap = GradientColorMap::new_linear(red, blue);
        let vals = vec![-0.2, 0., 1. / 15., 1. / 5., 4. / 5., 1., 100.];
        let cols: Vec<RGBColor> = cmap.transform(vals);
        let strs = vec!["#FF0000", "#FF0000", "#EE0011", "#CC0033", "#3300CC", "#0000FF", "#0000FF"];
        for (i, col) in cols.into_iter().enumerate() {
            assert_eq!(col.to_string(), strs[i]);
        }
    }

    #[test]
    fn test_perceptual_gradient() {
        let cmap = GradientColorMap::new_perceptual(RGBColor::RED, RGBColor::BLUE);
        let start: RGBColor = cmap.transform_single(-5.0);
        let end: RGBColor = cmap.transform_single(5.0);
        assert!(start.approx_eq(&RGBColor::RED, 1e-4));
        assert!(end.approx_eq(&RGBColor::BLUE, 1e-4));
        // grays stay in gamut, so CIELAB lightness moves exactly evenly between them
        let grays = GradientColorMap::new_perceptual(RGBColor::BLACK, RGBColor::WHITE);
        let quarter: RGBColor = grays.transform_single(0.25);
        assert!((quarter.to_lab().l() - 25.0).abs() <= 0.01);
        // which is not what sRGB does
        let linear: RGBColor = GradientColorMap::new_linear(RGBColor::BLACK, RGBColor::WHITE).transform_single(0.25);
        assert!((linear.to_lab().l() - 25.0).abs() > 1.0);
    }

    #[test]
    fn test_colormap_output_type() {
        let cmap = GradientColorMap::new_linear(RGBColor::RED, RGBColor::YELLOW);
        let mid: HSLColor = cmap.transform_single(0.5);
        assert!((mid.h() - 30.0).abs() <= 1e-9);
    }

    #[test]
    fn test_gradient_steps() {
        let steps = RGBColor::RED.gradient(RGBColor::BLUE, 5, false);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps[0], RGBColor::RED);
        assert_eq!(steps[1], RGBColor::new(0.75, 0.0, 0.25));
        assert_eq!(steps[4], RGBColor::BLUE);
        assert_eq!(RGBColor::RED.gradient(RGBColor::BLUE, 1, false), vec![RGBColor::RED]);
        assert_eq!(RGBColor::RED.gradient(RGBColor::BLUE, 2, false), vec![RGBColor::RED, RGBColor::BLUE]);
        let perceptual = RGBColor::RED.gradient(RGBColor::BLUE, 7, true);
        assert_eq!(perceptual.len(), 7);
        assert!(perceptual[6].approx_eq(&RGBColor::BLUE, 1e-4));
    }

    #[test]
    fn test_multi_gradient() {
        let colors = RGBColor::RED.multi_gradient(&[RGBColor::YELLOW, RGBColor::BLUE], 5, false);
        assert_eq!(colors.len(), 9);
        assert_eq!(colors[0], RGBColor::RED);
        assert_eq!(colors[2], RGBColor::new(1.0, 0.5, 0.0));
        assert_eq!(colors[4], RGBColor::YELLOW);
        assert_eq!(colors.iter().filter(|&&c| c == RGBColor::YELLOW).count(), 1);
        let four = RGBColor::RED.multi_gradient(&[RGBColor::GREEN, RGBColor::BLUE, RGBColor::WHITE], 3, false);
        assert_eq!(four.len(), 7);
        assert_eq!(RGBColor::RED.multi_gradient(&[], 5, true), vec![RGBColor::RED]);
    }

    #[test]
    fn test_tints_and_shades() {
        let tints = RGBColor::BLUE.tints(3);
        assert_eq!(tints, vec![RGBColor::BLUE, RGBColor::new(0.5, 0.5, 1.0), RGBColor::WHITE]);
        let shades = RGBColor::BLUE.shades(3);
        assert_eq!(shades, vec![RGBColor::BLUE, RGBColor::new(0.0, 0.0, 0.5), RGBColor::BLACK]);
        assert!(RGBColor::BLUE.tints(0).len() == 1);
    }

    #[test]
    fn test_tonal_scale() {
        let scale = RGBColor::BLUE.tonal_scale(9);
        assert_eq!(scale.len(), 9);
        assert_eq!(scale[0], RGBColor::BLACK);
        assert_eq!(scale[4], RGBColor::BLUE);
        assert_eq!(scale[8], RGBColor::WHITE);
        // even counts put the color just past the middle
        let even = RGBColor::BLUE.tonal_scale(4);
        assert_eq!(even.len(), 4);
        assert_eq!(even[2], RGBColor::BLUE);
        assert_eq!(even[3], RGBColor::WHITE);
    }
}
