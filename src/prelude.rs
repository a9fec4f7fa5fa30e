//! This module brings the most common Swatch functionality under a single namespace, to prevent
//! excessive imports. The prelude includes every trait in Swatch, the ubiquitous [`RGBColor`], its
//! parse error [`ColorParseError`], and the small enums that the methods on [`RGBColor`] take as
//! arguments. The alternate color spaces in the [`colors`](crate::colors) module are not included.

pub use crate::accessibility::{ColorBlindness, WcagLevel};
pub use crate::color::{Color, RGBColor};
pub use crate::colormap::{ColorMap, GradientColorMap, Interpolation};
pub use crate::csscolor::ColorParseError;
pub use crate::mix::BlendMode;
pub use crate::named::NamedColor;
