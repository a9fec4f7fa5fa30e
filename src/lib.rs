//! Swatch is a small library for working with colors as plain values. Everything revolves around a
//! single immutable type, [`RGBColor`](color::RGBColor): four channels between 0 and 1 that are
//! clamped on construction and never change afterwards. Around it sit the usual alternate
//! representations (HSL, HSV, CIELAB and CIELCH), codecs for hex and CSS strings, and a set of
//! derived operations: lightening and darkening, blend modes, gradients, harmonies, WCAG contrast
//! checks and color-blindness simulation.
//!
//! Every operation is a pure function of its inputs, so colors can be copied, hashed, used as map
//! keys and shared freely across threads.
//!
//! ```
//! use swatch::prelude::*;
//!
//! let coral: RGBColor = "coral".parse().unwrap();
//! let hsl = coral.to_hsl();
//! assert_eq!(coral.to_hex(), "#FF7F50");
//! assert!((hsl.h() - 16.1).abs() < 0.1);
//! assert!(RGBColor::BLACK.is_accessible(coral, WcagLevel::AA, false));
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.9692660 with -0.969_266_0
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate nalgebra;
extern crate num;
extern crate rand;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate log;
#[macro_use]
extern crate float_cmp;

pub mod accessibility;
pub mod adjust;
pub mod color;
pub mod colormap;
pub mod colors;
mod consts;
pub mod coord;
mod csscolor;
pub mod mix;
pub mod named;
pub mod palette;
pub mod prelude;

pub use csscolor::ColorParseError;
