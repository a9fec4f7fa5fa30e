//! This module defines [`RGBColor`], the value type that every other part of the crate consumes and
//! produces, and the [`Color`] trait, which any alternate representation implements to convert to
//! and from it. An `RGBColor` holds four channels, red, green, blue and alpha, each a float between
//! 0 and 1. Out-of-range inputs are clamped rather than rejected, so numeric construction can never
//! fail: only the text constructors, which accept untrusted input, return a `Result`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::csscolor::{self, ColorParseError};

/// A trait for any representation of a color that can be converted to and from an [`RGBColor`].
/// Alternate representations don't carry an alpha channel: converting them to RGB always gives an
/// opaque color, and [`RGBColor::with_alpha`] puts a caller's alpha back. `RGBColor` itself
/// implements the trait as the identity.
///
/// # Example
///
/// ```
/// # use swatch::prelude::*;
/// # use swatch::colors::HSVColor;
/// let orange = RGBColor::new(1.0, 0.5, 0.0);
/// let hsv: HSVColor = orange.convert();
/// assert!((hsv.h() - 30.0).abs() <= 1e-9);
/// assert_eq!(hsv.convert::<RGBColor>().to_hex(), "#FF8000");
/// ```
pub trait Color: Sized {
    /// Converts an RGB color into this representation, dropping alpha.
    fn from_rgb(rgb: RGBColor) -> Self;
    /// Converts this representation into an opaque RGB color.
    fn to_rgb(&self) -> RGBColor;
    /// Converts between any two representations by way of RGB.
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

/// Clamps a channel into `[0, 1]`. NaN maps to 0 and negative zero to positive zero, so that two
/// colors that compare equal also hash equally.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        num::clamp(value, 0.0, 1.0) + 0.0
    }
}

// scales a unit channel to 0-255, rounding half away from zero: 0.5 maps to 128
fn to_u8(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

/// An immutable color in the sRGB space, with an alpha channel. All four channels are always
/// between 0 and 1: every constructor clamps. There is no way to change a color in place, and
/// every operation in this crate returns a new one.
///
/// Two colors are equal exactly when their channels are, which makes `RGBColor` usable as a
/// `HashMap` key.
///
/// # Example
///
/// ```
/// # use swatch::prelude::*;
/// let odd = RGBColor::new(1.5, -0.5, 0.5);
/// assert_eq!(odd, RGBColor::new(1.0, 0.0, 0.5));
/// assert_eq!(odd.red8(), 255);
/// assert_eq!(odd.blue8(), 128);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Channels", into = "Channels")]
pub struct RGBColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl RGBColor {
    /// Pure black, `#000000`.
    pub const BLACK: RGBColor = RGBColor::opaque(0.0, 0.0, 0.0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: RGBColor = RGBColor::opaque(1.0, 1.0, 1.0);
    /// Pure red, `#FF0000`.
    pub const RED: RGBColor = RGBColor::opaque(1.0, 0.0, 0.0);
    /// Pure green, `#00FF00`. Note that this is CSS `lime`, not CSS `green`.
    pub const GREEN: RGBColor = RGBColor::opaque(0.0, 1.0, 0.0);
    /// Pure blue, `#0000FF`.
    pub const BLUE: RGBColor = RGBColor::opaque(0.0, 0.0, 1.0);
    /// Pure yellow, `#FFFF00`.
    pub const YELLOW: RGBColor = RGBColor::opaque(1.0, 1.0, 0.0);
    /// Pure cyan, `#00FFFF`.
    pub const CYAN: RGBColor = RGBColor::opaque(0.0, 1.0, 1.0);
    /// Pure magenta, `#FF00FF`.
    pub const MAGENTA: RGBColor = RGBColor::opaque(1.0, 0.0, 1.0);
    /// A 50% gray: exactly 0.5 in every channel, which rounds to `#808080`.
    pub const GRAY: RGBColor = RGBColor::opaque(0.5, 0.5, 0.5);
    /// Fully transparent black.
    pub const CLEAR: RGBColor = RGBColor {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    // only for the constants above, which are known to be in range
    const fn opaque(red: f64, green: f64, blue: f64) -> RGBColor {
        RGBColor {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Creates an opaque color from three channels between 0 and 1, clamping each.
    pub fn new(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor::rgba(r, g, b, 1.0)
    }

    /// Creates a color from four channels between 0 and 1, clamping each.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> RGBColor {
        RGBColor {
            red: clamp_unit(r),
            green: clamp_unit(g),
            blue: clamp_unit(b),
            alpha: clamp_unit(a),
        }
    }

    /// Creates an opaque color from 8-bit channels. Each is divided by 255 and then clamped, so
    /// values outside 0-255 saturate instead of wrapping.
    pub fn from_rgb8(r: i32, g: i32, b: i32) -> RGBColor {
        RGBColor::from_rgba8(r, g, b, 255)
    }

    /// Like [`from_rgb8`](RGBColor::from_rgb8), with an 8-bit alpha channel.
    pub fn from_rgba8(r: i32, g: i32, b: i32, a: i32) -> RGBColor {
        RGBColor::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Returns a copy of this color with only the alpha channel replaced (and clamped).
    pub fn with_alpha(self, alpha: f64) -> RGBColor {
        RGBColor::rgba(self.red, self.green, self.blue, alpha)
    }

    /// The red channel, between 0 and 1.
    pub fn red(&self) -> f64 {
        self.red
    }

    /// The green channel, between 0 and 1.
    pub fn green(&self) -> f64 {
        self.green
    }

    /// The blue channel, between 0 and 1.
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// The alpha channel, between 0 (transparent) and 1 (opaque).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The red channel scaled to 0-255 and rounded to the nearest integer.
    pub fn red8(&self) -> u8 {
        to_u8(self.red)
    }

    /// The green channel scaled to 0-255 and rounded to the nearest integer.
    pub fn green8(&self) -> u8 {
        to_u8(self.green)
    }

    /// The blue channel scaled to 0-255 and rounded to the nearest integer.
    pub fn blue8(&self) -> u8 {
        to_u8(self.blue)
    }

    /// The alpha channel scaled to 0-255 and rounded to the nearest integer.
    pub fn alpha8(&self) -> u8 {
        to_u8(self.alpha)
    }

    /// Returns `true` if the alpha channel is exactly 1.
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Returns `true` if every channel of `other` is within `epsilon` of the matching channel of
    /// `self`, alpha included.
    pub fn approx_eq(&self, other: &RGBColor, epsilon: f64) -> bool {
        approx_eq!(f64, self.red, other.red, epsilon = epsilon)
            && approx_eq!(f64, self.green, other.green, epsilon = epsilon)
            && approx_eq!(f64, self.blue, other.blue, epsilon = epsilon)
            && approx_eq!(f64, self.alpha, other.alpha, epsilon = epsilon)
    }

    /// Returns `true` if the two colors are closer than one unit of CIE76 Delta-E, the usual
    /// threshold for a difference a viewer can notice. Alpha is ignored.
    pub fn visually_indistinguishable(&self, other: &RGBColor) -> bool {
        self.delta_e(*other) < 1.0
    }

    /// Parses a hex color code. Accepts an optional `#`, `0x` or `0X` prefix followed by 3, 4, 6 or
    /// 8 hex digits in either case: `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA`. The short forms double
    /// each digit, so `#ABC` is `#AABBCC`. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidHexLength`] if the digit count is wrong, and
    /// [`ColorParseError::InvalidHexDigits`] if anything other than hex digits follows the prefix.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let teal = RGBColor::from_hex("#008080").unwrap();
    /// assert_eq!(teal.green8(), 128);
    /// let faded = RGBColor::from_hex("0xF008").unwrap();
    /// assert_eq!(faded.alpha8(), 0x88);
    /// assert!(RGBColor::from_hex("#FFFFF").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<RGBColor, ColorParseError> {
        match csscolor::parse_hex(hex) {
            Ok([r, g, b, a]) => Ok(RGBColor::from((r, g, b, a))),
            Err(e) => {
                debug!("rejected hex color {:?}: {}", hex, e);
                Err(e)
            }
        }
    }

    /// Parses a CSS `rgb(r, g, b)` or `rgba(r, g, b, a)` string. The function name is
    /// case-insensitive and whitespace is allowed around every token. The channels are integers
    /// from 0 to 255 (larger values saturate) and the optional alpha is a real number from 0 to 1,
    /// defaulting to 1. Other CSS color functions, such as `hsl()`, are not accepted.
    ///
    /// # Errors
    /// Returns [`ColorParseError::InvalidColorSyntax`] for anything that isn't a well-formed
    /// `rgb()` or `rgba()` call.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// let orange = RGBColor::from_css("  RGB( 255 , 128 , 0 ) ").unwrap();
    /// assert_eq!(orange.to_hex(), "#FF8000");
    /// assert!(RGBColor::from_css("hsl(0, 100%, 50%)").is_err());
    /// ```
    pub fn from_css(css: &str) -> Result<RGBColor, ColorParseError> {
        match csscolor::parse_rgb_str(css) {
            Ok((r, g, b, a)) => Ok(RGBColor::from_rgba8(r, g, b, a)),
            Err(e) => {
                debug!("rejected CSS color {:?}: {}", css, e);
                Err(e)
            }
        }
    }

    /// The color as an uppercase hex code with a leading `#`: `#RRGGBB` when opaque, `#RRGGBBAA`
    /// otherwise.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.red8(), self.green8(), self.blue8())
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.red8(),
                self.green8(),
                self.blue8(),
                self.alpha8()
            )
        }
    }

    /// The same as [`to_hex`](RGBColor::to_hex) without the leading `#`.
    pub fn hex_value(&self) -> String {
        self.to_hex()[1..].to_string()
    }

    /// The color as a CSS string: `rgb(r, g, b)` when opaque, otherwise `rgba(r, g, b, a)` with
    /// alpha printed to two decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert_eq!(RGBColor::RED.to_css(), "rgb(255, 0, 0)");
    /// assert_eq!(RGBColor::RED.with_alpha(0.5).to_css(), "rgba(255, 0, 0, 0.50)");
    /// ```
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.red8(), self.green8(), self.blue8())
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.red8(),
                self.green8(),
                self.blue8(),
                self.alpha
            )
        }
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor::from((rgb.0, rgb.1, rgb.2, 255))
    }
}

impl From<(u8, u8, u8, u8)> for RGBColor {
    fn from(rgba: (u8, u8, u8, u8)) -> RGBColor {
        RGBColor::from_rgba8(
            i32::from(rgba.0),
            i32::from(rgba.1),
            i32::from(rgba.2),
            i32::from(rgba.3),
        )
    }
}

impl Color for RGBColor {
    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }
    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

// Channels are never NaN and never negative zero (see `clamp_unit`), so bitwise equality agrees
// with float equality and the derived `PartialEq` is a true equivalence.
impl Eq for RGBColor {}

impl Hash for RGBColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.red.to_bits().hash(state);
        self.green.to_bits().hash(state);
        self.blue.to_bits().hash(state);
        self.alpha.to_bits().hash(state);
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RGBColor {
    type Err = ColorParseError;

    /// Tries, in order, a hex code, a CSS `rgb()`/`rgba()` string and a CSS color name.
    fn from_str(s: &str) -> Result<RGBColor, ColorParseError> {
        csscolor::parse_hex(s)
            .map(|[r, g, b, a]| RGBColor::from((r, g, b, a)))
            .or_else(|_| csscolor::parse_rgb_str(s).map(|(r, g, b, a)| RGBColor::from_rgba8(r, g, b, a)))
            .or_else(|_| crate::named::lookup_name(s))
            .map_err(|_| {
                debug!("{:?} is not a hex code, CSS rgb() string or color name", s);
                ColorParseError::InvalidColorSyntax
            })
    }
}

// The serialized form of a color. Deserializing goes through `RGBColor::rgba`, so out-of-range input
// is clamped like everywhere else.
#[derive(Serialize, Deserialize)]
struct Channels {
    red: f64,
    green: f64,
    blue: f64,
    #[serde(default = "Channels::opaque")]
    alpha: f64,
}

impl Channels {
    fn opaque() -> f64 {
        1.0
    }
}

impl From<Channels> for RGBColor {
    fn from(c: Channels) -> RGBColor {
        RGBColor::rgba(c.red, c.green, c.blue, c.alpha)
    }
}

impl From<RGBColor> for Channels {
    fn from(c: RGBColor) -> Channels {
        Channels {
            red: c.red,
            green: c.green,
            blue: c.blue,
            alpha: c.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_clamping() {
        let color = RGBColor::rgba(1.5, -0.5, 0.5, 2.0);
        assert_eq!(color.red(), 1.0);
        assert_eq!(color.green(), 0.0);
        assert_eq!(color.blue(), 0.5);
        assert_eq!(color.alpha(), 1.0);
        assert_eq!(RGBColor::rgba(0.2, 0.2, 0.2, -1.0).alpha(), 0.0);
        // NaN has nowhere sensible to go, so it becomes 0
        assert_eq!(RGBColor::new(std::f64::NAN, 0.3, 0.3).red(), 0.0);
    }

    #[test]
    fn test_8bit_construction() {
        let color = RGBColor::from_rgba8(255, 128, 0, 51);
        assert_eq!(color.red(), 1.0);
        assert!((color.green() - 128.0 / 255.0).abs() <= 1e-12);
        assert_eq!(color.blue(), 0.0);
        assert!((color.alpha() - 0.2).abs() <= 1e-12);
        // out of range saturates instead of wrapping
        let clamped = RGBColor::from_rgb8(300, -4, 255);
        assert_eq!(clamped, RGBColor::MAGENTA);
        assert_eq!(RGBColor::from((0, 0, 255)), RGBColor::BLUE);
    }

    #[test]
    fn test_8bit_accessors() {
        // 0.5 * 255 = 127.5, which rounds up
        assert_eq!(RGBColor::GRAY.red8(), 128);
        assert_eq!(RGBColor::CLEAR.alpha8(), 0);
        assert_eq!(RGBColor::WHITE.green8(), 255);
        let c = RGBColor::from((12, 34, 56, 78));
        assert_eq!((c.red8(), c.green8(), c.blue8(), c.alpha8()), (12, 34, 56, 78));
    }

    #[test]
    fn test_constants() {
        assert_eq!(RGBColor::RED, RGBColor::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(RGBColor::CLEAR, RGBColor::rgba(0.0, 0.0, 0.0, 0.0));
        assert_eq!(RGBColor::YELLOW, RGBColor::new(1.0, 1.0, 0.0));
        assert_eq!(RGBColor::CYAN, RGBColor::new(0.0, 1.0, 1.0));
        assert_eq!(RGBColor::GRAY, RGBColor::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_with_alpha() {
        let faded = RGBColor::RED.with_alpha(0.25);
        assert_eq!(faded.red(), 1.0);
        assert_eq!(faded.alpha(), 0.25);
        assert_eq!(RGBColor::RED.with_alpha(7.0).alpha(), 1.0);
        // the original is untouched
        assert_eq!(RGBColor::RED.alpha(), 1.0);
    }

    #[test]
    fn test_value_semantics() {
        let mut set = HashSet::new();
        set.insert(RGBColor::new(0.2, 0.4, 0.6));
        set.insert(RGBColor::new(0.2, 0.4, 0.6));
        set.insert(RGBColor::new(-0.0, 0.4, 0.6));
        set.insert(RGBColor::new(0.0, 0.4, 0.6));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&RGBColor::from_rgb8(0, 102, 153)));
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(RGBColor::RED.to_hex(), "#FF0000");
        assert_eq!(RGBColor::BLACK.to_hex(), "#000000");
        assert_eq!(RGBColor::RED.with_alpha(0.5).to_hex(), "#FF000080");
        assert_eq!(RGBColor::RED.hex_value(), "FF0000");
        assert_eq!(RGBColor::RED.with_alpha(0.5).hex_value(), "FF000080");
        assert_eq!(RGBColor::from((10, 200, 171)).to_string(), "#0AC8AB");
    }

    #[test]
    fn test_hex_parsing() {
        let red = RGBColor::from_hex("#FF0000").unwrap();
        assert_eq!(red, RGBColor::RED);
        assert_eq!(RGBColor::from_hex("00ff00").unwrap(), RGBColor::GREEN);
        assert_eq!(RGBColor::from_hex("0x0000FF").unwrap(), RGBColor::BLUE);
        assert_eq!(RGBColor::from_hex("0XFF0000").unwrap(), RGBColor::RED);
        assert_eq!(RGBColor::from_hex("  #Ff00fF  ").unwrap(), RGBColor::MAGENTA);
        let short = RGBColor::from_hex("#ABC").unwrap();
        assert_eq!(short.to_hex(), "#AABBCC");
        let translucent = RGBColor::from_hex("#FF000080").unwrap();
        assert!((translucent.alpha() - 0.502).abs() < 0.001);
        assert_eq!(RGBColor::from_hex("#F00F").unwrap(), RGBColor::RED);
        assert_eq!(RGBColor::from_hex("#FF000000").unwrap().alpha(), 0.0);
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(RGBColor::from_hex("#FF"), Err(ColorParseError::InvalidHexLength));
        assert_eq!(RGBColor::from_hex("#FFFFF"), Err(ColorParseError::InvalidHexLength));
        assert_eq!(RGBColor::from_hex("#FFFFFFFFF"), Err(ColorParseError::InvalidHexLength));
        assert_eq!(RGBColor::from_hex(""), Err(ColorParseError::InvalidHexLength));
        assert_eq!(RGBColor::from_hex("#"), Err(ColorParseError::InvalidHexLength));
        assert_eq!(RGBColor::from_hex("#GG0000"), Err(ColorParseError::InvalidHexDigits));
        assert_eq!(RGBColor::from_hex("+FFFFF"), Err(ColorParseError::InvalidHexDigits));
        assert!(RGBColor::from_hex("invalid").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000", "#808080", "#12345678"].iter() {
            assert_eq!(RGBColor::from_hex(hex).unwrap().to_hex(), *hex);
        }
    }

    #[test]
    fn test_css_output() {
        assert_eq!(RGBColor::BLUE.to_css(), "rgb(0, 0, 255)");
        assert_eq!(RGBColor::WHITE.to_css(), "rgb(255, 255, 255)");
        assert_eq!(RGBColor::RED.with_alpha(0.5).to_css(), "rgba(255, 0, 0, 0.50)");
        assert_eq!(RGBColor::CLEAR.to_css(), "rgba(0, 0, 0, 0.00)");
    }

    #[test]
    fn test_css_parsing() {
        let orange = RGBColor::from_css("rgb(255, 128, 0)").unwrap();
        assert_eq!(orange.red(), 1.0);
        assert!((orange.green() - 128.0 / 255.0).abs() <= 1e-12);
        let translucent = RGBColor::from_css("rgba(255, 0, 0, 0.5)").unwrap();
        // 0.5 * 255 truncates to 127
        assert_eq!(translucent.alpha8(), 127);
        assert!((translucent.alpha() - 0.5).abs() < 0.01);
        assert_eq!(RGBColor::from_css("  rgb( 255 , 0 , 0 )  ").unwrap(), RGBColor::RED);
        assert_eq!(RGBColor::from_css("RGBA(0,0,0,1)").unwrap(), RGBColor::BLACK);
        assert_eq!(RGBColor::from_css("rgb(300, 0, 0)").unwrap(), RGBColor::RED);
    }

    #[test]
    fn test_css_errors() {
        for bad in ["not-a-color", "rgb(abc, 0, 0)", "hsl(0, 100%, 50%)", "", "rgb(1, 2)", "rgb(-1, 0, 0)",
                    "rgb(1, 2, 3, 4, 5)", "rgba(1, 2, 3, .)", "x rgb(1, 2, 3)"].iter() {
            assert_eq!(RGBColor::from_css(bad), Err(ColorParseError::InvalidColorSyntax), "{}", bad);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("#0F0".parse::<RGBColor>().unwrap(), RGBColor::GREEN);
        assert_eq!("rgb(0, 0, 255)".parse::<RGBColor>().unwrap(), RGBColor::BLUE);
        assert_eq!("Navy".parse::<RGBColor>().unwrap().to_hex(), "#000080");
        assert_eq!("mauve".parse::<RGBColor>(), Err(ColorParseError::InvalidColorSyntax));
    }

    #[test]
    fn test_approx_eq() {
        let a = RGBColor::new(0.3, 0.6, 0.9);
        assert!(a.approx_eq(&RGBColor::new(0.305, 0.6, 0.895), 0.01));
        assert!(!a.approx_eq(&RGBColor::new(0.3, 0.6, 0.9).with_alpha(0.5), 0.01));
        assert!(a.visually_indistinguishable(&RGBColor::new(0.301, 0.6, 0.9)));
        assert!(!a.visually_indistinguishable(&RGBColor::RED));
    }

    #[test]
    fn test_serde_round_trip() {
        let color = RGBColor::rgba(0.25, 0.5, 0.75, 0.5);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, r#"{"red":0.25,"green":0.5,"blue":0.75,"alpha":0.5}"#);
        let back: RGBColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        // deserializing clamps, and alpha is optional
        let clamped: RGBColor = serde_json::from_str(r#"{"red":2.0,"green":-1.0,"blue":0.5}"#).unwrap();
        assert_eq!(clamped, RGBColor::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_rgb_color_trait() {
        // RGB is the one representation that keeps alpha through the trait
        let faded = RGBColor::RED.with_alpha(0.3);
        assert_eq!(faded.to_rgb(), faded);
        assert_eq!(faded.convert::<RGBColor>(), faded);
    }
}
