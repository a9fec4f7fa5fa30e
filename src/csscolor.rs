//! This file handles the two textual color formats that aren't names: hex codes and the CSS
//! `rgb()`/`rgba()` functional notation. The parsers here only tokenize and validate; turning the
//! resulting channels into an [`RGBColor`](crate::color::RGBColor), including clamping, happens in
//! `color.rs`. Only integer channels are supported in `rgb()`: percentages and the other CSS color
//! functions are rejected as invalid syntax.

use std::error::Error;
use std::fmt;

use regex::Regex;

/// An error in parsing a color from text.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum ColorParseError {
    /// A hex code had a number of digits other than 3, 4, 6, or 8 after its prefix.
    InvalidHexLength,
    /// A hex code had the right length but contained something other than `0-9`, `a-f` or `A-F`.
    InvalidHexDigits,
    /// A string wasn't a well-formed `rgb()` or `rgba()` call, or matched none of the accepted
    /// formats at all.
    InvalidColorSyntax,
    /// A string wasn't one of the recognized CSS color names.
    UnknownColorName,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            ColorParseError::InvalidHexLength => "hex color must have 3, 4, 6, or 8 digits",
            ColorParseError::InvalidHexDigits => "hex color contains non-hexadecimal characters",
            ColorParseError::InvalidColorSyntax => "invalid color syntax",
            ColorParseError::UnknownColorName => "unknown color name",
        };
        write!(f, "{}", msg)
    }
}

impl Error for ColorParseError {}

lazy_static! {
    // Three integer channels and an optional fractional alpha. Either function name takes either
    // form, and the whole string has to match.
    static ref RGB_FUNC: Regex = Regex::new(
        r"(?i)^\s*rgba?\s*\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)\s*$"
    ).expect("rgb() pattern is valid");
}

/// Parses a hex code into four 8-bit channels, filling in an opaque alpha when the code doesn't
/// have one.
pub(crate) fn parse_hex(hex: &str) -> Result<[u8; 4], ColorParseError> {
    let trimmed = hex.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    // length first: a wrong-length string is reported as such even if it's also full of junk
    match digits.len() {
        3 | 4 | 6 | 8 => {}
        _ => return Err(ColorParseError::InvalidHexLength),
    }
    // checking explicitly rules out the signs that u8::from_str_radix would otherwise let through
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigits);
    }

    let nibbles: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();
    let channels: Vec<u8> = match nibbles.len() {
        // short forms repeat each digit: F -> FF
        3 | 4 => nibbles.iter().map(|n| n * 17).collect(),
        _ => nibbles.chunks(2).map(|pair| pair[0] * 16 + pair[1]).collect(),
    };
    let alpha = channels.get(3).copied().unwrap_or(255);
    Ok([channels[0], channels[1], channels[2], alpha])
}

/// Parses a CSS `rgb()` or `rgba()` string into four 8-bit-scale channels. The channels aren't
/// clamped here, so `rgb(300, 0, 0)` gives 300 for red, but a channel too large for an `i32` is
/// an error. Alpha is scaled to 0-255 and truncated toward zero.
pub(crate) fn parse_rgb_str(css: &str) -> Result<(i32, i32, i32, i32), ColorParseError> {
    let caps = RGB_FUNC
        .captures(css)
        .ok_or(ColorParseError::InvalidColorSyntax)?;
    let channel = |i: usize| -> Result<i32, ColorParseError> {
        caps[i]
            .parse::<i32>()
            .map_err(|_| ColorParseError::InvalidColorSyntax)
    };
    let alpha = match caps.get(4) {
        Some(a) => {
            let value: f64 = a
                .as_str()
                .parse()
                .map_err(|_| ColorParseError::InvalidColorSyntax)?;
            (value * 255.0) as i32
        }
        None => 255,
    };
    Ok((channel(1)?, channel(2)?, channel(3)?, alpha))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex("#123456"), Ok([0x12, 0x34, 0x56, 0xFF]));
        assert_eq!(parse_hex("0xabcdef01"), Ok([0xAB, 0xCD, 0xEF, 0x01]));
        assert_eq!(parse_hex("F0A"), Ok([0xFF, 0x00, 0xAA, 0xFF]));
        assert_eq!(parse_hex("\t#1234\n"), Ok([0x11, 0x22, 0x33, 0x44]));
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(parse_hex("#12345"), Err(ColorParseError::InvalidHexLength));
        assert_eq!(parse_hex("##123456"), Err(ColorParseError::InvalidHexLength));
        assert_eq!(parse_hex("#12345G"), Err(ColorParseError::InvalidHexDigits));
        assert_eq!(parse_hex("#-12"), Err(ColorParseError::InvalidHexDigits));
        // multibyte characters have to fail cleanly instead of slicing through a char
        assert_eq!(parse_hex("#ééé"), Err(ColorParseError::InvalidHexDigits));
    }

    #[test]
    fn test_rgb_str_parsing() {
        assert_eq!(parse_rgb_str("rgb(125, 20, 0)"), Ok((125, 20, 0, 255)));
        assert_eq!(parse_rgb_str("rgba(1,2,3,0.25)"), Ok((1, 2, 3, 63)));
        assert_eq!(parse_rgb_str("rgba(1, 2, 3)"), Ok((1, 2, 3, 255)));
        assert_eq!(parse_rgb_str("rgb(1, 2, 3, .5)"), Ok((1, 2, 3, 127)));
        assert_eq!(parse_rgb_str("Rgb(1000, 2, 3)"), Ok((1000, 2, 3, 255)));
    }

    #[test]
    fn test_rgb_str_errors() {
        assert_eq!(parse_rgb_str("rgb(99999999999, 0, 0)"), Err(ColorParseError::InvalidColorSyntax));
        assert_eq!(parse_rgb_str("rgb(20%, 0, 0)"), Err(ColorParseError::InvalidColorSyntax));
        assert_eq!(parse_rgb_str("rgb(1.5, 0, 0)"), Err(ColorParseError::InvalidColorSyntax));
        assert_eq!(parse_rgb_str("rgb(1, 2, 3"), Err(ColorParseError::InvalidColorSyntax));
        assert_eq!(parse_rgb_str("rgb(1, 2, 3) extra"), Err(ColorParseError::InvalidColorSyntax));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ColorParseError::InvalidHexLength.to_string(), "hex color must have 3, 4, 6, or 8 digits");
        assert_eq!(ColorParseError::UnknownColorName.to_string(), "unknown color name");
    }
}
