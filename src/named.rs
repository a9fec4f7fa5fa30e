//! The CSS named colors. Every name from CSS Color Module Level 4 is a variant of [`NamedColor`],
//! apart from `magenta` and `cyan`, which are spelled `Fuchsia` and `Aqua` here but are also
//! available as [`NamedColor::MAGENTA`] and [`NamedColor::CYAN`]. Name lookup from strings is
//! case-insensitive and accepts the British `grey` spellings as well.
//!
//! The hex codes live in a small CSV table that is compiled into the crate and parsed the first
//! time any of them is needed.

use std::collections::HashMap;

use crate::color::RGBColor;
use crate::csscolor::ColorParseError;

const CSS_COLORS_CSV: &str = include_str!("../data/css-colors.csv");

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    hex: String,
}

fn read_css_colors() -> HashMap<String, String> {
    let mut reader = csv::Reader::from_reader(CSS_COLORS_CSV.as_bytes());
    let mut table = HashMap::new();
    for result in reader.deserialize() {
        // this file is bundled with the crate, so bad data is our bug
        let record: Record = match result {
            Ok(record) => record,
            Err(e) => panic!("bundled CSS color table could not be read: {}", e),
        };
        table.insert(record.name, record.hex);
    }
    table
}

lazy_static! {
    static ref CSS_COLORS: HashMap<String, String> = read_css_colors();
    // names that CSS accepts but that share a hex code with a name in the table
    static ref ALIASES: HashMap<&'static str, &'static str> = hashmap! {
        "magenta" => "fuchsia",
        "cyan" => "aqua",
        "grey" => "gray",
        "darkgrey" => "darkgray",
        "darkslategrey" => "darkslategray",
        "dimgrey" => "dimgray",
        "lightgrey" => "lightgray",
        "lightslategrey" => "lightslategray",
        "slategrey" => "slategray",
    };
}

// the hex code for a lowercase name, following aliases
fn table_hex(name: &str) -> Option<&'static str> {
    let name = ALIASES.get(name).copied().unwrap_or(name);
    CSS_COLORS.get(name).map(String::as_str)
}

macro_rules! named_colors {
    ($($variant:ident => $name:literal,)*) => {
        /// A CSS named color. The variants are listed in the order of the CSS color families (reds,
        /// pinks, oranges and so on), not alphabetically.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum NamedColor {
            $(
                #[doc = $name]
                $variant,
            )*
        }

        impl NamedColor {
            /// Every named color, in declaration order.
            pub const ALL: &'static [NamedColor] = &[$(NamedColor::$variant,)*];

            /// The lowercase CSS name of this color.
            pub fn css_name(self) -> &'static str {
                match self {
                    $(NamedColor::$variant => $name,)*
                }
            }
        }
    };
}

named_colors! {
    IndianRed => "indianred",
    LightCoral => "lightcoral",
    Salmon => "salmon",
    DarkSalmon => "darksalmon",
    LightSalmon => "lightsalmon",
    Crimson => "crimson",
    Red => "red",
    FireBrick => "firebrick",
    DarkRed => "darkred",
    Pink => "pink",
    LightPink => "lightpink",
    HotPink => "hotpink",
    DeepPink => "deeppink",
    MediumVioletRed => "mediumvioletred",
    PaleVioletRed => "palevioletred",
    Coral => "coral",
    Tomato => "tomato",
    OrangeRed => "orangered",
    DarkOrange => "darkorange",
    Orange => "orange",
    Gold => "gold",
    Yellow => "yellow",
    LightYellow => "lightyellow",
    LemonChiffon => "lemonchiffon",
    LightGoldenrodYellow => "lightgoldenrodyellow",
    PapayaWhip => "papayawhip",
    Moccasin => "moccasin",
    PeachPuff => "peachpuff",
    PaleGoldenrod => "palegoldenrod",
    Khaki => "khaki",
    DarkKhaki => "darkkhaki",
    Lavender => "lavender",
    Thistle => "thistle",
    Plum => "plum",
    Violet => "violet",
    Orchid => "orchid",
    Fuchsia => "fuchsia",
    MediumOrchid => "mediumorchid",
    MediumPurple => "mediumpurple",
    RebeccaPurple => "rebeccapurple",
    BlueViolet => "blueviolet",
    DarkViolet => "darkviolet",
    DarkOrchid => "darkorchid",
    DarkMagenta => "darkmagenta",
    Purple => "purple",
    Indigo => "indigo",
    SlateBlue => "slateblue",
    DarkSlateBlue => "darkslateblue",
    MediumSlateBlue => "mediumslateblue",
    GreenYellow => "greenyellow",
    Chartreuse => "chartreuse",
    LawnGreen => "lawngreen",
    Lime => "lime",
    LimeGreen => "limegreen",
    PaleGreen => "palegreen",
    LightGreen => "lightgreen",
    MediumSpringGreen => "mediumspringgreen",
    SpringGreen => "springgreen",
    MediumSeaGreen => "mediumseagreen",
    SeaGreen => "seagreen",
    ForestGreen => "forestgreen",
    Green => "green",
    DarkGreen => "darkgreen",
    YellowGreen => "yellowgreen",
    OliveDrab => "olivedrab",
    Olive => "olive",
    DarkOliveGreen => "darkolivegreen",
    MediumAquamarine => "mediumaquamarine",
    DarkSeaGreen => "darkseagreen",
    LightSeaGreen => "lightseagreen",
    DarkCyan => "darkcyan",
    Teal => "teal",
    Aqua => "aqua",
    LightCyan => "lightcyan",
    PaleTurquoise => "paleturquoise",
    Aquamarine => "aquamarine",
    Turquoise => "turquoise",
    MediumTurquoise => "mediumturquoise",
    DarkTurquoise => "darkturquoise",
    CadetBlue => "cadetblue",
    SteelBlue => "steelblue",
    LightSteelBlue => "lightsteelblue",
    PowderBlue => "powderblue",
    LightBlue => "lightblue",
    SkyBlue => "skyblue",
    LightSkyBlue => "lightskyblue",
    DeepSkyBlue => "deepskyblue",
    DodgerBlue => "dodgerblue",
    CornflowerBlue => "cornflowerblue",
    RoyalBlue => "royalblue",
    Blue => "blue",
    MediumBlue => "mediumblue",
    DarkBlue => "darkblue",
    Navy => "navy",
    MidnightBlue => "midnightblue",
    Cornsilk => "cornsilk",
    BlanchedAlmond => "blanchedalmond",
    Bisque => "bisque",
    NavajoWhite => "navajowhite",
    Wheat => "wheat",
    BurlyWood => "burlywood",
    Tan => "tan",
    RosyBrown => "rosybrown",
    SandyBrown => "sandybrown",
    Goldenrod => "goldenrod",
    DarkGoldenrod => "darkgoldenrod",
    Peru => "peru",
    Chocolate => "chocolate",
    SaddleBrown => "saddlebrown",
    Sienna => "sienna",
    Brown => "brown",
    Maroon => "maroon",
    White => "white",
    Snow => "snow",
    HoneyDew => "honeydew",
    MintCream => "mintcream",
    Azure => "azure",
    AliceBlue => "aliceblue",
    GhostWhite => "ghostwhite",
    WhiteSmoke => "whitesmoke",
    SeaShell => "seashell",
    Beige => "beige",
    OldLace => "oldlace",
    FloralWhite => "floralwhite",
    Ivory => "ivory",
    AntiqueWhite => "antiquewhite",
    Linen => "linen",
    LavenderBlush => "lavenderblush",
    MistyRose => "mistyrose",
    Gainsboro => "gainsboro",
    LightGray => "lightgray",
    Silver => "silver",
    DarkGray => "darkgray",
    Gray => "gray",
    DimGray => "dimgray",
    LightSlateGray => "lightslategray",
    SlateGray => "slategray",
    DarkSlateGray => "darkslategray",
    Black => "black",
}

impl NamedColor {
    /// CSS `magenta`, which is the same color as `fuchsia`.
    pub const MAGENTA: NamedColor = NamedColor::Fuchsia;
    /// CSS `cyan`, which is the same color as `aqua`.
    pub const CYAN: NamedColor = NamedColor::Aqua;

    /// The color's hex code: six uppercase digits, without a leading `#`.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert_eq!(NamedColor::Coral.hex(), "FF7F50");
    /// assert_eq!(NamedColor::MAGENTA.hex(), "FF00FF");
    /// ```
    pub fn hex(self) -> &'static str {
        match table_hex(self.css_name()) {
            Some(hex) => hex,
            None => panic!("{} is missing from the bundled CSS color table", self.css_name()),
        }
    }

    /// The color itself, which is always opaque.
    pub fn color(self) -> RGBColor {
        let [r, g, b, _] = match crate::csscolor::parse_hex(self.hex()) {
            Ok(rgba) => rgba,
            Err(e) => panic!("bad hex code for {} in the bundled CSS color table: {}", self.css_name(), e),
        };
        RGBColor::from((r, g, b))
    }
}

impl From<NamedColor> for RGBColor {
    fn from(named: NamedColor) -> RGBColor {
        named.color()
    }
}

/// Looks a CSS color name up, ignoring case and surrounding whitespace.
pub(crate) fn lookup_name(name: &str) -> Result<RGBColor, ColorParseError> {
    let key = name.trim().to_ascii_lowercase();
    match table_hex(&key) {
        Some(hex) => {
            let [r, g, b, _] = crate::csscolor::parse_hex(hex)?;
            Ok(RGBColor::from((r, g, b)))
        }
        None => {
            debug!("{:?} is not a CSS color name", name);
            Err(ColorParseError::UnknownColorName)
        }
    }
}

impl RGBColor {
    /// The given named color.
    pub fn named(color: NamedColor) -> RGBColor {
        color.color()
    }

    /// Creates a color from a CSS color name such as `"cornflowerblue"`, ignoring case and
    /// surrounding whitespace. Besides the names of [`NamedColor`], this accepts `magenta`, `cyan`,
    /// and `grey` wherever `gray` appears in a name.
    ///
    /// # Example
    ///
    /// ```
    /// # use swatch::prelude::*;
    /// assert_eq!(RGBColor::from_name("CornflowerBlue").unwrap().to_hex(), "#6495ED");
    /// assert_eq!(RGBColor::from_name("darkslategrey"), RGBColor::from_name("DarkSlateGray"));
    /// assert_eq!(RGBColor::from_name("mauve"), Err(ColorParseError::UnknownColorName));
    /// ```
    pub fn from_name(name: &str) -> Result<RGBColor, ColorParseError> {
        lookup_name(name)
    }
}
