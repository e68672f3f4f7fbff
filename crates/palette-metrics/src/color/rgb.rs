//! 8-bit RGB color and hex parsing
//!
//! Palettes are authored as hex strings (`#8de4d3`). This is the only place
//! those strings are decoded; everything downstream works on [`Rgb`].

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An sRGB color with 8-bit channels, as written in a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure white, the default reference for distance-chain sorting.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its three channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Parse a hex color string.
    ///
    /// Accepts exactly six hex digits, optionally prefixed with a single `#`.
    /// Digits may be upper or lower case. Surrounding whitespace is not
    /// trimmed and the 3-digit shorthand is not accepted.
    ///
    /// # Example
    /// ```
    /// use palette_metrics::Rgb;
    ///
    /// let blue = Rgb::from_hex("#0000FF").unwrap();
    /// assert_eq!(blue, Rgb::new(0, 0, 255));
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength {
                input: s.to_string(),
                len: digits.chars().count(),
            });
        }

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes).map_err(|source| {
            ParseColorError::InvalidHex {
                input: s.to_string(),
                source,
            }
        })?;

        Ok(Self::from_bytes(bytes))
    }

    /// Normalized hex form: six lowercase digits, no `#` prefix.
    ///
    /// # Example
    /// ```
    /// use palette_metrics::Rgb;
    ///
    /// assert_eq!(Rgb::new(141, 228, 211).to_hex(), "8de4d3");
    /// ```
    pub fn to_hex(self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Normalize a hex color string: strip `#`, lowercase, validate.
pub fn normalize_hex(s: &str) -> Result<String, ParseColorError> {
    Rgb::from_hex(s).map(Rgb::to_hex)
}
