//! Ordered palette with precomputed Lab coordinates.

use crate::api::MetricsError;
use crate::color::{Lab, Rgb};

/// One palette color: the label it was given, its RGB and its Lab value.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// The hex string exactly as supplied (used as a chart/axis label)
    pub label: String,
    /// Parsed 8-bit color
    pub rgb: Rgb,
    /// Lab coordinates (D65)
    pub lab: Lab,
}

impl PaletteEntry {
    /// Create an entry from an already parsed color.
    pub fn new(label: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            label: label.into(),
            rgb,
            lab: Lab::from(rgb),
        }
    }
}

/// An ordered, non-empty sequence of colors.
///
/// Order is significant: it drives matrix row/column order. Duplicates are
/// allowed and simply produce a zero distance between their positions.
///
/// Lab conversion is done once at construction time, so every metric reads
/// the same coordinates.
///
/// # Example
///
/// ```
/// use palette_metrics::Palette;
///
/// let palette = Palette::from_hex(&["#8de4d3", "#344b46"]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.labels(), vec!["#8de4d3", "#344b46"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Parse a palette from hex strings.
    ///
    /// # Errors
    ///
    /// - [`MetricsError::EmptyPalette`] if `hex_strings` is empty
    /// - [`MetricsError::InvalidFormat`] for the first string that is not a
    ///   valid 6-digit hex color; nothing is returned for the others
    pub fn from_hex<S: AsRef<str>>(hex_strings: &[S]) -> Result<Self, MetricsError> {
        if hex_strings.is_empty() {
            return Err(MetricsError::EmptyPalette);
        }

        let entries = hex_strings
            .iter()
            .enumerate()
            .map(|(index, s)| {
                let s = s.as_ref();
                Rgb::from_hex(s)
                    .map(|rgb| PaletteEntry::new(s, rgb))
                    .map_err(|source| MetricsError::InvalidFormat { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Build a palette from parsed colors, labelled with their normalized hex
    /// (lowercase, no `#`, as [`Rgb::to_hex`] gives it).
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::EmptyPalette`] if `colors` is empty.
    pub fn from_rgb(colors: &[Rgb]) -> Result<Self, MetricsError> {
        if colors.is_empty() {
            return Err(MetricsError::EmptyPalette);
        }

        Ok(Self {
            entries: colors
                .iter()
                .map(|&rgb| PaletteEntry::new(rgb.to_hex(), rgb))
                .collect(),
        })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Labels (input strings) in palette order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Lab coordinates in palette order.
    pub fn lab(&self) -> Vec<Lab> {
        self.entries.iter().map(|e| e.lab).collect()
    }

    /// RGB colors in palette order.
    pub fn rgb(&self) -> Vec<Rgb> {
        self.entries.iter().map(|e| e.rgb).collect()
    }
}
