//! Palette types
//!
//! A [`Palette`] is the ordered list of colors every metric is computed over.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::{Palette, PaletteEntry};
