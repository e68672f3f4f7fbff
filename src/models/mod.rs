pub mod config;
pub mod palette_doc;

pub use config::{AppConfig, ConfigOverrides, CONFIG_FILE_ENV, DEFAULT_CONFIG_YAML};
pub use palette_doc::{resolve_hex_strings, PaletteColor, PaletteDocument};
