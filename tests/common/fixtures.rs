//! Test fixtures and constants.

use std::path::PathBuf;

/// The "Bobcat" reference palette
pub const BOBCAT: [&str; 6] = [
    "#8de4d3", "#344b46", "#74ee65", "#238910", "#a6c363", "#509d99",
];

/// L* of each Bobcat color
pub const BOBCAT_LIGHTNESS: [f64; 6] = [84.9195, 29.9218, 84.8935, 49.8399, 74.8488, 59.9947];

/// Bobcat palette order after sorting by distance to white
pub const BOBCAT_BY_WHITE: [usize; 6] = [0, 4, 2, 5, 3, 1];

/// Bobcat palette order after sorting by distance to black
pub const BOBCAT_BY_BLACK: [usize; 6] = [1, 3, 5, 4, 0, 2];

/// Bobcat as a palette document, with fields the reader ignores
pub const BOBCAT_DOCUMENT: &str = r##"{
  "title": "Bobcat",
  "source": "manual",
  "colors": [
    {"hex": "#8de4d3", "name": "Light turquoise"},
    {"hex": "#344b46", "name": "Dark slate"},
    {"hex": "#74ee65", "name": "Light green"},
    {"hex": "#238910", "name": "Forest green"},
    {"hex": "#a6c363", "name": "Olivine"},
    {"hex": "#509d99", "name": "Teal"}
  ]
}"##;

pub fn bobcat() -> Vec<String> {
    BOBCAT.iter().map(|s| s.to_string()).collect()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}
