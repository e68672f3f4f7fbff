//! Palette JSON documents
//!
//! A palette file lists its colors under `colors`, each with a `hex` value and
//! an optional `name`. Any other fields are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteDocument {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub colors: Vec<PaletteColor>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteColor {
    pub hex: String,

    #[serde(default)]
    pub name: Option<String>,
}

impl PaletteDocument {
    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(AppError::PaletteDocument)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let doc = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            colors = doc.colors.len(),
            "Loaded palette document"
        );
        Ok(doc)
    }

    /// Hex values in document order
    pub fn hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.hex.clone()).collect()
    }
}

/// Pick the colors to benchmark.
///
/// Explicit hex strings win over a palette document. With neither there is
/// nothing to compute.
pub fn resolve_hex_strings(
    explicit: Vec<String>,
    document: Option<PaletteDocument>,
) -> Result<Vec<String>, AppError> {
    match (explicit.is_empty(), document) {
        (false, Some(_)) => {
            tracing::warn!("Both hex colors and a palette document given, using hex colors");
            Ok(explicit)
        }
        (false, None) => Ok(explicit),
        (true, Some(doc)) => Ok(doc.hex_strings()),
        (true, None) => Err(AppError::NoColors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOC: &str = r##"{
        "title": "Bobcat",
        "colors": [
            {"hex": "#8de4d3", "name": "Light turquoise", "rgb": [141, 228, 211]},
            {"hex": "#344b46"}
        ]
    }"##;

    #[test]
    fn test_parse_document() {
        let doc = PaletteDocument::from_json_str(DOC).unwrap();

        assert_eq!(doc.title.as_deref(), Some("Bobcat"));
        assert_eq!(doc.colors.len(), 2);
        assert_eq!(doc.colors[0].name.as_deref(), Some("Light turquoise"));
        assert_eq!(doc.colors[1].name, None);
        assert_eq!(doc.hex_strings(), vec!["#8de4d3", "#344b46"]);
    }

    #[test]
    fn test_parse_invalid_document() {
        let result = PaletteDocument::from_json_str(r#"{"colors": [{"name": "no hex"}]}"#);
        assert!(matches!(result, Err(AppError::PaletteDocument(_))));
    }

    #[test]
    fn test_explicit_hex_wins() {
        let doc = PaletteDocument::from_json_str(DOC).unwrap();
        let hex = resolve_hex_strings(vec!["#ffffff".to_string()], Some(doc)).unwrap();
        assert_eq!(hex, vec!["#ffffff"]);
    }

    #[test]
    fn test_document_used_without_hex() {
        let doc = PaletteDocument::from_json_str(DOC).unwrap();
        let hex = resolve_hex_strings(Vec::new(), Some(doc)).unwrap();
        assert_eq!(hex, vec!["#8de4d3", "#344b46"]);
    }

    #[test]
    fn test_no_colors() {
        assert!(matches!(
            resolve_hex_strings(Vec::new(), None),
            Err(AppError::NoColors)
        ));
    }
}
