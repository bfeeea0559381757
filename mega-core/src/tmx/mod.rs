//! Tiled map ingestion and C header generation.
//!
//! Reads the two export formats the Tiled editor produces for a tile
//! map - the XML `.tmx` file and its JSON twin - into one [`Document`],
//! then renders the document as a C header under `res/` so the game
//! can include the map data directly.

pub mod header;
pub mod json;
pub mod xml;

use anyhow::{Context, Result};
use std::path::Path;

pub use header::write_header;

/// A parsed tile map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// C-identifier-safe map name, taken from the file stem.
    pub name: String,
    /// Map size in tiles.
    pub width: u32,
    pub height: u32,
    /// Tile size in pixels.
    pub tile_width: u32,
    pub tile_height: u32,
    pub layers: Vec<Layer>,
}

/// One tile layer, row-major, `width * height` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub data: Vec<u32>,
}

/// Tile map parse failures.
#[derive(Debug, thiserror::Error)]
pub enum TmxError {
    #[error("missing <{0}> element")]
    MissingElement(&'static str),

    #[error("<{element}> is missing the \"{attribute}\" attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("unsupported layer data encoding \"{0}\" (only csv is supported)")]
    UnsupportedEncoding(String),

    #[error("invalid tile value \"{0}\"")]
    InvalidTile(String),

    #[error("layer \"{layer}\" has {actual} tiles, expected {expected} (width * height)")]
    LayerSize {
        layer: String,
        expected: u64,
        actual: u64,
    },

    #[error("invalid JSON tile map: {0}")]
    Json(#[from] serde_json::Error),
}

impl Document {
    /// Check the per-layer size invariant.
    pub fn validate(&self) -> Result<(), TmxError> {
        // Widen before multiplying: u32 * u32 overflows for maps a
        // well-formed file can declare
        let expected = self.width as u64 * self.height as u64;
        for layer in &self.layers {
            if layer.data.len() as u64 != expected {
                return Err(TmxError::LayerSize {
                    layer: layer.name.clone(),
                    expected,
                    actual: layer.data.len() as u64,
                });
            }
        }
        Ok(())
    }
}

/// Parse a tile map file, picking the format from the extension:
/// `.tmx` is XML, `.json` / `.tmj` is JSON.
pub fn parse_file(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tile map: {}", path.display()))?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "map".to_string());
    let name = sanitize_ident(&name);

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let doc = match ext {
        "tmx" => xml::parse_xml_str(&content, &name),
        "json" | "tmj" => json::parse_json_str(&content, &name),
        other => anyhow::bail!(
            "Unsupported tile map extension: .{}\nSupported formats: .tmx, .json, .tmj",
            other
        ),
    };
    doc.with_context(|| format!("Failed to parse tile map: {}", path.display()))
}

/// Turn an arbitrary name into a C identifier.
pub(crate) fn sanitize_ident(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
