//! C header generation from a parsed tile map.
//!
//! Rendering is a pure string transform over the document, so the same
//! input always produces a byte-identical header.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Document;

/// Template shipped with the tool; placeholders: `{{GUARD}}`,
/// `{{WIDTH}}`, `{{HEIGHT}}`, `{{TILE_W}}`, `{{TILE_H}}`, `{{LAYERS}}`.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/map_header.h.template");

/// Render the document through a header template.
pub fn render(doc: &Document, template: &str) -> String {
    let guard = doc.name.to_uppercase();

    let mut layers = String::new();
    for layer in &doc.layers {
        layers.push_str(&format!(
            "const u16 {}_{}[{} * {}] =\n{{\n",
            doc.name, layer.name, doc.width, doc.height
        ));
        for row in layer.data.chunks(doc.width.max(1) as usize) {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            layers.push_str(&format!("    {},\n", cells.join(", ")));
        }
        layers.push_str("};\n\n");
    }

    template
        .replace("{{GUARD}}", &guard)
        .replace("{{WIDTH}}", &doc.width.to_string())
        .replace("{{HEIGHT}}", &doc.height.to_string())
        .replace("{{TILE_W}}", &doc.tile_width.to_string())
        .replace("{{TILE_H}}", &doc.tile_height.to_string())
        .replace("{{LAYERS}}", layers.trim_end())
}

/// Write `<name>.h` under `out_dir`, creating the directory if needed.
pub fn write_header(doc: &Document, out_dir: &Path, template: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let path = out_dir.join(format!("{}.h", doc.name));
    std::fs::write(&path, render(doc, template))
        .with_context(|| format!("Failed to write header: {}", path.display()))?;
    Ok(path)
}
