//! JSON tile map parsing (Tiled's `.json` / `.tmj` export).

use serde::Deserialize;

use super::{Document, Layer, TmxError};

#[derive(Debug, Deserialize)]
struct JsonMap {
    width: u32,
    height: u32,
    tilewidth: u32,
    tileheight: u32,
    #[serde(default)]
    layers: Vec<JsonLayer>,
}

#[derive(Debug, Deserialize)]
struct JsonLayer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    data: Vec<u32>,
    #[serde(rename = "type", default)]
    kind: String,
}

pub fn parse_json_str(content: &str, name: &str) -> Result<Document, TmxError> {
    let map: JsonMap = serde_json::from_str(content)?;

    let layers = map
        .layers
        .into_iter()
        .enumerate()
        // Object/image layers carry no tile data and are skipped
        .filter(|(_, l)| l.kind == "tilelayer" || (l.kind.is_empty() && !l.data.is_empty()))
        .map(|(i, l)| Layer {
            name: if l.name.is_empty() {
                format!("layer{}", i)
            } else {
                super::sanitize_ident(&l.name)
            },
            data: l.data,
        })
        .collect();

    let doc = Document {
        name: name.to_string(),
        width: map.width,
        height: map.height,
        tile_width: map.tilewidth,
        tile_height: map.tileheight,
        layers,
    };
    doc.validate()?;
    Ok(doc)
}
