//! TMX (XML) tile map parsing.
//!
//! Purpose-built reader for the subset of TMX this tool consumes:
//! `<map>` size attributes and `<layer>` elements with CSV-encoded
//! `<data>`. Tiled's other layer encodings (base64, chunked) are
//! rejected with a typed error rather than misread.

use super::{Document, Layer, TmxError};

pub fn parse_xml_str(content: &str, name: &str) -> Result<Document, TmxError> {
    let map_tag = open_tag(content, "map").ok_or(TmxError::MissingElement("map"))?;

    let width = required_attr(map_tag, "map", "width")?;
    let height = required_attr(map_tag, "map", "height")?;
    let tile_width = required_attr(map_tag, "map", "tilewidth")?;
    let tile_height = required_attr(map_tag, "map", "tileheight")?;

    let mut layers = Vec::new();
    let mut rest = content;
    let mut index = 0;
    while let Some(start) = rest.find("<layer") {
        let after = &rest[start..];
        let end = after
            .find("</layer>")
            .ok_or(TmxError::MissingElement("/layer"))?;
        let layer_src = &after[..end];

        layers.push(parse_layer(layer_src, index)?);
        index += 1;
        rest = &after[end..];
    }

    let doc = Document {
        name: name.to_string(),
        width,
        height,
        tile_width,
        tile_height,
        layers,
    };
    doc.validate()?;
    Ok(doc)
}

fn parse_layer(src: &str, index: usize) -> Result<Layer, TmxError> {
    let layer_tag = open_tag(src, "layer").ok_or(TmxError::MissingElement("layer"))?;
    let name = attr(layer_tag, "name")
        .map(|n| super::sanitize_ident(n))
        .unwrap_or_else(|| format!("layer{}", index));

    let data_tag = open_tag(src, "data").ok_or(TmxError::MissingElement("data"))?;
    match attr(data_tag, "encoding") {
        Some("csv") => {}
        Some(other) => return Err(TmxError::UnsupportedEncoding(other.to_string())),
        None => return Err(TmxError::UnsupportedEncoding("xml".to_string())),
    }

    // CSV body sits between the <data> tag and </data>
    let body_start = src
        .find("<data")
        .and_then(|i| src[i..].find('>').map(|j| i + j + 1))
        .ok_or(TmxError::MissingElement("data"))?;
    let body = match src[body_start..].find("</data>") {
        Some(end) => &src[body_start..body_start + end],
        None => &src[body_start..],
    };

    let mut data = Vec::new();
    for value in body.split(',') {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        data.push(
            value
                .parse::<u32>()
                .map_err(|_| TmxError::InvalidTile(value.to_string()))?,
        );
    }

    Ok(Layer { name, data })
}

/// The attribute region of the first `<name ...>` opening tag.
fn open_tag<'a>(src: &'a str, name: &str) -> Option<&'a str> {
    let open = format!("<{}", name);
    let start = src.find(&open)?;
    let after = &src[start + open.len()..];
    // Must be followed by whitespace or the tag close, not a longer name
    if !after.starts_with(|c: char| c.is_whitespace() || c == '>' || c == '/') {
        return None;
    }
    let end = after.find('>')?;
    Some(after[..end].trim_end_matches('/'))
}

/// Value of `key="..."` inside a tag's attribute region.
fn attr<'a>(tag: &'a str, key: &str) -> Option<&'a str> {
    let pattern = format!("{}=\"", key);
    for (idx, _) in tag.match_indices(&pattern) {
        // Guard against matching a suffix, e.g. "width" in "tilewidth"
        let boundary = idx == 0 || tag[..idx].ends_with(|c: char| c.is_whitespace());
        if !boundary {
            continue;
        }
        let rest = &tag[idx + pattern.len()..];
        return rest.find('"').map(|end| &rest[..end]);
    }
    None
}

fn required_attr(tag: &str, element: &'static str, attribute: &'static str) -> Result<u32, TmxError> {
    let value = attr(tag, attribute).ok_or(TmxError::MissingAttribute { element, attribute })?;
    value
        .parse::<u32>()
        .map_err(|_| TmxError::InvalidTile(value.to_string()))
}
