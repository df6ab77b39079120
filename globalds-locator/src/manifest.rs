//! Registry snapshot parser.
//!
//! This module loads the contents of a [`MemoryRegistry`] from an XML
//! snapshot of the host's registry:
//!
//! ```xml
//! <registry>
//!   <key path="SOFTWARE\Microsoft\VisualStudio\16.0\CLSID\{E76D53CC-3D4F-40A2-BD4D-4F3419755476}">
//!     <value name="Assembly">Microsoft.VSDesigner, Version=16.0.0.0</value>
//!     <value name="Class" data="Microsoft.VSDesigner.CodeGenerator.TypedDataSourceGenerator"/>
//!   </key>
//! </registry>
//! ```
//!
//! `key` elements nest; a nested key's `path` is relative to its parent.
//! Intermediate keys are created implicitly. A value's data is its text
//! content, trimmed, or the `data` attribute when the element has no text.

use crate::error::ManifestError;
use crate::registry::MemoryRegistry;
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use std::path::Path;

/// Parses a registry snapshot from a string.
///
/// # Arguments
/// * `xml` - XML snapshot content
///
/// # Returns
/// The hive described by the snapshot.
///
/// # Errors
/// Returns `ManifestError` if the XML is malformed or contains unknown elements.
pub fn parse_registry_xml(xml: &str) -> Result<MemoryRegistry, ManifestError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut registry = MemoryRegistry::new();
    let mut keys: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "registry" if !seen_root => seen_root = true,
                    "key" if seen_root => {
                        let path = parse_key(e, keys.last())?;
                        registry.create_key(&path);
                        keys.push(path);
                    }
                    "value" if seen_root => {
                        let text = read_value_text(&mut reader)?;
                        parse_value(e, keys.last(), Some(text), &mut registry)?;
                    }
                    other => return Err(unexpected(other, keys.last())),
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match name {
                    "registry" if !seen_root => seen_root = true,
                    "key" if seen_root => {
                        let path = parse_key(e, keys.last())?;
                        registry.create_key(&path);
                    }
                    "value" if seen_root => parse_value(e, keys.last(), None, &mut registry)?,
                    other => return Err(unexpected(other, keys.last())),
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"key" {
                    keys.pop();
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ManifestError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(ManifestError::invalid_structure("no registry element found"));
    }
    Ok(registry)
}

/// Reads and parses a registry snapshot file.
///
/// # Errors
/// Returns `ManifestError` if reading or parsing fails.
pub fn load_registry_file(path: &Path) -> Result<MemoryRegistry, ManifestError> {
    let xml = std::fs::read_to_string(path)?;
    let registry = parse_registry_xml(&xml)?;
    tracing::debug!(
        "Loaded {} registry keys from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Resolves the full path of a `key` element.
fn parse_key(e: &BytesStart<'_>, parent: Option<&String>) -> Result<String, ManifestError> {
    let path = attribute(e, "path")?.ok_or_else(|| ManifestError::missing_attr("key", "path"))?;
    Ok(match parent {
        Some(parent) => format!("{}\\{}", parent, path.trim_matches('\\')),
        None => path,
    })
}

/// Stores a `value` element on the enclosing key.
///
/// Non-empty `text` takes precedence over the `data` attribute; with neither
/// the value is the empty string.
fn parse_value(
    e: &BytesStart<'_>,
    key: Option<&String>,
    text: Option<String>,
    registry: &mut MemoryRegistry,
) -> Result<(), ManifestError> {
    let key = key.ok_or_else(|| ManifestError::invalid_structure("value outside of a key"))?;
    let name = attribute(e, "name")?.ok_or_else(|| ManifestError::missing_attr("value", "name"))?;
    let data = match text.filter(|t| !t.is_empty()) {
        Some(text) => text,
        None => attribute(e, "data")?.unwrap_or_default(),
    };
    registry.set_value(key, &name, data);
    Ok(())
}

/// Reads the text content of a `value` element up to its end tag.
fn read_value_text(reader: &mut Reader<&[u8]>) -> Result<String, ManifestError> {
    // Whitespace between text and entity references is part of the data.
    reader.config_mut().trim_text(false);
    let text = collect_text(reader);
    reader.config_mut().trim_text(true);
    Ok(text?.trim().to_string())
}

fn collect_text(reader: &mut Reader<&[u8]>) -> Result<String, ManifestError> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => text.push_str(std::str::from_utf8(t.as_ref())?),
            Ok(Event::CData(ref t)) => text.push_str(std::str::from_utf8(t.as_ref())?),
            Ok(Event::GeneralRef(ref r)) => {
                if let Some(ch) = r.resolve_char_ref()? {
                    text.push(ch);
                } else {
                    let name = std::str::from_utf8(r.as_ref())?;
                    let resolved = resolve_predefined_entity(name).ok_or_else(|| {
                        ManifestError::invalid_structure(format!("unknown entity '&{name};'"))
                    })?;
                    text.push_str(resolved);
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"value" => break,
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                return Err(ManifestError::unknown_element(name, "value"));
            }
            Ok(Event::Eof) => {
                return Err(ManifestError::invalid_structure("unterminated value element"));
            }
            Err(e) => return Err(ManifestError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Reads and unescapes an attribute.
fn attribute(e: &BytesStart<'_>, wanted: &str) -> Result<Option<String>, ManifestError> {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == wanted {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape(raw)?.into_owned()));
        }
    }
    Ok(None)
}

fn unexpected(element: &str, key: Option<&String>) -> ManifestError {
    match key {
        Some(key) => ManifestError::unknown_element(element, key.as_str()),
        None => ManifestError::unknown_element(element, "registry"),
    }
}
