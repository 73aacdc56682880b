//! Catalog load/save: a JSON object-of-objects, keyed by program name on
//! input and by checksum after migration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Metadata for one cataloged program.
///
/// `crc32` is optional on input and becomes the key on output, so it is
/// never serialized when absent. Every other field passes through untouched
/// and unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crc32: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Mapping key → record. Key order in the source document is irrelevant;
/// the sorted order makes the written output stable.
pub type Catalog = BTreeMap<String, Record>;

pub fn load(path: &Path) -> Result<Catalog> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))
}

/// Serialize with 4-space indentation and write the document in one shot.
/// Callers must only reach this after the full in-memory pass has succeeded.
pub fn save(path: &Path, catalog: &Catalog) -> Result<()> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    catalog.serialize(&mut ser).context("serialize catalog")?;
    fs::write(path, buf).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_with_checksum_parses() {
        let rec: Record =
            serde_json::from_value(json!({"crc32": "deadbeef", "author": "Y"})).unwrap();
        assert_eq!(rec.crc32.as_deref(), Some("deadbeef"));
        assert_eq!(rec.fields.get("author"), Some(&json!("Y")));
    }

    #[test]
    fn record_without_checksum_parses() {
        let rec: Record = serde_json::from_value(json!({
            "author": "X",
            "release": 1978,
            "options": {"shift_quirk": true}
        }))
        .unwrap();
        assert!(rec.crc32.is_none());
        assert_eq!(rec.fields.get("release"), Some(&json!(1978)));
        assert_eq!(rec.fields.get("options"), Some(&json!({"shift_quirk": true})));
    }

    #[test]
    fn load_missing_file_fails() {
        assert!(load(Path::new("/nonexistent/programs.json")).is_err());
    }

    #[test]
    fn load_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("programs.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn save_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut catalog = Catalog::new();
        catalog.insert(
            "deadbeef".to_string(),
            serde_json::from_value(json!({"author": "Y"})).unwrap(),
        );
        save(&path, &catalog).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n    \"deadbeef\": {\n        \"author\": \"Y\"\n    }\n}"
        );
    }

    #[test]
    fn save_load_roundtrip_preserves_field_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut catalog = Catalog::new();
        catalog.insert(
            "1a2b3c".to_string(),
            serde_json::from_value(json!({
                "author": "X",
                "release": 1978,
                "keys": [4, 5, 6]
            }))
            .unwrap(),
        );
        save(&path, &catalog).unwrap();
        assert_eq!(load(&path).unwrap(), catalog);
    }
}
