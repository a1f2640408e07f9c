//! YAML document reading and writing.
//!
//! Documents are parsed into the generic `serde_json::Value` tree the rest
//! of the engine works on. YAML is richer than that model: non-scalar
//! mapping keys and non-finite floats are rejected, and tags are ignored in
//! favor of the tagged value.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::schema::{ConfError, ConfResult};

/// Read and parse a YAML document file into a generic tree.
pub fn load_file(path: &Path) -> ConfResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| ConfError::DocumentIo {
        path: path.to_path_buf(),
        source: e,
    })?;

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| ConfError::DocumentParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    yaml_to_tree(&yaml).map_err(|reason| ConfError::DocumentParse {
        path: path.to_path_buf(),
        reason,
    })
}

/// Write a generic tree to a YAML document file.
pub fn save_file(tree: &Value, path: &Path) -> ConfResult<()> {
    let text = to_yaml_string(tree)?;
    fs::write(path, text).map_err(|e| ConfError::DocumentIo {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render a generic tree as YAML text.
pub fn to_yaml_string(tree: &Value) -> ConfResult<String> {
    serde_yaml::to_string(tree).map_err(|e| ConfError::DocumentFormat {
        reason: e.to_string(),
    })
}

/// Convert a parsed YAML value into the generic tree model.
fn yaml_to_tree(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f}"))
            } else {
                Err(format!("unsupported number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_tree).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut tree = serde_json::Map::new();
            for (key, value) in map {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported mapping key: {other:?}")),
                };
                tree.insert(key, yaml_to_tree(value)?);
            }
            Ok(Value::Object(tree))
        }
        // Tags carry no meaning here; keep the tagged value.
        serde_yaml::Value::Tagged(tagged) => yaml_to_tree(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_parses_scalars_sequences_mappings() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("conf.yaml");
        fs::write(
            &path,
            "name: web\nport: 8080\nratio: 0.9\nactive: true\nempty: null\ntags:\n  - a\n  - b\n",
        )
        .unwrap();

        let tree = load_file(&path).unwrap();
        assert_eq!(
            tree,
            json!({
                "name": "web",
                "port": 8080,
                "ratio": 0.9,
                "active": true,
                "empty": null,
                "tags": ["a", "b"],
            })
        );
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("conf.yaml");

        let tree = json!({"a": 1, "b": {"c": [1, 2, 3]}, "d": "text"});
        save_file(&tree, &path).unwrap();
        assert_eq!(load_file(&path).unwrap(), tree);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_file(&tmp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfError::DocumentIo { .. }));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.yaml");
        fs::write(&path, "a: [unclosed\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ConfError::DocumentParse { .. }));
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keys.yaml");
        fs::write(&path, "1: one\ntrue: yes\n").unwrap();

        let tree = load_file(&path).unwrap();
        assert_eq!(tree, json!({"1": "one", "true": "yes"}));
    }

    #[test]
    fn test_to_yaml_string_renders_mapping() {
        let text = to_yaml_string(&json!({"a": 1, "b": "two"})).unwrap();
        assert!(text.contains("a: 1"));
        assert!(text.contains("b: two"));
    }
}
