//! Schema descriptor types.
//!
//! A schema is a named set of field declarations. Each field carries an
//! optional type annotation (a raw string, resolved against the registry at
//! bind time) and an optional default value. A field with neither can only
//! be satisfied by the source document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Raw type annotation, e.g. `"int"`, `"Server"`, `"list[Server]"`.
    /// Resolved against the registry when the field is bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Declared default, deep-copied into every bound instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldDef {
    /// Create an untyped field with a default value.
    pub fn with_default(default: Value) -> Self {
        Self {
            annotation: None,
            default: Some(default),
        }
    }

    /// Create an annotated field with no default.
    ///
    /// Unless the annotation is schema-typed, the source document must
    /// supply a value or binding fails.
    pub fn annotated(annotation: impl Into<String>) -> Self {
        Self {
            annotation: Some(annotation.into()),
            default: None,
        }
    }

    /// Create an annotated field with a default value.
    pub fn annotated_with_default(annotation: impl Into<String>, default: Value) -> Self {
        Self {
            annotation: Some(annotation.into()),
            default: Some(default),
        }
    }
}

/// Schema descriptor: a named set of field declarations.
///
/// Created once at declaration time and immutable after registration.
/// Field iteration order never affects a bind result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique name, used as the registry key.
    pub name: String,
    /// Whether instances bind against the whole document by default,
    /// rather than the sub-mapping keyed by the schema name.
    #[serde(default)]
    pub root: bool,
    /// Field declarations.
    pub fields: HashMap<String, FieldDef>,
}

impl Schema {
    /// Create a new non-root schema.
    pub fn new(name: impl Into<String>, fields: HashMap<String, FieldDef>) -> Self {
        Self {
            name: name.into(),
            root: false,
            fields,
        }
    }

    /// Mark this schema as the document root.
    pub fn into_root(mut self) -> Self {
        self.root = true;
        self
    }

    /// Look up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Iterate over the declared field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        let mut fields = HashMap::new();
        fields.insert("host".into(), FieldDef::with_default(json!("localhost")));
        fields.insert("port".into(), FieldDef::annotated("int"));
        fields.insert(
            "retries".into(),
            FieldDef::annotated_with_default("int", json!(3)),
        );
        Schema::new("Server", fields)
    }

    #[test]
    fn test_field_constructors() {
        let f = FieldDef::with_default(json!(1));
        assert_eq!(f.annotation, None);
        assert_eq!(f.default, Some(json!(1)));

        let f = FieldDef::annotated("float");
        assert_eq!(f.annotation.as_deref(), Some("float"));
        assert_eq!(f.default, None);

        let f = FieldDef::annotated_with_default("list[int]", json!([1, 2]));
        assert_eq!(f.annotation.as_deref(), Some("list[int]"));
        assert_eq!(f.default, Some(json!([1, 2])));
    }

    #[test]
    fn test_schema_field_lookup() {
        let schema = sample_schema();
        assert!(schema.field("host").is_some());
        assert!(schema.field("missing").is_none());
        assert_eq!(schema.field_names().count(), 3);
    }

    #[test]
    fn test_root_flag() {
        let schema = sample_schema();
        assert!(!schema.root);
        assert!(schema.into_root().root);
    }

    #[test]
    fn test_schema_serde_roundtrip() {
        let schema = sample_schema();
        let text = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&text).unwrap();
        assert_eq!(schema, back);
    }
}
