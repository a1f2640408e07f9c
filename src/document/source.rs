//! Most-recently-loaded document state.

use serde_json::Value;

use crate::schema::Schema;

/// Holder of the most recently loaded document tree.
///
/// One per context; each load overwrites the previous tree. Used as the
/// implicit bind input when no explicit source is supplied.
#[derive(Debug, Default)]
pub struct DocumentSource {
    tree: Option<Value>,
}

impl DocumentSource {
    /// Create an empty source with no document loaded.
    pub fn new() -> Self {
        Self { tree: None }
    }

    /// Replace the held tree with a freshly loaded document.
    pub fn set(&mut self, tree: Value) {
        self.tree = Some(tree);
    }

    /// The held tree, if a document has been loaded.
    pub fn tree(&self) -> Option<&Value> {
        self.tree.as_ref()
    }

    /// The implicit bind source for a schema: the whole tree for a root
    /// schema, otherwise the sub-entry keyed by the schema's name. Null
    /// when nothing applies; the binder treats non-mappings as empty.
    pub fn source_for(&self, schema: &Schema) -> &Value {
        static NULL: Value = Value::Null;
        match &self.tree {
            Some(tree) if schema.root => tree,
            Some(tree) => tree.get(&schema.name).unwrap_or(&NULL),
            None => &NULL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;
    use serde_json::json;
    use std::collections::HashMap;

    fn schema(name: &str, root: bool) -> Schema {
        let mut fields = HashMap::new();
        fields.insert("v".into(), FieldDef::with_default(json!(0)));
        let schema = Schema::new(name, fields);
        if root {
            schema.into_root()
        } else {
            schema
        }
    }

    #[test]
    fn test_root_schema_sees_whole_tree() {
        let mut source = DocumentSource::new();
        source.set(json!({"v": 1, "Sub": {"v": 2}}));

        let tree = source.source_for(&schema("Conf", true));
        assert_eq!(tree, &json!({"v": 1, "Sub": {"v": 2}}));
    }

    #[test]
    fn test_non_root_schema_sees_named_subtree() {
        let mut source = DocumentSource::new();
        source.set(json!({"Sub": {"v": 2}}));

        assert_eq!(source.source_for(&schema("Sub", false)), &json!({"v": 2}));
        assert_eq!(source.source_for(&schema("Other", false)), &Value::Null);
    }

    #[test]
    fn test_no_document_loaded() {
        let source = DocumentSource::new();
        assert!(source.tree().is_none());
        assert_eq!(source.source_for(&schema("Conf", true)), &Value::Null);
    }

    #[test]
    fn test_each_load_overwrites() {
        let mut source = DocumentSource::new();
        source.set(json!({"v": 1}));
        source.set(json!({"v": 2}));
        assert_eq!(source.tree(), Some(&json!({"v": 2})));
    }
}
