//! In-memory schema registry.
//!
//! Maps schema name to descriptor. Populated at declaration time and
//! consulted during type resolution and binding. There is no removal
//! operation; a registry lives as long as its owning context.

use std::collections::HashMap;

use super::types::Schema;

/// Table of registered schema descriptors, keyed by name.
///
/// Registering a name twice silently replaces the earlier descriptor:
/// the last declaration wins.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Register a schema, replacing any prior entry with the same name.
    pub fn register(&mut self, schema: Schema) {
        if self.schemas.contains_key(&schema.name) {
            tracing::debug!(schema = %schema.name, "shadowing earlier registration");
        } else {
            tracing::debug!(schema = %schema.name, "registered schema");
        }
        self.schemas.insert(schema.name.clone(), schema);
    }

    /// Look up a schema by name.
    pub fn lookup(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Whether a schema with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over all registered schemas.
    pub fn schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldDef;
    use serde_json::json;
    use std::collections::HashMap;

    fn named(name: &str, default: serde_json::Value) -> Schema {
        let mut fields = HashMap::new();
        fields.insert("v".into(), FieldDef::with_default(default));
        Schema::new(name, fields)
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SchemaRegistry::new();
        registry.register(named("Server", json!(1)));

        assert!(registry.contains("Server"));
        assert_eq!(registry.lookup("Server").unwrap().name, "Server");
        assert!(registry.lookup("Client").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = SchemaRegistry::new();
        registry.register(named("Server", json!(1)));
        registry.register(named("Server", json!(2)));

        assert_eq!(registry.len(), 1);
        let schema = registry.lookup("Server").unwrap();
        assert_eq!(schema.field("v").unwrap().default, Some(json!(2)));
    }

    #[test]
    fn test_empty_registry() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.schemas().count(), 0);
    }
}
