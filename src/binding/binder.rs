//! The binder: resolves a source tree into a schema instance.
//!
//! Per-field precedence, evaluated independently per field:
//! 1. schema or list-of-schema annotation: always recurse, whether or not
//!    the field is present in the source;
//! 2. value present in the source: copied verbatim;
//! 3. declared default: deep-copied, never aliased between binds;
//! 4. otherwise the bind fails with a missing-value error.
//!
//! Binding allocates a fresh instance on every call and reads nothing but
//! its inputs and the registry.

use serde_json::{Map, Value};

use crate::schema::{resolve, ConfError, ConfResult, FieldDef, ResolvedType, Schema, SchemaRegistry};

use super::instance::{BoundValue, Instance};

/// Binds source trees into instances against a registry.
pub struct Binder<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> Binder<'a> {
    /// Create a binder backed by the given registry.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Bind `source` into an instance of `schema`.
    ///
    /// A source that is not a mapping (including null) binds as an empty
    /// mapping, so the instance is built entirely from declared defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfError::MissingValue`] when a non-schema field has
    /// neither a source value nor a default, and
    /// [`ConfError::UnresolvedType`] when an annotation is a bare
    /// identifier naming neither a native type nor a registered schema. No
    /// partial instance is ever returned.
    pub fn bind(&self, schema: &Schema, source: &Value) -> ConfResult<Instance> {
        let empty = Map::new();
        let mapping = source.as_object().unwrap_or(&empty);

        let mut instance = Instance::new(&schema.name);
        for (field, def) in &schema.fields {
            let bound = self.bind_field(schema, field, def, mapping)?;
            instance.set(field.clone(), bound);
        }
        Ok(instance)
    }

    /// Bind by schema name, for callers holding a name instead of a
    /// descriptor.
    pub fn bind_named(&self, name: &str, source: &Value) -> ConfResult<Instance> {
        let schema = self
            .registry
            .lookup(name)
            .ok_or_else(|| ConfError::UnknownSchema { name: name.into() })?;
        self.bind(schema, source)
    }

    fn bind_field(
        &self,
        schema: &Schema,
        field: &str,
        def: &FieldDef,
        source: &Map<String, Value>,
    ) -> ConfResult<BoundValue> {
        if let Some(annotation) = &def.annotation {
            let resolved = resolve(annotation, self.registry).ok_or_else(|| {
                ConfError::UnresolvedType {
                    annotation: annotation.clone(),
                    field: field.into(),
                    schema: schema.name.clone(),
                }
            })?;

            match resolved {
                ResolvedType::Schema(nested) => {
                    // Absent or null sub-entry binds as an empty mapping,
                    // so the nested instance comes entirely from defaults.
                    static NULL: Value = Value::Null;
                    let sub = source.get(field).unwrap_or(&NULL);
                    return Ok(BoundValue::Nested(self.bind(nested, sub)?));
                }
                ResolvedType::SchemaList(element) => {
                    // Declared defaults are never consulted for a
                    // list-of-schema field; absent means empty.
                    let items = match source.get(field).and_then(Value::as_array) {
                        Some(elements) => elements
                            .iter()
                            .map(|entry| self.bind(element, entry))
                            .collect::<ConfResult<Vec<_>>>()?,
                        None => Vec::new(),
                    };
                    return Ok(BoundValue::List(items));
                }
                ResolvedType::Native => {}
            }
        }

        // Key presence wins even when the value is null.
        if let Some(value) = source.get(field) {
            return Ok(BoundValue::Scalar(value.clone()));
        }
        if let Some(default) = &def.default {
            return Ok(BoundValue::Scalar(default.clone()));
        }

        Err(ConfError::MissingValue {
            field: field.into(),
            schema: schema.name.clone(),
        })
    }
}
