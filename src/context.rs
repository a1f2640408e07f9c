//! Engine context: a schema registry paired with a document source.
//!
//! Contexts are explicit so hosts and tests can run several independent
//! registries and documents side by side. A process-default context backs
//! the module-level convenience functions for hosts that want one shared
//! configuration, the common case.

use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::binding::{serialize, Binder, Instance};
use crate::document::{self, DocumentSource};
use crate::schema::{ConfError, ConfResult, Schema, SchemaRegistry};

/// A schema registry plus the most-recently-loaded document.
#[derive(Debug, Default)]
pub struct Context {
    registry: SchemaRegistry,
    document: DocumentSource,
}

impl Context {
    /// Create an empty context: no schemas, no document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema and return a handle exposing its operations.
    ///
    /// Declaring a second schema with the same name silently shadows the
    /// first.
    pub fn declare(&mut self, schema: Schema) -> SchemaHandle {
        let handle = SchemaHandle {
            name: schema.name.clone(),
        };
        self.registry.register(schema);
        handle
    }

    /// The registry backing this context.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The document source backing this context.
    pub fn document(&self) -> &DocumentSource {
        &self.document
    }

    /// Load a YAML document from `path`, replacing any prior document.
    pub fn load_document(&mut self, path: impl AsRef<Path>) -> ConfResult<()> {
        let path = path.as_ref();
        let tree = document::load_file(path)?;
        tracing::debug!(path = %path.display(), "loaded document");
        self.document.set(tree);
        Ok(())
    }

    /// Replace the document with an already-built tree.
    pub fn set_document(&mut self, tree: Value) {
        self.document.set(tree);
    }

    /// Bind an instance of the named schema from the loaded document,
    /// per the implicit-source rule: the whole tree for a root schema,
    /// otherwise the sub-mapping keyed by the schema name.
    pub fn bind(&self, name: &str) -> ConfResult<Instance> {
        let schema = self
            .registry
            .lookup(name)
            .ok_or_else(|| ConfError::UnknownSchema { name: name.into() })?;
        let source = self.document.source_for(schema);
        Binder::new(&self.registry).bind(schema, source)
    }

    /// Bind an instance of the named schema from an explicit mapping,
    /// ignoring the loaded document entirely.
    pub fn bind_value(&self, name: &str, source: &Value) -> ConfResult<Instance> {
        Binder::new(&self.registry).bind_named(name, source)
    }

    /// Serialize an instance and write it to `path` as a YAML document.
    pub fn save(&self, instance: &Instance, path: impl AsRef<Path>) -> ConfResult<()> {
        let path = path.as_ref();
        document::save_file(&serialize(instance), path)?;
        tracing::debug!(path = %path.display(), "saved document");
        Ok(())
    }
}

/// Operations of one registered schema, bound to its name at declaration
/// time.
#[derive(Debug, Clone)]
pub struct SchemaHandle {
    name: String,
}

impl SchemaHandle {
    /// The registered schema name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bind from the context's loaded document.
    pub fn bind(&self, ctx: &Context) -> ConfResult<Instance> {
        ctx.bind(&self.name)
    }

    /// Bind from an explicit mapping.
    pub fn bind_value(&self, ctx: &Context, source: &Value) -> ConfResult<Instance> {
        ctx.bind_value(&self.name, source)
    }

    /// Serialize an instance into a generic tree mapping.
    pub fn serialize(&self, instance: &Instance) -> Value {
        serialize(instance)
    }

    /// Render an instance as a YAML document fragment.
    pub fn render(&self, instance: &Instance) -> ConfResult<String> {
        document::to_yaml_string(&serialize(instance))
    }
}

/// The process-default context used by the module-level functions. The
/// lock makes the global sound; it does not order concurrent declaration
/// or loads, which remain the caller's problem to serialize.
static DEFAULT_CONTEXT: Lazy<Mutex<Context>> = Lazy::new(|| Mutex::new(Context::new()));

/// Run `f` against the process-default context.
pub fn with_default_context<T>(f: impl FnOnce(&mut Context) -> T) -> T {
    let mut ctx = DEFAULT_CONTEXT
        .lock()
        .expect("default context lock poisoned");
    f(&mut ctx)
}

/// Register a schema in the process-default context.
pub fn declare(schema: Schema) -> SchemaHandle {
    with_default_context(|ctx| ctx.declare(schema))
}

/// Load a YAML document into the process-default context.
pub fn load_from_file(path: impl AsRef<Path>) -> ConfResult<()> {
    with_default_context(|ctx| ctx.load_document(path))
}

/// Bind the named schema from the process-default context's document.
pub fn bind(name: &str) -> ConfResult<Instance> {
    with_default_context(|ctx| ctx.bind(name))
}

/// Bind the named schema from an explicit mapping, bypassing the loaded
/// document.
pub fn bind_from_value(source: &Value, name: &str) -> ConfResult<Instance> {
    with_default_context(|ctx| ctx.bind_value(name, source))
}

/// Serialize an instance and write it to `path` as a YAML document.
pub fn save_to_file(instance: &Instance, path: impl AsRef<Path>) -> ConfResult<()> {
    with_default_context(|ctx| ctx.save(instance, path))
}
