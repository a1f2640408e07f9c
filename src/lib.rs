//! confbind - declarative configuration binding
//!
//! Host code declares named schemas whose fields carry optional defaults
//! and optional type annotations referencing other schemas (or lists of
//! them). The engine binds a YAML document's generic tree into instances
//! of those schemas, filling defaults where the document is silent and
//! recursing through nested schemas, then serializes instances back to the
//! tree form for persistence.
//!
//! ```
//! use confbind::{Context, FieldDef, Schema};
//! use serde_json::json;
//! use std::collections::HashMap;
//!
//! let mut fields = HashMap::new();
//! fields.insert("host".to_string(), FieldDef::with_default(json!("localhost")));
//! fields.insert("port".to_string(), FieldDef::annotated("int"));
//!
//! let mut ctx = Context::new();
//! let server = ctx.declare(Schema::new("Server", fields));
//!
//! let conf = server.bind_value(&ctx, &json!({"port": 8080}))?;
//! assert_eq!(conf.str("host"), Some("localhost"));
//! assert_eq!(conf.i64("port"), Some(8080));
//! # Ok::<(), confbind::ConfError>(())
//! ```

pub mod binding;
pub mod context;
pub mod document;
pub mod schema;

pub use binding::{serialize, Binder, BoundValue, Instance};
pub use context::{
    bind, bind_from_value, declare, load_from_file, save_to_file, with_default_context, Context,
    SchemaHandle,
};
pub use schema::{ConfError, ConfResult, FieldDef, Schema, SchemaRegistry};
