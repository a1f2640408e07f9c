//! Schema declaration subsystem.
//!
//! Schemas are declared once, registered by name, and immutable thereafter.
//! Field type annotations stay raw strings until bind time, when the
//! resolver turns them into native / schema / list-of-schema kinds against
//! the registry.

mod errors;
mod registry;
mod resolver;
mod types;

pub use errors::{ConfError, ConfResult};
pub use registry::SchemaRegistry;
pub use resolver::{is_schema_subtype, resolve, ResolvedType};
pub use types::{FieldDef, Schema};
