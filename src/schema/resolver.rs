//! Type annotation resolution.
//!
//! Annotations are collected as raw strings at declaration time and resolved
//! here, against the registry, when a field is bound. Resolution is
//! two-phase so a schema may reference another schema declared after it, as
//! long as both are registered before the first bind.

use once_cell::sync::Lazy;
use regex::Regex;

use super::registry::SchemaRegistry;
use super::types::Schema;

/// Matches the `list[X]` / `List[X]` annotation form and captures the
/// element type name.
static LIST_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[Ll]ist\[(\w*)\]$").expect("list annotation pattern"));

/// Scalar and builtin type names accepted as native annotations.
const NATIVE_TYPES: &[&str] = &[
    "any", "bool", "bytes", "dict", "float", "int", "list", "map", "none", "null", "number",
    "seq", "str", "string", "tuple",
];

/// The resolved kind of a type annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedType<'a> {
    /// Opaque value, copied as-is with no recursion.
    Native,
    /// A registered schema; the binder recurses into the sub-mapping.
    Schema(&'a Schema),
    /// A list of a registered schema; the binder recurses per element.
    SchemaList(&'a Schema),
}

impl<'a> ResolvedType<'a> {
    /// Whether the binder should recurse for this annotation.
    pub fn is_schema_subtype(&self) -> bool {
        matches!(self, ResolvedType::Schema(_) | ResolvedType::SchemaList(_))
    }

    /// The element descriptor of a list-of-schema annotation, if any.
    pub fn list_element(&self) -> Option<&'a Schema> {
        match self {
            ResolvedType::SchemaList(schema) => Some(schema),
            _ => None,
        }
    }
}

/// Resolve an annotation against the registry.
///
/// Resolution order: the `list[X]` form is checked first (`X` registered →
/// list-of-schema, otherwise an opaque native list); then a registered
/// schema name; then the native type names. Any annotation that is not a
/// bare identifier is treated as native.
///
/// Returns `None` for a bare identifier that names neither a native type
/// nor a registered schema; callers report that as an unresolved type.
pub fn resolve<'a>(annotation: &str, registry: &'a SchemaRegistry) -> Option<ResolvedType<'a>> {
    if let Some(captures) = LIST_FORM.captures(annotation) {
        let element = captures.get(1).map_or("", |m| m.as_str());
        return match registry.lookup(element) {
            Some(schema) => Some(ResolvedType::SchemaList(schema)),
            None => Some(ResolvedType::Native),
        };
    }

    if let Some(schema) = registry.lookup(annotation) {
        return Some(ResolvedType::Schema(schema));
    }

    if NATIVE_TYPES.contains(&annotation.to_ascii_lowercase().as_str()) {
        return Some(ResolvedType::Native);
    }

    // Anything that is not a bare identifier is an opaque native form.
    if !annotation.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Some(ResolvedType::Native);
    }

    None
}

/// Whether an annotation denotes a registered schema or a list thereof.
pub fn is_schema_subtype(annotation: &str, registry: &SchemaRegistry) -> bool {
    resolve(annotation, registry).is_some_and(|r| r.is_schema_subtype())
}
