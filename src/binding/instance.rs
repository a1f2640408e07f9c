//! Materialized schema instances.
//!
//! An instance maps field names to bound values. Bound values keep the
//! kind the binder materialized them with: raw tree fragments for native
//! fields, nested instances for schema fields, and instance sequences for
//! list-of-schema fields. Instances are plain owned data; host code may
//! mutate them freely after binding.

use serde_json::Value;
use std::collections::HashMap;

/// A value bound to one field of an instance.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    /// Raw tree fragment copied from the source or the declared default.
    Scalar(Value),
    /// A recursively bound nested instance.
    Nested(Instance),
    /// Recursively bound elements of a list-of-schema field, in source
    /// order.
    List(Vec<Instance>),
}

impl BoundValue {
    /// The raw fragment, if this is a native field.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            BoundValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The nested instance, if this is a nested-schema field.
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            BoundValue::Nested(instance) => Some(instance),
            _ => None,
        }
    }

    /// The bound elements, if this is a list-of-schema field.
    pub fn as_list(&self) -> Option<&[Instance]> {
        match self {
            BoundValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// One materialized instance of a registered schema.
///
/// Compares by value; two binds of the same source against the same schema
/// produce equal instances.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    schema: String,
    values: HashMap<String, BoundValue>,
}

impl Instance {
    pub(crate) fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            values: HashMap::new(),
        }
    }

    /// Name of the schema this instance was bound against.
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// The bound value of a field.
    pub fn get(&self, field: &str) -> Option<&BoundValue> {
        self.values.get(field)
    }

    /// Mutable access to a bound field.
    pub fn get_mut(&mut self, field: &str) -> Option<&mut BoundValue> {
        self.values.get_mut(field)
    }

    /// Set or replace a field's bound value.
    pub fn set(&mut self, field: impl Into<String>, value: BoundValue) {
        self.values.insert(field.into(), value);
    }

    /// Iterate over bound fields. Order is unspecified.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &BoundValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the instance has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw fragment of a native field.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.get(field).and_then(BoundValue::as_value)
    }

    /// The nested instance of a schema-typed field.
    pub fn nested(&self, field: &str) -> Option<&Instance> {
        self.get(field).and_then(BoundValue::as_instance)
    }

    /// The bound elements of a list-of-schema field.
    pub fn list(&self, field: &str) -> Option<&[Instance]> {
        self.get(field).and_then(BoundValue::as_list)
    }

    /// A native field read as an integer.
    pub fn i64(&self, field: &str) -> Option<i64> {
        self.value(field).and_then(Value::as_i64)
    }

    /// A native field read as a float. Integers widen.
    pub fn f64(&self, field: &str) -> Option<f64> {
        self.value(field).and_then(Value::as_f64)
    }

    /// A native field read as a string.
    pub fn str(&self, field: &str) -> Option<&str> {
        self.value(field).and_then(Value::as_str)
    }

    /// A native field read as a boolean.
    pub fn bool(&self, field: &str) -> Option<bool> {
        self.value(field).and_then(Value::as_bool)
    }
}
