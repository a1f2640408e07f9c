//! The serializer: structural inverse of the binder.
//!
//! Walks an instance's bound values back into the generic tree form. The
//! binder already materialized each field's kind into its bound-value tag,
//! so serialization needs no registry lookups: nested instances recurse,
//! list elements recurse in original order, and raw fragments are copied by
//! value so the output never aliases the live instance.

use serde_json::{Map, Value};

use super::instance::{BoundValue, Instance};

/// Serialize an instance into a generic tree mapping.
pub fn serialize(instance: &Instance) -> Value {
    let mut mapping = Map::new();
    for (field, bound) in instance.fields() {
        let value = match bound {
            BoundValue::Scalar(value) => value.clone(),
            BoundValue::Nested(nested) => serialize(nested),
            BoundValue::List(items) => Value::Array(items.iter().map(serialize).collect()),
        };
        mapping.insert(field.to_string(), value);
    }
    Value::Object(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_fields_copied_by_value() {
        let mut instance = Instance::new("Conf");
        instance.set("n", BoundValue::Scalar(json!(5)));
        instance.set("xs", BoundValue::Scalar(json!([1, 2])));

        let tree = serialize(&instance);
        assert_eq!(tree, json!({"n": 5, "xs": [1, 2]}));

        // Mutating the instance afterwards must not affect the tree.
        if let Some(BoundValue::Scalar(Value::Array(items))) = instance.get_mut("xs") {
            items.push(json!(3));
        }
        assert_eq!(tree["xs"], json!([1, 2]));
    }

    #[test]
    fn test_nested_instance_recurses() {
        let mut inner = Instance::new("Inner");
        inner.set("a", BoundValue::Scalar(json!(1)));

        let mut outer = Instance::new("Outer");
        outer.set("inner", BoundValue::Nested(inner));

        assert_eq!(serialize(&outer), json!({"inner": {"a": 1}}));
    }

    #[test]
    fn test_list_preserves_order() {
        let mut first = Instance::new("Inner");
        first.set("a", BoundValue::Scalar(json!(1)));
        let mut second = Instance::new("Inner");
        second.set("a", BoundValue::Scalar(json!(2)));

        let mut outer = Instance::new("Outer");
        outer.set("items", BoundValue::List(vec![first, second]));

        assert_eq!(
            serialize(&outer),
            json!({"items": [{"a": 1}, {"a": 2}]})
        );
    }

    #[test]
    fn test_empty_instance_is_empty_mapping() {
        let instance = Instance::new("Conf");
        assert_eq!(serialize(&instance), json!({}));
    }
}
