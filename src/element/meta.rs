//! Free-form member bags: meta, attributes and the jsonapi object.

use serde_json::Value;

use super::{expect_object, invalid, scalar_to_string, set_meta};
use crate::access::{Members, Parent};
use crate::error::BuildError;
use crate::manager::Manager;
use crate::types::{json_type_name, ElementKind};

/// Member names a resource reserves for itself.
const RESERVED_ATTRIBUTES: &[&str] = &["type", "id", "relationships", "links"];

element!(
    /// Non-standard meta-information. Members are kept as raw JSON.
    Meta
);

impl Meta {
    pub fn new(value: &Value, _manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "Meta")?;

        let mut members = Members::object();
        for (name, member) in object {
            members.insert(name.as_str(), member.clone());
        }

        Ok(Self { members })
    }
}

element!(
    /// A resource's attribute values, kept as raw JSON.
    Attributes
);

impl Attributes {
    pub fn new(value: &Value, _manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "Attributes")?;

        if RESERVED_ATTRIBUTES.iter().any(|name| object.contains_key(*name)) {
            return invalid(
                "These properties are not allowed in attributes: `type`, `id`, `relationships`, `links`",
            );
        }

        let mut members = Members::object();
        for (name, member) in object {
            members.insert(name.as_str(), member.clone());
        }

        Ok(Self { members })
    }
}

element!(
    /// The server's implementation info (`version`, `meta`).
    Jsonapi
);

impl Jsonapi {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "Jsonapi")?;
        let mut members = Members::object();

        if let Some(version) = object.get("version") {
            let Some(version) = scalar_to_string(version) else {
                return invalid(format!(
                    "property \"version\" cannot be an object or array, \"{}\" given.",
                    json_type_name(version)
                ));
            };
            members.insert("version", version);
        }

        set_meta(&mut members, object, manager, ElementKind::Jsonapi)?;

        Ok(Self { members })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Accessable, Member};
    use serde_json::json;

    fn build<T: crate::element::Element>(value: Value) -> Result<T, BuildError> {
        T::build(&value, &Manager::new(), &Parent::root())
    }

    #[test]
    fn meta_keeps_members_in_input_order() {
        let meta: Meta = build(json!({"z": 1, "a": {"nested": true}, "m": [1, 2]})).unwrap();
        assert_eq!(meta.keys(), ["z", "a", "m"]);
        assert_eq!(
            meta.get("a").unwrap().as_value(),
            Some(&json!({"nested": true}))
        );
    }

    #[test]
    fn empty_meta_is_valid() {
        let meta: Meta = build(json!({})).unwrap();
        assert!(meta.keys().is_empty());
    }

    #[test]
    fn meta_must_be_an_object() {
        let err = build::<Meta>(json!("meta")).unwrap_err();
        assert_eq!(err.to_string(), "Meta has to be an object, \"string\" given.");
    }

    #[test]
    fn attributes_reject_reserved_names() {
        for name in RESERVED_ATTRIBUTES {
            let mut object = serde_json::Map::new();
            object.insert("title".into(), json!("ok"));
            object.insert((*name).into(), json!("x"));
            let err = build::<Attributes>(Value::Object(object)).unwrap_err();
            assert!(err.to_string().contains("not allowed in attributes"));
        }
    }

    #[test]
    fn attributes_store_raw_values() {
        let attributes: Attributes =
            build(json!({"title": "JSON:API paints my bikeshed!", "tags": ["a"]})).unwrap();
        assert_eq!(attributes.keys(), ["title", "tags"]);
        assert!(matches!(attributes.get("tags").unwrap(), Member::Value(Value::Array(_))));
    }

    #[test]
    fn jsonapi_coerces_version() {
        let jsonapi: Jsonapi = build(json!({"version": 1.0, "meta": {"a": 1}})).unwrap();
        assert_eq!(jsonapi.get("version").unwrap().as_str(), Some("1.0"));
        assert!(jsonapi.get("meta").unwrap().is_kind(ElementKind::Meta));
    }

    #[test]
    fn jsonapi_rejects_structured_version() {
        let err = build::<Jsonapi>(json!({"version": ["1.0"]})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "property \"version\" cannot be an object or array, \"array\" given."
        );
    }
}
