//! The top-level document.

use serde_json::Value;

use super::{expect_object, invalid, resource_kind};
use crate::access::{Members, Parent};
use crate::error::BuildError;
use crate::manager::Manager;
use crate::types::{json_type_name, ElementKind};

element!(
    /// The root of a JSON:API document.
    ///
    /// Holds at least one of `data`, `errors` and `meta`; `data` and
    /// `errors` never coexist and `included` requires `data`.
    Document
);

impl Document {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        const KIND: ElementKind = ElementKind::Document;

        let object = expect_object(value, "Document")?;

        let has_data = object.contains_key("data");
        let has_errors = object.contains_key("errors");

        if !has_data && !has_errors && !object.contains_key("meta") {
            return invalid(
                "Document MUST contain at least one of the following properties: data, errors, meta",
            );
        }
        if has_data && has_errors {
            return invalid("The properties `data` and `errors` MUST NOT coexist in Document.");
        }
        if object.contains_key("included") && !has_data {
            return invalid(
                "If Document does not contain a `data` property, the `included` property MUST NOT be present either.",
            );
        }

        let mut members = Members::object();

        if let Some(data) = object.get("data") {
            let kind = data_kind(data)?;
            tracing::debug!(element = %kind, "primary data");
            let node = manager.make(kind, data, &Parent::new(KIND.as_str(), &members))?;
            members.insert("data", node);
        }

        let nested = [
            ("errors", ElementKind::ErrorCollection),
            ("meta", ElementKind::Meta),
            ("included", ElementKind::ResourceCollection),
            ("jsonapi", ElementKind::Jsonapi),
            // Pagination links are gated on `data`, stored above.
            ("links", ElementKind::DocumentLink),
        ];
        for (name, kind) in nested {
            if let Some(member) = object.get(name) {
                let node = manager.make(kind, member, &Parent::new(KIND.as_str(), &members))?;
                members.insert(name, node);
            }
        }

        Ok(Self { members })
    }
}

/// Primary data: `null`, a resource collection, an identifier or an item.
fn data_kind(data: &Value) -> Result<ElementKind, BuildError> {
    match data {
        Value::Null => Ok(ElementKind::ResourceNull),
        Value::Array(_) => Ok(ElementKind::ResourceCollection),
        Value::Object(object) => Ok(resource_kind(object)),
        other => invalid(format!(
            "Data value has to be null or an object, \"{}\" given.",
            json_type_name(other)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Accessable;
    use serde_json::json;

    fn build(value: Value) -> Result<Document, BuildError> {
        Document::new(&value, &Manager::new(), &Parent::root())
    }

    #[test]
    fn requires_a_top_level_member() {
        let err = build(json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Document MUST contain at least one of the following properties: data, errors, meta"
        );
    }

    #[test]
    fn data_and_errors_are_exclusive() {
        let err = build(json!({"data": null, "errors": [{}]})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The properties `data` and `errors` MUST NOT coexist in Document."
        );
    }

    #[test]
    fn included_requires_data() {
        let err = build(json!({"meta": {}, "included": []})).unwrap_err();
        assert!(err.to_string().contains("`included` property MUST NOT be present"));
    }

    #[test]
    fn data_must_be_null_array_or_object() {
        let err = build(json!({"data": "articles"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Data value has to be null or an object, \"string\" given."
        );
    }

    #[test]
    fn document_must_be_an_object() {
        let err = build(json!([])).unwrap_err();
        assert_eq!(err.to_string(), "Document has to be an object, \"array\" given.");
    }

    #[test]
    fn data_dispatch_by_shape() {
        let doc = build(json!({"data": {"type": "articles", "id": "1"}})).unwrap();
        assert!(doc.get("data").unwrap().is_kind(ElementKind::ResourceIdentifier));

        let doc = build(json!({"data": {"type": "articles", "id": "1", "attributes": {}}})).unwrap();
        assert!(doc.get("data").unwrap().is_kind(ElementKind::ResourceItem));

        let doc = build(json!({"data": []})).unwrap();
        assert!(doc.get("data").unwrap().is_kind(ElementKind::ResourceCollection));

        let doc = build(json!({"data": null})).unwrap();
        assert!(doc.get("data").unwrap().is_kind(ElementKind::ResourceNull));
    }

    #[test]
    fn members_in_canonical_order() {
        let doc = build(json!({
            "links": {"self": "http://example.com/articles"},
            "jsonapi": {"version": "1.0"},
            "included": [],
            "meta": {},
            "data": [],
            "unknown": true
        }))
        .unwrap();
        assert_eq!(doc.keys(), ["data", "meta", "included", "jsonapi", "links"]);
    }
}
