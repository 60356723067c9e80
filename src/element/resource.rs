//! Resource objects, resource identifiers and their collections.

use serde_json::{Map, Value};

use super::{expect_object, invalid, resource_kind, scalar_to_string, set_meta};
use crate::access::{Members, Parent};
use crate::error::BuildError;
use crate::manager::Manager;
use crate::types::{json_type_name, ElementKind, OPTIONAL_ITEM_ID};

/// Coerce `type` or `id` to a string.
fn resource_string(value: &Value, message: &str) -> Result<String, BuildError> {
    match scalar_to_string(value) {
        Some(s) => Ok(s),
        None => invalid(message),
    }
}

fn resource_type(object: &Map<String, Value>) -> Result<String, BuildError> {
    let Some(value) = object.get("type") else {
        return invalid("A resource object MUST contain a type");
    };
    resource_string(value, "Resource type cannot be an array or object")
}

fn resource_id(value: &Value) -> Result<String, BuildError> {
    resource_string(value, "Resource id cannot be an array or object")
}

fn expect_array<'a>(value: &'a Value) -> Result<&'a [Value], BuildError> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => invalid(format!(
            "Resources for a collection has to be in an array, \"{}\" given.",
            json_type_name(other)
        )),
    }
}

fn expect_resource_object(value: &Value) -> Result<&Map<String, Value>, BuildError> {
    match value {
        Value::Object(object) => Ok(object),
        other => invalid(format!(
            "Resources inside a collection MUST be objects, \"{}\" given.",
            json_type_name(other)
        )),
    }
}

element!(
    /// Primary data that is explicitly `null`. Has no members.
    ResourceNull
);

impl ResourceNull {
    pub fn new(_value: &Value, _manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        Ok(Self {
            members: Members::null(),
        })
    }
}

element!(
    /// A `type`/`id` pair pointing at a resource, with optional `meta`.
    ResourceIdentifier
);

impl ResourceIdentifier {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "Resource")?;

        if !object.contains_key("type") {
            return invalid("A resource object MUST contain a type");
        }
        let Some(id) = object.get("id") else {
            return invalid("A resource object MUST contain an id");
        };

        let mut members = Members::object();
        members.insert("type", resource_type(object)?);
        members.insert("id", resource_id(id)?);
        set_meta(&mut members, object, manager, ElementKind::ResourceIdentifier)?;

        Ok(Self { members })
    }
}

element!(
    /// A full resource object.
    ///
    /// `id` may only be left out of a request document's primary resource,
    /// which is when the manager sets `optional_item_id` and the parent is
    /// the document itself.
    ResourceItem
);

impl ResourceItem {
    pub fn new(value: &Value, manager: &Manager, parent: &Parent<'_>) -> Result<Self, BuildError> {
        const KIND: ElementKind = ElementKind::ResourceItem;

        let object = expect_object(value, "Resource")?;
        let mut members = Members::object();

        members.insert("type", resource_type(object)?);

        let id_optional = parent.is(ElementKind::Document)
            && manager
                .get_param(OPTIONAL_ITEM_ID, &Value::Bool(false))
                .as_bool()
                .unwrap_or(false);

        match object.get("id") {
            Some(id) => members.insert("id", resource_id(id)?),
            None if id_optional => {}
            None => return invalid("A resource object MUST contain an id"),
        }

        set_meta(&mut members, object, manager, KIND)?;

        if let Some(attributes) = object.get("attributes") {
            let node = manager.make(
                ElementKind::Attributes,
                attributes,
                &Parent::new(KIND.as_str(), &members),
            )?;
            members.insert("attributes", node);
        }

        // Relationships check names against the attributes stored above.
        if let Some(relationships) = object.get("relationships") {
            let node = manager.make(
                ElementKind::RelationshipCollection,
                relationships,
                &Parent::new(KIND.as_str(), &members),
            )?;
            members.insert("relationships", node);
        }

        if let Some(links) = object.get("links") {
            let node = manager.make(
                ElementKind::ResourceItemLink,
                links,
                &Parent::new(KIND.as_str(), &members),
            )?;
            members.insert("links", node);
        }

        Ok(Self { members })
    }
}

element!(
    /// An ordered list of resource objects and identifiers.
    ResourceCollection
);

impl ResourceCollection {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let items = expect_array(value)?;
        let mut members = Members::array();

        for item in items {
            let object = expect_resource_object(item)?;
            let node = manager.make(
                resource_kind(object),
                item,
                &Parent::new(ElementKind::ResourceCollection.as_str(), &members),
            )?;
            members.push(node);
        }

        Ok(Self { members })
    }
}

element!(
    /// An ordered list of resource identifiers (to-many linkage).
    ResourceIdentifierCollection
);

impl ResourceIdentifierCollection {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let items = expect_array(value)?;
        let mut members = Members::array();

        for item in items {
            expect_resource_object(item)?;
            let node = manager.make(
                ElementKind::ResourceIdentifier,
                item,
                &Parent::new(ElementKind::ResourceIdentifierCollection.as_str(), &members),
            )?;
            members.push(node);
        }

        Ok(Self { members })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{Accessable, Shape};
    use crate::element::Element;
    use crate::types::Direction;
    use serde_json::json;

    fn build<T: Element>(value: Value) -> Result<T, BuildError> {
        T::build(&value, &Manager::new(), &Parent::root())
    }

    #[test]
    fn identifier_coerces_numeric_id() {
        let identifier: ResourceIdentifier = build(json!({"type": "people", "id": 9})).unwrap();
        assert_eq!(identifier.get("type").unwrap().as_str(), Some("people"));
        assert_eq!(identifier.get("id").unwrap().as_str(), Some("9"));
        assert_eq!(identifier.keys(), ["type", "id"]);
    }

    #[test]
    fn identifier_requires_type_and_id() {
        let err = build::<ResourceIdentifier>(json!({"id": "1"})).unwrap_err();
        assert!(err.to_string().contains("MUST contain a type"));

        let err = build::<ResourceIdentifier>(json!({"type": "people"})).unwrap_err();
        assert!(err.to_string().contains("MUST contain an id"));
    }

    #[test]
    fn identifier_rejects_structured_values() {
        let err = build::<ResourceIdentifier>(json!({"type": {}, "id": "1"})).unwrap_err();
        assert_eq!(err.to_string(), "Resource type cannot be an array or object");

        let err = build::<ResourceIdentifier>(json!({"type": "people", "id": [1]})).unwrap_err();
        assert_eq!(err.to_string(), "Resource id cannot be an array or object");
    }

    #[test]
    fn item_members_in_canonical_order() {
        let item: ResourceItem = build(json!({
            "links": {"self": "http://example.com/articles/1"},
            "relationships": {"author": {"data": null}},
            "attributes": {"title": "Rails is Omakase"},
            "meta": {"views": 3},
            "id": "1",
            "type": "articles"
        }))
        .unwrap();
        assert_eq!(
            item.keys(),
            ["type", "id", "meta", "attributes", "relationships", "links"]
        );
    }

    #[test]
    fn item_drops_unknown_members() {
        let item: ResourceItem =
            build(json!({"type": "articles", "id": "1", "extra": true})).unwrap();
        assert!(!item.has("extra"));
    }

    #[test]
    fn item_requires_id_outside_request_documents() {
        let err = build::<ResourceItem>(json!({"type": "articles", "title": "x"})).unwrap_err();
        assert_eq!(err.to_string(), "A resource object MUST contain an id");
    }

    #[test]
    fn item_id_optional_only_under_request_document() {
        let manager = Manager::for_direction(Direction::Request);
        let value = json!({"type": "articles", "attributes": {}});
        let members = Members::object();

        let document = Parent::new(ElementKind::Document.as_str(), &members);
        let item = ResourceItem::new(&value, &manager, &document).unwrap();
        assert!(!item.has("id"));

        let collection = Parent::new(ElementKind::ResourceCollection.as_str(), &members);
        let err = ResourceItem::new(&value, &manager, &collection).unwrap_err();
        assert_eq!(err.to_string(), "A resource object MUST contain an id");
    }

    #[test]
    fn collection_discriminates_identifiers_and_items() {
        let collection: ResourceCollection = build(json!([
            {"type": "people", "id": "9"},
            {"type": "people", "id": "9", "attributes": {"name": "Dan"}}
        ]))
        .unwrap();
        assert_eq!(collection.members().shape(), Shape::Array);
        assert!(collection.get("0").unwrap().is_kind(ElementKind::ResourceIdentifier));
        assert!(collection.get("1").unwrap().is_kind(ElementKind::ResourceItem));
        assert_eq!(collection.keys(), [0usize, 1usize]);
    }

    #[test]
    fn collection_rejects_non_objects() {
        let err = build::<ResourceCollection>(json!(["people"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Resources inside a collection MUST be objects, \"string\" given."
        );

        let err = build::<ResourceCollection>(json!({"type": "people"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Resources for a collection has to be in an array, \"object\" given."
        );
    }

    #[test]
    fn identifier_collection_requires_identifiers() {
        let collection: ResourceIdentifierCollection =
            build(json!([{"type": "tags", "id": "2"}, {"type": "tags", "id": "3"}])).unwrap();
        assert_eq!(collection.get("1.id").unwrap().as_str(), Some("3"));

        let err = build::<ResourceIdentifierCollection>(json!([{"type": "tags"}])).unwrap_err();
        assert!(err.to_string().contains("MUST contain an id"));
    }

    #[test]
    fn resource_null_has_nothing() {
        let null: ResourceNull = build(Value::Null).unwrap();
        assert!(null.keys().is_empty());
        assert!(null.get("type").is_err());
        assert!(!null.has("id"));
        assert_eq!(null.members().shape(), Shape::Null);
    }
}
