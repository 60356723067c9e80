//! Relationship objects and the `relationships` member of a resource.

use serde_json::Value;

use super::{expect_object, invalid, set_meta};
use crate::access::{Accessable, Members, Parent};
use crate::error::BuildError;
use crate::manager::Manager;
use crate::types::ElementKind;

element!(
    /// A single relationship: resource linkage, links and/or meta.
    Relationship
);

impl Relationship {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        const KIND: ElementKind = ElementKind::Relationship;

        let object = expect_object(value, "Relationship")?;

        if !["links", "data", "meta"]
            .iter()
            .any(|name| object.contains_key(*name))
        {
            return invalid(
                "A Relationship object MUST contain at least one of the following properties: links, data, meta",
            );
        }

        let mut members = Members::object();

        if let Some(data) = object.get("data") {
            let kind = match data {
                Value::Null => ElementKind::ResourceNull,
                Value::Array(_) => ElementKind::ResourceIdentifierCollection,
                _ => ElementKind::ResourceIdentifier,
            };
            let node = manager.make(kind, data, &Parent::new(KIND.as_str(), &members))?;
            members.insert("data", node);
        }

        set_meta(&mut members, object, manager, KIND)?;

        // Pagination in links depends on the shape of `data`, stored above.
        if let Some(links) = object.get("links") {
            let node = manager.make(
                ElementKind::RelationshipLink,
                links,
                &Parent::new(KIND.as_str(), &members),
            )?;
            members.insert("links", node);
        }

        Ok(Self { members })
    }
}

element!(
    /// Named relationships of a resource object.
    RelationshipCollection
);

impl RelationshipCollection {
    pub fn new(value: &Value, manager: &Manager, parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "Relationships")?;

        if object.contains_key("type") || object.contains_key("id") {
            return invalid("These properties are not allowed in relationships: `type`, `id`");
        }

        // Attributes and relationships share one namespace.
        let attributes = parent
            .get("attributes")
            .and_then(|member| member.as_node())
            .map(|node| node.members());

        let mut members = Members::object();
        for (name, relationship) in object {
            if attributes.is_some_and(|attributes| attributes.lookup(name).is_some()) {
                return invalid(format!(
                    "Relationship \"{}\" cannot be set because it already exists in Resource object.",
                    name
                ));
            }

            let node = manager.make(
                ElementKind::Relationship,
                relationship,
                &Parent::new(ElementKind::RelationshipCollection.as_str(), &members),
            )?;
            members.insert(name.as_str(), node);
        }

        Ok(Self { members })
    }
}
