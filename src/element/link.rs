//! Link objects and the `links` members of documents, resources,
//! relationships and errors.
//!
//! A link member is either a URL string or a link object (`href` plus
//! optional `meta`). Pagination links (`first`, `last`, `prev`, `next`) are
//! only recognized where the sibling `data` makes them meaningful; elsewhere
//! they are ordinary custom links.

use serde_json::{Map, Value};

use super::{expect_object, invalid};
use crate::access::{Members, Parent};
use crate::error::BuildError;
use crate::manager::Manager;
use crate::types::{json_type_name, ElementKind};

const PAGINATION: [&str; 4] = ["first", "last", "prev", "next"];

/// Store a string link, or build a link object.
fn set_link(
    members: &mut Members,
    name: &str,
    value: &Value,
    manager: &Manager,
    kind: ElementKind,
) -> Result<(), BuildError> {
    match value {
        Value::String(url) => members.insert(name, url.clone()),
        Value::Object(_) => {
            let node = manager.make(ElementKind::Link, value, &Parent::new(kind.as_str(), members))?;
            members.insert(name, node);
        }
        other => {
            return invalid(format!(
                "Link attribute has to be an object or string, \"{}\" given.",
                json_type_name(other)
            ))
        }
    }
    Ok(())
}

/// `self` and `related` must be a string or a link object.
fn set_named_link(
    members: &mut Members,
    name: &str,
    value: &Value,
    manager: &Manager,
    kind: ElementKind,
) -> Result<(), BuildError> {
    if !value.is_string() && !value.is_object() {
        return invalid(format!(
            "property \"{}\" has to be a string or object, \"{}\" given.",
            name,
            json_type_name(value)
        ));
    }
    set_link(members, name, value, manager, kind)
}

/// A `null` pagination link is the same as an absent one.
fn set_pagination_links(
    members: &mut Members,
    object: &Map<String, Value>,
) -> Result<(), BuildError> {
    for name in PAGINATION {
        match object.get(name) {
            None | Some(Value::Null) => {}
            Some(Value::String(url)) => members.insert(name, url.clone()),
            Some(other) => {
                return invalid(format!(
                    "property \"{}\" has to be a string or null, \"{}\" given.",
                    name,
                    json_type_name(other)
                ))
            }
        }
    }
    Ok(())
}

/// Store every member not already handled as a custom link.
fn set_custom_links(
    members: &mut Members,
    object: &Map<String, Value>,
    handled: &[&str],
    manager: &Manager,
    kind: ElementKind,
) -> Result<(), BuildError> {
    for (name, value) in object {
        if handled.contains(&name.as_str()) {
            continue;
        }
        set_link(members, name, value, manager, kind)?;
    }
    Ok(())
}

element!(
    /// A link object: `href` plus arbitrary string members and `meta`.
    Link
);

impl Link {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "Link")?;

        if !object.contains_key("href") {
            return invalid("Link must have a \"href\" attribute.");
        }

        let mut members = Members::object();
        for (name, member) in object {
            if name == "meta" {
                let node = manager.make(
                    ElementKind::Meta,
                    member,
                    &Parent::new(ElementKind::Link.as_str(), &members),
                )?;
                members.insert("meta", node);
                continue;
            }

            let Value::String(url) = member else {
                return invalid(format!(
                    "Every link attribute has to be a string, \"{}\" given.",
                    json_type_name(member)
                ));
            };
            members.insert(name.as_str(), url.clone());
        }

        Ok(Self { members })
    }
}

element!(
    /// Top-level `links` of a document.
    DocumentLink
);

impl DocumentLink {
    pub fn new(value: &Value, manager: &Manager, parent: &Parent<'_>) -> Result<Self, BuildError> {
        const KIND: ElementKind = ElementKind::DocumentLink;

        let object = expect_object(value, "DocumentLink")?;
        let mut members = Members::object();
        let mut handled = vec!["self", "related"];

        if let Some(link) = object.get("self") {
            set_named_link(&mut members, "self", link, manager, KIND)?;
        }
        if let Some(link) = object.get("related") {
            set_named_link(&mut members, "related", link, manager, KIND)?;
        }

        if parent.has("data") {
            set_pagination_links(&mut members, object)?;
            handled.extend(PAGINATION);
        }

        set_custom_links(&mut members, object, &handled, manager, KIND)?;

        Ok(Self { members })
    }
}

element!(
    /// `links` of an error object; `about` is required.
    ErrorLink
);

impl ErrorLink {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        const KIND: ElementKind = ElementKind::ErrorLink;

        let object = expect_object(value, "ErrorLink")?;

        let Some(about) = object.get("about") else {
            return invalid("ErrorLink MUST contain these properties: about");
        };

        let mut members = Members::object();
        set_link(&mut members, "about", about, manager, KIND)?;
        set_custom_links(&mut members, object, &["about"], manager, KIND)?;

        Ok(Self { members })
    }
}

element!(
    /// `links` of a relationship.
    ///
    /// Needs `self` or `related`. Pagination is only read when the
    /// relationship's `data` is a to-many linkage.
    RelationshipLink
);

impl RelationshipLink {
    pub fn new(value: &Value, manager: &Manager, parent: &Parent<'_>) -> Result<Self, BuildError> {
        const KIND: ElementKind = ElementKind::RelationshipLink;

        let object = expect_object(value, "RelationshipLink")?;

        if !object.contains_key("self") && !object.contains_key("related") {
            return invalid("RelationshipLink has to be at least a \"self\" or \"related\" link");
        }

        let mut members = Members::object();
        let mut handled = vec!["self", "related"];

        if let Some(link) = object.get("self") {
            set_named_link(&mut members, "self", link, manager, KIND)?;
        }
        if let Some(link) = object.get("related") {
            set_named_link(&mut members, "related", link, manager, KIND)?;
        }

        let to_many = parent
            .get("data")
            .is_some_and(|data| data.is_kind(ElementKind::ResourceIdentifierCollection));
        if to_many {
            set_pagination_links(&mut members, object)?;
            handled.extend(PAGINATION);
        }

        set_custom_links(&mut members, object, &handled, manager, KIND)?;

        Ok(Self { members })
    }
}

element!(
    /// `links` of a resource object. Every member is a link.
    ResourceItemLink
);

impl ResourceItemLink {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "ResourceItemLink")?;

        let mut members = Members::object();
        set_custom_links(&mut members, object, &[], manager, ElementKind::ResourceItemLink)?;

        Ok(Self { members })
    }
}
