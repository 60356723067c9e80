//! JSON:API document elements.
//!
//! Every element validates its raw JSON value on construction and builds its
//! nested elements through the manager's factory, passing itself as parent.
//! The first rule violation aborts the whole construction.

use serde_json::{Map, Value};

use crate::access::{Accessable, Members, Parent};
use crate::error::{BuildError, ValidationError};
use crate::manager::Manager;
use crate::types::{json_type_name, ElementKind};

/// Declares an element struct backed by [`Members`](crate::access::Members).
///
/// The struct must provide an inherent `new(value, manager, parent)`.
macro_rules! element {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $name {
            members: $crate::access::Members,
        }

        impl $crate::access::Accessable for $name {
            fn kind(&self) -> &str {
                $crate::types::ElementKind::$name.as_str()
            }

            fn members(&self) -> &$crate::access::Members {
                &self.members
            }
        }

        impl $crate::element::Element for $name {
            fn build(
                value: &serde_json::Value,
                manager: &$crate::manager::Manager,
                parent: &$crate::access::Parent<'_>,
            ) -> Result<Self, $crate::error::BuildError> {
                Self::new(value, manager, parent)
            }
        }
    };
}

mod document;
mod errors;
mod link;
mod meta;
mod relationship;
mod resource;

pub use document::Document;
pub use errors::{Error, ErrorCollection, ErrorSource};
pub use link::{DocumentLink, ErrorLink, Link, RelationshipLink, ResourceItemLink};
pub use meta::{Attributes, Jsonapi, Meta};
pub use relationship::{Relationship, RelationshipCollection};
pub use resource::{
    ResourceCollection, ResourceIdentifier, ResourceIdentifierCollection, ResourceItem,
    ResourceNull,
};

/// An element the factory can construct.
pub trait Element: Accessable + Sized + 'static {
    fn build(value: &Value, manager: &Manager, parent: &Parent<'_>) -> Result<Self, BuildError>;
}

fn invalid<T>(message: impl Into<String>) -> Result<T, BuildError> {
    Err(ValidationError::new(message).into())
}

/// Require an object, naming `element` in the error.
fn expect_object<'a>(value: &'a Value, element: &str) -> Result<&'a Map<String, Value>, BuildError> {
    match value {
        Value::Object(map) => Ok(map),
        other => invalid(format!(
            "{} has to be an object, \"{}\" given.",
            element,
            json_type_name(other)
        )),
    }
}

/// Coerce a scalar to its string form. Arrays and objects yield `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Require a string, naming the property in the error.
fn expect_string(value: &Value, property: &str) -> Result<String, BuildError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => invalid(format!(
            "property \"{}\" has to be a string, \"{}\" given.",
            property,
            json_type_name(other)
        )),
    }
}

/// Build `meta` if present.
fn set_meta(
    members: &mut Members,
    object: &Map<String, Value>,
    manager: &Manager,
    kind: ElementKind,
) -> Result<(), BuildError> {
    if let Some(meta) = object.get("meta") {
        let node = manager.make(ElementKind::Meta, meta, &Parent::new(kind.as_str(), members))?;
        members.insert("meta", node);
    }
    Ok(())
}

/// Pick the element for a resource object by its member names.
///
/// Exactly `type` and `id` (optionally with `meta`) is an identifier;
/// anything else is a full resource item.
fn resource_kind(object: &Map<String, Value>) -> ElementKind {
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    if keys == ["id", "type"] || keys == ["id", "meta", "type"] {
        ElementKind::ResourceIdentifier
    } else {
        ElementKind::ResourceItem
    }
}
