//! Core types shared by the document elements.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Manager parameter allowing a top-level resource item without `id`.
pub const OPTIONAL_ITEM_ID: &str = "optional_item_id";

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether a document is sent by a client or returned by a server.
///
/// Requests may create resources without an `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Request,
    Response,
}

impl Direction {
    /// Create direction from a request flag (true = Request, false = Response).
    pub fn from_request_flag(is_request: bool) -> Self {
        if is_request {
            Direction::Request
        } else {
            Direction::Response
        }
    }
}

/// Every element the default factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Attributes,
    Document,
    DocumentLink,
    Error,
    ErrorCollection,
    ErrorLink,
    ErrorSource,
    Jsonapi,
    Link,
    Meta,
    Relationship,
    RelationshipCollection,
    RelationshipLink,
    ResourceCollection,
    ResourceIdentifier,
    ResourceIdentifierCollection,
    ResourceItem,
    ResourceItemLink,
    ResourceNull,
}

impl ElementKind {
    pub const ALL: [ElementKind; 19] = [
        ElementKind::Attributes,
        ElementKind::Document,
        ElementKind::DocumentLink,
        ElementKind::Error,
        ElementKind::ErrorCollection,
        ElementKind::ErrorLink,
        ElementKind::ErrorSource,
        ElementKind::Jsonapi,
        ElementKind::Link,
        ElementKind::Meta,
        ElementKind::Relationship,
        ElementKind::RelationshipCollection,
        ElementKind::RelationshipLink,
        ElementKind::ResourceCollection,
        ElementKind::ResourceIdentifier,
        ElementKind::ResourceIdentifierCollection,
        ElementKind::ResourceItem,
        ElementKind::ResourceItemLink,
        ElementKind::ResourceNull,
    ];

    /// The name the factory registers this element under.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Attributes => "Attributes",
            ElementKind::Document => "Document",
            ElementKind::DocumentLink => "DocumentLink",
            ElementKind::Error => "Error",
            ElementKind::ErrorCollection => "ErrorCollection",
            ElementKind::ErrorLink => "ErrorLink",
            ElementKind::ErrorSource => "ErrorSource",
            ElementKind::Jsonapi => "Jsonapi",
            ElementKind::Link => "Link",
            ElementKind::Meta => "Meta",
            ElementKind::Relationship => "Relationship",
            ElementKind::RelationshipCollection => "RelationshipCollection",
            ElementKind::RelationshipLink => "RelationshipLink",
            ElementKind::ResourceCollection => "ResourceCollection",
            ElementKind::ResourceIdentifier => "ResourceIdentifier",
            ElementKind::ResourceIdentifierCollection => "ResourceIdentifierCollection",
            ElementKind::ResourceItem => "ResourceItem",
            ElementKind::ResourceItemLink => "ResourceItemLink",
            ElementKind::ResourceNull => "ResourceNull",
        }
    }

    /// Look up an element by its factory name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }

    #[test]
    fn element_kind_names_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ElementKind::parse("Resource"), None);
    }

    #[test]
    fn direction_from_flag() {
        assert_eq!(Direction::from_request_flag(true), Direction::Request);
        assert_eq!(Direction::from_request_flag(false), Direction::Response);
    }

    #[test]
    fn direction_serde_names() {
        assert_eq!(serde_json::to_value(Direction::Request).unwrap(), json!("request"));
        let direction: Direction = serde_json::from_value(json!("response")).unwrap();
        assert_eq!(direction, Direction::Response);
    }
}
