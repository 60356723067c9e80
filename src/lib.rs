//! JSON:API Document Parser
//!
//! Validates JSON documents against the structural rules of the JSON:API
//! specification and builds a typed, navigable element tree.
//!
//! # Example
//!
//! ```
//! use jsonapi_document::{parse_response_str, Accessable, ElementKind};
//!
//! let doc = parse_response_str(r#"{
//!     "data": {
//!         "type": "articles",
//!         "id": "1",
//!         "attributes": { "title": "Rails is Omakase" }
//!     }
//! }"#).unwrap();
//!
//! assert!(doc.get("data").unwrap().is_kind(ElementKind::ResourceItem));
//! assert_eq!(doc.get("data.attributes.title").unwrap().as_str(), Some("Rails is Omakase"));
//! assert!(!doc.has("errors"));
//! ```
//!
//! # Elements
//!
//! | Member | Element |
//! |--------|---------|
//! | top level | `Document` |
//! | `data` (object with `type`, `id`, optional `meta` only) | `ResourceIdentifier` |
//! | `data` (other object) | `ResourceItem` |
//! | `data` (array) / `included` | `ResourceCollection` |
//! | `data` (`null`) | `ResourceNull` |
//! | relationship `data` (array) | `ResourceIdentifierCollection` |
//! | `errors` | `ErrorCollection` of `Error` |
//! | `links` | `DocumentLink`, `ResourceItemLink`, `RelationshipLink`, `ErrorLink` |
//!
//! # Paths
//!
//! `get` and `has` accept dotted paths; collection entries are addressed by
//! index:
//! ```text
//! data.0.relationships.author.data.id
//! ```

mod access;
mod element;
mod error;
mod export;
mod loader;
mod manager;
mod parser;
mod types;

pub use access::{Accessable, Key, Member, Members, Parent, Shape};
pub use element::{
    Attributes, Document, DocumentLink, Element, Error, ErrorCollection, ErrorLink, ErrorSource,
    Jsonapi, Link, Meta, Relationship, RelationshipCollection, RelationshipLink,
    ResourceCollection, ResourceIdentifier, ResourceIdentifierCollection, ResourceItem,
    ResourceItemLink, ResourceNull,
};
pub use error::{AccessError, BuildError, FactoryError, InputError, ValidationError};
pub use export::to_value;
pub use loader::{load_document, load_document_str};
pub use manager::{Constructor, Factory, Manager};
pub use parser::{
    is_valid_request_str, is_valid_response_str, parse, parse_file, parse_request_str,
    parse_response_str, parse_str,
};
pub use types::{json_type_name, Direction, ElementKind, OPTIONAL_ITEM_ID};
