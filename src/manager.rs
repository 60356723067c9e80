//! Element factory and the per-parse manager.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::access::{Accessable, Parent};
use crate::element::{
    Attributes, Document, DocumentLink, Element, Error, ErrorCollection, ErrorLink, ErrorSource,
    Jsonapi, Link, Meta, Relationship, RelationshipCollection, RelationshipLink,
    ResourceCollection, ResourceIdentifier, ResourceIdentifierCollection, ResourceItem,
    ResourceItemLink, ResourceNull,
};
use crate::error::{BuildError, FactoryError};
use crate::types::{Direction, ElementKind, OPTIONAL_ITEM_ID};

/// Builds one element from its raw value, the manager and its parent.
pub type Constructor =
    fn(&Value, &Manager, &Parent<'_>) -> Result<Box<dyn Accessable>, BuildError>;

/// Registry mapping element names to constructors.
#[derive(Clone)]
pub struct Factory {
    constructors: HashMap<String, Constructor>,
}

impl Factory {
    /// Create a factory with every built-in element registered.
    pub fn new() -> Self {
        let constructors = ElementKind::ALL
            .iter()
            .map(|kind| (kind.as_str().to_string(), default_constructor(*kind)))
            .collect();
        Self { constructors }
    }

    /// Create a factory whose defaults are replaced or extended by `overrides`.
    pub fn with_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, Constructor)>,
        S: Into<String>,
    {
        let mut factory = Self::new();
        for (name, constructor) in overrides {
            factory.constructors.insert(name.into(), constructor);
        }
        factory
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Build the element registered as `name`.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Factory` if nothing is registered under `name`,
    /// or whatever the constructor itself rejects.
    pub fn make(
        &self,
        name: &str,
        value: &Value,
        manager: &Manager,
        parent: &Parent<'_>,
    ) -> Result<Box<dyn Accessable>, BuildError> {
        let constructor = self.constructors.get(name).ok_or_else(|| FactoryError {
            name: name.to_string(),
        })?;
        tracing::trace!(element = name, parent = ?parent.kind(), "constructing element");
        constructor(value, manager, parent)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Factory").field("elements", &names).finish()
    }
}

fn default_constructor(kind: ElementKind) -> Constructor {
    match kind {
        ElementKind::Attributes => construct::<Attributes>,
        ElementKind::Document => construct::<Document>,
        ElementKind::DocumentLink => construct::<DocumentLink>,
        ElementKind::Error => construct::<Error>,
        ElementKind::ErrorCollection => construct::<ErrorCollection>,
        ElementKind::ErrorLink => construct::<ErrorLink>,
        ElementKind::ErrorSource => construct::<ErrorSource>,
        ElementKind::Jsonapi => construct::<Jsonapi>,
        ElementKind::Link => construct::<Link>,
        ElementKind::Meta => construct::<Meta>,
        ElementKind::Relationship => construct::<Relationship>,
        ElementKind::RelationshipCollection => construct::<RelationshipCollection>,
        ElementKind::RelationshipLink => construct::<RelationshipLink>,
        ElementKind::ResourceCollection => construct::<ResourceCollection>,
        ElementKind::ResourceIdentifier => construct::<ResourceIdentifier>,
        ElementKind::ResourceIdentifierCollection => construct::<ResourceIdentifierCollection>,
        ElementKind::ResourceItem => construct::<ResourceItem>,
        ElementKind::ResourceItemLink => construct::<ResourceItemLink>,
        ElementKind::ResourceNull => construct::<ResourceNull>,
    }
}

fn construct<T: Element>(
    value: &Value,
    manager: &Manager,
    parent: &Parent<'_>,
) -> Result<Box<dyn Accessable>, BuildError> {
    Ok(Box::new(T::build(value, manager, parent)?))
}

/// Context shared by every constructor during one parse.
#[derive(Debug, Clone, Default)]
pub struct Manager {
    factory: Factory,
    params: HashMap<String, Value>,
}

impl Manager {
    /// Create a manager with the default factory and no parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager configured for request or response documents.
    pub fn for_direction(direction: Direction) -> Self {
        Self::new().with_param(OPTIONAL_ITEM_ID, Value::Bool(direction == Direction::Request))
    }

    pub fn with_factory(mut self, factory: Factory) -> Self {
        self.factory = factory;
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    /// Returns the named parameter, or `default` if it was never set.
    pub fn get_param<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.params.get(name).unwrap_or(default)
    }

    /// Build a child element through the factory.
    pub fn make(
        &self,
        kind: ElementKind,
        value: &Value,
        parent: &Parent<'_>,
    ) -> Result<Box<dyn Accessable>, BuildError> {
        self.factory.make(kind.as_str(), value, self, parent)
    }
}
