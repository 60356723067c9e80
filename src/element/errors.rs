//! Error objects of an error document.

use serde_json::Value;

use super::{expect_object, expect_string, invalid, set_meta};
use crate::access::{Members, Parent};
use crate::error::BuildError;
use crate::manager::Manager;
use crate::types::{json_type_name, ElementKind};

element!(
    /// A single error object. Every member is optional.
    Error
);

impl Error {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        const KIND: ElementKind = ElementKind::Error;

        let object = expect_object(value, "Error")?;
        let mut members = Members::object();

        if let Some(id) = object.get("id") {
            members.insert("id", expect_string(id, "id")?);
        }

        if let Some(links) = object.get("links") {
            let node = manager.make(
                ElementKind::ErrorLink,
                links,
                &Parent::new(KIND.as_str(), &members),
            )?;
            members.insert("links", node);
        }

        for name in ["status", "code", "title", "detail"] {
            if let Some(member) = object.get(name) {
                members.insert(name, expect_string(member, name)?);
            }
        }

        if let Some(source) = object.get("source") {
            let node = manager.make(
                ElementKind::ErrorSource,
                source,
                &Parent::new(KIND.as_str(), &members),
            )?;
            members.insert("source", node);
        }

        set_meta(&mut members, object, manager, KIND)?;

        Ok(Self { members })
    }
}

element!(
    /// The non-empty `errors` array of a document.
    ErrorCollection
);

impl ErrorCollection {
    pub fn new(value: &Value, manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let Value::Array(errors) = value else {
            return invalid(format!(
                "Errors for a collection has to be in an array, \"{}\" given.",
                json_type_name(value)
            ));
        };

        if errors.is_empty() {
            return invalid("Errors array cannot be empty and MUST have at least one object");
        }

        let mut members = Members::array();
        for error in errors {
            let node = manager.make(
                ElementKind::Error,
                error,
                &Parent::new(ElementKind::ErrorCollection.as_str(), &members),
            )?;
            members.push(node);
        }

        Ok(Self { members })
    }
}

element!(
    /// Where an error came from: a JSON pointer and/or a query parameter.
    ErrorSource
);

impl ErrorSource {
    pub fn new(value: &Value, _manager: &Manager, _parent: &Parent<'_>) -> Result<Self, BuildError> {
        let object = expect_object(value, "ErrorSource")?;
        let mut members = Members::object();

        for name in ["pointer", "parameter"] {
            if let Some(member) = object.get(name) {
                members.insert(name, expect_string(member, name)?);
            }
        }

        Ok(Self { members })
    }
}
