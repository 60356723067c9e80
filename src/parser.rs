//! Entry points turning JSON into a validated [`Document`].

use std::path::Path;

use serde_json::Value;

use crate::access::Parent;
use crate::element::Document;
use crate::error::{BuildError, InputError};
use crate::loader::{load_document, load_document_str};
use crate::manager::Manager;
use crate::types::Direction;

/// Build a document from an already decoded JSON value.
///
/// # Errors
///
/// Returns `BuildError::Validation` at the first JSON:API rule the value
/// breaks. No partial document is produced.
pub fn parse(value: &Value, manager: &Manager) -> Result<Document, BuildError> {
    let result = Document::new(value, manager, &Parent::root());
    match &result {
        Ok(_) => tracing::debug!("document accepted"),
        Err(e) => tracing::debug!(error = %e, "document rejected"),
    }
    result
}

/// Decode and build a document sent by or to a server.
///
/// # Errors
///
/// Returns `InputError::InvalidJson` for malformed JSON, or
/// `InputError::Build` if the document breaks a JSON:API rule.
pub fn parse_str(input: &str, direction: Direction) -> Result<Document, InputError> {
    let value = load_document_str(input)?;
    Ok(parse(&value, &Manager::for_direction(direction))?)
}

/// Load, decode and build a document from a file.
pub fn parse_file(path: &Path, direction: Direction) -> Result<Document, InputError> {
    let value = load_document(path)?;
    Ok(parse(&value, &Manager::for_direction(direction))?)
}

/// Parse a request document; a new primary resource may omit `id`.
pub fn parse_request_str(input: &str) -> Result<Document, InputError> {
    parse_str(input, Direction::Request)
}

/// Parse a response document; every resource needs an `id`.
pub fn parse_response_str(input: &str) -> Result<Document, InputError> {
    parse_str(input, Direction::Response)
}

pub fn is_valid_request_str(input: &str) -> bool {
    parse_request_str(input).is_ok()
}

pub fn is_valid_response_str(input: &str) -> bool {
    parse_response_str(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Accessable;

    #[test]
    fn parse_valid_response() {
        let doc = parse_response_str(r#"{"data": {"type": "articles", "id": "1"}}"#).unwrap();
        assert!(!doc.has("errors"));
        assert_eq!(doc.get("data.type").unwrap().as_str(), Some("articles"));
    }

    #[test]
    fn malformed_json_is_a_syntax_error() {
        let result = parse_response_str(r#"{"data": "#);
        assert!(matches!(result, Err(InputError::InvalidJson { .. })));
    }

    #[test]
    fn rule_violation_is_a_build_error() {
        let result = parse_response_str("{}");
        assert!(matches!(
            result,
            Err(InputError::Build(BuildError::Validation(_)))
        ));
    }

    #[test]
    fn create_request_may_omit_id() {
        let input = r#"{"data": {"type": "articles", "attributes": {"title": "Ember Hamster"}}}"#;
        assert!(is_valid_request_str(input));
        assert!(!is_valid_response_str(input));
    }

    #[test]
    fn request_still_requires_id_in_collections() {
        let input = r#"{"data": [{"type": "articles", "attributes": {}}]}"#;
        assert!(!is_valid_request_str(input));
    }
}
