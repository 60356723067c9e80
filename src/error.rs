//! Error types for JSON:API document loading, construction and access.

use std::path::PathBuf;
use thiserror::Error;

/// A document violates a JSON:API structural rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable message naming the offending element and member.
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A key or dotted path does not resolve to a stored member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not get the value for the key \"{key}\".")]
pub struct AccessError {
    pub key: String,
}

impl AccessError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// The element factory has no constructor registered under a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no element constructor registered for \"{name}\"")]
pub struct FactoryError {
    pub name: String,
}

/// Errors raised while constructing a document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Factory(#[from] FactoryError),
}

impl BuildError {
    /// Returns the validation message, if this is a validation failure.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            BuildError::Validation(e) => Some(&e.message),
            BuildError::Factory(_) => None,
        }
    }
}

/// Errors while loading and parsing a document from text or a file.
#[derive(Debug, Error)]
pub enum InputError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Syntax errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    // Document errors (exit code 1)
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl InputError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::FileNotFound { .. } | InputError::ReadError { .. } => 3,
            InputError::InvalidJson { .. } => 2,
            InputError::Build(BuildError::Validation(_)) => 1,
            InputError::Build(BuildError::Factory(_)) => 2,
        }
    }
}
