//! Error types for building and serializing CZML objects.

use thiserror::Error;

/// Result type for CZML operations.
pub type CzmlResult<T> = Result<T, CzmlError>;

/// Errors raised while constructing or serializing CZML objects.
///
/// Construction errors (`Shape`, `Range`, `Format` and `MissingAlternative`)
/// are always raised by the constructor or builder that received the invalid
/// input, so a successfully built object graph is always serializable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CzmlError {
    /// A payload length does not match any arity accepted by its encoding.
    #[error("Input values for {encoding} must have {expected}, got {actual} values")]
    Shape {
        /// The value encoding being constructed.
        encoding: &'static str,
        /// Human readable description of the accepted shapes.
        expected: String,
        /// The number of values provided.
        actual: usize,
    },

    /// A payload element lies outside the range declared by its encoding.
    #[error("Value out of range for {encoding}: {reason}")]
    Range {
        /// The value encoding being constructed.
        encoding: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A string payload does not match its required structure.
    #[error("Invalid format for {field}: {reason}")]
    Format {
        /// The field or encoding holding the string.
        field: &'static str,
        /// Why the string was rejected.
        reason: String,
    },

    /// None of the mutually substitutable required fields were given.
    #[error("One of {} must be given for {type_name}", join_alternatives(alternatives))]
    MissingAlternative {
        /// The property type being built.
        type_name: &'static str,
        /// Every field that would have satisfied the requirement.
        alternatives: &'static [&'static str],
    },

    /// The serializer rejected the object graph.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Writing serialized output to a sink failed.
    #[error("IO error: {0}")]
    Io(String),
}

fn join_alternatives(alternatives: &[&str]) -> String {
    match alternatives {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

impl From<std::io::Error> for CzmlError {
    fn from(err: std::io::Error) -> Self {
        CzmlError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CzmlError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            CzmlError::Io(err.to_string())
        } else {
            CzmlError::Serialization(err.to_string())
        }
    }
}
