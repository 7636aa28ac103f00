//! Error types for schema validation and wire handling.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use std::fmt;
use thiserror::Error;

/// Errors raised when a message body fails its schema contract.
///
/// Validation is the sole fallible operation in the catalogue; the error
/// is never recovered here and propagates to the publisher, which decides
/// whether to abort the publish or repair the payload.
#[derive(Debug, Clone, Error)]
pub enum SchemaValidationError {
    /// The body does not satisfy the variant's JSON Schema.
    #[error("body does not match the '{topic}' schema: {}", format_violations(.violations))]
    Mismatch {
        /// The topic whose schema was violated.
        topic: String,
        /// The individual schema violations, with instance paths.
        violations: Vec<SchemaViolation>,
    },

    /// An embedded schema document itself failed to compile.
    #[error("embedded schema for '{topic}' failed to compile: {reason}")]
    InvalidSchema {
        /// The topic whose schema document is broken.
        topic: String,
        /// The compiler's description of the defect.
        reason: String,
    },
}

impl SchemaValidationError {
    /// Creates a mismatch error for the given topic and violations.
    #[must_use]
    pub fn mismatch(topic: impl Into<String>, violations: Vec<SchemaViolation>) -> Self {
        Self::Mismatch {
            topic: topic.into(),
            violations,
        }
    }

    /// Creates an invalid-schema error for the given topic.
    #[must_use]
    pub fn invalid_schema(topic: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            topic: topic.into(),
            reason: reason.into(),
        }
    }

    /// Returns the violations if this is a `Mismatch` error.
    #[must_use]
    pub fn violations(&self) -> Option<&[SchemaViolation]> {
        match self {
            Self::Mismatch { violations, .. } => Some(violations),
            Self::InvalidSchema { .. } => None,
        }
    }
}

/// A single schema violation within a message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value within the body.
    pub instance_path: String,
    /// Human-readable description of the violation.
    pub detail: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.detail)
        } else {
            write!(f, "{}: {}", self.instance_path, self.detail)
        }
    }
}

fn format_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur when moving an envelope to or from its wire form.
#[derive(Debug, Error)]
pub enum WireError {
    /// Serialising the envelope to JSON failed.
    #[error("failed to serialise envelope: {0}")]
    Serialise(#[source] serde_json::Error),

    /// Parsing an envelope from JSON failed.
    #[error("failed to parse envelope: {0}")]
    Deserialise(#[source] serde_json::Error),
}

/// Error returned when a numeric severity is not a known level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown severity level: {0}")]
pub struct ParseSeverityError(
    /// The value that matched no known level.
    pub u8,
);
