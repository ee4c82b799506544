//! Error types for path tree operations.
//!
//! Path resolution never fails: a miss is reported as `None` or the caller's
//! default, and guarded writes are silent no-ops. The errors here cover the
//! remaining cases: construction from malformed input, typed reads, and JSON
//! conversion.

use thiserror::Error;

use crate::Value;

/// Structured error types for path tree operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input could not be interpreted as a container or scalar
    #[error("Cannot build tree: {reason}")]
    Construction { reason: String },

    /// A typed read found a value of a different type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A typed read found nothing at the path
    #[error("Nothing found at path: {path}")]
    NotFound { path: String },

    /// Converting a caller value into a tree value failed
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },

    /// Converting a tree value into a caller type failed
    #[error("Deserialization failed for path '{path}': {reason}")]
    Deserialization { path: String, reason: String },
}

impl TreeError {
    pub(crate) fn type_mismatch(expected: &str, actual: &Value) -> Self {
        TreeError::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    /// Check if this error came from building a tree
    pub fn is_construction_error(&self) -> bool {
        matches!(self, TreeError::Construction { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, TreeError::TypeMismatch { .. })
    }

    /// Check if this error is related to a missing path
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }

    /// Check if this error is related to serialization
    pub fn is_serialization_error(&self) -> bool {
        matches!(
            self,
            TreeError::Serialization { .. } | TreeError::Deserialization { .. }
        )
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::NotFound { path } | TreeError::Deserialization { path, .. } => Some(path),
            _ => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
