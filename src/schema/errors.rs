//! Schema validation errors

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Why a payload was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Payload is not a JSON object
    #[error("expected object, got {0}")]
    NotAnObject(&'static str),

    /// Required field absent (or null)
    #[error("field '{0}': missing")]
    MissingField(String),

    /// Field present with the wrong type
    #[error("field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// String field present but empty
    #[error("field '{0}': must not be empty")]
    EmptyField(String),
}

impl SchemaError {
    /// Offending field, if the error concerns one
    pub fn field(&self) -> Option<&str> {
        match self {
            SchemaError::NotAnObject(_) => None,
            SchemaError::MissingField(f) | SchemaError::EmptyField(f) => Some(f),
            SchemaError::TypeMismatch { field, .. } => Some(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = SchemaError::TypeMismatch {
            field: "diet".into(),
            expected: "string",
            actual: "number",
        };
        assert_eq!(err.to_string(), "field 'diet': expected string, got number");
        assert_eq!(err.field(), Some("diet"));
    }

    #[test]
    fn test_not_an_object_has_no_field() {
        assert_eq!(SchemaError::NotAnObject("array").field(), None);
    }
}
