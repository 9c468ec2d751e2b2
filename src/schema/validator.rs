//! Schema validator for create payloads
//!
//! Validation semantics:
//! - Payload is a JSON object
//! - All required fields are present and non-null
//! - Field types match the schema
//! - Non-empty string fields are not ""
//!
//! Undeclared fields are allowed and left untouched. The validator
//! never mutates or fills in the payload.

use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};
use super::types::{json_type_name, FieldType, Schema};

/// Validator that checks payloads against a [`Schema`].
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validates a document, returning the first violation in field order.
    pub fn validate(&self, document: &Value) -> SchemaResult<()> {
        let obj = document
            .as_object()
            .ok_or_else(|| SchemaError::NotAnObject(json_type_name(document)))?;

        for def in &self.schema.fields {
            let value = match obj.get(&def.name) {
                Some(Value::Null) | None => {
                    if def.required {
                        return Err(SchemaError::MissingField(def.name.clone()));
                    }
                    continue;
                }
                Some(v) => v,
            };

            if !def.field_type.accepts(value) {
                return Err(SchemaError::TypeMismatch {
                    field: def.name.clone(),
                    expected: def.field_type.type_name(),
                    actual: json_type_name(value),
                });
            }

            if def.non_empty && def.field_type == FieldType::String && value.as_str() == Some("") {
                return Err(SchemaError::EmptyField(def.name.clone()));
            }
        }

        Ok(())
    }

    /// Boolean form of [`validate`](Self::validate).
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validate(document).is_ok()
    }
}
