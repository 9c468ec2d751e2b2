//! Schema type definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - array: sequence with an element type
//! - any: accepts every JSON value

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Supported field types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Sequence whose elements all match `element_type`
    Array {
        /// Element type (boxed to allow recursive types)
        #[serde(rename = "element_type")]
        element_type: Box<FieldType>,
    },
    /// Any JSON value
    Any,
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Array { .. } => "array",
            FieldType::Any => "any",
        }
    }

    /// Array of arbitrary elements
    pub fn any_array() -> Self {
        FieldType::Array {
            element_type: Box::new(FieldType::Any),
        }
    }

    /// Returns true if `value` is of this type
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldType::Any, _) => true,
            (FieldType::String, Value::String(_)) => true,
            (FieldType::Array { element_type }, Value::Array(items)) => {
                items.iter().all(|item| element_type.accepts(item))
            }
            _ => false,
        }
    }
}

/// Field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name as it appears in the JSON payload
    pub name: String,
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Reject empty strings (ignored for non-string types)
    #[serde(default)]
    pub non_empty: bool,
}

impl FieldDef {
    /// Create a required, non-empty string field
    pub fn required_string(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::String,
            required: true,
            non_empty: true,
        }
    }

    /// Create a required array field with unchecked elements
    pub fn required_array(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::any_array(),
            required: true,
            non_empty: false,
        }
    }
}

/// An ordered list of field definitions.
///
/// Fields are checked in declaration order, so the first reported
/// violation is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<FieldDef>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// The shape every created animal must have.
    pub fn animal() -> Self {
        Self::new()
            .field(FieldDef::required_string("name"))
            .field(FieldDef::required_string("species"))
            .field(FieldDef::required_string("diet"))
            .field(FieldDef::required_array("personalityTraits"))
    }
}

/// JSON type name of a value, for error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
