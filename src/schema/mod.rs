//! Payload schemas for animal records
//!
//! A schema is a field name → expected type list evaluated uniformly,
//! so every rejection reason comes from the same place.
//!
//! # Rules
//!
//! - Required fields must be present and non-null
//! - Types must match exactly, no coercion
//! - No defaults are filled in
//! - Undeclared fields pass through

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::{json_type_name, FieldDef, FieldType, Schema};
pub use validator::SchemaValidator;
