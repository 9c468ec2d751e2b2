//! Animal record and the on-disk collection format

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One animal record.
///
/// Fields beyond the declared ones are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub diet: String,
    /// Element types are not constrained; only string elements can match
    /// a trait filter.
    pub personality_traits: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Animal {
    /// Builds a record from a validated create payload, overwriting any
    /// `id` the payload carries.
    pub fn from_payload(id: String, payload: Value) -> Result<Self, serde_json::Error> {
        let mut payload = payload;
        if let Value::Object(obj) = &mut payload {
            obj.insert("id".to_string(), Value::String(id));
        }
        serde_json::from_value(payload)
    }

    /// Returns true if `trait_name` is one of this animal's traits.
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits
            .iter()
            .any(|t| t.as_str() == Some(trait_name))
    }
}

/// Owned form of the backing file, used when loading.
#[derive(Debug, Deserialize)]
pub(crate) struct AnimalFile {
    pub animals: Vec<Animal>,
}

/// Borrowed form of the backing file, used when writing.
#[derive(Debug, Serialize)]
pub(crate) struct AnimalFileRef<'a> {
    pub animals: &'a [Animal],
}
