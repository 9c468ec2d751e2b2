//! # Animal Filters
//!
//! Each supported query parameter becomes one or more [`FilterExpr`]s; a
//! [`FilterSet`] combines them with AND logic. Every expression is an
//! independent exact-match or contains check, so the order they are
//! applied in does not change the result.

use crate::store::Animal;

use super::params::{QueryParams, QueryValue};

/// Fields an animal can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalField {
    PersonalityTraits,
    Diet,
    Species,
    Name,
}

impl AnimalField {
    pub const ALL: [AnimalField; 4] = [
        AnimalField::PersonalityTraits,
        AnimalField::Diet,
        AnimalField::Species,
        AnimalField::Name,
    ];

    /// Query parameter name for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalField::PersonalityTraits => "personalityTraits",
            AnimalField::Diet => "diet",
            AnimalField::Species => "species",
            AnimalField::Name => "name",
        }
    }
}

/// A single filter constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    /// Field to filter on
    pub field: AnimalField,

    /// Value to compare against
    pub value: String,
}

impl FilterExpr {
    pub fn new(field: AnimalField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Check if an animal satisfies this constraint.
    ///
    /// Traits must contain the value; every other field must equal it.
    /// Comparisons are case-sensitive.
    pub fn matches(&self, animal: &Animal) -> bool {
        match self.field {
            AnimalField::PersonalityTraits => animal.has_trait(&self.value),
            AnimalField::Diet => animal.diet == self.value,
            AnimalField::Species => animal.species == self.value,
            AnimalField::Name => animal.name == self.value,
        }
    }
}

/// A set of filters combined with AND logic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub filters: Vec<FilterExpr>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, filter: FilterExpr) -> Self {
        self.filters.push(filter);
        self
    }

    /// Build filters from request parameters.
    ///
    /// Unknown parameters are ignored, as is a lone empty value. A
    /// parameter with several values contributes one filter per value,
    /// empty ones included.
    pub fn from_params(params: &QueryParams) -> Self {
        let mut set = Self::new();
        for field in AnimalField::ALL {
            match params.get(field.as_str()) {
                None => {}
                Some(QueryValue::Single(v)) if v.is_empty() => {}
                Some(value) => set
                    .filters
                    .extend(value.values().iter().map(|v| FilterExpr::new(field, v.clone()))),
            }
        }
        set
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Check if an animal matches all filters
    pub fn matches(&self, animal: &Animal) -> bool {
        self.filters.iter().all(|f| f.matches(animal))
    }

    /// Matching animals in their original order.
    pub fn apply<'a>(&self, animals: &'a [Animal]) -> Vec<&'a Animal> {
        animals.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Filter `animals` by the given request parameters.
pub fn filter_by_query(params: &QueryParams, animals: &[Animal]) -> Vec<Animal> {
    let filters = FilterSet::from_params(params);
    if filters.is_empty() {
        return animals.to_vec();
    }
    filters.apply(animals).into_iter().cloned().collect()
}

/// First animal whose id equals `id` exactly.
pub fn find_by_id<'a>(id: &str, animals: &'a [Animal]) -> Option<&'a Animal> {
    animals.iter().find(|a| a.id == id)
}
