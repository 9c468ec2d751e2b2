//! # Animal Queries
//!
//! Pure read-path logic: parsing request parameters, filtering the
//! collection, and looking records up by id.

pub mod filter;
pub mod params;

pub use filter::{filter_by_query, find_by_id, AnimalField, FilterExpr, FilterSet};
pub use params::{QueryParams, QueryValue};
