//! Record store for animals
//!
//! Holds the ordered animal collection in memory and mirrors every append
//! to a single JSON file (`{"animals": [...]}`). Records are never updated
//! or removed once written.

mod animal_store;
mod errors;
mod record;

pub use animal_store::AnimalStore;
pub use errors::{StoreError, StoreResult};
pub use record::Animal;
