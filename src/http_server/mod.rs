//! # HTTP Server Module
//!
//! Axum server exposing the animal collection as JSON.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `GET /api/animals` - List, filtered by `personalityTraits`, `diet`, `species`, `name`
//! - `GET /api/animals/:id` - Single record
//! - `POST /api/animals` - Create

pub mod animal_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use animal_routes::AnimalState;
pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, INVALID_ANIMAL_MESSAGE};
pub use server::HttpServer;
