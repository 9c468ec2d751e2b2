//! menagerie - a small JSON API over a file-backed collection of animal records
//!
//! Reads are filtered in memory; creates are validated against a schema,
//! appended, and flushed to the data file before they become visible.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod schema;
pub mod store;
