//! Observability events
//!
//! Every lifecycle and data event the service logs is named here, so log
//! lines can be matched on a stable identifier.

use std::fmt;

use log::Level;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved
    ConfigLoaded,
    /// Data file read into memory
    StoreLoaded,
    /// Empty data file written by `init`
    DataInitialized,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received, draining connections
    ShuttingDown,

    // Reads
    /// List/filter request answered
    QueryExecuted,
    /// Lookup by id found nothing
    AnimalNotFound,

    // Writes
    /// Record appended and flushed
    AnimalCreated,
    /// Create payload failed validation
    AnimalRejected,
    /// Backing file write failed
    PersistFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreLoaded => "STORE_LOADED",
            Event::DataInitialized => "DATA_INITIALIZED",
            Event::Serving => "SERVER_START",
            Event::ShuttingDown => "SERVER_SHUTDOWN",

            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::AnimalNotFound => "ANIMAL_NOT_FOUND",

            Event::AnimalCreated => "ANIMAL_CREATED",
            Event::AnimalRejected => "ANIMAL_REJECTED",
            Event::PersistFailed => "PERSIST_FAILED",
        }
    }

    /// Log level the event is emitted at
    pub fn level(&self) -> Level {
        match self {
            Event::PersistFailed => Level::Error,
            Event::AnimalRejected => Level::Warn,
            Event::QueryExecuted | Event::AnimalNotFound => Level::Debug,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_strings_are_screaming_snake() {
        let events = [
            Event::ConfigLoaded,
            Event::StoreLoaded,
            Event::DataInitialized,
            Event::Serving,
            Event::ShuttingDown,
            Event::QueryExecuted,
            Event::AnimalNotFound,
            Event::AnimalCreated,
            Event::AnimalRejected,
            Event::PersistFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_levels() {
        assert_eq!(Event::PersistFailed.level(), Level::Error);
        assert_eq!(Event::AnimalRejected.level(), Level::Warn);
        assert_eq!(Event::AnimalCreated.level(), Level::Info);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::Serving), "SERVER_START");
    }
}
