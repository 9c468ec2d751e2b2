//! Observability for menagerie
//!
//! Structured, one-line-per-event logging on top of the `log` facade.
//!
//! # Usage
//!
//! ```ignore
//! use menagerie::observability::{self, log_event_with_fields, Event};
//!
//! observability::init_logging("info");
//! log_event_with_fields(Event::AnimalCreated, &[("id", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{format_event, init as init_logging};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let level = event.level();
    if log::log_enabled!(level) {
        log::log!(level, "{}", format_event(event, fields));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::Serving);
        log_event(Event::StoreLoaded);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ConfigLoaded, &[("port", "3001")]);
    }
}
