//! Log backend setup and event formatting
//!
//! Output goes through the `log` facade; `env_logger` is the backend.
//! `RUST_LOG` overrides the default filter.

use super::events::Event;

/// Install the global logger. Safe to call more than once.
pub fn init(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}

/// Render `EVENT key=value ...` with fields in the given order.
pub fn format_event(event: Event, fields: &[(&str, &str)]) -> String {
    let mut line = String::from(event.as_str());
    for (key, value) in fields {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        if value.contains(' ') {
            line.push('"');
            line.push_str(value);
            line.push('"');
        } else {
            line.push_str(value);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_event_without_fields() {
        assert_eq!(format_event(Event::Serving, &[]), "SERVER_START");
    }

    #[test]
    fn test_format_event_quotes_spaces() {
        let line = format_event(
            Event::AnimalCreated,
            &[("id", "3"), ("name", "Mister Whiskers")],
        );
        assert_eq!(line, "ANIMAL_CREATED id=3 name=\"Mister Whiskers\"");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init("info");
        init("debug");
    }
}
