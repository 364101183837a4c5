//! Observability for the lookup service
//!
//! Structured JSON-lines logging of lifecycle and request events.
//!
//! ```ignore
//! use quake_lookup::observability::{Event, Logger};
//!
//! Logger::info(Event::RowLookup, &[("row_key", "CA#2023#04")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event, fields);
}
