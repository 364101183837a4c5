//! Observable events for the lookup service
//!
//! Every log line carries one of these as its `event` key.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration resolved from file, arguments and environment
    ConfigLoaded,
    /// HTTP listener bound, ready to serve
    ServerStart,
    /// Server could not start or stopped with an error
    ServerFailed,

    // Request path
    /// Storage lookup about to be issued for a row key
    RowLookup,
    /// Storage reported the row key as missing
    RowMissing,
    /// Storage returned an unexpected error
    LookupFailed,
    /// A stored column could not be decoded
    DecodeFailed,
    /// Page template could not be rendered
    RenderFailed,
}

impl Event {
    /// Returns the string representation used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerFailed => "SERVER_FAILED",
            Event::RowLookup => "ROW_LOOKUP",
            Event::RowMissing => "ROW_MISSING",
            Event::LookupFailed => "LOOKUP_FAILED",
            Event::DecodeFailed => "DECODE_FAILED",
            Event::RenderFailed => "RENDER_FAILED",
        }
    }

    /// Whether this event means the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
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
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::ServerStart,
            Event::ServerFailed,
            Event::RowLookup,
            Event::RowMissing,
            Event::LookupFailed,
            Event::DecodeFailed,
            Event::RenderFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::ServerFailed.is_fatal());
        assert!(!Event::LookupFailed.is_fatal());
        assert!(!Event::RowLookup.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::RowLookup), "ROW_LOOKUP");
    }
}
