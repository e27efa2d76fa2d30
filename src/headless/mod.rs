//! Headless mode - NDJSON event output for previews and end-to-end tests
//!
//! The headless driver reads panel commands line by line, routes them for a
//! single viewer against a fixture registry and writes every observable host
//! call as structured JSON.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type, along with event-specific data.
//!
//! # Example Output
//!
//! ```json
//! {"event":"destroyed","viewer":1,"surface":"ModPanel.Main","timestamp":1704700001000}
//! {"event":"rendered","viewer":1,"main_panel":"ModPanel.Main","elements":[...],"timestamp":1704700001000}
//! {"event":"outcome","command":"modpanel","outcome":"Rendered(Main)","timestamp":1704700001000}
//! ```

pub mod host;
pub mod runner;

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use chrono::Utc;
use serde::Serialize;

use modpanel_core::prelude::*;
use modpanel_core::UserId;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A surface was sent to the viewer's client
    Rendered {
        viewer: UserId,
        main_panel: String,
        elements: serde_json::Value,
        timestamp: i64,
    },

    /// A surface was removed from the viewer's client
    Destroyed {
        viewer: UserId,
        surface: String,
        timestamp: i64,
    },

    /// A moderation action reached the host
    Dispatched {
        action: String,
        target: UserId,
        amount: Option<f32>,
        timestamp: i64,
    },

    /// Chat reply to the viewer
    Reply {
        viewer: UserId,
        message: String,
        timestamp: i64,
    },

    /// Result of one input command
    Outcome {
        command: String,
        outcome: String,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn rendered(viewer: UserId, main_panel: &str, elements: serde_json::Value) -> Self {
        Self::Rendered {
            viewer,
            main_panel: main_panel.to_string(),
            elements,
            timestamp: Self::now(),
        }
    }

    pub fn destroyed(viewer: UserId, surface: &str) -> Self {
        Self::Destroyed {
            viewer,
            surface: surface.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn dispatched(action: &str, target: UserId, amount: Option<f32>) -> Self {
        Self::Dispatched {
            action: action.to_string(),
            target,
            amount,
            timestamp: Self::now(),
        }
    }

    pub fn reply(viewer: UserId, message: &str) -> Self {
        Self::Reply {
            viewer,
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn outcome(command: &str, outcome: String) -> Self {
        Self::Outcome {
            command: command.to_string(),
            outcome,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Event name as it appears in the "event" field
    pub fn kind(&self) -> &'static str {
        match self {
            HeadlessEvent::Rendered { .. } => "rendered",
            HeadlessEvent::Destroyed { .. } => "destroyed",
            HeadlessEvent::Dispatched { .. } => "dispatched",
            HeadlessEvent::Reply { .. } => "reply",
            HeadlessEvent::Outcome { .. } => "outcome",
            HeadlessEvent::Error { .. } => "error",
        }
    }
}

/// Events produced by the host fakes, drained after every command
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<HeadlessEvent>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: HeadlessEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn drain(&self) -> Vec<HeadlessEvent> {
        self.0.borrow_mut().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroyed_serialization() {
        let event = HeadlessEvent::destroyed(7, "ModPanel.Main");
        let json = serde_json::to_string(&event).expect("serialization failed");

        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "destroyed");
        assert_eq!(value["viewer"], 7);
        assert_eq!(value["surface"], "ModPanel.Main");
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_dispatched_serialization() {
        let event = HeadlessEvent::dispatched("hurt", 1000, Some(25.0));
        let json = serde_json::to_string(&event).expect("serialization failed");

        let value: serde_json::Value = serde_json::from_str(&json).expect("invalid JSON");

        assert_eq!(value["event"], "dispatched");
        assert_eq!(value["action"], "hurt");
        assert_eq!(value["target"], 1000);
        assert_eq!(value["amount"], 25.0);
    }

    #[test]
    fn test_write_to_emits_one_line() {
        let mut out = Vec::new();
        HeadlessEvent::reply(1, "hello").write_to(&mut out).unwrap();
        HeadlessEvent::error("bad".to_string(), false)
            .write_to(&mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["event"], "reply");
        assert_eq!(value["message"], "hello");
    }

    #[test]
    fn test_event_log_drains_in_order() {
        let log = EventLog::new();
        log.push(HeadlessEvent::destroyed(1, "a"));
        log.push(HeadlessEvent::reply(1, "b"));

        let kinds: Vec<_> = log.drain().iter().map(HeadlessEvent::kind).collect();
        assert_eq!(kinds, vec!["destroyed", "reply"]);
        assert!(log.drain().is_empty());
    }
}
