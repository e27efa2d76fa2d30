//! Moderation Panel Library
//!
//! Headless driver for the moderation control panel: a fixture-backed host
//! that routes panel commands and prints every host call as NDJSON.

pub mod headless;

// Re-export main entry points
pub use headless::host::{services, Fixture, Permissions};
pub use headless::runner::run_headless;
pub use headless::{EventLog, HeadlessEvent};
