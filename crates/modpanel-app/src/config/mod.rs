//! Configuration file parsing for the moderation panel
//!
//! Supports `modpanel.toml` with `[features]` and `[ui]` sections.

pub mod settings;
pub mod types;

pub use settings::{init_config_file, load_settings, load_settings_strict, CONFIG_FILENAME};
pub use types::*;
