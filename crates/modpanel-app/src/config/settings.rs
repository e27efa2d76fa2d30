//! Settings loader for modpanel.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use modpanel_core::prelude::*;

pub const CONFIG_FILENAME: &str = "modpanel.toml";

const DEFAULT_CONFIG: &str = r#"# Moderation panel configuration

# Actions switched off here are still shown on the user page,
# but their buttons are greyed out and do nothing.
[features]
kick = true
ban = true
unban = true
kill = true
clear_inventory = true
reset_blueprints = true
reset_metabolism = true
hurt = true
heal = true

[ui]
# Banned users stored under one of these names are listed by id instead
banned_placeholder_names = ["unnamed", "Unknown"]
hurt_amounts = [25.0, 50.0, 75.0, 100.0]
heal_amounts = [25.0, 50.0, 75.0, 100.0]
default_locale = "en"
"#;

/// Load settings, falling back to defaults when the file is missing or invalid.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match load_settings_strict(path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load settings, reporting every failure.
pub fn load_settings_strict(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Invalid {}: {}", path.display(), e)))
}

/// Write the commented default config into `dir` unless one already exists.
///
/// Returns the config file path.
pub fn init_config_file(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
