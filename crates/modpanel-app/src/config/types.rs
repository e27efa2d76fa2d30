//! Configuration types for the moderation panel
//!
//! Defines:
//! - `Settings` - Contents of `modpanel.toml`
//! - `FeatureFlags` - Per-action enable switches
//! - `UiSettings` - Presentation options

use serde::{Deserialize, Serialize};

use crate::action::ModerationAction;

/// Panel settings (modpanel.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub features: FeatureFlags,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Which moderation actions are ever wired to a live button.
///
/// Loaded once at startup; read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub kick: bool,
    pub ban: bool,
    pub unban: bool,
    pub kill: bool,
    pub clear_inventory: bool,
    pub reset_blueprints: bool,
    pub reset_metabolism: bool,
    pub hurt: bool,
    pub heal: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            kick: true,
            ban: true,
            unban: true,
            kill: true,
            clear_inventory: true,
            reset_blueprints: true,
            reset_metabolism: true,
            hurt: true,
            heal: true,
        }
    }
}

impl FeatureFlags {
    pub fn all_disabled() -> Self {
        Self {
            kick: false,
            ban: false,
            unban: false,
            kill: false,
            clear_inventory: false,
            reset_blueprints: false,
            reset_metabolism: false,
            hurt: false,
            heal: false,
        }
    }

    pub fn is_enabled(&self, action: ModerationAction) -> bool {
        match action {
            ModerationAction::Ban => self.ban,
            ModerationAction::Kick => self.kick,
            ModerationAction::Unban => self.unban,
            ModerationAction::Kill => self.kill,
            ModerationAction::ClearInventory => self.clear_inventory,
            ModerationAction::ResetBlueprints => self.reset_blueprints,
            ModerationAction::ResetMetabolism => self.reset_metabolism,
            ModerationAction::Hurt => self.hurt,
            ModerationAction::Heal => self.heal,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Stored names of banned users that are shown as the raw id instead.
    /// Compared case-insensitively.
    pub banned_placeholder_names: Vec<String>,

    /// One hurt button per amount on the detail page
    pub hurt_amounts: Vec<f32>,

    /// One heal button per amount on the detail page
    pub heal_amounts: Vec<f32>,

    /// Locale used when the host does not report one for a viewer
    pub default_locale: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            banned_placeholder_names: vec!["unnamed".to_string(), "Unknown".to_string()],
            hurt_amounts: vec![25.0, 50.0, 75.0, 100.0],
            heal_amounts: vec![25.0, 50.0, 75.0, 100.0],
            default_locale: "en".to_string(),
        }
    }
}

impl UiSettings {
    pub fn is_placeholder_name(&self, name: &str) -> bool {
        self.banned_placeholder_names
            .iter()
            .any(|placeholder| placeholder.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_default_to_enabled() {
        let flags = FeatureFlags::default();
        for action in ModerationAction::ALL {
            assert!(flags.is_enabled(action), "{action} should be enabled");
        }
    }

    #[test]
    fn test_all_disabled() {
        let flags = FeatureFlags::all_disabled();
        for action in ModerationAction::ALL {
            assert!(!flags.is_enabled(action));
        }
    }

    #[test]
    fn test_partial_features_section() {
        let settings: Settings = toml::from_str(
            r#"
            [features]
            kick = false
            "#,
        )
        .unwrap();
        assert!(!settings.features.kick);
        assert!(settings.features.ban);
        assert_eq!(settings.ui, UiSettings::default());
    }

    #[test]
    fn test_placeholder_names_case_insensitive() {
        let ui = UiSettings::default();
        assert!(ui.is_placeholder_name("Unnamed"));
        assert!(ui.is_placeholder_name("unknown"));
        assert!(!ui.is_placeholder_name("Alice"));
    }

    #[test]
    fn test_custom_placeholder_names() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            banned_placeholder_names = ["Inconnu"]
            "#,
        )
        .unwrap();
        assert!(settings.ui.is_placeholder_name("inconnu"));
        assert!(!settings.ui.is_placeholder_name("unnamed"));
        assert_eq!(settings.ui.hurt_amounts.len(), 4);
    }
}
