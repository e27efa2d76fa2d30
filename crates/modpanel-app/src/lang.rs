//! Message keys and the default English catalogue
//!
//! Templates use positional placeholders: `{0}`, `{1}`, ...

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::services::Translator;

// ─────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────

pub const PANEL_TITLE: &str = "PanelTitle";
pub const TAB_MAIN: &str = "TabMain";
pub const TAB_USERS: &str = "TabUsers";
pub const TAB_BANNED: &str = "TabBanned";
pub const CLOSE_BUTTON: &str = "CloseButton";
pub const PERMISSION_ERROR: &str = "PermissionError";

pub const BAN_ID_LABEL: &str = "BanIdLabel";

pub const USER_LIST_TITLE: &str = "UserListTitle";
pub const BANNED_LIST_TITLE: &str = "BannedListTitle";
pub const PAGE_INDICATOR: &str = "PageIndicator";
pub const PREVIOUS_BUTTON: &str = "PreviousButton";
pub const NEXT_BUTTON: &str = "NextButton";
pub const NO_USERS: &str = "NoUsers";

pub const USER_NOT_FOUND: &str = "UserNotFound";
pub const DETAIL_TITLE: &str = "DetailTitle";
pub const INFO_TITLE: &str = "InfoTitle";
pub const ACTIONS_TITLE: &str = "ActionsTitle";
pub const ID_LABEL: &str = "IdLabel";
pub const NAME_LABEL: &str = "NameLabel";
pub const CONNECTED_LABEL: &str = "ConnectedLabel";
pub const SLEEPING_LABEL: &str = "SleepingLabel";
pub const ALIVE_LABEL: &str = "AliveLabel";
pub const BANNED_LABEL: &str = "BannedLabel";
pub const POSITION_LABEL: &str = "PositionLabel";
pub const ROTATION_LABEL: &str = "RotationLabel";
pub const HEALTH_LABEL: &str = "HealthLabel";
pub const CALORIES_LABEL: &str = "CaloriesLabel";
pub const HYDRATION_LABEL: &str = "HydrationLabel";
pub const TEMPERATURE_LABEL: &str = "TemperatureLabel";
pub const WETNESS_LABEL: &str = "WetnessLabel";
pub const COMFORT_LABEL: &str = "ComfortLabel";
pub const BLEEDING_LABEL: &str = "BleedingLabel";
pub const RADIATION_LABEL: &str = "RadiationLabel";
pub const RADIATION_PROTECTION_LABEL: &str = "RadiationProtectionLabel";
pub const LAST_ADMIN_CHEAT_LABEL: &str = "LastAdminCheatLabel";
pub const YES: &str = "Yes";
pub const NO: &str = "No";
pub const NEVER: &str = "Never";
pub const UNKNOWN_VALUE: &str = "UnknownValue";

pub const BAN_BUTTON: &str = "BanButton";
pub const KICK_BUTTON: &str = "KickButton";
pub const UNBAN_BUTTON: &str = "UnbanButton";
pub const KILL_BUTTON: &str = "KillButton";
pub const CLEAR_INVENTORY_BUTTON: &str = "ClearInventoryButton";
pub const RESET_BLUEPRINTS_BUTTON: &str = "ResetBlueprintsButton";
pub const RESET_METABOLISM_BUTTON: &str = "ResetMetabolismButton";
pub const HURT_BUTTON: &str = "HurtButton";
pub const HEAL_BUTTON: &str = "HealButton";

pub const ACTION_DONE: &str = "ActionDone";
pub const ACTION_FAILED: &str = "ActionFailed";

/// Default English catalogue
pub const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (PANEL_TITLE, "Moderation Panel"),
    (TAB_MAIN, "Main"),
    (TAB_USERS, "Online Users"),
    (TAB_BANNED, "Banned Users"),
    (CLOSE_BUTTON, "Close"),
    (PERMISSION_ERROR, "You don't have permission to use this command"),
    (BAN_ID_LABEL, "Ban by ID:"),
    (USER_LIST_TITLE, "Click a user to open their page"),
    (BANNED_LIST_TITLE, "Click a banned user to open their page"),
    (PAGE_INDICATOR, "Page {0} / {1}"),
    (PREVIOUS_BUTTON, "<<"),
    (NEXT_BUTTON, ">>"),
    (NO_USERS, "No users to show"),
    (USER_NOT_FOUND, "User {0} was not found"),
    (DETAIL_TITLE, "{0} ({1})"),
    (INFO_TITLE, "User info"),
    (ACTIONS_TITLE, "Actions"),
    (ID_LABEL, "Id: {0}"),
    (NAME_LABEL, "Name: {0}"),
    (CONNECTED_LABEL, "Connected: {0}"),
    (SLEEPING_LABEL, "Sleeping: {0}"),
    (ALIVE_LABEL, "Alive: {0}"),
    (BANNED_LABEL, "Banned: {0}"),
    (POSITION_LABEL, "Position: {0}"),
    (ROTATION_LABEL, "Rotation: {0}"),
    (HEALTH_LABEL, "Health: {0}"),
    (CALORIES_LABEL, "Calories: {0}"),
    (HYDRATION_LABEL, "Hydration: {0}"),
    (TEMPERATURE_LABEL, "Temperature: {0}"),
    (WETNESS_LABEL, "Wetness: {0}"),
    (COMFORT_LABEL, "Comfort: {0}"),
    (BLEEDING_LABEL, "Bleeding: {0}"),
    (RADIATION_LABEL, "Radiation: {0}"),
    (RADIATION_PROTECTION_LABEL, "Radiation protection: {0}"),
    (LAST_ADMIN_CHEAT_LABEL, "Last admin cheat: {0}"),
    (YES, "Yes"),
    (NO, "No"),
    (NEVER, "Never"),
    (UNKNOWN_VALUE, "-"),
    (BAN_BUTTON, "Ban"),
    (KICK_BUTTON, "Kick"),
    (UNBAN_BUTTON, "Unban"),
    (KILL_BUTTON, "Kill"),
    (CLEAR_INVENTORY_BUTTON, "Clear Inventory"),
    (RESET_BLUEPRINTS_BUTTON, "Reset Blueprints"),
    (RESET_METABOLISM_BUTTON, "Reset Metabolism"),
    (HURT_BUTTON, "Hurt {0}"),
    (HEAL_BUTTON, "Heal {0}"),
    (ACTION_DONE, "{0} applied to {1}"),
    (ACTION_FAILED, "{0} failed for {1}"),
];

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("Invalid placeholder regex"));

/// Substitute `{n}` placeholders with `args[n]`. Placeholders without a
/// matching argument are left untouched.
pub fn format_message(template: &str, args: &[&str]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &regex::Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map(|arg| (*arg).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Translator backed by in-memory catalogues, English by default.
///
/// Lookups fall back to English, then to the key itself.
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    fallback_locale: String,
    catalogues: HashMap<String, HashMap<String, String>>,
}

impl Default for CatalogTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogTranslator {
    pub fn new() -> Self {
        let english = DEFAULT_MESSAGES
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        let mut catalogues = HashMap::new();
        catalogues.insert("en".to_string(), english);

        Self {
            fallback_locale: "en".to_string(),
            catalogues,
        }
    }

    /// Add or override messages for `locale`
    pub fn with_messages<'a>(
        mut self,
        locale: &str,
        messages: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let catalogue = self.catalogues.entry(locale.to_string()).or_default();
        for (key, template) in messages {
            catalogue.insert(key.to_string(), template.to_string());
        }
        self
    }

    fn lookup(&self, key: &str, locale: &str) -> Option<&str> {
        self.catalogues
            .get(locale)
            .and_then(|c| c.get(key))
            .or_else(|| {
                self.catalogues
                    .get(&self.fallback_locale)
                    .and_then(|c| c.get(key))
            })
            .map(String::as_str)
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, key: &str, locale: &str, args: &[&str]) -> String {
        match self.lookup(key, locale) {
            Some(template) => format_message(template, args),
            None => {
                tracing::debug!("Missing message '{}' for locale '{}'", key, locale);
                key.to_string()
            }
        }
    }
}
