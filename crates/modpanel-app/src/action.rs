//! Moderation actions and the capabilities that guard every trigger

use std::fmt;

/// A moderation effect the host can apply to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationAction {
    Ban,
    Kick,
    Unban,
    Kill,
    ClearInventory,
    ResetBlueprints,
    ResetMetabolism,
    Hurt,
    Heal,
}

impl ModerationAction {
    pub const ALL: [ModerationAction; 9] = [
        ModerationAction::Ban,
        ModerationAction::Kick,
        ModerationAction::Unban,
        ModerationAction::Kill,
        ModerationAction::ClearInventory,
        ModerationAction::ResetBlueprints,
        ModerationAction::ResetMetabolism,
        ModerationAction::Hurt,
        ModerationAction::Heal,
    ];

    /// Short identifier used in commands, logs and dispatch
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::Ban => "ban",
            ModerationAction::Kick => "kick",
            ModerationAction::Unban => "unban",
            ModerationAction::Kill => "kill",
            ModerationAction::ClearInventory => "clearinv",
            ModerationAction::ResetBlueprints => "resetbp",
            ModerationAction::ResetMetabolism => "resetmetabolism",
            ModerationAction::Hurt => "hurt",
            ModerationAction::Heal => "heal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == name)
    }

    /// Hurt and heal carry a numeric amount
    pub fn takes_amount(&self) -> bool {
        matches!(self, ModerationAction::Hurt | ModerationAction::Heal)
    }

    pub fn capability(&self) -> Capability {
        match self {
            ModerationAction::Ban => Capability::Ban,
            ModerationAction::Kick => Capability::Kick,
            ModerationAction::Unban => Capability::Unban,
            ModerationAction::Kill => Capability::Kill,
            ModerationAction::ClearInventory => Capability::ClearInventory,
            ModerationAction::ResetBlueprints => Capability::ResetBlueprints,
            ModerationAction::ResetMetabolism => Capability::ResetMetabolism,
            ModerationAction::Hurt => Capability::Hurt,
            ModerationAction::Heal => Capability::Heal,
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission names checked against the host permission service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Open, browse and close the panel
    Show,
    Ban,
    Kick,
    Unban,
    Kill,
    ClearInventory,
    ResetBlueprints,
    ResetMetabolism,
    Hurt,
    Heal,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Show => "modpanel.show",
            Capability::Ban => "modpanel.ban",
            Capability::Kick => "modpanel.kick",
            Capability::Unban => "modpanel.unban",
            Capability::Kill => "modpanel.kill",
            Capability::ClearInventory => "modpanel.clearinv",
            Capability::ResetBlueprints => "modpanel.resetbp",
            Capability::ResetMetabolism => "modpanel.resetmetabolism",
            Capability::Hurt => "modpanel.hurt",
            Capability::Heal => "modpanel.heal",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
