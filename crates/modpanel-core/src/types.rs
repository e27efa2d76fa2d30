//! Domain types shared by all panel crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric identifier of a user (player account id)
pub type UserId = u64;

/// World position of a connected user
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Vital statistics of a spawned user
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    pub health: f32,
    pub calories: f32,
    pub hydration: f32,
    pub temperature: f32,
    pub wetness: f32,
    pub comfort: f32,
    pub bleeding: f32,
    pub radiation: f32,
    pub radiation_protection: f32,
}

/// Read-only snapshot of one moderatable user, as reported by the host registry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub connected: bool,
    pub sleeping: bool,
    pub alive: bool,
    pub banned: bool,

    /// Only known for users present in the world
    pub position: Option<Position>,
    /// Heading in degrees
    pub rotation: Option<f32>,
    pub vitals: Option<Vitals>,

    /// When an admin last cleared this user's cheat flag
    pub last_admin_cheat: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Minimal connected, alive user
    pub fn online(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            connected: true,
            alive: true,
            ..Self::default()
        }
    }

    /// Minimal banned user
    pub fn banned(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            banned: true,
            ..Self::default()
        }
    }
}

/// The user interacting with the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: UserId,
    pub name: String,
    /// Language code used for message lookup
    pub locale: String,
}

impl Viewer {
    pub fn new(id: UserId, name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            locale: locale.into(),
        }
    }
}
