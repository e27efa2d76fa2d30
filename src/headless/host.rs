//! In-memory host for headless mode
//!
//! Users come from a JSON fixture. Dispatched actions update the fixture so
//! that following renders reflect them (a banned user moves to the banned
//! list, a killed user shows as dead). Everything the panel sends to the
//! host is recorded in the shared [`EventLog`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;
use std::rc::Rc;

use modpanel_app::{
    ActionDispatcher, CatalogTranslator, ModerationAction, PermissionService, Services,
    SurfaceSink, UserRegistry, ViewerMessenger,
};
use modpanel_core::prelude::*;
use modpanel_core::{Surface, UserId, UserRecord, Vitals};

use super::{EventLog, HeadlessEvent};

const MAX_HEALTH: f32 = 100.0;

/// Shared, mutable user fixture
#[derive(Debug, Clone, Default)]
pub struct Fixture(Rc<RefCell<Vec<UserRecord>>>);

impl Fixture {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self(Rc::new(RefCell::new(users)))
    }

    /// Load a JSON array of user records
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let users: Vec<UserRecord> = serde_json::from_str(json)?;
        debug!("Loaded {} fixture users", users.len());
        Ok(Self::new(users))
    }

    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.0.borrow().clone()
    }

    fn apply(&self, action: ModerationAction, target: UserId, amount: Option<f32>) -> Result<()> {
        let mut users = self.0.borrow_mut();
        let Some(user) = users.iter_mut().find(|u| u.id == target) else {
            return Err(Error::dispatch(
                action.as_str(),
                format!("unknown user {}", target),
            ));
        };

        match action {
            ModerationAction::Ban => {
                user.banned = true;
                user.connected = false;
            }
            ModerationAction::Unban => user.banned = false,
            ModerationAction::Kick => user.connected = false,
            ModerationAction::Kill => {
                user.alive = false;
                if let Some(vitals) = user.vitals.as_mut() {
                    vitals.health = 0.0;
                }
            }
            ModerationAction::ResetMetabolism => {
                let health = user.vitals.map_or(MAX_HEALTH, |v| v.health);
                user.vitals = Some(Vitals {
                    health,
                    calories: 500.0,
                    hydration: 250.0,
                    ..Vitals::default()
                });
            }
            ModerationAction::Hurt | ModerationAction::Heal => {
                let delta = amount.unwrap_or_default();
                let vitals = user.vitals.get_or_insert(Vitals {
                    health: MAX_HEALTH,
                    ..Vitals::default()
                });
                let change = if action == ModerationAction::Hurt {
                    -delta
                } else {
                    delta
                };
                vitals.health = (vitals.health + change).clamp(0.0, MAX_HEALTH);
                if vitals.health <= 0.0 {
                    user.alive = false;
                }
            }
            ModerationAction::ClearInventory | ModerationAction::ResetBlueprints => {}
        }
        Ok(())
    }
}

impl UserRegistry for Fixture {
    fn list_active_users(&self) -> Vec<UserRecord> {
        self.0
            .borrow()
            .iter()
            .filter(|u| !u.banned && (u.connected || u.sleeping))
            .cloned()
            .collect()
    }

    fn list_banned_users(&self) -> Vec<UserRecord> {
        self.0.borrow().iter().filter(|u| u.banned).cloned().collect()
    }

    fn find_user(&self, id: UserId) -> Option<UserRecord> {
        self.0.borrow().iter().find(|u| u.id == id).cloned()
    }
}

/// Grants every capability except the denied ones
#[derive(Debug, Clone, Default)]
pub struct Permissions {
    denied: HashSet<String>,
}

impl Permissions {
    pub fn denying(capabilities: impl IntoIterator<Item = String>) -> Self {
        Self {
            denied: capabilities.into_iter().collect(),
        }
    }
}

impl PermissionService for Permissions {
    fn has(&self, _viewer: UserId, capability: &str) -> bool {
        !self.denied.contains(capability)
    }
}

/// Records surfaces and replies as events
#[derive(Debug, Clone)]
pub struct EventSink {
    events: EventLog,
}

impl SurfaceSink for EventSink {
    fn render(&self, viewer: UserId, surface: &Surface) -> Result<()> {
        let elements = surface.to_value()?;
        self.events
            .push(HeadlessEvent::rendered(viewer, surface.main_panel(), elements));
        Ok(())
    }

    fn destroy(&self, viewer: UserId, surface_name: &str) -> Result<()> {
        self.events
            .push(HeadlessEvent::destroyed(viewer, surface_name));
        Ok(())
    }
}

impl ViewerMessenger for EventSink {
    fn reply(&self, viewer: UserId, message: &str) {
        self.events.push(HeadlessEvent::reply(viewer, message));
    }
}

/// Applies actions to the fixture and records them
#[derive(Debug, Clone)]
pub struct FixtureDispatcher {
    fixture: Fixture,
    events: EventLog,
}

impl ActionDispatcher for FixtureDispatcher {
    fn dispatch(&self, action: ModerationAction, target: UserId, amount: Option<f32>) -> Result<()> {
        self.fixture.apply(action, target, amount)?;
        self.events
            .push(HeadlessEvent::dispatched(action.as_str(), target, amount));
        Ok(())
    }
}

/// Wire the headless collaborators around `fixture`
pub fn services(fixture: &Fixture, permissions: Permissions, events: &EventLog) -> Services {
    let sink = EventSink {
        events: events.clone(),
    };
    Services {
        registry: Box::new(fixture.clone()),
        permissions: Box::new(permissions),
        translator: Box::new(CatalogTranslator::new()),
        actions: Box::new(FixtureDispatcher {
            fixture: fixture.clone(),
            events: events.clone(),
        }),
        surfaces: Box::new(sink.clone()),
        messenger: Box::new(sink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Fixture {
        Fixture::from_json(
            r#"[
                {"id": 1, "name": "Alice", "connected": true, "alive": true,
                 "vitals": {"health": 80.0}},
                {"id": 2, "name": "Bob", "sleeping": true, "alive": true},
                {"id": 3, "name": "Mallory", "banned": true}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_fixture_lists() {
        let fixture = fixture();
        let active: Vec<_> = fixture.list_active_users().iter().map(|u| u.id).collect();
        let banned: Vec<_> = fixture.list_banned_users().iter().map(|u| u.id).collect();
        assert_eq!(active, vec![1, 2]);
        assert_eq!(banned, vec![3]);
    }

    #[test]
    fn test_ban_moves_user_to_banned_list() {
        let fixture = fixture();
        fixture.apply(ModerationAction::Ban, 1, None).unwrap();

        assert_eq!(fixture.list_active_users().len(), 1);
        assert_eq!(fixture.list_banned_users().len(), 2);
    }

    #[test]
    fn test_hurt_clamps_and_kills() {
        let fixture = fixture();
        fixture.apply(ModerationAction::Hurt, 1, Some(30.0)).unwrap();
        assert_eq!(fixture.find_user(1).unwrap().vitals.unwrap().health, 50.0);

        fixture.apply(ModerationAction::Hurt, 1, Some(500.0)).unwrap();
        let user = fixture.find_user(1).unwrap();
        assert_eq!(user.vitals.unwrap().health, 0.0);
        assert!(!user.alive);
    }

    #[test]
    fn test_unknown_target_fails() {
        let fixture = fixture();
        let result = fixture.apply(ModerationAction::Kick, 99, None);
        assert!(matches!(result, Err(Error::Dispatch { .. })));
    }

    #[test]
    fn test_denied_permissions() {
        let permissions = Permissions::denying(["modpanel.ban".to_string()]);
        assert!(!permissions.has(1, "modpanel.ban"));
        assert!(permissions.has(1, "modpanel.kick"));
    }
}
