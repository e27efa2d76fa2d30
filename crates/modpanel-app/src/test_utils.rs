//! In-memory collaborators for tests
//!
//! Provides a fixture registry, fixed permission sets and recording fakes
//! for the surface sink, action dispatcher and messenger. All recording
//! fakes share one [`Recorder`] so tests can assert on call order.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use modpanel_core::prelude::*;
use modpanel_core::{Surface, UserId, UserRecord, Viewer};

use crate::action::ModerationAction;
use crate::config::Settings;
use crate::lang::CatalogTranslator;
use crate::router::Router;
use crate::services::{
    ActionDispatcher, PermissionService, Services, SurfaceSink, UserRegistry, ViewerMessenger,
};

pub const TEST_VIEWER_ID: UserId = 76561198000000001;

pub fn test_viewer() -> Viewer {
    Viewer::new(TEST_VIEWER_ID, "Admin", "en")
}

/// `count` connected users with ids starting at 1000, named `user0`, `user1`, ...
pub fn online_users(count: u64) -> Vec<UserRecord> {
    (0..count)
        .map(|i| UserRecord::online(1000 + i, format!("user{i}")))
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────

/// Registry over a fixed user list. Banned users are reported by
/// `list_banned_users` only.
#[derive(Debug, Clone, Default)]
pub struct FakeRegistry {
    pub users: Vec<UserRecord>,
}

impl FakeRegistry {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Parse a JSON array of user records
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl UserRegistry for FakeRegistry {
    fn list_active_users(&self) -> Vec<UserRecord> {
        self.users
            .iter()
            .filter(|u| !u.banned && (u.connected || u.sleeping))
            .cloned()
            .collect()
    }

    fn list_banned_users(&self) -> Vec<UserRecord> {
        self.users.iter().filter(|u| u.banned).cloned().collect()
    }

    fn find_user(&self, id: UserId) -> Option<UserRecord> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

// ─────────────────────────────────────────────────────────────────
// Permissions
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum StaticPermissions {
    AllowAll,
    DenyAll,
    Only(HashSet<String>),
}

impl StaticPermissions {
    pub fn only<'a>(capabilities: impl IntoIterator<Item = &'a str>) -> Self {
        Self::Only(capabilities.into_iter().map(str::to_string).collect())
    }
}

impl PermissionService for StaticPermissions {
    fn has(&self, _viewer: UserId, capability: &str) -> bool {
        match self {
            StaticPermissions::AllowAll => true,
            StaticPermissions::DenyAll => false,
            StaticPermissions::Only(set) => set.contains(capability),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Recording fakes
// ─────────────────────────────────────────────────────────────────

/// One observed collaborator call
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Render {
        viewer: UserId,
        surface: Surface,
    },
    Destroy {
        viewer: UserId,
        surface: String,
    },
    Dispatch {
        action: ModerationAction,
        target: UserId,
        amount: Option<f32>,
    },
    Reply {
        viewer: UserId,
        message: String,
    },
}

/// Shared, ordered log of collaborator calls
#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<HostCall>>>);

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: HostCall) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn render_count(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|c| matches!(c, HostCall::Render { .. }))
            .count()
    }

    pub fn destroy_count(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|c| matches!(c, HostCall::Destroy { .. }))
            .count()
    }

    /// Most recently rendered surface
    pub fn last_surface(&self) -> Option<Surface> {
        self.0.borrow().iter().rev().find_map(|c| match c {
            HostCall::Render { surface, .. } => Some(surface.clone()),
            _ => None,
        })
    }

    pub fn dispatches(&self) -> Vec<(ModerationAction, UserId, Option<f32>)> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCall::Dispatch {
                    action,
                    target,
                    amount,
                } => Some((*action, *target, *amount)),
                _ => None,
            })
            .collect()
    }

    pub fn replies(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCall::Reply { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSink {
    recorder: Recorder,
}

impl RecordingSink {
    pub fn new(recorder: Recorder) -> Self {
        Self { recorder }
    }
}

impl SurfaceSink for RecordingSink {
    fn render(&self, viewer: UserId, surface: &Surface) -> Result<()> {
        self.recorder.record(HostCall::Render {
            viewer,
            surface: surface.clone(),
        });
        Ok(())
    }

    fn destroy(&self, viewer: UserId, surface_name: &str) -> Result<()> {
        self.recorder.record(HostCall::Destroy {
            viewer,
            surface: surface_name.to_string(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RecordingDispatcher {
    recorder: Recorder,
    fail_with: Option<String>,
}

impl RecordingDispatcher {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            fail_with: None,
        }
    }

    /// Every dispatch is recorded, then fails with `message`
    pub fn failing(recorder: Recorder, message: impl Into<String>) -> Self {
        Self {
            recorder,
            fail_with: Some(message.into()),
        }
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&self, action: ModerationAction, target: UserId, amount: Option<f32>) -> Result<()> {
        self.recorder.record(HostCall::Dispatch {
            action,
            target,
            amount,
        });
        match &self.fail_with {
            Some(message) => Err(Error::dispatch(action.as_str(), message.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingMessenger {
    recorder: Recorder,
}

impl RecordingMessenger {
    pub fn new(recorder: Recorder) -> Self {
        Self { recorder }
    }
}

impl ViewerMessenger for RecordingMessenger {
    fn reply(&self, viewer: UserId, message: &str) {
        self.recorder.record(HostCall::Reply {
            viewer,
            message: message.to_string(),
        });
    }
}

// ─────────────────────────────────────────────────────────────────
// Router builders
// ─────────────────────────────────────────────────────────────────

/// Services backed by the fakes above, all recording into `recorder`
pub fn fake_services(
    registry: FakeRegistry,
    permissions: StaticPermissions,
    recorder: &Recorder,
) -> Services {
    Services {
        registry: Box::new(registry),
        permissions: Box::new(permissions),
        translator: Box::new(CatalogTranslator::new()),
        actions: Box::new(RecordingDispatcher::new(recorder.clone())),
        surfaces: Box::new(RecordingSink::new(recorder.clone())),
        messenger: Box::new(RecordingMessenger::new(recorder.clone())),
    }
}

/// A router over `users` with every capability granted and default settings
pub fn test_router(users: Vec<UserRecord>) -> (Router, Recorder) {
    test_router_with(users, StaticPermissions::AllowAll, Settings::default())
}

pub fn test_router_with(
    users: Vec<UserRecord>,
    permissions: StaticPermissions,
    settings: Settings,
) -> (Router, Recorder) {
    let recorder = Recorder::new();
    let services = fake_services(FakeRegistry::new(users), permissions, &recorder);
    (Router::new(services, settings), recorder)
}
