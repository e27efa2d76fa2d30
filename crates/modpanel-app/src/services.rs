//! Host collaborators consumed by the panel
//!
//! The panel never talks to the game world directly. Everything it reads or
//! triggers goes through these traits, implemented by the hosting runtime.
//! All calls are synchronous; latency is the host's concern.

use modpanel_core::prelude::*;
use modpanel_core::{Surface, UserId, UserRecord};

use crate::action::ModerationAction;

/// Read-only view of the host's user registry
pub trait UserRegistry {
    /// Connected and sleeping users, excluding banned ones, in display order
    fn list_active_users(&self) -> Vec<UserRecord>;

    /// Entries of the ban registry, in display order
    fn list_banned_users(&self) -> Vec<UserRecord>;

    fn find_user(&self, id: UserId) -> Option<UserRecord>;
}

pub trait PermissionService {
    fn has(&self, viewer: UserId, capability: &str) -> bool;
}

pub trait Translator {
    fn translate(&self, key: &str, locale: &str, args: &[&str]) -> String;
}

/// Applies moderation effects
#[cfg_attr(test, mockall::automock)]
pub trait ActionDispatcher {
    fn dispatch(&self, action: ModerationAction, target: UserId, amount: Option<f32>)
        -> Result<()>;
}

/// Draws and removes surfaces on a viewer's client
#[cfg_attr(test, mockall::automock)]
pub trait SurfaceSink {
    fn render(&self, viewer: UserId, surface: &Surface) -> Result<()>;

    fn destroy(&self, viewer: UserId, surface_name: &str) -> Result<()>;
}

/// Sends a chat/console line to a viewer
pub trait ViewerMessenger {
    fn reply(&self, viewer: UserId, message: &str);
}

/// The full set of host collaborators owned by the router
pub struct Services {
    pub registry: Box<dyn UserRegistry>,
    pub permissions: Box<dyn PermissionService>,
    pub translator: Box<dyn Translator>,
    pub actions: Box<dyn ActionDispatcher>,
    pub surfaces: Box<dyn SurfaceSink>,
    pub messenger: Box<dyn ViewerMessenger>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
