//! Per-viewer panel state

use std::collections::HashMap;

use modpanel_core::UserId;

use crate::navigation::Page;

/// What the panel remembers about one viewer between triggers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerSession {
    /// Name of the surface currently shown to the viewer, if any
    pub live_surface: Option<String>,

    /// Last page rendered for the viewer
    pub page: Option<Page>,

    /// Unsubmitted ban-by-id text
    pub pending_ban_input: Option<String>,
}

impl ViewerSession {
    pub fn is_open(&self) -> bool {
        self.live_surface.is_some()
    }
}

/// Sessions indexed by viewer id
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<UserId, ViewerSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, viewer: UserId) -> Option<&ViewerSession> {
        self.sessions.get(&viewer)
    }

    pub fn is_open(&self, viewer: UserId) -> bool {
        self.get(viewer).is_some_and(ViewerSession::is_open)
    }

    pub fn pending_ban_input(&self, viewer: UserId) -> Option<&str> {
        self.get(viewer)
            .and_then(|s| s.pending_ban_input.as_deref())
    }

    /// Record that `surface` showing `page` is now live for `viewer`
    pub fn register(&mut self, viewer: UserId, surface: impl Into<String>, page: Page) {
        let session = self.sessions.entry(viewer).or_default();
        session.live_surface = Some(surface.into());
        session.page = Some(page);
    }

    /// The viewer's surface was destroyed. Page and pending input are kept.
    pub fn mark_destroyed(&mut self, viewer: UserId) {
        if let Some(session) = self.sessions.get_mut(&viewer) {
            session.live_surface = None;
        }
    }

    /// Replace the pending ban-by-id text. Empty text clears it.
    pub fn set_pending_ban_input(&mut self, viewer: UserId, text: &str) {
        let session = self.sessions.entry(viewer).or_default();
        let text = text.trim();
        session.pending_ban_input = (!text.is_empty()).then(|| text.to_string());
    }

    pub fn take_pending_ban_input(&mut self, viewer: UserId) -> Option<String> {
        self.sessions
            .get_mut(&viewer)
            .and_then(|s| s.pending_ban_input.take())
    }

    /// Drop everything known about `viewer`, pending input included
    pub fn remove(&mut self, viewer: UserId) -> Option<ViewerSession> {
        self.sessions.remove(&viewer)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
