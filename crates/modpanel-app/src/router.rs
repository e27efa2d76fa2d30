//! Navigation router
//!
//! Owns the host collaborators, the loaded settings and the per-viewer
//! session store. Every page change goes through [`Router::show`], which
//! always destroys the previous surface before rendering the new one.

use modpanel_core::prelude::*;
use modpanel_core::{UserId, Viewer};

use crate::config::Settings;
use crate::navigation::{NavigationState, Page};
use crate::pages::{self, PageContext, MAIN_PANEL_NAME};
use crate::services::Services;
use crate::session::SessionStore;

#[derive(Debug)]
pub struct Router {
    pub(crate) services: Services,
    pub(crate) settings: Settings,
    pub(crate) sessions: SessionStore,
}

impl Router {
    pub fn new(services: Services, settings: Settings) -> Self {
        Self {
            services,
            settings,
            sessions: SessionStore::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Resolve `raw_argument` for `state` and show the resulting page.
    ///
    /// Malformed arguments never fail; they resolve to the documented
    /// defaults. Only collaborator failures are returned as errors.
    pub fn open(
        &mut self,
        viewer: &Viewer,
        state: NavigationState,
        raw_argument: Option<&str>,
    ) -> Result<Page> {
        let page = Page::resolve(state, raw_argument, viewer.id);
        self.show(viewer, page)?;
        Ok(page)
    }

    /// Build `page`, destroy the viewer's previous surface, render the new one
    pub fn show(&mut self, viewer: &Viewer, page: Page) -> Result<()> {
        let surface = {
            let ctx = PageContext {
                viewer,
                settings: &self.settings,
                registry: self.services.registry.as_ref(),
                translator: self.services.translator.as_ref(),
                pending_ban_input: self.sessions.pending_ban_input(viewer.id),
            };
            pages::build(&page, &ctx)
        };

        self.services
            .surfaces
            .destroy(viewer.id, MAIN_PANEL_NAME)
            .with_context(|| format!("Destroying surface of viewer {}", viewer.id))?;
        self.sessions.mark_destroyed(viewer.id);
        self.services
            .surfaces
            .render(viewer.id, &surface)
            .with_context(|| format!("Rendering {:?} for viewer {}", page, viewer.id))?;

        debug!(
            "Rendered {:?} for viewer {} ({} elements)",
            page,
            viewer.id,
            surface.len()
        );
        self.sessions
            .register(viewer.id, surface.main_panel(), page);
        Ok(())
    }

    /// Explicit close: destroy the surface and forget the viewer's session
    pub fn close(&mut self, viewer: UserId) -> Result<()> {
        self.teardown(viewer)
    }

    /// The viewer left the server
    pub fn disconnect(&mut self, viewer: UserId) -> Result<()> {
        self.teardown(viewer)
    }

    fn teardown(&mut self, viewer: UserId) -> Result<()> {
        let Some(session) = self.sessions.remove(viewer) else {
            return Ok(());
        };
        match session.live_surface {
            Some(name) => self
                .services
                .surfaces
                .destroy(viewer, &name)
                .with_context(|| format!("Destroying surface of viewer {}", viewer)),
            None => Ok(()),
        }
    }

    /// Translate `key` for `viewer`
    pub(crate) fn text(&self, viewer: &Viewer, key: &str, args: &[&str]) -> String {
        let locale = if viewer.locale.is_empty() {
            self.settings.ui.default_locale.as_str()
        } else {
            viewer.locale.as_str()
        };
        self.services.translator.translate(key, locale, args)
    }

    pub(crate) fn reply(&self, viewer: &Viewer, key: &str, args: &[&str]) {
        let message = self.text(viewer, key, args);
        self.services.messenger.reply(viewer.id, &message);
    }
}
