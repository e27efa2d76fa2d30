//! Moderation action handlers

use modpanel_core::prelude::*;
use modpanel_core::{UserId, Viewer};

use super::Outcome;
use crate::action::ModerationAction;
use crate::lang;
use crate::navigation::Page;
use crate::router::Router;

impl Router {
    /// Ban the user whose id sits in the viewer's ban-by-id buffer
    pub(crate) fn submit_ban_id(&mut self, viewer: &Viewer) -> Result<Outcome> {
        if !self.settings.features.ban {
            debug!("Ban is disabled, ignoring ban-by-id from {}", viewer.id);
            return Ok(Outcome::Ignored);
        }

        let Some(text) = self.sessions.pending_ban_input(viewer.id) else {
            debug!("No pending ban-by-id input for viewer {}", viewer.id);
            return Ok(Outcome::Ignored);
        };
        let Ok(target) = text.parse::<UserId>() else {
            debug!("Ban-by-id input {:?} of viewer {} is not an id", text, viewer.id);
            return Ok(Outcome::Ignored);
        };

        self.sessions.take_pending_ban_input(viewer.id);
        self.apply(viewer, ModerationAction::Ban, target, None, Page::Main)
    }

    /// Apply `action` to the raw `target`, re-rendering the panel afterwards
    pub(crate) fn moderate(
        &mut self,
        viewer: &Viewer,
        action: ModerationAction,
        raw_target: &str,
        raw_amount: Option<&str>,
    ) -> Result<Outcome> {
        if !self.settings.features.is_enabled(action) {
            debug!("{} is disabled, ignoring request from {}", action, viewer.id);
            return Ok(Outcome::Ignored);
        }

        let Ok(target) = raw_target.trim().parse::<UserId>() else {
            debug!("Invalid {} target {:?} from {}", action, raw_target, viewer.id);
            return Ok(Outcome::Ignored);
        };
        let amount = action.takes_amount().then(|| parse_amount(raw_amount));

        self.apply(viewer, action, target, amount, page_after(action, target))
    }

    fn apply(
        &mut self,
        viewer: &Viewer,
        action: ModerationAction,
        target: UserId,
        amount: Option<f32>,
        next: Page,
    ) -> Result<Outcome> {
        let target_text = target.to_string();

        if let Err(e) = self.services.actions.dispatch(action, target, amount) {
            error!(
                "Viewer {} failed to apply {} to {}: {}",
                viewer.id, action, target, e
            );
            self.reply(viewer, lang::ACTION_FAILED, &[action.as_str(), &target_text]);
            return Err(e);
        }

        info!(
            "Viewer {} ({}) applied {} to {} (amount: {:?})",
            viewer.id, viewer.name, action, target, amount
        );
        self.reply(viewer, lang::ACTION_DONE, &[action.as_str(), &target_text]);

        if self.sessions.is_open(viewer.id) {
            self.show(viewer, next)?;
        }

        Ok(Outcome::Dispatched { action, target })
    }
}

/// Page shown after `action` succeeded against `target`
pub(crate) fn page_after(action: ModerationAction, target: UserId) -> Page {
    match action {
        ModerationAction::Ban => Page::UserDetailBanned { target },
        ModerationAction::Unban => Page::UserListBanned { page: 0 },
        _ => Page::UserDetail { target },
    }
}

/// Hurt/heal amounts accept any float; anything unparsable counts as 0.
pub(crate) fn parse_amount(raw: Option<&str>) -> f32 {
    match raw.map(str::trim) {
        Some(text) => text.parse().unwrap_or_else(|_| {
            debug!("Invalid amount {:?}, using 0", text);
            0.0
        }),
        None => 0.0,
    }
}
