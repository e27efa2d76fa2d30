//! Handler module - turns parsed commands into router operations
//!
//! Organized into submodules:
//! - `actions`: moderation dispatch, ban-by-id submit and post-action rendering
//!
//! Every message except close is permission-checked first. A denied message
//! has no effect besides a translated reply to the viewer and a warning in
//! the log.

pub(crate) mod actions;


use modpanel_core::prelude::*;
use modpanel_core::{UserId, Viewer};

use crate::action::{Capability, ModerationAction};
use crate::lang;
use crate::message::Message;
use crate::navigation::{NavigationState, Page};
use crate::router::Router;

/// What handling a message did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A page was rendered for the viewer
    Rendered(Page),

    /// The viewer's surface was destroyed and its session discarded
    Closed,

    /// The ban-by-id text was stored
    InputStored,

    /// A moderation action reached the dispatcher
    Dispatched {
        action: ModerationAction,
        target: UserId,
    },

    /// Nothing to do: not a panel command, disabled feature, malformed target
    /// or empty ban-by-id buffer
    Ignored,

    /// The viewer lacks the capability
    Denied { capability: Capability },
}

impl Router {
    /// Parse and handle one console command line
    pub fn handle_command(&mut self, viewer: &Viewer, line: &str) -> Result<Outcome> {
        match Message::parse(line) {
            Some(message) => self.handle(viewer, message),
            None => {
                trace!("Not a panel command: {:?}", line);
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Handle a message from `viewer`
    pub fn handle(&mut self, viewer: &Viewer, message: Message) -> Result<Outcome> {
        if let Some(capability) = message
            .capability()
            .filter(|c| !self.services.permissions.has(viewer.id, c.as_str()))
        {
            warn!(
                "Viewer {} ({}) lacks '{}', rejecting {:?}",
                viewer.id, viewer.name, capability, message
            );
            self.reply(viewer, lang::PERMISSION_ERROR, &[]);
            return Ok(Outcome::Denied { capability });
        }

        match message {
            Message::OpenPanel => {
                let page = self.open(viewer, NavigationState::Main, None)?;
                Ok(Outcome::Rendered(page))
            }
            Message::ClosePanel => {
                self.close(viewer.id)?;
                Ok(Outcome::Closed)
            }
            Message::SwitchPage { state, argument } => {
                let page = self.open(viewer, state, argument.as_deref())?;
                Ok(Outcome::Rendered(page))
            }
            Message::BanIdTextChanged { text } => {
                self.sessions.set_pending_ban_input(viewer.id, &text);
                Ok(Outcome::InputStored)
            }
            Message::SubmitBanId => self.submit_ban_id(viewer),
            Message::Moderate {
                action,
                target,
                amount,
            } => self.moderate(viewer, action, &target, amount.as_deref()),
        }
    }
}
