//! Commands the panel answers to
//!
//! Buttons and input fields on a surface send plain console commands back to
//! the host. [`Message::parse`] turns such a line into a typed message; the
//! `*_command` helpers build the lines that the page builders wire into
//! buttons, so both directions share the same vocabulary.

use crate::action::{Capability, ModerationAction};
use crate::navigation::NavigationState;

/// Opens the panel on the main page
pub const CMD_OPEN: &str = "modpanel";
pub const CMD_CLOSE: &str = "modpanel.close";
pub const CMD_SWITCH: &str = "modpanel.switch";
/// Sent by the ban-by-id input field on every change, followed by the text
pub const CMD_BAN_ID_TEXT: &str = "modpanel.banid.text";
/// Sent by the ban-by-id button
pub const CMD_BAN_ID_SUBMIT: &str = "modpanel.banid";

const ACTION_PREFIX: &str = "modpanel.";

/// All triggers handled by the router
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    OpenPanel,
    ClosePanel,

    /// Switch to a page; the argument stays raw until the router resolves it
    SwitchPage {
        state: NavigationState,
        argument: Option<String>,
    },

    /// The ban-by-id text field changed
    BanIdTextChanged { text: String },

    /// The ban-by-id button was clicked
    SubmitBanId,

    /// A moderation action against a target; target and amount stay raw
    Moderate {
        action: ModerationAction,
        target: String,
        amount: Option<String>,
    },
}

impl Message {
    /// Parse a console command line. Returns `None` for anything that is not
    /// a panel command.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next()?;

        let message = match command {
            CMD_OPEN => Message::OpenPanel,
            CMD_CLOSE => Message::ClosePanel,
            CMD_SWITCH => Message::SwitchPage {
                state: NavigationState::from_name(tokens.next().unwrap_or_default()),
                argument: tokens.next().map(str::to_string),
            },
            CMD_BAN_ID_TEXT => Message::BanIdTextChanged {
                text: tokens.collect::<Vec<_>>().join(" "),
            },
            CMD_BAN_ID_SUBMIT => Message::SubmitBanId,
            other => {
                let action = other
                    .strip_prefix(ACTION_PREFIX)
                    .and_then(ModerationAction::from_name)?;
                Message::Moderate {
                    action,
                    target: tokens.next().unwrap_or_default().to_string(),
                    amount: tokens.next().map(str::to_string),
                }
            }
        };

        Some(message)
    }

    /// Capability the viewer needs for this message to have any effect.
    /// Closing only tears down the viewer's own state and needs none.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Message::ClosePanel => None,
            Message::OpenPanel
            | Message::SwitchPage { .. }
            | Message::BanIdTextChanged { .. } => Some(Capability::Show),
            Message::SubmitBanId => Some(Capability::Ban),
            Message::Moderate { action, .. } => Some(action.capability()),
        }
    }
}

/// Command that switches to `state`, with an optional raw argument
pub fn switch_command(state: NavigationState, argument: Option<&str>) -> String {
    match argument {
        Some(arg) => format!("{} {} {}", CMD_SWITCH, state.as_str(), arg),
        None => format!("{} {}", CMD_SWITCH, state.as_str()),
    }
}

/// Command that applies `action` to `target`
pub fn action_command(action: ModerationAction, target: &str, amount: Option<f32>) -> String {
    match amount {
        Some(amount) => format!("{}{} {} {}", ACTION_PREFIX, action.as_str(), target, amount),
        None => format!("{}{} {}", ACTION_PREFIX, action.as_str(), target),
    }
}
