//! Navigation states and argument resolution
//!
//! A switch request carries a state name and a raw, unparsed argument.
//! [`Page::resolve`] turns the pair into a fully typed page, applying the
//! documented defaults for malformed input.

use std::fmt;

use modpanel_core::UserId;

/// The panel's pages, as named in switch commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationState {
    Main,
    UserList,
    UserListBanned,
    UserDetail,
    UserDetailBanned,
}

impl NavigationState {
    pub const ALL: [NavigationState; 5] = [
        NavigationState::Main,
        NavigationState::UserList,
        NavigationState::UserListBanned,
        NavigationState::UserDetail,
        NavigationState::UserDetailBanned,
    ];

    /// Name used in switch commands
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationState::Main => "Main",
            NavigationState::UserList => "Players",
            NavigationState::UserListBanned => "PlayersBanned",
            NavigationState::UserDetail => "PlayerPage",
            NavigationState::UserDetailBanned => "PlayerPageBanned",
        }
    }

    /// Unrecognized names navigate to [`NavigationState::Main`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == name)
            .unwrap_or_else(|| {
                tracing::debug!("Unknown page '{}', showing main page", name);
                NavigationState::Main
            })
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level tab a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Main,
    Users,
    BannedUsers,
}

/// A navigation state with its resolved argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    UserList { page: usize },
    UserListBanned { page: usize },
    UserDetail { target: UserId },
    UserDetailBanned { target: UserId },
}

impl Page {
    /// Resolve a raw switch argument.
    ///
    /// Page numbers default to 0 and target ids default to the viewer's own
    /// id when missing or not a number.
    pub fn resolve(state: NavigationState, raw_argument: Option<&str>, viewer: UserId) -> Self {
        match state {
            NavigationState::Main => Page::Main,
            NavigationState::UserList => Page::UserList {
                page: parse_page_index(raw_argument),
            },
            NavigationState::UserListBanned => Page::UserListBanned {
                page: parse_page_index(raw_argument),
            },
            NavigationState::UserDetail => Page::UserDetail {
                target: parse_target(raw_argument, viewer),
            },
            NavigationState::UserDetailBanned => Page::UserDetailBanned {
                target: parse_target(raw_argument, viewer),
            },
        }
    }

    pub fn state(&self) -> NavigationState {
        match self {
            Page::Main => NavigationState::Main,
            Page::UserList { .. } => NavigationState::UserList,
            Page::UserListBanned { .. } => NavigationState::UserListBanned,
            Page::UserDetail { .. } => NavigationState::UserDetail,
            Page::UserDetailBanned { .. } => NavigationState::UserDetailBanned,
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Page::Main => Tab::Main,
            Page::UserList { .. } | Page::UserDetail { .. } => Tab::Users,
            Page::UserListBanned { .. } | Page::UserDetailBanned { .. } => Tab::BannedUsers,
        }
    }
}

fn parse_page_index(raw: Option<&str>) -> usize {
    match raw.map(str::trim) {
        None | Some("") => 0,
        Some(text) => text.parse().unwrap_or_else(|_| {
            tracing::debug!("Invalid page number '{}', using 0", text);
            0
        }),
    }
}

fn parse_target(raw: Option<&str>, viewer: UserId) -> UserId {
    match raw.map(str::trim) {
        None | Some("") => viewer,
        Some(text) => text.parse().unwrap_or_else(|_| {
            tracing::debug!("Invalid user id '{}', using viewer {}", text, viewer);
            viewer
        }),
    }
}
