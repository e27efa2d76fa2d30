//! Page builders
//!
//! Every page is a complete surface: the shared frame (header with title and
//! close button, tab bar, content panel) plus the page's own content.
//! [`build`] maps each [`Page`] to exactly one builder.
//!
//! - `main_page`: ban-by-id workflow
//! - `user_list`: paginated grid of active or banned users
//! - `user_detail`: info and action panels for one user

pub mod main_page;
pub mod theme;
pub mod user_detail;
pub mod user_list;

use modpanel_core::{Button, Panel, Rect, Surface, TextAlign, Viewer};

use crate::config::{FeatureFlags, Settings};
use crate::lang;
use crate::message::{switch_command, CMD_CLOSE};
use crate::navigation::{NavigationState, Page, Tab};
use crate::services::{Translator, UserRegistry};

/// Name of the main panel; destroying it removes the whole surface
pub const MAIN_PANEL_NAME: &str = "ModPanel.Main";

/// Host layer the main panel is attached to
pub const HOST_LAYER: &str = "Overlay";

/// Panel that hosts the page-specific content
pub const CONTENT_PANEL_NAME: &str = "ModPanel.Content";

const MAIN_PANEL_RECT: Rect = Rect::from_corners(0.03, 0.15, 0.97, 0.97);
const HEADER_RECT: Rect = Rect::from_corners(0.0, 0.93, 1.0, 1.0);
const HEADER_TITLE_RECT: Rect = Rect::from_corners(0.01, 0.0, 0.6, 1.0);
const CLOSE_BUTTON_RECT: Rect = Rect::from_corners(0.92, 0.1, 0.99, 0.9);
const TAB_BAR_RECT: Rect = Rect::from_corners(0.0, 0.87, 1.0, 0.93);
const CONTENT_RECT: Rect = Rect::from_corners(0.01, 0.01, 0.99, 0.86);

const TAB_WIDTH: f32 = 0.15;
const TAB_GAP: f32 = 0.005;

/// Everything a page builder may read
pub struct PageContext<'a> {
    pub viewer: &'a Viewer,
    pub settings: &'a Settings,
    pub registry: &'a dyn UserRegistry,
    pub translator: &'a dyn Translator,
    /// Unsubmitted ban-by-id text of this viewer
    pub pending_ban_input: Option<&'a str>,
}

impl PageContext<'_> {
    pub fn locale(&self) -> &str {
        if self.viewer.locale.is_empty() {
            &self.settings.ui.default_locale
        } else {
            &self.viewer.locale
        }
    }

    pub fn translate(&self, key: &str, args: &[&str]) -> String {
        self.translator.translate(key, self.locale(), args)
    }

    pub fn text(&self, key: &str) -> String {
        self.translate(key, &[])
    }

    pub fn flags(&self) -> &FeatureFlags {
        &self.settings.features
    }
}

/// Build the complete surface for `page`
pub fn build(page: &Page, ctx: &PageContext<'_>) -> Surface {
    let mut surface = Surface::new(MAIN_PANEL_NAME);
    let content = build_frame(&mut surface, page.tab(), ctx);

    match *page {
        Page::Main => main_page::build(&mut surface, &content, ctx),
        Page::UserList { page } => user_list::build(&mut surface, &content, ctx, page, false),
        Page::UserListBanned { page } => user_list::build(&mut surface, &content, ctx, page, true),
        Page::UserDetail { target } => user_detail::build(&mut surface, &content, ctx, target, false),
        Page::UserDetailBanned { target } => {
            user_detail::build(&mut surface, &content, ctx, target, true)
        }
    }

    surface
}

/// Main panel, header and tab bar. Returns the content panel name.
fn build_frame(surface: &mut Surface, current: Tab, ctx: &PageContext<'_>) -> String {
    let main = surface.add_panel(
        HOST_LAYER,
        MAIN_PANEL_RECT,
        None,
        Panel::colored(theme::PANEL_BG).with_cursor().with_keyboard(),
        Some(MAIN_PANEL_NAME),
    );

    let header = surface.add_panel(
        &main,
        HEADER_RECT,
        None,
        Panel::colored(theme::HEADER_BG),
        None,
    );
    surface.add_label(
        &header,
        HEADER_TITLE_RECT,
        None,
        theme::title(ctx.text(lang::PANEL_TITLE)),
        None,
    );
    surface.add_button(
        &header,
        CLOSE_BUTTON_RECT,
        None,
        Button::new(ctx.text(lang::CLOSE_BUTTON))
            .command(CMD_CLOSE)
            .close(MAIN_PANEL_NAME)
            .colors(theme::BUTTON_CLOSE, theme::TEXT_PRIMARY),
        None,
    );

    let tab_bar = surface.add_panel(&main, TAB_BAR_RECT, None, Panel::transparent(), None);
    let tabs = [
        (Tab::Main, lang::TAB_MAIN, NavigationState::Main),
        (Tab::Users, lang::TAB_USERS, NavigationState::UserList),
        (Tab::BannedUsers, lang::TAB_BANNED, NavigationState::UserListBanned),
    ];
    for (index, (tab, key, state)) in tabs.into_iter().enumerate() {
        let left = 0.01 + index as f32 * (TAB_WIDTH + TAB_GAP);
        let color = if tab == current {
            theme::BUTTON_TAB_ACTIVE
        } else {
            theme::BUTTON_BG
        };
        surface.add_button(
            &tab_bar,
            Rect::from_corners(left, 0.1, left + TAB_WIDTH, 0.9),
            None,
            Button::new(ctx.text(key))
                .command(switch_command(state, None))
                .colors(color, theme::TEXT_PRIMARY)
                .align(TextAlign::MiddleCenter),
            None,
        );
    }

    surface.add_panel(
        &main,
        CONTENT_RECT,
        None,
        Panel::colored(theme::CONTENT_BG),
        Some(CONTENT_PANEL_NAME),
    )
}
