//! User list pages: a paginated grid of active or banned users

use modpanel_core::{Label, Rect, Surface, TextAlign, UserRecord};

use super::{theme, PageContext};
use crate::config::UiSettings;
use crate::grid::{place_buttons, GridItem, GridLayout, GRID_CAPACITY, ID_PLACEHOLDER};
use crate::lang;
use crate::message::switch_command;
use crate::navigation::NavigationState;
use crate::pagination::Pagination;

/// Users shown per page
pub const PAGE_SIZE: usize = GRID_CAPACITY;

const TITLE_RECT: Rect = Rect::from_corners(0.01, 0.92, 0.7, 0.99);
const PAGE_INDICATOR_RECT: Rect = Rect::from_corners(0.7, 0.92, 0.99, 0.99);
const EMPTY_RECT: Rect = Rect::from_corners(0.01, 0.4, 0.99, 0.6);
const PREVIOUS_RECT: Rect = Rect::from_corners(0.01, 0.01, 0.11, 0.06);
const NEXT_RECT: Rect = Rect::from_corners(0.89, 0.01, 0.99, 0.06);

/// Name shown for a banned user: the raw id when the stored name is empty or
/// a known placeholder.
pub fn banned_display_name(user: &UserRecord, ui: &UiSettings) -> String {
    if user.name.trim().is_empty() || ui.is_placeholder_name(&user.name) {
        user.id.to_string()
    } else {
        user.name.clone()
    }
}

pub fn build(
    surface: &mut Surface,
    parent: &str,
    ctx: &PageContext<'_>,
    requested_page: usize,
    banned: bool,
) {
    let users: Vec<UserRecord> = if banned {
        ctx.registry.list_banned_users()
    } else {
        ctx.registry
            .list_active_users()
            .into_iter()
            .filter(|u| !u.banned)
            .collect()
    };

    let (list_state, detail_state, title_key) = if banned {
        (
            NavigationState::UserListBanned,
            NavigationState::UserDetailBanned,
            lang::BANNED_LIST_TITLE,
        )
    } else {
        (
            NavigationState::UserList,
            NavigationState::UserDetail,
            lang::USER_LIST_TITLE,
        )
    };

    let pagination = Pagination::new(users.len(), requested_page, PAGE_SIZE);

    surface.add_label(
        parent,
        TITLE_RECT,
        None,
        theme::title(ctx.text(title_key)),
        None,
    );
    surface.add_label(
        parent,
        PAGE_INDICATOR_RECT,
        None,
        theme::info(ctx.translate(
            lang::PAGE_INDICATOR,
            &[
                &pagination.index.saturating_add(1).to_string(),
                &pagination.page_count().to_string(),
            ],
        ))
        .align(TextAlign::MiddleRight),
        None,
    );

    let items: Vec<GridItem> = pagination
        .slice(&users)
        .iter()
        .map(|user| GridItem {
            id: user.id,
            text: if banned {
                banned_display_name(user, &ctx.settings.ui)
            } else {
                user.name.clone()
            },
        })
        .collect();

    if items.is_empty() {
        surface.add_label(
            parent,
            EMPTY_RECT,
            None,
            Label::new(ctx.text(lang::NO_USERS))
                .align(TextAlign::MiddleCenter)
                .color(theme::TEXT_MUTED),
            None,
        );
    } else {
        place_buttons(
            surface,
            parent,
            &GridLayout::user_grid(),
            &items,
            &switch_command(detail_state, Some(ID_PLACEHOLDER)),
            theme::user_cell(),
        );
    }

    let previous = pagination.previous_index().map(|i| i.to_string());
    surface.add_button(
        parent,
        PREVIOUS_RECT,
        None,
        theme::gated_button(
            ctx.text(lang::PREVIOUS_BUTTON),
            switch_command(list_state, previous.as_deref()),
            previous.is_some(),
            theme::BUTTON_BG,
        ),
        None,
    );

    let next = pagination.next_index().map(|i| i.to_string());
    surface.add_button(
        parent,
        NEXT_RECT,
        None,
        theme::gated_button(
            ctx.text(lang::NEXT_BUTTON),
            switch_command(list_state, next.as_deref()),
            next.is_some(),
            theme::BUTTON_BG,
        ),
        None,
    );
}
