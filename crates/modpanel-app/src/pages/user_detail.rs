//! User detail pages: info panel and gated action panel for one user
//!
//! The active view offers every moderation action except unban; the banned
//! view offers unban only. Each button is live only when its feature flag is
//! enabled and the target currently satisfies the action's precondition.

use chrono::{DateTime, Utc};
use modpanel_core::{Button, Label, Panel, Rect, Surface, TextAlign, UserId, UserRecord};

use super::{theme, PageContext};
use crate::action::ModerationAction;
use crate::lang;
use crate::message::action_command;

const TITLE_RECT: Rect = Rect::from_corners(0.01, 0.92, 0.99, 0.99);
const NOT_FOUND_RECT: Rect = Rect::from_corners(0.01, 0.4, 0.99, 0.6);
const INFO_PANEL_RECT: Rect = Rect::from_corners(0.01, 0.01, 0.49, 0.9);
const ACTION_PANEL_RECT: Rect = Rect::from_corners(0.51, 0.01, 0.99, 0.9);
const SECTION_TITLE_RECT: Rect = Rect::from_corners(0.02, 0.93, 0.98, 0.99);

const INFO_ROW_HEIGHT: f32 = 0.045;
const INFO_TOP: f32 = 0.91;

const ACTION_COLUMNS: usize = 3;
const ACTION_BUTTON_WIDTH: f32 = 0.31;
const ACTION_BUTTON_HEIGHT: f32 = 0.07;
const ACTION_GAP: f32 = 0.015;
const ACTION_TOP: f32 = 0.9;
const ACTION_BOTTOM: f32 = 0.02;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S UTC";

pub fn build(
    surface: &mut Surface,
    parent: &str,
    ctx: &PageContext<'_>,
    target: UserId,
    banned: bool,
) {
    let Some(user) = ctx.registry.find_user(target) else {
        tracing::debug!("Detail page for unknown user {}", target);
        surface.add_label(
            parent,
            NOT_FOUND_RECT,
            None,
            Label::new(ctx.translate(lang::USER_NOT_FOUND, &[&target.to_string()]))
                .align(TextAlign::MiddleCenter)
                .color(theme::TEXT_MUTED),
            None,
        );
        return;
    };

    surface.add_label(
        parent,
        TITLE_RECT,
        None,
        theme::title(ctx.translate(lang::DETAIL_TITLE, &[&user.name, &user.id.to_string()])),
        None,
    );

    let info = surface.add_panel(
        parent,
        INFO_PANEL_RECT,
        None,
        Panel::colored(theme::HEADER_BG),
        None,
    );
    surface.add_label(
        &info,
        SECTION_TITLE_RECT,
        None,
        theme::title(ctx.text(lang::INFO_TITLE)),
        None,
    );
    for (row, line) in info_lines(&user, ctx).into_iter().enumerate() {
        let top = INFO_TOP - row as f32 * INFO_ROW_HEIGHT;
        surface.add_label(
            &info,
            Rect::from_corners(0.03, top - INFO_ROW_HEIGHT, 0.98, top),
            None,
            theme::info(line),
            None,
        );
    }

    let actions = surface.add_panel(
        parent,
        ACTION_PANEL_RECT,
        None,
        Panel::colored(theme::HEADER_BG),
        None,
    );
    surface.add_label(
        &actions,
        SECTION_TITLE_RECT,
        None,
        theme::title(ctx.text(lang::ACTIONS_TITLE)),
        None,
    );
    let buttons = action_buttons(&user, ctx, banned);
    let count = buttons.len();
    for (index, button) in buttons.into_iter().enumerate() {
        surface.add_button(&actions, action_cell(index, count), None, button, None);
    }
}

/// Anchor of the `index`th of `count` action buttons, filled row by row.
///
/// Rows shrink when `count` buttons would not fit above `ACTION_BOTTOM` at
/// the standard height.
fn action_cell(index: usize, count: usize) -> Rect {
    let rows = count.div_ceil(ACTION_COLUMNS).max(1);
    let first_top = ACTION_TOP - 0.02;
    let pitch = (ACTION_BUTTON_HEIGHT + ACTION_GAP).min((first_top - ACTION_BOTTOM) / rows as f32);
    let height = pitch * ACTION_BUTTON_HEIGHT / (ACTION_BUTTON_HEIGHT + ACTION_GAP);

    let column = index % ACTION_COLUMNS;
    let row = index / ACTION_COLUMNS;
    let left = 0.02 + column as f32 * (ACTION_BUTTON_WIDTH + ACTION_GAP);
    let top = first_top - row as f32 * pitch;
    Rect::from_corners(left, top - height, left + ACTION_BUTTON_WIDTH, top)
}

/// Whether `action` makes sense against `user` right now
pub fn precondition_holds(action: ModerationAction, user: &UserRecord) -> bool {
    match action {
        ModerationAction::Ban => !user.banned,
        ModerationAction::Kick => user.connected,
        ModerationAction::Unban => user.banned,
        ModerationAction::Kill => user.alive,
        ModerationAction::ClearInventory => user.connected || user.sleeping,
        ModerationAction::ResetBlueprints => true,
        ModerationAction::ResetMetabolism
        | ModerationAction::Hurt
        | ModerationAction::Heal => user.alive,
    }
}

/// Action buttons for `user`, in display order, each gated by its feature
/// flag and precondition.
pub fn action_buttons(user: &UserRecord, ctx: &PageContext<'_>, banned: bool) -> Vec<Button> {
    let target = user.id.to_string();
    let button = |action: ModerationAction, text: String, amount: Option<f32>, color| {
        let enabled = ctx.flags().is_enabled(action) && precondition_holds(action, user);
        theme::gated_button(text, action_command(action, &target, amount), enabled, color)
    };

    if banned {
        return vec![button(
            ModerationAction::Unban,
            ctx.text(lang::UNBAN_BUTTON),
            None,
            theme::BUTTON_HEAL,
        )];
    }

    let mut buttons = vec![
        button(ModerationAction::Ban, ctx.text(lang::BAN_BUTTON), None, theme::BUTTON_DANGER),
        button(ModerationAction::Kick, ctx.text(lang::KICK_BUTTON), None, theme::BUTTON_DANGER),
        button(ModerationAction::Kill, ctx.text(lang::KILL_BUTTON), None, theme::BUTTON_DANGER),
        button(
            ModerationAction::ClearInventory,
            ctx.text(lang::CLEAR_INVENTORY_BUTTON),
            None,
            theme::BUTTON_BG,
        ),
        button(
            ModerationAction::ResetBlueprints,
            ctx.text(lang::RESET_BLUEPRINTS_BUTTON),
            None,
            theme::BUTTON_BG,
        ),
        button(
            ModerationAction::ResetMetabolism,
            ctx.text(lang::RESET_METABOLISM_BUTTON),
            None,
            theme::BUTTON_BG,
        ),
    ];

    let ui = &ctx.settings.ui;
    for &amount in &ui.hurt_amounts {
        let text = ctx.translate(lang::HURT_BUTTON, &[&amount.to_string()]);
        buttons.push(button(ModerationAction::Hurt, text, Some(amount), theme::BUTTON_DANGER));
    }
    for &amount in &ui.heal_amounts {
        let text = ctx.translate(lang::HEAL_BUTTON, &[&amount.to_string()]);
        buttons.push(button(ModerationAction::Heal, text, Some(amount), theme::BUTTON_HEAL));
    }

    buttons
}

/// Translated info panel lines for `user`
pub fn info_lines(user: &UserRecord, ctx: &PageContext<'_>) -> Vec<String> {
    let yes_no = |value: bool| ctx.text(if value { lang::YES } else { lang::NO });
    let unknown = ctx.text(lang::UNKNOWN_VALUE);
    let line = |key: &str, value: &str| ctx.translate(key, &[value]);

    let position = user
        .position
        .map(|p| format!("{:.1} {:.1} {:.1}", p.x, p.y, p.z))
        .unwrap_or_else(|| unknown.clone());
    let rotation = user
        .rotation
        .map(|r| format!("{r:.1}"))
        .unwrap_or_else(|| unknown.clone());

    let mut lines = vec![
        line(lang::ID_LABEL, &user.id.to_string()),
        line(lang::NAME_LABEL, &user.name),
        line(lang::CONNECTED_LABEL, &yes_no(user.connected)),
        line(lang::SLEEPING_LABEL, &yes_no(user.sleeping)),
        line(lang::ALIVE_LABEL, &yes_no(user.alive)),
        line(lang::BANNED_LABEL, &yes_no(user.banned)),
        line(lang::POSITION_LABEL, &position),
        line(lang::ROTATION_LABEL, &rotation),
    ];

    let vitals = user.vitals.as_ref();
    let vital_rows: [(&str, fn(&modpanel_core::Vitals) -> f32); 9] = [
        (lang::HEALTH_LABEL, |v| v.health),
        (lang::CALORIES_LABEL, |v| v.calories),
        (lang::HYDRATION_LABEL, |v| v.hydration),
        (lang::TEMPERATURE_LABEL, |v| v.temperature),
        (lang::WETNESS_LABEL, |v| v.wetness),
        (lang::COMFORT_LABEL, |v| v.comfort),
        (lang::BLEEDING_LABEL, |v| v.bleeding),
        (lang::RADIATION_LABEL, |v| v.radiation),
        (lang::RADIATION_PROTECTION_LABEL, |v| v.radiation_protection),
    ];
    for (key, field) in vital_rows {
        let value = vitals
            .map(|v| format!("{:.1}", field(v)))
            .unwrap_or_else(|| unknown.clone());
        lines.push(line(key, &value));
    }

    let last_cheat = user
        .last_admin_cheat
        .map(format_timestamp)
        .unwrap_or_else(|| ctx.text(lang::NEVER));
    lines.push(line(lang::LAST_ADMIN_CHEAT_LABEL, &last_cheat));

    lines
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::build as build_page;
    use super::*;
    use crate::config::{FeatureFlags, Settings};
    use crate::lang::CatalogTranslator;
    use crate::navigation::Page;
    use chrono::TimeZone;
    use modpanel_core::{Position, Vitals};

    const FRAME_BUTTONS: [&str; 4] = ["Close", "Main", "Online Users", "Banned Users"];

    fn alice() -> UserRecord {
        UserRecord {
            position: Some(Position {
                x: 10.0,
                y: 2.5,
                z: -3.5,
            }),
            rotation: Some(90.0),
            vitals: Some(Vitals {
                health: 87.5,
                ..Vitals::default()
            }),
            last_admin_cheat: Some(Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap()),
            ..UserRecord::online(42, "Alice")
        }
    }

    fn registry_with(user: UserRecord) -> StaticRegistry {
        StaticRegistry {
            active: vec![user],
            ..Default::default()
        }
    }

    fn action_commands(surface: &Surface) -> Vec<String> {
        surface
            .buttons()
            .filter(|b| !FRAME_BUTTONS.contains(&b.text.as_str()))
            .map(|b| b.command.clone())
            .collect()
    }

    #[test]
    fn test_all_actions_live_for_healthy_online_user() {
        let viewer = viewer();
        let settings = Settings::default();
        let registry = registry_with(alice());
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let surface = build_page(&Page::UserDetail { target: 42 }, &ctx);

        let commands = action_commands(&surface);
        assert_eq!(commands.len(), 14);
        assert!(commands.iter().all(|c| !c.is_empty()));
        assert!(commands.contains(&"modpanel.kick 42".to_string()));
        assert!(commands.contains(&"modpanel.hurt 42 25".to_string()));
        assert!(commands.contains(&"modpanel.heal 42 100".to_string()));
        assert!(surface.button_with_text("Unban").is_none());
        assert!(surface.labels().any(|l| l.text == "Alice (42)"));
    }

    #[test]
    fn test_all_flags_disabled_leaves_labels_but_no_commands() {
        let viewer = viewer();
        let settings = Settings {
            features: FeatureFlags::all_disabled(),
            ..Settings::default()
        };
        let registry = registry_with(alice());
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let surface = build_page(&Page::UserDetail { target: 42 }, &ctx);

        let commands = action_commands(&surface);
        assert_eq!(commands.len(), 14);
        assert!(commands.iter().all(String::is_empty));
        assert!(surface.buttons().all(|b| !b.text.is_empty()));
        assert!(surface.labels().any(|l| l.text == "Health: 87.5"));
        assert!(surface.labels().any(|l| l.text == "Name: Alice"));
    }

    #[test]
    fn test_kick_requires_connection() {
        let viewer = viewer();
        let settings = Settings::default();
        let mut user = alice();
        user.connected = false;
        user.sleeping = true;
        let registry = registry_with(user);
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let surface = build_page(&Page::UserDetail { target: 42 }, &ctx);

        assert_eq!(surface.button_with_text("Kick").unwrap().command, "");
        assert_eq!(
            surface.button_with_text("Clear Inventory").unwrap().command,
            "modpanel.clearinv 42"
        );
    }

    #[test]
    fn test_dead_user_cannot_be_hurt_or_killed() {
        let mut user = alice();
        user.alive = false;

        assert!(!precondition_holds(ModerationAction::Kill, &user));
        assert!(!precondition_holds(ModerationAction::Hurt, &user));
        assert!(!precondition_holds(ModerationAction::Heal, &user));
        assert!(!precondition_holds(ModerationAction::ResetMetabolism, &user));
        assert!(precondition_holds(ModerationAction::ResetBlueprints, &user));
        assert!(precondition_holds(ModerationAction::Kick, &user));
    }

    #[test]
    fn test_banned_view_offers_unban_only() {
        let viewer = viewer();
        let settings = Settings::default();
        let registry = StaticRegistry {
            banned: vec![UserRecord::banned(7, "Mallory")],
            ..Default::default()
        };
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let surface = build_page(&Page::UserDetailBanned { target: 7 }, &ctx);

        assert_eq!(action_commands(&surface), vec!["modpanel.unban 7".to_string()]);
        assert!(surface.labels().any(|l| l.text == "Banned: Yes"));
        assert!(surface.labels().any(|l| l.text == "Position: -"));
    }

    #[test]
    fn test_unknown_target_shows_not_found() {
        let viewer = viewer();
        let settings = Settings::default();
        let registry = StaticRegistry::default();
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let surface = build_page(&Page::UserDetail { target: 999 }, &ctx);

        assert!(surface.labels().any(|l| l.text == "User 999 was not found"));
        assert!(action_commands(&surface).is_empty());
    }

    #[test]
    fn test_info_lines_format_values() {
        let viewer = viewer();
        let settings = Settings::default();
        let registry = StaticRegistry::default();
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let lines = info_lines(&alice(), &ctx);
        assert_eq!(lines.len(), 18);
        assert!(lines.contains(&"Position: 10.0 2.5 -3.5".to_string()));
        assert!(lines.contains(&"Rotation: 90.0".to_string()));
        assert!(lines.contains(&"Last admin cheat: 2024/03/09 14:05:00 UTC".to_string()));

        let lines = info_lines(&UserRecord::online(1, "Bob"), &ctx);
        assert!(lines.contains(&"Last admin cheat: Never".to_string()));
        assert!(lines.contains(&"Health: -".to_string()));
    }

    #[test]
    fn test_action_cells_stay_inside_panel() {
        for count in [1, 14, 30, 64, 301] {
            for index in 0..count {
                let cell = action_cell(index, count);
                assert!(cell.bottom >= ACTION_BOTTOM - 1e-4, "{index} of {count}");
                assert!(cell.top > cell.bottom, "{index} of {count}");
                assert!(cell.top <= ACTION_TOP);
            }
        }
    }

    #[test]
    fn test_default_action_grid_keeps_standard_height() {
        let cell = action_cell(13, 14);
        assert!((cell.top - cell.bottom - ACTION_BUTTON_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_many_amounts_fit_in_action_panel() {
        let viewer = viewer();
        let mut settings = Settings::default();
        settings.ui.hurt_amounts = (1..=40).map(|n| n as f32).collect();
        settings.ui.heal_amounts = (1..=40).map(|n| n as f32).collect();
        let registry = registry_with(alice());
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let surface = build_page(&Page::UserDetail { target: 42 }, &ctx);

        let buttons = action_buttons(&alice(), &ctx, false);
        assert_eq!(buttons.len(), 86);
        assert_eq!(action_commands(&surface).len(), 86);
        let last = action_cell(85, 86);
        assert!(last.bottom >= ACTION_BOTTOM - 1e-4);
    }

    #[test]
    fn test_custom_amounts() {
        let viewer = viewer();
        let mut settings = Settings::default();
        settings.ui.hurt_amounts = vec![10.0];
        settings.ui.heal_amounts = vec![];
        let registry = StaticRegistry::default();
        let translator = CatalogTranslator::new();
        let ctx = context(&viewer, &settings, &registry, &translator);

        let buttons = action_buttons(&alice(), &ctx, false);
        assert_eq!(buttons.len(), 7);
        assert_eq!(buttons[6].text, "Hurt 10");
        assert_eq!(buttons[6].command, "modpanel.hurt 42 10");
    }
}
