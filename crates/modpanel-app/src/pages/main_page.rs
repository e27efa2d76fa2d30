//! Main page: ban a user by typing their id

use modpanel_core::{InputField, Panel, Rect, Surface};

use super::{theme, PageContext};
use crate::lang;
use crate::message::{CMD_BAN_ID_SUBMIT, CMD_BAN_ID_TEXT};

const BAN_ID_LABEL_RECT: Rect = Rect::from_corners(0.01, 0.88, 0.3, 0.96);
const BAN_ID_INPUT_RECT: Rect = Rect::from_corners(0.01, 0.8, 0.3, 0.87);
const BAN_ID_BUTTON_RECT: Rect = Rect::from_corners(0.31, 0.8, 0.4, 0.87);

/// User ids are at most 20 digits
const BAN_ID_CHAR_LIMIT: u32 = 24;

pub fn build(surface: &mut Surface, parent: &str, ctx: &PageContext<'_>) {
    surface.add_label(
        parent,
        BAN_ID_LABEL_RECT,
        None,
        theme::title(ctx.text(lang::BAN_ID_LABEL)),
        None,
    );

    let input_bg = surface.add_panel(
        parent,
        BAN_ID_INPUT_RECT,
        None,
        Panel::colored(theme::INPUT_BG),
        None,
    );
    surface.add_input_field(
        &input_bg,
        Rect::FULL,
        Some(Rect::from_corners(0.02, 0.0, -0.02, 0.0)),
        InputField::new(ctx.pending_ban_input.unwrap_or_default())
            .command(CMD_BAN_ID_TEXT)
            .char_limit(BAN_ID_CHAR_LIMIT)
            .color(theme::TEXT_PRIMARY),
        None,
    );

    surface.add_button(
        parent,
        BAN_ID_BUTTON_RECT,
        None,
        theme::gated_button(
            ctx.text(lang::BAN_BUTTON),
            CMD_BAN_ID_SUBMIT,
            ctx.flags().ban,
            theme::BUTTON_DANGER,
        ),
        None,
    );
}
