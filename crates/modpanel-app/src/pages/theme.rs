//! Colors and shared element styles for the panel pages

use modpanel_core::{Button, Color, Label, TextAlign};

use crate::grid::CellStyle;

// --- Background layers ---
pub const PANEL_BG: Color = Color::rgba(30, 32, 38, 0.95);
pub const HEADER_BG: Color = Color::rgba(18, 20, 24, 1.0);
pub const CONTENT_BG: Color = Color::rgba(40, 43, 51, 1.0);
pub const INPUT_BG: Color = Color::rgba(15, 15, 15, 1.0);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::rgba(235, 235, 235, 1.0);
pub const TEXT_MUTED: Color = Color::rgba(140, 140, 140, 1.0);

// --- Buttons ---
pub const BUTTON_BG: Color = Color::rgba(60, 110, 170, 1.0);
pub const BUTTON_TAB_ACTIVE: Color = Color::rgba(90, 150, 220, 1.0);
pub const BUTTON_DANGER: Color = Color::rgba(180, 60, 55, 1.0);
pub const BUTTON_HEAL: Color = Color::rgba(60, 150, 80, 1.0);
pub const BUTTON_INACTIVE: Color = Color::rgba(70, 70, 70, 0.6);
pub const BUTTON_CLOSE: Color = Color::rgba(160, 45, 45, 1.0);

pub const TITLE_FONT_SIZE: u32 = 18;
pub const INFO_FONT_SIZE: u32 = 13;
pub const GRID_FONT_SIZE: u32 = 12;

pub fn title(text: impl Into<String>) -> Label {
    Label::new(text)
        .font_size(TITLE_FONT_SIZE)
        .align(TextAlign::MiddleLeft)
        .color(TEXT_PRIMARY)
}

pub fn info(text: impl Into<String>) -> Label {
    Label::new(text)
        .font_size(INFO_FONT_SIZE)
        .align(TextAlign::MiddleLeft)
        .color(TEXT_PRIMARY)
}

/// A button that is wired only when `enabled` holds.
///
/// Disabled buttons keep their text but get the inactive color and an empty
/// command, so clicking them does nothing.
pub fn gated_button(
    text: impl Into<String>,
    command: impl Into<String>,
    enabled: bool,
    color: Color,
) -> Button {
    let button = Button::new(text);
    if enabled {
        button.command(command).colors(color, TEXT_PRIMARY)
    } else {
        button.colors(BUTTON_INACTIVE, TEXT_MUTED)
    }
}

pub fn user_cell() -> CellStyle {
    CellStyle {
        background: BUTTON_BG,
        text_color: TEXT_PRIMARY,
        font_size: GRID_FONT_SIZE,
    }
}
