//! Fixed column/row grid of buttons
//!
//! Cells are filled left to right, top to bottom, below a margin reserved
//! for the page title.

use modpanel_core::{Button, Color, Rect, Surface, UserId};

pub const GRID_COLUMNS: usize = 5;
pub const GRID_ROWS: usize = 8;

/// Items per page of a user list
pub const GRID_CAPACITY: usize = GRID_COLUMNS * GRID_ROWS;

/// Placeholder replaced by the item id in command templates
pub const ID_PLACEHOLDER: &str = "{id}";

/// Cell geometry of a grid, in fractions of the parent panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub gutter_x: f32,
    pub gutter_y: f32,
    pub margin_left: f32,
    /// Space above the first row, reserved for the title
    pub margin_top: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::user_grid()
    }
}

impl GridLayout {
    /// The 5 × 8 grid used by the user list pages
    pub const fn user_grid() -> Self {
        Self {
            columns: GRID_COLUMNS,
            rows: GRID_ROWS,
            cell_width: 0.188,
            cell_height: 0.095,
            gutter_x: 0.01,
            gutter_y: 0.01,
            margin_left: 0.01,
            margin_top: 0.1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// `(column, row)` of the item at `index`, both 0-based
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Anchor of the cell for `index`, or `None` past the grid's capacity
    pub fn cell(&self, index: usize) -> Option<Rect> {
        if index >= self.capacity() {
            return None;
        }
        let (column, row) = self.position(index);
        let left = self.margin_left + column as f32 * (self.cell_width + self.gutter_x);
        let top = 1.0 - self.margin_top - row as f32 * (self.cell_height + self.gutter_y);
        Some(Rect::from_corners(
            left,
            top - self.cell_height,
            left + self.cell_width,
            top,
        ))
    }
}

/// One grid entry
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem {
    pub id: UserId,
    pub text: String,
}

/// Button colors for grid cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub background: Color,
    pub text_color: Color,
    pub font_size: u32,
}

/// Substitute the item id into a command template
pub fn format_command(template: &str, id: UserId) -> String {
    template.replace(ID_PLACEHOLDER, &id.to_string())
}

/// Add one button per item to `parent`. Items beyond the grid's capacity are
/// dropped. Returns the names of the created buttons.
pub fn place_buttons(
    surface: &mut Surface,
    parent: &str,
    layout: &GridLayout,
    items: &[GridItem],
    command_template: &str,
    style: CellStyle,
) -> Vec<String> {
    if items.len() > layout.capacity() {
        tracing::warn!(
            "{} grid items exceed capacity {}, truncating",
            items.len(),
            layout.capacity()
        );
    }

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| layout.cell(index).map(|anchor| (anchor, item)))
        .map(|(anchor, item)| {
            let button = Button::new(item.text.clone())
                .command(format_command(command_template, item.id))
                .colors(style.background, style.text_color)
                .font_size(style.font_size);
            surface.add_button(parent, anchor, None, button, None)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn style() -> CellStyle {
        CellStyle {
            background: Color::new(0, 0, 0, 1.0),
            text_color: Color::new(255, 255, 255, 1.0),
            font_size: 12,
        }
    }

    #[test]
    fn test_positions() {
        let grid = GridLayout::user_grid();
        assert_eq!(grid.capacity(), 40);
        assert_eq!(grid.position(0), (0, 0));
        assert_eq!(grid.position(4), (4, 0));
        assert_eq!(grid.position(5), (0, 1));
        assert_eq!(grid.position(12), (2, 2));
        assert_eq!(grid.position(39), (4, 7));
    }

    #[test]
    fn test_cells_stay_inside_parent() {
        let grid = GridLayout::user_grid();
        for index in 0..grid.capacity() {
            let cell = grid.cell(index).unwrap();
            assert!(cell.left >= 0.0 && cell.right <= 1.0 + EPS, "cell {index}");
            assert!(cell.bottom >= 0.0 && cell.top <= 1.0 - grid.margin_top + EPS);
            assert!((cell.width() - grid.cell_width).abs() < EPS);
            assert!((cell.height() - grid.cell_height).abs() < EPS);
        }
        assert!(grid.cell(40).is_none());
    }

    #[test]
    fn test_first_and_last_cell() {
        let grid = GridLayout::user_grid();
        let first = grid.cell(0).unwrap();
        assert!((first.left - 0.01).abs() < EPS);
        assert!((first.top - 0.9).abs() < EPS);

        let last = grid.cell(39).unwrap();
        assert!((last.right - 0.99).abs() < EPS);
        assert!((last.bottom - 0.07).abs() < EPS);
    }

    #[test]
    fn test_cells_do_not_overlap_in_a_row() {
        let grid = GridLayout::user_grid();
        let a = grid.cell(12).unwrap();
        let b = grid.cell(13).unwrap();
        assert!(a.right < b.left);
        assert!((a.top - b.top).abs() < EPS);

        let below = grid.cell(17).unwrap();
        assert!(below.top < a.bottom);
    }

    #[test]
    fn test_format_command() {
        assert_eq!(
            format_command("modpanel.switch PlayerPage {id}", 76561198000000001),
            "modpanel.switch PlayerPage 76561198000000001"
        );
    }

    #[test]
    fn test_place_buttons() {
        let mut surface = Surface::new("Main");
        let items: Vec<_> = (0..3)
            .map(|i| GridItem {
                id: 100 + i,
                text: format!("user{i}"),
            })
            .collect();

        let names = place_buttons(
            &mut surface,
            "Main",
            &GridLayout::user_grid(),
            &items,
            "go {id}",
            style(),
        );

        assert_eq!(names.len(), 3);
        let buttons: Vec<_> = surface.buttons().collect();
        assert_eq!(buttons[0].text, "user0");
        assert_eq!(buttons[2].command, "go 102");
        assert_eq!(buttons[1].font_size, 12);
    }

    #[test]
    fn test_place_buttons_truncates_to_capacity() {
        let mut surface = Surface::new("Main");
        let items: Vec<_> = (0..45)
            .map(|i| GridItem {
                id: i,
                text: i.to_string(),
            })
            .collect();

        let names = place_buttons(
            &mut surface,
            "Main",
            &GridLayout::user_grid(),
            &items,
            "go {id}",
            style(),
        );
        assert_eq!(names.len(), 40);
    }
}
