//! Relative rectangles and colors used by every element
//!
//! All coordinates are fractions of the parent's bounds: `0.0` is the
//! left/bottom edge, `1.0` the right/top edge.

use std::fmt;

/// A relative bounding box inside a parent element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Rect {
    /// All four edges at zero. Used as the default offset.
    pub const ZERO: Rect = Rect {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    /// Covers the whole parent.
    pub const FULL: Rect = Rect {
        top: 1.0,
        bottom: 0.0,
        left: 0.0,
        right: 1.0,
    };

    /// Build a rect from its min corner (`left`, `bottom`) and max corner (`right`, `top`).
    pub const fn from_corners(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Min corner as `(left, bottom)`
    pub fn min_corner(&self) -> (f32, f32) {
        (self.left, self.bottom)
    }

    /// Max corner as `(right, top)`
    pub fn max_corner(&self) -> (f32, f32) {
        (self.right, self.top)
    }

    /// Wire form of the min corner: `"left bottom"`
    pub fn position_min(&self) -> String {
        format!("{} {}", self.left, self.bottom)
    }

    /// Wire form of the max corner: `"right top"`
    pub fn position_max(&self) -> String {
        format!("{} {}", self.right, self.top)
    }
}

/// RGB color with an opacity channel.
///
/// Channels are `0..=255`; alpha is clamped to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    alpha: f32,
}

impl Color {
    /// Const constructor for palette entries. `alpha` must already be in range.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() {
            0.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
        Self::rgba(red, green, blue, alpha)
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Normalized `"r g b a"` form, color channels divided by 255.
    pub fn to_wire_string(&self) -> String {
        format!(
            "{} {} {} {}",
            f32::from(self.red) / 255.0,
            f32::from(self.green) / 255.0,
            f32::from(self.blue) / 255.0,
            self.alpha
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgba(255, 255, 255, 1.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire_string())
    }
}
