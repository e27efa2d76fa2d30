//! Element tree: the flat, ordered list of visual nodes that makes up a surface
//!
//! A [`Surface`] is built once by appending elements, rendered once, then
//! discarded. Elements reference their parent by name only; the surface owns
//! every element regardless of nesting depth.

use std::collections::HashSet;

use crate::geometry::{Color, Rect};

/// Default font size for labels, buttons and input fields
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Default character limit for input fields
pub const DEFAULT_CHAR_LIMIT: u32 = 100;

/// Text anchoring inside an element's bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::UpperLeft => "UpperLeft",
            TextAlign::UpperCenter => "UpperCenter",
            TextAlign::UpperRight => "UpperRight",
            TextAlign::MiddleLeft => "MiddleLeft",
            TextAlign::MiddleCenter => "MiddleCenter",
            TextAlign::MiddleRight => "MiddleRight",
            TextAlign::LowerLeft => "LowerLeft",
            TextAlign::LowerCenter => "LowerCenter",
            TextAlign::LowerRight => "LowerRight",
        }
    }
}

/// A rectangle with an optional fill color or background image.
///
/// With neither set the panel is transparent and only groups its children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Panel {
    pub color: Option<Color>,
    pub image: Option<String>,
    /// Unlocks the mouse cursor while the panel is shown
    pub cursor: bool,
    /// Captures keyboard input while the panel is shown
    pub keyboard: bool,
}

impl Panel {
    pub fn transparent() -> Self {
        Self::default()
    }

    pub fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_cursor(mut self) -> Self {
        self.cursor = true;
        self
    }

    pub fn with_keyboard(mut self) -> Self {
        self.keyboard = true;
        self
    }
}

/// Static text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_size: u32,
    pub align: TextAlign,
    pub color: Color,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            align: TextAlign::UpperLeft,
            color: Color::default(),
        }
    }
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A clickable button.
///
/// An empty `command` renders the button but makes clicks do nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub text: String,
    pub command: String,
    /// Name of a surface element the client closes when the button is clicked
    pub close: Option<String>,
    pub background: Color,
    pub text_color: Color,
    pub font_size: u32,
    pub align: TextAlign,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            text: String::new(),
            command: String::new(),
            close: None,
            background: Color::default(),
            text_color: Color::default(),
            font_size: DEFAULT_FONT_SIZE,
            align: TextAlign::MiddleCenter,
        }
    }
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn close(mut self, target: impl Into<String>) -> Self {
        self.close = Some(target.into());
        self
    }

    pub fn colors(mut self, background: Color, text_color: Color) -> Self {
        self.background = background;
        self.text_color = text_color;
        self
    }

    pub fn font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Whether clicking the button sends anything
    pub fn is_active(&self) -> bool {
        !self.command.is_empty()
    }
}

/// Single-line text entry. The client sends `command` followed by the
/// current text whenever the value changes.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub text: String,
    pub char_limit: u32,
    pub command: String,
    pub password: bool,
    pub font_size: u32,
    pub align: TextAlign,
    pub color: Color,
}

impl Default for InputField {
    fn default() -> Self {
        Self {
            text: String::new(),
            char_limit: DEFAULT_CHAR_LIMIT,
            command: String::new(),
            password: false,
            font_size: DEFAULT_FONT_SIZE,
            align: TextAlign::MiddleLeft,
            color: Color::default(),
        }
    }
}

impl InputField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn char_limit(mut self, char_limit: u32) -> Self {
        self.char_limit = char_limit;
        self
    }

    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    pub fn font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Variant-specific payload of an element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Panel(Panel),
    Label(Label),
    Button(Button),
    InputField(InputField),
}

/// One positioned node of a surface
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    /// Name of the parent element (or of a host layer for the main panel)
    pub parent: String,
    pub anchor: Rect,
    pub offset: Rect,
    pub kind: ElementKind,
}

impl Element {
    pub fn as_button(&self) -> Option<&Button> {
        match &self.kind {
            ElementKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            ElementKind::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_input_field(&self) -> Option<&InputField> {
        match &self.kind {
            ElementKind::InputField(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match &self.kind {
            ElementKind::Panel(panel) => Some(panel),
            _ => None,
        }
    }
}

/// A complete, renderable element tree for one viewer
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    main_panel: String,
    elements: Vec<Element>,
    names: HashSet<String>,
    next_id: usize,
}

impl Surface {
    /// Create an empty surface whose main panel will be called `main_panel`.
    pub fn new(main_panel: impl Into<String>) -> Self {
        Self {
            main_panel: main_panel.into(),
            elements: Vec::new(),
            names: HashSet::new(),
            next_id: 0,
        }
    }

    /// Name of the designated main panel; destroying it removes the whole surface.
    pub fn main_panel(&self) -> &str {
        &self.main_panel
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Direct children of `parent`, in insertion order
    pub fn children<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |e| e.parent == parent)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.elements.iter().filter_map(Element::as_button)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.elements.iter().filter_map(Element::as_label)
    }

    /// Find the first button whose text matches exactly
    pub fn button_with_text(&self, text: &str) -> Option<&Button> {
        self.buttons().find(|b| b.text == text)
    }

    pub fn add_panel(
        &mut self,
        parent: &str,
        anchor: Rect,
        offset: Option<Rect>,
        panel: Panel,
        name: Option<&str>,
    ) -> String {
        self.push(parent, anchor, offset, ElementKind::Panel(panel), name)
    }

    pub fn add_label(
        &mut self,
        parent: &str,
        anchor: Rect,
        offset: Option<Rect>,
        label: Label,
        name: Option<&str>,
    ) -> String {
        self.push(parent, anchor, offset, ElementKind::Label(label), name)
    }

    pub fn add_button(
        &mut self,
        parent: &str,
        anchor: Rect,
        offset: Option<Rect>,
        button: Button,
        name: Option<&str>,
    ) -> String {
        self.push(parent, anchor, offset, ElementKind::Button(button), name)
    }

    pub fn add_input_field(
        &mut self,
        parent: &str,
        anchor: Rect,
        offset: Option<Rect>,
        field: InputField,
        name: Option<&str>,
    ) -> String {
        self.push(parent, anchor, offset, ElementKind::InputField(field), name)
    }

    fn push(
        &mut self,
        parent: &str,
        anchor: Rect,
        offset: Option<Rect>,
        kind: ElementKind,
        name: Option<&str>,
    ) -> String {
        let name = self.claim_name(name);
        self.elements.push(Element {
            name: name.clone(),
            parent: parent.to_string(),
            anchor,
            offset: offset.unwrap_or(Rect::ZERO),
            kind,
        });
        name
    }

    fn claim_name(&mut self, requested: Option<&str>) -> String {
        if let Some(requested) = requested {
            if self.names.insert(requested.to_string()) {
                return requested.to_string();
            }
            tracing::warn!(
                "Duplicate element name '{}' in surface '{}', generating a new one",
                requested,
                self.main_panel
            );
        }

        loop {
            let candidate = format!("{}.{}", self.main_panel, self.next_id);
            self.next_id += 1;
            if self.names.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface_with_root() -> Surface {
        let mut surface = Surface::new("Main");
        surface.add_panel("Overlay", Rect::FULL, None, Panel::transparent(), Some("Main"));
        surface
    }

    #[test]
    fn test_caller_supplied_name_is_kept() {
        let surface = surface_with_root();
        assert_eq!(surface.len(), 1);
        assert_eq!(surface.elements()[0].name, "Main");
        assert_eq!(surface.elements()[0].parent, "Overlay");
    }

    #[test]
    fn test_generated_names_are_unique() {
        let mut surface = surface_with_root();
        let a = surface.add_label("Main", Rect::FULL, None, Label::new("a"), None);
        let b = surface.add_label("Main", Rect::FULL, None, Label::new("b"), None);
        assert_ne!(a, b);
        assert!(a.starts_with("Main."));
    }

    #[test]
    fn test_duplicate_name_gets_replaced() {
        let mut surface = surface_with_root();
        let name = surface.add_label("Main", Rect::FULL, None, Label::new("x"), Some("Main"));
        assert_ne!(name, "Main");
        assert_eq!(surface.len(), 2);
    }

    #[test]
    fn test_offset_defaults_to_zero() {
        let mut surface = surface_with_root();
        let offset = Rect::from_corners(0.01, 0.01, -0.01, -0.01);
        let with = surface.add_panel("Main", Rect::FULL, Some(offset), Panel::transparent(), None);
        let without = surface.add_panel("Main", Rect::FULL, None, Panel::transparent(), None);

        assert_eq!(surface.get(&with).unwrap().offset, offset);
        assert_eq!(surface.get(&without).unwrap().offset, Rect::ZERO);
    }

    #[test]
    fn test_defaults_per_variant() {
        let label = Label::default();
        assert_eq!(label.text, "");
        assert_eq!(label.font_size, 14);
        assert_eq!(label.align, TextAlign::UpperLeft);

        let button = Button::default();
        assert_eq!(button.command, "");
        assert!(!button.is_active());
        assert_eq!(button.align, TextAlign::MiddleCenter);
        assert_eq!(button.font_size, 14);

        let field = InputField::default();
        assert_eq!(field.char_limit, 100);
        assert_eq!(field.align, TextAlign::MiddleLeft);
        assert!(!field.password);

        let panel = Panel::transparent();
        assert!(panel.color.is_none());
        assert!(panel.image.is_none());
    }

    #[test]
    fn test_children_preserve_insertion_order() {
        let mut surface = surface_with_root();
        surface.add_label("Main", Rect::FULL, None, Label::new("first"), None);
        let inner = surface.add_panel("Main", Rect::FULL, None, Panel::transparent(), None);
        surface.add_label(&inner, Rect::FULL, None, Label::new("nested"), None);
        surface.add_label("Main", Rect::FULL, None, Label::new("second"), None);

        let texts: Vec<_> = surface
            .children("Main")
            .filter_map(Element::as_label)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_button_with_text() {
        let mut surface = surface_with_root();
        surface.add_button(
            "Main",
            Rect::FULL,
            None,
            Button::new("Kick").command("modpanel.kick 1"),
            None,
        );
        let button = surface.button_with_text("Kick").unwrap();
        assert!(button.is_active());
        assert!(surface.button_with_text("Ban").is_none());
    }
}
