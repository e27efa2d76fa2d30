//! JSON encoding of a surface in the host UI format
//!
//! Each element becomes `{"name", "parent", "components": [...]}`. Component
//! objects are tagged by `type`. Buttons carry their label as a child text
//! element named `<button>.text`.

use serde::Serialize;

use crate::element::{Element, ElementKind, Surface};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct WireElement<'a> {
    name: String,
    parent: &'a str,
    components: Vec<WireComponent<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum WireComponent<'a> {
    #[serde(rename = "UnityEngine.UI.Image")]
    Image { color: String },

    #[serde(rename = "UnityEngine.UI.RawImage")]
    RawImage {
        url: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },

    #[serde(rename = "UnityEngine.UI.Text")]
    Text {
        text: &'a str,
        #[serde(rename = "fontSize")]
        font_size: u32,
        align: &'static str,
        color: String,
    },

    #[serde(rename = "UnityEngine.UI.Button")]
    Button {
        #[serde(skip_serializing_if = "is_empty")]
        command: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        close: Option<&'a str>,
        color: String,
    },

    #[serde(rename = "UnityEngine.UI.InputField")]
    InputField {
        text: &'a str,
        #[serde(rename = "characterLimit")]
        char_limit: u32,
        command: &'a str,
        password: bool,
        #[serde(rename = "fontSize")]
        font_size: u32,
        align: &'static str,
        color: String,
    },

    RectTransform {
        anchormin: String,
        anchormax: String,
        offsetmin: String,
        offsetmax: String,
    },

    NeedsCursor,

    NeedsKeyboard,
}

fn is_empty(text: &&str) -> bool {
    text.is_empty()
}

fn rect_transform(element: &Element) -> WireComponent<'static> {
    WireComponent::RectTransform {
        anchormin: element.anchor.position_min(),
        anchormax: element.anchor.position_max(),
        offsetmin: element.offset.position_min(),
        offsetmax: element.offset.position_max(),
    }
}

fn encode_element<'a>(element: &'a Element, out: &mut Vec<WireElement<'a>>) {
    let mut components = Vec::new();

    match &element.kind {
        ElementKind::Panel(panel) => {
            match (&panel.image, panel.color) {
                (Some(url), color) => components.push(WireComponent::RawImage {
                    url: url.as_str(),
                    color: color.map(|c| c.to_wire_string()),
                }),
                (None, Some(color)) => components.push(WireComponent::Image {
                    color: color.to_wire_string(),
                }),
                (None, None) => {}
            }
            components.push(rect_transform(element));
            if panel.cursor {
                components.push(WireComponent::NeedsCursor);
            }
            if panel.keyboard {
                components.push(WireComponent::NeedsKeyboard);
            }
        }
        ElementKind::Label(label) => {
            components.push(WireComponent::Text {
                text: &label.text,
                font_size: label.font_size,
                align: label.align.as_str(),
                color: label.color.to_wire_string(),
            });
            components.push(rect_transform(element));
        }
        ElementKind::InputField(field) => {
            components.push(WireComponent::InputField {
                text: &field.text,
                char_limit: field.char_limit,
                command: &field.command,
                password: field.password,
                font_size: field.font_size,
                align: field.align.as_str(),
                color: field.color.to_wire_string(),
            });
            components.push(rect_transform(element));
        }
        ElementKind::Button(button) => {
            components.push(WireComponent::Button {
                command: &button.command,
                close: button.close.as_deref(),
                color: button.background.to_wire_string(),
            });
            components.push(rect_transform(element));

            out.push(WireElement {
                name: element.name.clone(),
                parent: &element.parent,
                components,
            });
            out.push(WireElement {
                name: format!("{}.text", element.name),
                parent: &element.name,
                components: vec![
                    WireComponent::Text {
                        text: &button.text,
                        font_size: button.font_size,
                        align: button.align.as_str(),
                        color: button.text_color.to_wire_string(),
                    },
                    WireComponent::RectTransform {
                        anchormin: "0 0".to_string(),
                        anchormax: "1 1".to_string(),
                        offsetmin: "0 0".to_string(),
                        offsetmax: "0 0".to_string(),
                    },
                ],
            });
            return;
        }
    }

    out.push(WireElement {
        name: element.name.clone(),
        parent: &element.parent,
        components,
    });
}

fn encode(surface: &Surface) -> Vec<WireElement<'_>> {
    let mut out = Vec::with_capacity(surface.len());
    for element in surface.elements() {
        encode_element(element, &mut out);
    }
    out
}

/// Encode the surface's elements, in insertion order, as a JSON array.
pub fn to_json(surface: &Surface) -> Result<String> {
    Ok(serde_json::to_string(&encode(surface))?)
}

/// Same encoding as [`to_json`], as a JSON value
pub fn to_value(surface: &Surface) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(encode(surface))?)
}

impl Surface {
    /// See [`to_json`].
    pub fn to_json(&self) -> Result<String> {
        to_json(self)
    }

    /// See [`to_value`].
    pub fn to_value(&self) -> Result<serde_json::Value> {
        to_value(self)
    }
}
