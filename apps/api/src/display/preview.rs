use serde::Serialize;

use crate::display::appearance::{
    background_fill, text_color, BackgroundColor, BackgroundFill, GradientColor, Paint,
};
use crate::layout::InputFont;

/// Characters of input shown on the preview button before truncation.
pub const PREVIEW_MAX_CHARS: usize = 15;
pub const PREVIEW_PLACEHOLDER: &str = "input text to show";
const ELLIPSIS: &str = "...";

/// The "show full screen" button as the input screen renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewButton {
    pub label: String,
    /// False while the input is blank; the button is drawn faded and inert.
    pub enabled: bool,
    pub font: InputFont,
    pub background: BackgroundFill,
    pub text_color: Paint,
}

/// Button label: the text itself, truncated with an ellipsis past
/// `PREVIEW_MAX_CHARS`, or a placeholder when empty.
///
/// The label carries no leading space; spacing next to the button icon is left
/// to the renderer.
pub fn preview_label(text: &str) -> String {
    if text.is_empty() {
        return PREVIEW_PLACEHOLDER.to_string();
    }
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        head + ELLIPSIS
    } else {
        head
    }
}

pub fn preview_button(
    text: &str,
    font: InputFont,
    background: BackgroundColor,
    gradient: GradientColor,
) -> PreviewButton {
    let enabled = !text.trim().is_empty();
    PreviewButton {
        label: preview_label(text),
        enabled,
        font,
        background: background_fill(background, gradient, enabled),
        text_color: text_color(background, enabled),
    }
}
