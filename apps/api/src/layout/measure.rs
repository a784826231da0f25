//! Text measurement seam for the fit engine.
//!
//! The engine never rasterizes or shapes text itself. It asks a [`TextMeasurer`]
//! for the pixel extent of an already line-broken string and reasons only about
//! the returned box. Backends (static metric tables, a real shaper) implement the
//! trait; the engine and the HTTP layer hold it as `Arc<dyn TextMeasurer>`.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::InputFont;

/// Horizontal alignment of lines inside the rendered block.
///
/// Alignment does not change the block's bounding box, so measurers are free
/// to ignore it; it is carried so the renderer gets the style it was fitted with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
}

/// Opaque style handle passed through to the measurer unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: InputFont,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(font: InputFont) -> Self {
        Self {
            font,
            align: TextAlign::Center,
        }
    }
}

/// Rendered size of a text block, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

impl TextExtent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Backend-agnostic text measurement.
///
/// `measure` must honour explicit `'\n'` breaks as hard line breaks and must not
/// re-wrap lines on its own. Measurement is assumed monotonic in `font_size`:
/// a larger size never yields a smaller extent.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font_size: f32, style: &TextStyle) -> TextExtent;
}
