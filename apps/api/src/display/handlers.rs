use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::display::appearance::{
    background_fill, random_gradient, text_color, BackgroundColor, BackgroundFill, GradientColor,
    Orientation, Paint,
};
use crate::display::preview::{preview_button, PreviewButton};
use crate::errors::AppError;
use crate::history::validation::validate_length;
use crate::layout::handlers::run_fit;
use crate::layout::{FitRequest, FitResult, InputFont, TextStyle};
use crate::state::AppState;

/// Margin between the screen edge and the text block, per side.
pub const DEFAULT_PADDING_PX: f32 = 24.0;

fn default_padding() -> f32 {
    DEFAULT_PADDING_PX
}

#[derive(Debug, Deserialize)]
pub struct DisplayRequest {
    pub text: String,
    #[serde(default)]
    pub font: InputFont,
    #[serde(default)]
    pub background: BackgroundColor,
    /// Palette entry for gradient backgrounds; a random one is picked when absent.
    pub gradient: Option<GradientColor>,
    #[serde(default)]
    pub orientation: Orientation,
    pub viewport_width: f32,
    pub viewport_height: f32,
    #[serde(default = "default_padding")]
    pub padding_horizontal: f32,
    #[serde(default = "default_padding")]
    pub padding_vertical: f32,
}

impl DisplayRequest {
    /// The box the text must fit: viewport minus padding on both sides.
    pub fn text_box(&self) -> (f32, f32) {
        (
            (self.viewport_width - 2.0 * self.padding_horizontal).max(0.0),
            (self.viewport_height - 2.0 * self.padding_vertical).max(0.0),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct DisplayResponse {
    pub layout: FitResult,
    pub font: InputFont,
    pub orientation: Orientation,
    pub box_width: f32,
    pub box_height: f32,
    pub text_color: Paint,
    pub background: BackgroundFill,
    /// Set only for gradient backgrounds.
    pub gradient: Option<GradientColor>,
}

/// POST /api/v1/display
pub async fn handle_display(
    State(state): State<AppState>,
    Json(req): Json<DisplayRequest>,
) -> Result<Json<DisplayResponse>, AppError> {
    validate_length(&req.text)?;

    let (box_width, box_height) = req.text_box();
    let defaults = &state.config.fit;
    let style = TextStyle::new(req.font);
    let request = FitRequest::new(req.text.clone(), box_width, box_height, style)
        .with_font_range(defaults.min_font_size, defaults.max_font_size)
        .with_max_line_candidates(req.orientation.max_line_candidates(defaults));

    let layout = run_fit(state.measurer.clone(), request).await?;

    let gradient = req.gradient.unwrap_or_else(random_gradient);
    tracing::debug!(
        font = ?req.font,
        orientation = ?req.orientation,
        lines = layout.line_count,
        font_size = layout.font_size,
        "display composed"
    );

    Ok(Json(DisplayResponse {
        layout,
        font: req.font,
        orientation: req.orientation,
        box_width,
        box_height,
        text_color: text_color(req.background, true),
        background: background_fill(req.background, gradient, true),
        gradient: (req.background == BackgroundColor::Gradient).then_some(gradient),
    }))
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub text: String,
    #[serde(default)]
    pub font: InputFont,
    #[serde(default)]
    pub background: BackgroundColor,
    pub gradient: Option<GradientColor>,
}

/// POST /api/v1/display/preview
pub async fn handle_preview(
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewButton>, AppError> {
    validate_length(&req.text)?;
    let gradient = req.gradient.unwrap_or_else(random_gradient);
    Ok(Json(preview_button(&req.text, req.font, req.background, gradient)))
}

// ────────────────────────────────────────────────────────────────────────────
// Appearance pickers
// ────────────────────────────────────────────────────────────────────────────

/// One entry of a picker: the wire value plus its human label.
#[derive(Debug, Serialize)]
pub struct Choice<T> {
    pub value: T,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AppearanceOptions {
    pub fonts: Vec<Choice<InputFont>>,
    pub backgrounds: Vec<Choice<BackgroundColor>>,
    pub gradients: Vec<Choice<GradientColor>>,
    pub orientations: Vec<Choice<Orientation>>,
}

impl AppearanceOptions {
    pub fn all() -> Self {
        Self {
            fonts: InputFont::ALL
                .iter()
                .map(|&value| Choice {
                    value,
                    label: value.label(),
                })
                .collect(),
            backgrounds: [
                BackgroundColor::Black,
                BackgroundColor::White,
                BackgroundColor::Gradient,
            ]
            .into_iter()
            .map(|value| Choice {
                value,
                label: value.label(),
            })
            .collect(),
            gradients: GradientColor::ALL
                .iter()
                .map(|&value| Choice {
                    value,
                    label: value.display_name(),
                })
                .collect(),
            orientations: [Orientation::Landscape, Orientation::Portrait]
                .into_iter()
                .map(|value| Choice {
                    value,
                    label: value.label(),
                })
                .collect(),
        }
    }
}

/// GET /api/v1/appearance
pub async fn handle_appearance_options() -> Json<AppearanceOptions> {
    Json(AppearanceOptions::all())
}

#[derive(Debug, Serialize)]
pub struct GradientResponse {
    pub gradient: GradientColor,
    pub fill: BackgroundFill,
}

/// GET /api/v1/appearance/gradient
///
/// A fresh random palette entry, as picked when the user taps the gradient swatch.
pub async fn handle_random_gradient() -> Json<GradientResponse> {
    let gradient = random_gradient();
    Json(GradientResponse {
        gradient,
        fill: background_fill(BackgroundColor::Gradient, gradient, true),
    })
}
