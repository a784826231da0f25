use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::config::FitDefaults;
use crate::display::appearance::Orientation;
use crate::errors::AppError;
use crate::history::validation::validate_length;
use crate::layout::{fit, FitRequest, FitResult, InputFont, TextAlign, TextMeasurer, TextStyle};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FitApiRequest {
    pub text: String,
    pub box_width: f32,
    pub box_height: f32,
    #[serde(default)]
    pub font: InputFont,
    #[serde(default)]
    pub align: TextAlign,
    pub min_font_size: Option<f32>,
    pub max_font_size: Option<f32>,
    /// Explicit line budget; wins over `orientation`. Clamped to the configured maximum.
    pub max_line_candidates: Option<i32>,
    #[serde(default)]
    pub orientation: Orientation,
}

impl FitApiRequest {
    pub fn into_fit_request(self, defaults: &FitDefaults) -> FitRequest {
        let max_lines = self
            .max_line_candidates
            .map(|n| n.min(defaults.max_line_budget()))
            .unwrap_or_else(|| self.orientation.max_line_candidates(defaults));
        FitRequest::new(
            self.text,
            self.box_width,
            self.box_height,
            TextStyle {
                font: self.font,
                align: self.align,
            },
        )
        .with_font_range(
            self.min_font_size.unwrap_or(defaults.min_font_size),
            self.max_font_size.unwrap_or(defaults.max_font_size),
        )
        .with_max_line_candidates(max_lines)
    }
}

/// POST /api/v1/fit
pub async fn handle_fit(
    State(state): State<AppState>,
    Json(req): Json<FitApiRequest>,
) -> Result<Json<FitResult>, AppError> {
    validate_length(&req.text)?;
    let request = req.into_fit_request(&state.config.fit);
    let result = run_fit(state.measurer.clone(), request).await?;
    Ok(Json(result))
}

/// Runs the fit engine off the async executor.
///
/// Measurement is CPU-bound; `spawn_blocking` keeps the tokio scheduler free.
/// The request is moved in whole to satisfy the `'static` closure bound.
pub async fn run_fit(
    measurer: Arc<dyn TextMeasurer>,
    request: FitRequest,
) -> Result<FitResult, AppError> {
    let result = tokio::task::spawn_blocking(move || fit(&request, measurer.as_ref()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in fit: {e}")))??;
    Ok(result)
}
