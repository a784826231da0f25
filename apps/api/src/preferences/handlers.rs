use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TooltipState {
    pub seen: bool,
}

/// GET /api/v1/preferences/gradient-tooltip
///
/// Read failures report the tooltip as not yet seen.
pub async fn handle_get_gradient_tooltip(State(state): State<AppState>) -> Json<TooltipState> {
    let seen = state
        .preferences
        .gradient_tooltip_seen()
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to read gradient tooltip flag");
            false
        });
    Json(TooltipState { seen })
}

/// POST /api/v1/preferences/gradient-tooltip
pub async fn handle_mark_gradient_tooltip(
    State(state): State<AppState>,
) -> Result<Json<TooltipState>, AppError> {
    state.preferences.mark_gradient_tooltip_seen().await?;
    Ok(Json(TooltipState { seen: true }))
}
