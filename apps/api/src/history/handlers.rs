use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::models::{CreateEntryRequest, TextEntryRow};
use crate::history::validation::sanitize_history_text;
use crate::state::AppState;

/// GET /api/v1/history
///
/// A failing store yields an empty list rather than an error page.
pub async fn handle_list_history(State(state): State<AppState>) -> Json<Vec<TextEntryRow>> {
    match state.history.list().await {
        Ok(entries) => Json(entries),
        Err(e) => {
            tracing::error!(error = %e, "failed to load text history");
            Json(Vec::new())
        }
    }
}

/// POST /api/v1/history
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<TextEntryRow>), AppError> {
    let text = sanitize_history_text(&req.text)?;
    let entry = state.history.insert(text).await?;
    tracing::debug!(id = %entry.id, "text saved to history");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/v1/history/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.history.delete(id).await? {
        return Err(AppError::NotFound(format!("History entry {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
