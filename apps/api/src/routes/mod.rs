pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::display::handlers as display;
use crate::history::handlers as history;
use crate::layout::handlers as layout;
use crate::preferences::handlers as preferences;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Fit engine
        .route("/api/v1/fit", post(layout::handle_fit))
        // Full-screen display
        .route("/api/v1/display", post(display::handle_display))
        .route("/api/v1/display/preview", post(display::handle_preview))
        .route(
            "/api/v1/appearance",
            get(display::handle_appearance_options),
        )
        .route(
            "/api/v1/appearance/gradient",
            get(display::handle_random_gradient),
        )
        // History
        .route(
            "/api/v1/history",
            get(history::handle_list_history).post(history::handle_create_entry),
        )
        .route("/api/v1/history/:id", delete(history::handle_delete_entry))
        // Preferences
        .route(
            "/api/v1/preferences/gradient-tooltip",
            get(preferences::handle_get_gradient_tooltip)
                .post(preferences::handle_mark_gradient_tooltip),
        )
        .with_state(state)
}
