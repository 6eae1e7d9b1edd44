pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::design::handlers;
use crate::generation::handlers::handle_generate_content;
use crate::state::AppState;
use crate::targeting::handlers::handle_get_catalog;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation contract
        .route("/api/generate-content", post(handle_generate_content))
        // Targeting catalog
        .route("/api/v1/catalog", get(handle_get_catalog))
        // Design session
        .route("/api/v1/design", get(handlers::handle_get_design))
        .route(
            "/api/v1/design/targeting",
            patch(handlers::handle_set_targeting),
        )
        .route(
            "/api/v1/design/content/generate",
            post(handlers::handle_generate),
        )
        .route(
            "/api/v1/design/snippets/toggle",
            post(handlers::handle_toggle_snippet),
        )
        .route(
            "/api/v1/design/snippets/commit",
            post(handlers::handle_add_selected_content),
        )
        .route(
            "/api/v1/design/custom-text",
            put(handlers::handle_set_custom_text),
        )
        .route(
            "/api/v1/design/custom-text/commit",
            post(handlers::handle_commit_custom_text),
        )
        .route(
            "/api/v1/design/text/:id",
            patch(handlers::handle_update_text).delete(handlers::handle_remove_text),
        )
        // Uploads are not size-checked; lift axum's 2 MB default for this route only
        .route(
            "/api/v1/design/images",
            post(handlers::handle_upload_image).layer(DefaultBodyLimit::disable()),
        )
        .route(
            "/api/v1/design/images/:id",
            patch(handlers::handle_resize_image).delete(handlers::handle_remove_image),
        )
        .route(
            "/api/v1/design/background",
            put(handlers::handle_set_background),
        )
        .route("/api/v1/design/zoom", post(handlers::handle_zoom))
        .route("/api/v1/design/preview", get(handlers::handle_preview))
        // Persistence hand-off
        .route("/api/v1/design/save", post(handlers::handle_save))
        .route("/api/v1/design/export", post(handlers::handle_export))
        .with_state(state)
}
