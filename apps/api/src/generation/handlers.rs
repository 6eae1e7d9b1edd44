//! Axum handler for the content-generation contract.

use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};

use crate::content::resolver::GenerationError;
use crate::generation::generator::generate_content;
use crate::models::content::{ErrorBody, GenerateContentRequest};
use crate::state::AppState;

/// POST /api/generate-content
///
/// Success and degraded responses are 200. Errors use the contract's
/// `{ "error": "..." }` body rather than the API-wide error envelope.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    Json(request): Json<GenerateContentRequest>,
) -> Response {
    match generate_content(state.llm.as_ref(), &request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            let status = match &e {
                GenerationError::Auth(_) => StatusCode::UNAUTHORIZED,
                GenerationError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
