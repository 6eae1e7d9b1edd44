use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::content::resolver::{ContentOrigin, Notice};
use crate::design::canvas::{render, summarize, PreviewSummary, RenderedCanvas, Zoom};
use crate::design::export::{SinkAction, SinkReceipt};
use crate::design::session::{Action, DesignSession, Outcome};
use crate::design::snippets::SnippetCategory;
use crate::design::upload::image_from_upload;
use crate::errors::AppError;
use crate::models::design::{ImageElement, TextElementUpdate};
use crate::state::AppState;
use crate::targeting::{Industry, Profile, Role};

async fn apply(state: &AppState, action: Action) -> (Outcome, DesignSession) {
    let mut session = state.session.write().await;
    let outcome = session.update(action);
    (outcome, session.clone())
}

/// GET /api/v1/design
pub async fn handle_get_design(State(state): State<AppState>) -> Json<DesignSession> {
    Json(state.session.read().await.clone())
}

#[derive(Deserialize)]
pub struct TargetingPatch {
    pub profile: Option<Profile>,
    pub industry: Option<Industry>,
    pub role: Option<Role>,
}

/// PATCH /api/v1/design/targeting
///
/// Profile is applied before industry, so both can change in one request.
/// An industry outside the profile's catalog is ignored.
pub async fn handle_set_targeting(
    State(state): State<AppState>,
    Json(patch): Json<TargetingPatch>,
) -> Json<DesignSession> {
    let mut session = state.session.write().await;
    if let Some(profile) = patch.profile {
        session.update(Action::SetProfile(profile));
    }
    if let Some(industry) = patch.industry {
        session.update(Action::SetIndustry(industry));
    }
    if let Some(role) = patch.role {
        session.update(Action::SetRole(role));
    }
    Json(session.clone())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub origin: ContentOrigin,
    /// False only for freshly generated copy.
    pub degraded: bool,
    pub notice: Option<Notice>,
    /// True when the targeting changed while the request was in flight.
    pub discarded: bool,
    pub session: DesignSession,
}

/// POST /api/v1/design/content/generate
///
/// The session lock is released while the content source runs. Resolution
/// happens on a spawned task so a dropped request cannot leave the session
/// stuck in the generating state.
pub async fn handle_generate(
    State(state): State<AppState>,
) -> Result<Json<GenerationReport>, AppError> {
    let requested_for = match state.session.write().await.update(Action::BeginGeneration) {
        Outcome::GenerationStarted(selection) => selection,
        _ => {
            return Err(AppError::Conflict(
                "Content generation is already in progress".to_string(),
            ))
        }
    };

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let resolution = task_state.resolver.resolve(&requested_for).await;
        let origin = resolution.origin;
        let degraded = resolution.is_degraded();
        let notice = resolution.notice.clone();
        let (outcome, session) = apply(
            &task_state,
            Action::ContentResolved {
                requested_for,
                resolution,
            },
        )
        .await;
        GenerationReport {
            origin,
            degraded,
            notice,
            discarded: outcome == Outcome::StaleContentDiscarded,
            session,
        }
    });

    match task.await {
        Ok(report) => {
            if report.discarded {
                info!("Discarded generated content: targeting changed while in flight");
            }
            Ok(Json(report))
        }
        Err(e) => {
            state.session.write().await.generating = false;
            Err(AppError::Internal(anyhow::anyhow!(
                "content resolution task failed: {e}"
            )))
        }
    }
}

#[derive(Deserialize)]
pub struct SnippetToggle {
    pub category: SnippetCategory,
    pub value: String,
}

/// POST /api/v1/design/snippets/toggle
pub async fn handle_toggle_snippet(
    State(state): State<AppState>,
    Json(req): Json<SnippetToggle>,
) -> Json<DesignSession> {
    let (_, session) = apply(
        &state,
        Action::ToggleSnippet {
            category: req.category,
            value: req.value,
        },
    )
    .await;
    Json(session)
}

#[derive(Deserialize)]
pub struct CustomText {
    pub text: String,
}

/// PUT /api/v1/design/custom-text
pub async fn handle_set_custom_text(
    State(state): State<AppState>,
    Json(req): Json<CustomText>,
) -> Json<DesignSession> {
    let (_, session) = apply(&state, Action::SetCustomText(req.text)).await;
    Json(session)
}

/// POST /api/v1/design/custom-text/commit
pub async fn handle_commit_custom_text(State(state): State<AppState>) -> Json<DesignSession> {
    let (_, session) = apply(&state, Action::CommitCustomText).await;
    Json(session)
}

/// POST /api/v1/design/snippets/commit
pub async fn handle_add_selected_content(
    State(state): State<AppState>,
) -> Json<DesignSession> {
    let (outcome, session) = apply(&state, Action::AddSelectedContent).await;
    if let Outcome::TextAdded(element) = outcome {
        debug!("Added text element {} ({} chars)", element.id, element.content.len());
    }
    Json(session)
}

/// PATCH /api/v1/design/text/:id
pub async fn handle_update_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<TextElementUpdate>,
) -> Json<DesignSession> {
    let (_, session) = apply(&state, Action::UpdateText { id, update }).await;
    Json(session)
}

/// DELETE /api/v1/design/text/:id
pub async fn handle_remove_text(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DesignSession> {
    let (_, session) = apply(&state, Action::RemoveText(id)).await;
    Json(session)
}

/// POST /api/v1/design/images
///
/// Expects a multipart form with a `file` part. Other parts are ignored.
pub async fn handle_upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImageElement>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("image").to_string();
        let mime = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        debug!("Received upload '{file_name}' ({} bytes)", bytes.len());

        let image = image_from_upload(&file_name, mime.as_deref(), &bytes);
        apply(&state, Action::AddImage(image.clone())).await;
        return Ok(Json(image));
    }

    Err(AppError::Validation(
        "No file provided in 'file' field".to_string(),
    ))
}

/// Width/height accept numbers or numeric strings; anything else is ignored.
#[derive(Deserialize)]
pub struct ImageResize {
    #[serde(default)]
    pub width: Option<Value>,
    #[serde(default)]
    pub height: Option<Value>,
}

fn lenient_dimension(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite() && *v >= 1.0).map(|v| v as u32),
        Value::String(s) => leading_integer(s),
        _ => None,
    }
}

/// Integer prefix of `s` after leading whitespace and an optional `+`, so
/// `"150.5"` and `"150px"` both read as 150.
fn leading_integer(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse::<u32>().ok().filter(|v| *v > 0)
}

/// PATCH /api/v1/design/images/:id
pub async fn handle_resize_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ImageResize>,
) -> Json<DesignSession> {
    let action = Action::ResizeImage {
        id,
        width: lenient_dimension(req.width.as_ref()),
        height: lenient_dimension(req.height.as_ref()),
    };
    let (_, session) = apply(&state, action).await;
    Json(session)
}

/// DELETE /api/v1/design/images/:id
pub async fn handle_remove_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DesignSession> {
    let (_, session) = apply(&state, Action::RemoveImage(id)).await;
    Json(session)
}

#[derive(Deserialize)]
pub struct Background {
    pub color: String,
}

/// PUT /api/v1/design/background
///
/// A colour that is not `#RGB`/`#RRGGBB` leaves the background unchanged.
pub async fn handle_set_background(
    State(state): State<AppState>,
    Json(req): Json<Background>,
) -> Json<DesignSession> {
    let (_, session) = apply(&state, Action::SetBackground(req.color.trim().to_string())).await;
    Json(session)
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomStep {
    In,
    Out,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum ZoomRequest {
    Step { step: ZoomStep },
    Set { value: f64 },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomState {
    pub zoom: Zoom,
    pub percent: u32,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
}

impl From<Zoom> for ZoomState {
    fn from(zoom: Zoom) -> Self {
        Self {
            zoom,
            percent: zoom.percent(),
            can_zoom_in: zoom.can_zoom_in(),
            can_zoom_out: zoom.can_zoom_out(),
        }
    }
}

/// POST /api/v1/design/zoom
///
/// Body is either `{ "step": "in" | "out" }` or `{ "value": 1.25 }`; both clamp.
pub async fn handle_zoom(
    State(state): State<AppState>,
    Json(req): Json<ZoomRequest>,
) -> Json<ZoomState> {
    let action = match req {
        ZoomRequest::Step { step: ZoomStep::In } => Action::ZoomIn,
        ZoomRequest::Step { step: ZoomStep::Out } => Action::ZoomOut,
        ZoomRequest::Set { value } => Action::SetZoom(value),
    };
    let (_, session) = apply(&state, action).await;
    Json(session.zoom.into())
}

#[derive(Serialize)]
pub struct Preview {
    pub canvas: RenderedCanvas,
    pub summary: PreviewSummary,
}

/// GET /api/v1/design/preview
pub async fn handle_preview(State(state): State<AppState>) -> Json<Preview> {
    let session = state.session.read().await;
    Json(Preview {
        canvas: render(&session.design, session.zoom),
        summary: summarize(&session.design, session.zoom),
    })
}

async fn hand_off(state: &AppState, action: SinkAction) -> Result<Json<SinkReceipt>, AppError> {
    let design = state.session.read().await.design.clone();
    let receipt = state.sink.accept(action, &design).await?;
    Ok(Json(receipt))
}

/// POST /api/v1/design/save
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<SinkReceipt>, AppError> {
    hand_off(&state, SinkAction::Save).await
}

/// POST /api/v1/design/export
pub async fn handle_export(
    State(state): State<AppState>,
) -> Result<Json<SinkReceipt>, AppError> {
    hand_off(&state, SinkAction::Export).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_dimension() {
        assert_eq!(lenient_dimension(Some(&json!(150))), Some(150));
        assert_eq!(lenient_dimension(Some(&json!(" 90 "))), Some(90));
        assert_eq!(lenient_dimension(Some(&json!("wide"))), None);
        assert_eq!(lenient_dimension(Some(&json!(150.5))), Some(150));
        assert_eq!(lenient_dimension(Some(&json!("150.5"))), Some(150));
        assert_eq!(lenient_dimension(Some(&json!("150px"))), Some(150));
        assert_eq!(lenient_dimension(Some(&json!("+80"))), Some(80));
        assert_eq!(lenient_dimension(Some(&json!("0px"))), None);
        assert_eq!(lenient_dimension(Some(&json!("-5"))), None);
        assert_eq!(lenient_dimension(Some(&json!(0))), None);
        assert_eq!(lenient_dimension(Some(&json!(-5))), None);
        assert_eq!(lenient_dimension(Some(&Value::Null)), None);
        assert_eq!(lenient_dimension(None), None);
    }

    #[test]
    fn test_zoom_request_shapes() {
        let step: ZoomRequest = serde_json::from_value(json!({ "step": "in" })).unwrap();
        assert!(matches!(step, ZoomRequest::Step { step: ZoomStep::In }));
        let set: ZoomRequest = serde_json::from_value(json!({ "value": 1.5 })).unwrap();
        assert!(matches!(set, ZoomRequest::Set { value } if value == 1.5));
    }
}
