//! Handlers for reviewer-facing article endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use redpen_core::article::ReviewStatus;
use redpen_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireReviewer;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PATCH /reviewer/articles/{id}/suggest-changes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestChangesRequest {
    pub pending_content: String,
}

/// Request body for `PATCH /reviewer/articles/{id}/review`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub review_status: ReviewStatus,
}

// ---------------------------------------------------------------------------
// GET /reviewer/articles
// ---------------------------------------------------------------------------

pub async fn list_assigned(
    RequireReviewer(auth): RequireReviewer,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let articles = state.editorial.list_reviewer_articles(&auth.actor()).await?;
    Ok(Json(DataResponse { data: articles }))
}

// ---------------------------------------------------------------------------
// PATCH /reviewer/articles/{id}/suggest-changes
// ---------------------------------------------------------------------------

pub async fn suggest_changes(
    RequireReviewer(auth): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SuggestChangesRequest>,
) -> AppResult<impl IntoResponse> {
    let article = state
        .editorial
        .suggest_changes(&auth.actor(), id, input.pending_content)
        .await?;
    Ok(Json(DataResponse { data: article }))
}

// ---------------------------------------------------------------------------
// PATCH /reviewer/articles/{id}/review
// ---------------------------------------------------------------------------

/// Reject an assigned article outright. Acceptance goes through
/// suggest-changes, so only `REJECTED` is accepted here.
pub async fn review(
    RequireReviewer(auth): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<impl IntoResponse> {
    if input.review_status != ReviewStatus::Rejected {
        return Err(AppError::BadRequest(
            "Only REJECTED is allowed here; accept by suggesting changes".into(),
        ));
    }
    let article = state.editorial.reviewer_reject(&auth.actor(), id).await?;
    Ok(Json(DataResponse { data: article }))
}
