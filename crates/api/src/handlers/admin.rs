//! Handlers for admin triage: listings, queues, status, reviewer
//! assignment, and revision requests.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use redpen_core::article::{AdminQueue, ArticleStatus};
use redpen_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::StatusParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PATCH /admin/articles/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: ArticleStatus,
}

/// Request body for `PATCH /admin/articles/{id}/assign-reviewer`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignReviewerRequest {
    pub reviewer_id: DbId,
}

/// Request body for `PATCH /admin/articles/{id}/revision-decision`.
#[derive(Debug, Deserialize)]
pub struct RevisionDecisionRequest {
    pub approved: bool,
}

// ---------------------------------------------------------------------------
// GET /admin/articles?status=
// ---------------------------------------------------------------------------

/// List articles by primary status (default `PENDING`).
pub async fn list_articles(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> AppResult<impl IntoResponse> {
    let status = params.status_or_pending()?;
    let articles = state
        .editorial
        .list_articles_by_status(&admin.actor(), status)
        .await?;
    Ok(Json(DataResponse { data: articles }))
}

// ---------------------------------------------------------------------------
// GET /admin/queues/{queue}
// ---------------------------------------------------------------------------

pub async fn list_queue(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(queue): Path<String>,
) -> AppResult<impl IntoResponse> {
    let queue: AdminQueue = queue.parse()?;
    let articles = state.editorial.list_queue(&admin.actor(), queue).await?;
    Ok(Json(DataResponse { data: articles }))
}

// ---------------------------------------------------------------------------
// GET /admin/reviewers
// ---------------------------------------------------------------------------

pub async fn list_reviewers(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let reviewers = state.editorial.list_reviewers(&admin.actor()).await?;
    Ok(Json(DataResponse { data: reviewers }))
}

// ---------------------------------------------------------------------------
// PATCH /admin/articles/{id}/status
// ---------------------------------------------------------------------------

pub async fn set_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let article = state
        .editorial
        .set_article_status(&admin.actor(), id, input.status)
        .await?;
    Ok(Json(DataResponse { data: article }))
}

// ---------------------------------------------------------------------------
// PATCH /admin/articles/{id}/assign-reviewer
// ---------------------------------------------------------------------------

pub async fn assign_reviewer(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AssignReviewerRequest>,
) -> AppResult<impl IntoResponse> {
    let article = state
        .editorial
        .assign_reviewer(&admin.actor(), id, input.reviewer_id)
        .await?;
    Ok(Json(DataResponse { data: article }))
}

// ---------------------------------------------------------------------------
// PATCH /admin/articles/{id}/revision-decision
// ---------------------------------------------------------------------------

pub async fn decide_revision(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RevisionDecisionRequest>,
) -> AppResult<impl IntoResponse> {
    let article = state
        .editorial
        .decide_revision_request(&admin.actor(), id, input.approved)
        .await?;
    Ok(Json(DataResponse { data: article }))
}
