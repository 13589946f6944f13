//! Handlers for reviewing a pending change set span by span.
//!
//! The admin first loads the changes (which computes the span ledger), then
//! decides every added/removed span, then submits.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use redpen_core::diff::{ChangeSpan, Decision, SpanId};
use redpen_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PATCH /admin/articles/{id}/changes/{span_id}/decision`.
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub decision: Decision,
}

/// Span list after a decision.
#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub article_id: DbId,
    pub spans: Vec<ChangeSpan>,
}

// ---------------------------------------------------------------------------
// GET /admin/articles/{id}/changes
// ---------------------------------------------------------------------------

pub async fn get_changes(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let changes = state.editorial.get_changes(&admin.actor(), id).await?;
    Ok(Json(DataResponse { data: changes }))
}

// ---------------------------------------------------------------------------
// PATCH /admin/articles/{id}/changes/{span_id}/decision
// ---------------------------------------------------------------------------

pub async fn decide_change(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path((id, span_id)): Path<(DbId, SpanId)>,
    Json(input): Json<DecisionRequest>,
) -> AppResult<impl IntoResponse> {
    let spans = state
        .editorial
        .decide_change(&admin.actor(), id, span_id, input.decision)
        .await?;
    Ok(Json(DataResponse {
        data: DecisionResponse {
            article_id: id,
            spans,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /admin/articles/{id}/submit-changes
// ---------------------------------------------------------------------------

pub async fn submit_changes(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = state.editorial.submit_changes(&admin.actor(), id).await?;
    Ok(Json(DataResponse { data: article }))
}
