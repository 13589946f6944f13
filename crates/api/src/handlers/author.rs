//! Handlers for author-facing article endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use redpen_core::lifecycle::AuthorEdit;
use redpen_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuthor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /articles`.
#[derive(Debug, Deserialize)]
pub struct SubmitArticleRequest {
    pub title: String,
    pub content: String,
}

/// Request body for `PATCH /author/articles/{id}/edit`.
#[derive(Debug, Deserialize)]
pub struct AuthorEditRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /articles
// ---------------------------------------------------------------------------

pub async fn submit_article(
    RequireAuthor(auth): RequireAuthor,
    State(state): State<AppState>,
    Json(input): Json<SubmitArticleRequest>,
) -> AppResult<impl IntoResponse> {
    let article = state
        .editorial
        .submit_article(&auth.actor(), input.title, input.content)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

// ---------------------------------------------------------------------------
// GET /author/articles
// ---------------------------------------------------------------------------

pub async fn list_my_articles(
    RequireAuthor(auth): RequireAuthor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let articles = state.editorial.list_author_articles(&auth.actor()).await?;
    Ok(Json(DataResponse { data: articles }))
}

// ---------------------------------------------------------------------------
// POST /author/articles/{id}/request-revision
// ---------------------------------------------------------------------------

pub async fn request_revision(
    RequireAuthor(auth): RequireAuthor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let article = state.editorial.request_revision(&auth.actor(), id).await?;
    Ok(Json(DataResponse { data: article }))
}

// ---------------------------------------------------------------------------
// PATCH /author/articles/{id}/edit
// ---------------------------------------------------------------------------

pub async fn edit_article(
    RequireAuthor(auth): RequireAuthor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AuthorEditRequest>,
) -> AppResult<impl IntoResponse> {
    let edit = AuthorEdit {
        title: input.title,
        content: input.content,
    };
    let article = state.editorial.author_edit(&auth.actor(), id, edit).await?;
    Ok(Json(DataResponse { data: article }))
}
