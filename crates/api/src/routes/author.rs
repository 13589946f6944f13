//! Route definitions for the author workspace.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Routes mounted at `/author`.
///
/// ```text
/// GET   /articles                          -> list_my_articles
/// POST  /articles/{id}/request-revision    -> request_revision
/// PATCH /articles/{id}/edit                -> edit_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/articles", get(author::list_my_articles))
        .route(
            "/articles/{id}/request-revision",
            post(author::request_revision),
        )
        .route("/articles/{id}/edit", patch(author::edit_article))
}
