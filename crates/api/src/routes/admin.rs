//! Route definitions for admin triage and change review.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{admin, changes};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET   /articles                                   -> list_articles
/// PATCH /articles/{id}/status                       -> set_status
/// PATCH /articles/{id}/assign-reviewer              -> assign_reviewer
/// PATCH /articles/{id}/revision-decision            -> decide_revision
/// GET   /articles/{id}/changes                      -> get_changes
/// PATCH /articles/{id}/changes/{span_id}/decision   -> decide_change
/// POST  /articles/{id}/submit-changes               -> submit_changes
/// GET   /queues/{queue}                             -> list_queue
/// GET   /reviewers                                  -> list_reviewers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/articles", get(admin::list_articles))
        .route("/articles/{id}/status", patch(admin::set_status))
        .route(
            "/articles/{id}/assign-reviewer",
            patch(admin::assign_reviewer),
        )
        .route(
            "/articles/{id}/revision-decision",
            patch(admin::decide_revision),
        )
        .route("/articles/{id}/changes", get(changes::get_changes))
        .route(
            "/articles/{id}/changes/{span_id}/decision",
            patch(changes::decide_change),
        )
        .route(
            "/articles/{id}/submit-changes",
            post(changes::submit_changes),
        )
        .route("/queues/{queue}", get(admin::list_queue))
        .route("/reviewers", get(admin::list_reviewers))
}
