//! Route definitions for the reviewer workspace.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::reviewer;
use crate::state::AppState;

/// Routes mounted at `/reviewer`.
///
/// ```text
/// GET   /articles                        -> list_assigned
/// PATCH /articles/{id}/suggest-changes   -> suggest_changes
/// PATCH /articles/{id}/review            -> review (REJECTED only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/articles", get(reviewer::list_assigned))
        .route(
            "/articles/{id}/suggest-changes",
            patch(reviewer::suggest_changes),
        )
        .route("/articles/{id}/review", patch(reviewer::review))
}
