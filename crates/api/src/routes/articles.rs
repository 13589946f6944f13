//! Route definitions for article submission.

use axum::routing::post;
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// POST /  -> submit_article (author)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(author::submit_article))
}
