//! Route definitions for the public feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::feed;
use crate::state::AppState;

/// Routes mounted at `/feed`.
///
/// ```text
/// GET /  -> public_feed (no auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(feed::public_feed))
}
