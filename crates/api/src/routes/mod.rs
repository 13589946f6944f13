pub mod admin;
pub mod articles;
pub mod auth;
pub mod author;
pub mod feed;
pub mod health;
pub mod reviewer;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/me                                         current claims (requires auth)
///
/// /articles                                        submit (author)
///
/// /author/articles                                 own articles (author)
/// /author/articles/{id}/request-revision           ask to revise a rejection
/// /author/articles/{id}/edit                       submit a revision
///
/// /admin/articles?status=                          list by status (admin)
/// /admin/articles/{id}/status                      accept / reject
/// /admin/articles/{id}/assign-reviewer             hand to a reviewer
/// /admin/articles/{id}/revision-decision           answer a revision request
/// /admin/articles/{id}/changes                     load pending change spans
/// /admin/articles/{id}/changes/{span_id}/decision  approve / reject one span
/// /admin/articles/{id}/submit-changes              apply decided spans
/// /admin/queues/{queue}                            workflow queue view
/// /admin/reviewers                                 reviewer accounts
///
/// /reviewer/articles                               assigned articles (reviewer)
/// /reviewer/articles/{id}/suggest-changes          propose replacement text
/// /reviewer/articles/{id}/review                   reject outright
///
/// /feed                                            published articles (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/articles", articles::router())
        .nest("/author", author::router())
        .nest("/admin", admin::router())
        .nest("/reviewer", reviewer::router())
        .nest("/feed", feed::router())
}
