//! Public feed of published articles.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/feed (no authentication)
pub async fn public_feed(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.editorial.public_feed().await?;
    Ok(Json(DataResponse { data: items }))
}
