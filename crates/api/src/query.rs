//! Shared query parameter types for API handlers.

use redpen_core::article::ArticleStatus;
use serde::Deserialize;

/// `?status=` filter for article listings.
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}

impl StatusParams {
    /// The requested status, defaulting to `PENDING` when absent or blank.
    pub fn status_or_pending(&self) -> Result<ArticleStatus, redpen_core::error::CoreError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(ArticleStatus::Pending),
            Some(raw) => raw.parse(),
        }
    }
}
