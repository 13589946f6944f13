//! Article row model.

use redpen_core::article::{Article, ArticleStatus, ReviewStatus};
use redpen_core::error::CoreError;
use redpen_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub status: String,
    pub author_id: DbId,
    pub reviewer_id: Option<DbId>,
    pub review_status: Option<String>,
    pub revision_requested: bool,
    pub revision_approved: bool,
    pub previous_content: Option<String>,
    pub pending_content: Option<String>,
    pub created_at: Timestamp,
}

impl TryFrom<ArticleRow> for Article {
    type Error = CoreError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let status: ArticleStatus = row
            .status
            .parse()
            .map_err(|e| CoreError::Internal(format!("Corrupt article {}: {e}", row.id)))?;
        let review_status = row
            .review_status
            .as_deref()
            .map(str::parse::<ReviewStatus>)
            .transpose()
            .map_err(|e| CoreError::Internal(format!("Corrupt article {}: {e}", row.id)))?;

        Ok(Article {
            id: row.id,
            title: row.title,
            content: row.content,
            status,
            author_id: row.author_id,
            reviewer_id: row.reviewer_id,
            review_status,
            revision_requested: row.revision_requested,
            revision_approved: row.revision_approved,
            previous_content: row.previous_content,
            pending_content: row.pending_content,
            created_at: row.created_at,
        })
    }
}
