//! Repository for the `articles` table.

use redpen_core::article::Article;
use redpen_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::ArticleRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, status, author_id, reviewer_id, review_status, \
                       revision_requested, revision_approved, previous_content, \
                       pending_content, created_at";

/// Provides persistence operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article in status `PENDING`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        content: &str,
        author_id: DbId,
    ) -> Result<ArticleRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, author_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArticleRow>(&query)
            .bind(title)
            .bind(content)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ArticleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, ArticleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List articles with the given status, newest first.
    pub async fn list_by_status(pool: &PgPool, status: &str) -> Result<Vec<ArticleRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles WHERE status = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ArticleRow>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List an author's articles, newest first.
    pub async fn list_by_author(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<Vec<ArticleRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles WHERE author_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ArticleRow>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// List articles assigned to a reviewer, newest first.
    pub async fn list_by_reviewer(
        pool: &PgPool,
        reviewer_id: DbId,
    ) -> Result<Vec<ArticleRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles WHERE reviewer_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ArticleRow>(&query)
            .bind(reviewer_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of an article in one statement.
    ///
    /// Returns `None` if no row with the article's `id` exists.
    pub async fn update(pool: &PgPool, article: &Article) -> Result<Option<ArticleRow>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = $2,
                content = $3,
                status = $4,
                reviewer_id = $5,
                review_status = $6,
                revision_requested = $7,
                revision_approved = $8,
                previous_content = $9,
                pending_content = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArticleRow>(&query)
            .bind(article.id)
            .bind(&article.title)
            .bind(&article.content)
            .bind(article.status.as_str())
            .bind(article.reviewer_id)
            .bind(article.review_status.map(|s| s.as_str()))
            .bind(article.revision_requested)
            .bind(article.revision_approved)
            .bind(&article.previous_content)
            .bind(&article.pending_content)
            .fetch_optional(pool)
            .await
    }
}
