//! PostgreSQL implementations of the core record-store traits.

use async_trait::async_trait;
use redpen_core::article::{Article, ArticleStatus, NewArticle};
use redpen_core::error::CoreError;
use redpen_core::roles::Role;
use redpen_core::store::{ArticleStore, UserStore};
use redpen_core::types::DbId;
use redpen_core::user::{NewUser, User};

use crate::error::classify_sqlx_error;
use crate::models::article::ArticleRow;
use crate::repositories::{ArticleRepo, UserRepo};
use crate::DbPool;

fn into_articles(rows: Vec<ArticleRow>) -> Result<Vec<Article>, CoreError> {
    rows.into_iter().map(Article::try_from).collect()
}

#[derive(Debug, Clone)]
pub struct PgArticleStore {
    pool: DbPool,
}

impl PgArticleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn insert(&self, input: NewArticle) -> Result<Article, CoreError> {
        let row = ArticleRepo::create(&self.pool, &input.title, &input.content, input.author_id)
            .await
            .map_err(classify_sqlx_error)?;
        row.try_into()
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, CoreError> {
        ArticleRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)?
            .map(Article::try_from)
            .transpose()
    }

    async fn list_by_status(&self, status: ArticleStatus) -> Result<Vec<Article>, CoreError> {
        let rows = ArticleRepo::list_by_status(&self.pool, status.as_str())
            .await
            .map_err(classify_sqlx_error)?;
        into_articles(rows)
    }

    async fn list_by_author(&self, author_id: DbId) -> Result<Vec<Article>, CoreError> {
        let rows = ArticleRepo::list_by_author(&self.pool, author_id)
            .await
            .map_err(classify_sqlx_error)?;
        into_articles(rows)
    }

    async fn list_by_reviewer(&self, reviewer_id: DbId) -> Result<Vec<Article>, CoreError> {
        let rows = ArticleRepo::list_by_reviewer(&self.pool, reviewer_id)
            .await
            .map_err(classify_sqlx_error)?;
        into_articles(rows)
    }

    async fn update(&self, article: &Article) -> Result<Article, CoreError> {
        ArticleRepo::update(&self.pool, article)
            .await
            .map_err(classify_sqlx_error)?
            .ok_or(CoreError::NotFound {
                entity: "Article",
                id: article.id,
            })?
            .try_into()
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, input: NewUser) -> Result<User, CoreError> {
        UserRepo::create(&self.pool, &input)
            .await
            .map_err(classify_sqlx_error)?
            .try_into()
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError> {
        UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        UserRepo::find_by_email(&self.pool, email)
            .await
            .map_err(classify_sqlx_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, CoreError> {
        UserRepo::list_by_role(&self.pool, role.as_str())
            .await
            .map_err(classify_sqlx_error)?
            .into_iter()
            .map(User::try_from)
            .collect()
    }
}
