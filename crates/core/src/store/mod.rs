//! Record-store boundary for articles and users.
//!
//! The service only talks to these traits. `redpen-db` provides the
//! PostgreSQL implementations; [`memory`] provides in-process ones for tests
//! and local runs.

pub mod memory;

use async_trait::async_trait;

use crate::article::{Article, ArticleStatus, NewArticle};
use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;
use crate::user::{NewUser, User};

/// Article persistence.
///
/// Listings are ordered newest first (`created_at` descending, then id
/// descending).
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert a freshly submitted article in status `PENDING`.
    async fn insert(&self, input: NewArticle) -> Result<Article, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, CoreError>;

    async fn list_by_status(&self, status: ArticleStatus) -> Result<Vec<Article>, CoreError>;

    async fn list_by_author(&self, author_id: DbId) -> Result<Vec<Article>, CoreError>;

    async fn list_by_reviewer(&self, reviewer_id: DbId) -> Result<Vec<Article>, CoreError>;

    /// Write every mutable field of `article` in one step and return the
    /// stored row. Fails with `NotFound` if the article does not exist.
    async fn update(&self, article: &Article) -> Result<Article, CoreError>;

    /// Verify the backing store is reachable.
    async fn health_check(&self) -> Result<(), CoreError>;
}

/// User persistence.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. A duplicate email fails with `Conflict`.
    async fn create(&self, input: NewUser) -> Result<User, CoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CoreError>;

    /// Users holding `role`, ordered by id ascending.
    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, CoreError>;
}

pub use memory::{InMemoryArticleStore, InMemoryUserStore};
