//! In-memory record stores for testing and local runs.
//!
//! Uses `BTreeMap` for deterministic iteration order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ArticleStore, UserStore};
use crate::article::{Article, ArticleStatus, NewArticle};
use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;
use crate::user::{NewUser, User};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<DbId, T>,
    next_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    articles
}

/// In-memory article store.
#[derive(Debug, Default)]
pub struct InMemoryArticleStore {
    table: RwLock<Table<Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered(&self, keep: impl Fn(&Article) -> bool) -> Vec<Article> {
        let table = self.table.read().await;
        newest_first(table.rows.values().filter(|a| keep(a)).cloned().collect())
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn insert(&self, input: NewArticle) -> Result<Article, CoreError> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let article = Article {
            id,
            title: input.title,
            content: input.content,
            status: ArticleStatus::Pending,
            author_id: input.author_id,
            reviewer_id: None,
            review_status: None,
            revision_requested: false,
            revision_approved: false,
            previous_content: None,
            pending_content: None,
            created_at: Utc::now(),
        };
        table.rows.insert(id, article.clone());
        Ok(article)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Article>, CoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list_by_status(&self, status: ArticleStatus) -> Result<Vec<Article>, CoreError> {
        Ok(self.filtered(|a| a.status == status).await)
    }

    async fn list_by_author(&self, author_id: DbId) -> Result<Vec<Article>, CoreError> {
        Ok(self.filtered(|a| a.author_id == author_id).await)
    }

    async fn list_by_reviewer(&self, reviewer_id: DbId) -> Result<Vec<Article>, CoreError> {
        Ok(self.filtered(|a| a.reviewer_id == Some(reviewer_id)).await)
    }

    async fn update(&self, article: &Article) -> Result<Article, CoreError> {
        let mut table = self.table.write().await;
        let stored = table.rows.get_mut(&article.id).ok_or(CoreError::NotFound {
            entity: "Article",
            id: article.id,
        })?;
        // Identity columns are immutable.
        *stored = Article {
            id: stored.id,
            author_id: stored.author_id,
            created_at: stored.created_at,
            ..article.clone()
        };
        Ok(stored.clone())
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// In-memory user store.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    table: RwLock<Table<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, input: NewUser) -> Result<User, CoreError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|u| u.email == input.email) {
            return Err(CoreError::Conflict(format!(
                "Email '{}' is already registered",
                input.email
            )));
        }
        let id = table.allocate_id();
        let user = User {
            id,
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            role: input.role,
            created_at: Utc::now(),
        };
        table.rows.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<User>, CoreError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, CoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, CoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|u| u.role == role).cloned().collect())
    }
}
