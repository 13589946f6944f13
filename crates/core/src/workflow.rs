//! Editorial workflow service.
//!
//! [`EditorialService`] is the operation boundary of the core: it loads
//! articles from the [`ArticleStore`], runs the pure transitions in
//! [`crate::lifecycle`], persists the result in one update, and keeps the
//! [`DecisionLedger`] in step with the article's pending change.

use std::sync::Arc;

use serde::Serialize;

use crate::article::{
    validate_content, validate_title, AdminQueue, Article, ArticleStatus, FeedItem, NewArticle,
};
use crate::diff::{ChangeSpan, Decision, SpanId};
use crate::error::CoreError;
use crate::ledger::DecisionLedger;
use crate::lifecycle::{self, AuthorEdit, TriageDecision};
use crate::reconstruct::reconstruct;
use crate::roles::{Actor, Role};
use crate::store::{ArticleStore, UserStore};
use crate::types::DbId;
use crate::user::UserSummary;

/// The pending change of an article together with its decision ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    pub article_id: DbId,
    pub original_text: String,
    pub proposed_text: String,
    pub spans: Vec<ChangeSpan>,
    /// `true` when the spans were (re)computed by this request and every
    /// decision is at its default. After a restart this means earlier
    /// decisions were lost.
    pub fresh: bool,
}

/// The `(original, proposed)` texts of an article awaiting span decisions.
fn change_under_review(article: &Article) -> Result<(&str, &str), CoreError> {
    article
        .pending_change()
        .filter(|_| article.workflow_state().has_pending_change())
        .ok_or_else(|| {
            CoreError::InvalidState(format!("Article {} has no pending changes", article.id))
        })
}

pub struct EditorialService {
    articles: Arc<dyn ArticleStore>,
    users: Arc<dyn UserStore>,
    ledger: Arc<DecisionLedger>,
}

impl EditorialService {
    pub fn new(
        articles: Arc<dyn ArticleStore>,
        users: Arc<dyn UserStore>,
        ledger: Arc<DecisionLedger>,
    ) -> Self {
        Self {
            articles,
            users,
            ledger,
        }
    }

    pub fn articles(&self) -> &Arc<dyn ArticleStore> {
        &self.articles
    }

    async fn load(&self, article_id: DbId) -> Result<Article, CoreError> {
        self.articles
            .find_by_id(article_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Article",
                id: article_id,
            })
    }

    // -----------------------------------------------------------------------
    // Author operations
    // -----------------------------------------------------------------------

    pub async fn submit_article(
        &self,
        actor: &Actor,
        title: String,
        content: String,
    ) -> Result<Article, CoreError> {
        actor.require(Role::Author)?;
        validate_title(&title)?;
        validate_content(&content)?;

        let article = self
            .articles
            .insert(NewArticle {
                title,
                content,
                author_id: actor.user_id,
            })
            .await?;

        tracing::info!(article_id = article.id, user_id = actor.user_id, "Article submitted");
        Ok(article)
    }

    pub async fn list_author_articles(&self, actor: &Actor) -> Result<Vec<Article>, CoreError> {
        actor.require(Role::Author)?;
        self.articles.list_by_author(actor.user_id).await
    }

    pub async fn request_revision(
        &self,
        actor: &Actor,
        article_id: DbId,
    ) -> Result<Article, CoreError> {
        actor.require(Role::Author)?;
        let article = self.load(article_id).await?;
        let next = lifecycle::request_revision(&article, actor)?;
        if next == article {
            return Ok(article);
        }
        let saved = self.articles.update(&next).await?;

        tracing::info!(article_id, user_id = actor.user_id, "Revision requested");
        Ok(saved)
    }

    pub async fn author_edit(
        &self,
        actor: &Actor,
        article_id: DbId,
        edit: AuthorEdit,
    ) -> Result<Article, CoreError> {
        actor.require(Role::Author)?;
        let article = self.load(article_id).await?;
        let next = lifecycle::author_edit(&article, actor, edit)?;
        let saved = self.articles.update(&next).await?;

        if saved.pending_content != article.pending_content {
            self.ledger.clear(article_id).await;
        }

        tracing::info!(
            article_id,
            user_id = actor.user_id,
            has_pending = saved.pending_content.is_some(),
            "Article revised by author"
        );
        Ok(saved)
    }

    // -----------------------------------------------------------------------
    // Admin operations
    // -----------------------------------------------------------------------

    pub async fn list_articles_by_status(
        &self,
        actor: &Actor,
        status: ArticleStatus,
    ) -> Result<Vec<Article>, CoreError> {
        actor.require(Role::Admin)?;
        self.articles.list_by_status(status).await
    }

    /// Articles currently in one admin work queue, newest first.
    pub async fn list_queue(
        &self,
        actor: &Actor,
        queue: AdminQueue,
    ) -> Result<Vec<Article>, CoreError> {
        actor.require(Role::Admin)?;
        let mut matching = Vec::new();
        for status in queue.statuses() {
            let articles = self.articles.list_by_status(*status).await?;
            matching.extend(
                articles
                    .into_iter()
                    .filter(|a| a.workflow_state() == queue.state()),
            );
        }
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(matching)
    }

    pub async fn list_reviewers(&self, actor: &Actor) -> Result<Vec<UserSummary>, CoreError> {
        actor.require(Role::Admin)?;
        let reviewers = self.users.list_by_role(Role::Reviewer).await?;
        Ok(reviewers.into_iter().map(UserSummary::from).collect())
    }

    pub async fn set_article_status(
        &self,
        actor: &Actor,
        article_id: DbId,
        status: ArticleStatus,
    ) -> Result<Article, CoreError> {
        actor.require(Role::Admin)?;
        let decision = TriageDecision::try_from(status)?;
        let article = self.load(article_id).await?;
        let next = lifecycle::set_status(&article, actor, decision)?;
        let saved = self.articles.update(&next).await?;

        tracing::info!(article_id, status = %saved.status, "Article status set");
        Ok(saved)
    }

    pub async fn assign_reviewer(
        &self,
        actor: &Actor,
        article_id: DbId,
        reviewer_id: DbId,
    ) -> Result<Article, CoreError> {
        actor.require(Role::Admin)?;
        let article = self.load(article_id).await?;
        let reviewer = self.users.find_by_id(reviewer_id).await?;
        if !matches!(reviewer, Some(ref user) if user.role == Role::Reviewer) {
            return Err(CoreError::NotFound {
                entity: "Reviewer",
                id: reviewer_id,
            });
        }
        let next = lifecycle::assign_reviewer(&article, actor, reviewer_id)?;
        let saved = self.articles.update(&next).await?;

        tracing::info!(article_id, reviewer_id, "Reviewer assigned");
        Ok(saved)
    }

    pub async fn decide_revision_request(
        &self,
        actor: &Actor,
        article_id: DbId,
        approved: bool,
    ) -> Result<Article, CoreError> {
        actor.require(Role::Admin)?;
        let article = self.load(article_id).await?;
        let next = lifecycle::decide_revision_request(&article, actor, approved)?;
        let saved = self.articles.update(&next).await?;

        tracing::info!(article_id, approved, "Revision request decided");
        Ok(saved)
    }

    /// Load the article's pending change and its span ledger, computing the
    /// spans on first access.
    pub async fn get_changes(&self, actor: &Actor, article_id: DbId) -> Result<ChangeSet, CoreError> {
        actor.require(Role::Admin)?;
        let article = self.load(article_id).await?;
        let (original, proposed) = change_under_review(&article)?;

        let fetch = self
            .ledger
            .compute_or_fetch(article_id, original, proposed)
            .await;

        Ok(ChangeSet {
            article_id,
            original_text: original.to_string(),
            proposed_text: proposed.to_string(),
            spans: fetch.spans,
            fresh: fetch.fresh,
        })
    }

    pub async fn decide_change(
        &self,
        actor: &Actor,
        article_id: DbId,
        span_id: SpanId,
        decision: Decision,
    ) -> Result<Vec<ChangeSpan>, CoreError> {
        actor.require(Role::Admin)?;
        self.load(article_id).await?;
        let spans = self.ledger.set_decision(article_id, span_id, decision).await?;

        tracing::debug!(article_id, span_id, decision = %decision, "Change decided");
        Ok(spans)
    }

    /// Apply the decided change set to the article.
    ///
    /// The ledger must have been computed from the article's current pending
    /// change; decisions taken on a replaced draft are refused. The ledger is
    /// discarded only after the article update succeeds.
    pub async fn submit_changes(&self, actor: &Actor, article_id: DbId) -> Result<Article, CoreError> {
        actor.require(Role::Admin)?;
        let article = self.load(article_id).await?;
        let (original, proposed) = change_under_review(&article)?;
        let entry = self.ledger.entry(article_id).await.ok_or_else(|| {
            CoreError::InvalidState(format!(
                "No change ledger for article {article_id}; load the changes first"
            ))
        })?;
        if !entry.covers(original, proposed) {
            tracing::warn!(article_id, "Refusing to apply decisions made on a replaced draft");
            return Err(CoreError::InvalidState(format!(
                "Changes for article {article_id} were superseded; reload them"
            )));
        }

        let final_text = reconstruct(&entry.spans)?;
        let next = lifecycle::submit_changes(&article, actor, final_text)?;
        let saved = self.articles.update(&next).await?;
        self.ledger.clear(article_id).await;

        tracing::info!(article_id, status = %saved.status, "Changes submitted");
        Ok(saved)
    }

    // -----------------------------------------------------------------------
    // Reviewer operations
    // -----------------------------------------------------------------------

    pub async fn list_reviewer_articles(&self, actor: &Actor) -> Result<Vec<Article>, CoreError> {
        actor.require(Role::Reviewer)?;
        self.articles.list_by_reviewer(actor.user_id).await
    }

    pub async fn suggest_changes(
        &self,
        actor: &Actor,
        article_id: DbId,
        proposed: String,
    ) -> Result<Article, CoreError> {
        actor.require(Role::Reviewer)?;
        let article = self.load(article_id).await?;
        let next = lifecycle::suggest_changes(&article, actor, &proposed)?;
        let saved = self.articles.update(&next).await?;
        self.ledger.clear(article_id).await;

        tracing::info!(article_id, user_id = actor.user_id, "Changes suggested");
        Ok(saved)
    }

    pub async fn reviewer_reject(&self, actor: &Actor, article_id: DbId) -> Result<Article, CoreError> {
        actor.require(Role::Reviewer)?;
        let article = self.load(article_id).await?;
        let next = lifecycle::reviewer_reject(&article, actor)?;
        let saved = self.articles.update(&next).await?;
        self.ledger.clear(article_id).await;

        tracing::info!(article_id, user_id = actor.user_id, "Article rejected by reviewer");
        Ok(saved)
    }

    // -----------------------------------------------------------------------
    // Public
    // -----------------------------------------------------------------------

    pub async fn public_feed(&self) -> Result<Vec<FeedItem>, CoreError> {
        let published = self.articles.list_by_status(ArticleStatus::Published).await?;
        Ok(published.into_iter().map(FeedItem::from).collect())
    }
}
