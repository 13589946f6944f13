//! Article lifecycle transitions.
//!
//! Each transition is a pure function from the current [`Article`] and the
//! calling [`Actor`] to the next article value. Nothing is written here: the
//! caller persists the returned value in a single store update, so a failed
//! transition leaves the stored record untouched.
//!
//! Check order is fixed: role, then ownership (both `Forbidden`), then the
//! article's [`WorkflowState`] (`InvalidState`), then the request payload
//! (`Validation`).

use crate::article::{
    validate_content, validate_title, Article, ArticleStatus, ReviewStatus, WorkflowState,
};
use crate::error::CoreError;
use crate::roles::{Actor, Role};
use crate::types::DbId;

/// Admin screening outcome for a freshly submitted article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageDecision {
    Accept,
    Reject,
}

impl TryFrom<ArticleStatus> for TriageDecision {
    type Error = CoreError;

    fn try_from(status: ArticleStatus) -> Result<Self, Self::Error> {
        match status {
            ArticleStatus::Accepted => Ok(Self::Accept),
            ArticleStatus::Rejected => Ok(Self::Reject),
            other => Err(CoreError::Validation(format!(
                "Status must be ACCEPTED or REJECTED, got {other}"
            ))),
        }
    }
}

/// Fields an author may change while revising a rejected article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorEdit {
    pub title: Option<String>,
    pub content: Option<String>,
}

fn require_author_of(article: &Article, actor: &Actor) -> Result<(), CoreError> {
    actor.require(Role::Author)?;
    if article.author_id != actor.user_id {
        return Err(CoreError::Forbidden(format!(
            "Article {} does not belong to this author",
            article.id
        )));
    }
    Ok(())
}

fn require_reviewer_of(article: &Article, actor: &Actor) -> Result<(), CoreError> {
    actor.require(Role::Reviewer)?;
    if article.reviewer_id != Some(actor.user_id) {
        return Err(CoreError::Forbidden(format!(
            "Article {} is not assigned to this reviewer",
            article.id
        )));
    }
    Ok(())
}

fn invalid_state(article: &Article, action: &str) -> CoreError {
    CoreError::InvalidState(format!(
        "Cannot {action}: article {} is {:?}",
        article.id,
        article.workflow_state()
    ))
}

/// Admin accepts or rejects an article waiting for triage.
///
/// A rejection clears all review context so the article starts clean.
pub fn set_status(
    article: &Article,
    actor: &Actor,
    decision: TriageDecision,
) -> Result<Article, CoreError> {
    actor.require(Role::Admin)?;
    if article.workflow_state() != WorkflowState::AwaitingTriage {
        return Err(invalid_state(article, "change status"));
    }

    let mut next = article.clone();
    match decision {
        TriageDecision::Accept => next.status = ArticleStatus::Accepted,
        TriageDecision::Reject => {
            next.status = ArticleStatus::Rejected;
            next.reviewer_id = None;
            next.review_status = None;
            next.revision_requested = false;
            next.revision_approved = false;
        }
    }
    Ok(next)
}

/// Admin hands an article waiting for triage to a reviewer.
///
/// The caller is responsible for checking that `reviewer_id` names a reviewer.
pub fn assign_reviewer(
    article: &Article,
    actor: &Actor,
    reviewer_id: DbId,
) -> Result<Article, CoreError> {
    actor.require(Role::Admin)?;
    if article.workflow_state() != WorkflowState::AwaitingTriage {
        return Err(invalid_state(article, "assign a reviewer"));
    }

    Ok(Article {
        reviewer_id: Some(reviewer_id),
        status: ArticleStatus::InReview,
        review_status: Some(ReviewStatus::Pending),
        ..article.clone()
    })
}

/// Assigned reviewer proposes a replacement text and hands the article back
/// to the admin queue.
pub fn suggest_changes(
    article: &Article,
    actor: &Actor,
    proposed: &str,
) -> Result<Article, CoreError> {
    require_reviewer_of(article, actor)?;
    if article.workflow_state() != WorkflowState::InReview {
        return Err(invalid_state(article, "suggest changes"));
    }
    validate_content(proposed)?;

    Ok(Article {
        previous_content: Some(article.content.clone()),
        pending_content: Some(proposed.to_string()),
        status: ArticleStatus::Pending,
        review_status: Some(ReviewStatus::Pending),
        ..article.clone()
    })
}

/// Assigned reviewer rejects the article outright.
///
/// Any previous/pending content is left as it is.
pub fn reviewer_reject(article: &Article, actor: &Actor) -> Result<Article, CoreError> {
    require_reviewer_of(article, actor)?;
    if article.workflow_state() != WorkflowState::InReview {
        return Err(invalid_state(article, "reject the review"));
    }

    Ok(Article {
        review_status: Some(ReviewStatus::Rejected),
        status: ArticleStatus::Rejected,
        reviewer_id: None,
        ..article.clone()
    })
}

/// Admin applies the reconstructed text of a fully decided change set.
///
/// A reviewer suggestion publishes the article and keeps the reviewer. An
/// author revision sends the article back to triage with no reviewer.
pub fn submit_changes(
    article: &Article,
    actor: &Actor,
    final_text: String,
) -> Result<Article, CoreError> {
    actor.require(Role::Admin)?;
    let reviewer_flow = match article.workflow_state() {
        WorkflowState::ReviewerSuggestion => true,
        WorkflowState::RevisionSubmitted => false,
        _ => {
            return Err(CoreError::InvalidState(format!(
                "Article {} has no pending changes",
                article.id
            )))
        }
    };

    let mut next = Article {
        content: final_text,
        pending_content: None,
        previous_content: None,
        revision_requested: false,
        revision_approved: false,
        ..article.clone()
    };
    if reviewer_flow {
        next.status = ArticleStatus::Published;
        next.review_status = Some(ReviewStatus::Accepted);
    } else {
        next.status = ArticleStatus::Pending;
        next.review_status = None;
        next.reviewer_id = None;
    }
    Ok(next)
}

/// Author asks to revise a rejected article. Repeating an outstanding
/// request succeeds without changes.
pub fn request_revision(article: &Article, actor: &Actor) -> Result<Article, CoreError> {
    require_author_of(article, actor)?;
    match article.workflow_state() {
        WorkflowState::RejectedClean => Ok(Article {
            revision_requested: true,
            ..article.clone()
        }),
        WorkflowState::RevisionRequested | WorkflowState::RevisionApproved => Ok(article.clone()),
        _ => Err(CoreError::InvalidState(format!(
            "Revision can only be requested for a rejected article (article {} is {})",
            article.id, article.status
        ))),
    }
}

/// Admin answers an outstanding revision request.
///
/// Approval keeps the request flag set; denial resets it so the author may
/// ask again. A decision may be revised until the author submits the edit.
pub fn decide_revision_request(
    article: &Article,
    actor: &Actor,
    approved: bool,
) -> Result<Article, CoreError> {
    actor.require(Role::Admin)?;
    match article.workflow_state() {
        WorkflowState::RevisionRequested | WorkflowState::RevisionApproved => Ok(Article {
            revision_approved: approved,
            revision_requested: approved,
            ..article.clone()
        }),
        _ => Err(invalid_state(article, "decide a revision request")),
    }
}

/// Author edits an article whose revision was approved.
///
/// New content becomes the pending change against the current content. A
/// title-only edit leaves the pending fields alone. Re-editing a submitted
/// revision replaces the pending text.
pub fn author_edit(article: &Article, actor: &Actor, edit: AuthorEdit) -> Result<Article, CoreError> {
    require_author_of(article, actor)?;
    if !matches!(
        article.workflow_state(),
        WorkflowState::RevisionApproved | WorkflowState::RevisionSubmitted
    ) {
        return Err(CoreError::InvalidState(format!(
            "Article {} has no approved revision",
            article.id
        )));
    }
    if edit.title.is_none() && edit.content.is_none() {
        return Err(CoreError::Validation(
            "At least one of title or content is required".into(),
        ));
    }

    let mut next = article.clone();
    if let Some(title) = edit.title {
        validate_title(&title)?;
        next.title = title;
    }
    if let Some(content) = edit.content {
        validate_content(&content)?;
        next.previous_content = Some(article.content.clone());
        next.pending_content = Some(content);
        next.reviewer_id = None;
        next.review_status = None;
    }
    Ok(next)
}
