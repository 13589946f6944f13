//! Article record, status enums, derived workflow state, and field validation.
//!
//! The persisted record encodes several logical workflow states through a
//! combination of `status`, `reviewer_id`, `review_status`, the revision
//! flags, and `pending_content`. [`Article::workflow_state`] decodes that
//! combination once so transitions can match on a named state instead of
//! re-deriving it from raw fields.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum content length in characters.
pub const MAX_CONTENT_LENGTH: usize = 100_000;

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// Primary article status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArticleStatus {
    Pending,
    InReview,
    Accepted,
    Published,
    Rejected,
}

impl ArticleStatus {
    pub const ALL: [ArticleStatus; 5] = [
        Self::Pending,
        Self::InReview,
        Self::Accepted,
        Self::Published,
        Self::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InReview => "IN_REVIEW",
            Self::Accepted => "ACCEPTED",
            Self::Published => "PUBLISHED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid article status '{s}'. Must be one of: PENDING, IN_REVIEW, ACCEPTED, PUBLISHED, REJECTED"
                ))
            })
    }
}

/// Reviewer-track sub-status, independent of [`ArticleStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(CoreError::Validation(format!(
                "Invalid review status '{other}'. Must be one of: PENDING, ACCEPTED, REJECTED"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One editorial document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    pub author_id: DbId,
    pub reviewer_id: Option<DbId>,
    pub review_status: Option<ReviewStatus>,
    pub revision_requested: bool,
    pub revision_approved: bool,
    /// Snapshot of `content` taken when `pending_content` was proposed.
    pub previous_content: Option<String>,
    /// Proposed replacement awaiting admin decisions.
    pub pending_content: Option<String>,
    pub created_at: Timestamp,
}

/// Fields needed to create an article on author submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub author_id: DbId,
}

/// Public projection of a published article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub author_id: DbId,
    pub created_at: Timestamp,
}

impl From<Article> for FeedItem {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            author_id: article.author_id,
            created_at: article.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Workflow state
// ---------------------------------------------------------------------------

/// Logical workflow state decoded from an article's status and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Fresh or re-submitted article waiting for admin screening.
    AwaitingTriage,
    /// Accepted by an admin without a reviewer round.
    Accepted,
    /// Assigned to a reviewer who has not acted yet.
    InReview,
    /// A reviewer proposed changes that wait for admin decisions.
    ReviewerSuggestion,
    /// The author submitted a revised text that waits for admin decisions.
    RevisionSubmitted,
    Published,
    /// Rejected with no revision in flight.
    RejectedClean,
    /// The author asked to revise; the admin has not answered.
    RevisionRequested,
    /// The admin allowed a revision; the author has not submitted it yet.
    RevisionApproved,
}

impl WorkflowState {
    /// `true` for the states that carry a change set awaiting decisions.
    pub fn has_pending_change(&self) -> bool {
        matches!(self, Self::ReviewerSuggestion | Self::RevisionSubmitted)
    }
}

impl Article {
    pub fn workflow_state(&self) -> WorkflowState {
        match self.status {
            ArticleStatus::Pending if self.pending_content.is_some() => {
                if self.reviewer_id.is_some() && self.review_status == Some(ReviewStatus::Pending) {
                    WorkflowState::ReviewerSuggestion
                } else {
                    WorkflowState::RevisionSubmitted
                }
            }
            ArticleStatus::Pending => WorkflowState::AwaitingTriage,
            ArticleStatus::InReview => WorkflowState::InReview,
            ArticleStatus::Accepted => WorkflowState::Accepted,
            ArticleStatus::Published => WorkflowState::Published,
            ArticleStatus::Rejected if self.pending_content.is_some() => {
                WorkflowState::RevisionSubmitted
            }
            ArticleStatus::Rejected => match (self.revision_requested, self.revision_approved) {
                (true, true) => WorkflowState::RevisionApproved,
                (true, false) => WorkflowState::RevisionRequested,
                (false, _) => WorkflowState::RejectedClean,
            },
        }
    }

    /// The `(original, proposed)` texts of the pending change set, if any.
    ///
    /// The original side falls back to `content` when no snapshot was taken.
    pub fn pending_change(&self) -> Option<(&str, &str)> {
        let proposed = self.pending_content.as_deref()?;
        let original = self.previous_content.as_deref().unwrap_or(&self.content);
        Some((original, proposed))
    }
}

// ---------------------------------------------------------------------------
// Admin queues
// ---------------------------------------------------------------------------

/// Admin work queues, each a view over one [`WorkflowState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminQueue {
    AwaitingTriage,
    ReviewerSuggestions,
    AuthorRevisions,
    RevisionRequests,
}

impl AdminQueue {
    pub const ALL: [AdminQueue; 4] = [
        Self::AwaitingTriage,
        Self::ReviewerSuggestions,
        Self::AuthorRevisions,
        Self::RevisionRequests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingTriage => "awaiting-triage",
            Self::ReviewerSuggestions => "reviewer-suggestions",
            Self::AuthorRevisions => "author-revisions",
            Self::RevisionRequests => "revision-requests",
        }
    }

    pub fn state(&self) -> WorkflowState {
        match self {
            Self::AwaitingTriage => WorkflowState::AwaitingTriage,
            Self::ReviewerSuggestions => WorkflowState::ReviewerSuggestion,
            Self::AuthorRevisions => WorkflowState::RevisionSubmitted,
            Self::RevisionRequests => WorkflowState::RevisionRequested,
        }
    }

    /// Primary statuses an article in this queue can have.
    pub fn statuses(&self) -> &'static [ArticleStatus] {
        match self {
            Self::AwaitingTriage | Self::ReviewerSuggestions => &[ArticleStatus::Pending],
            Self::AuthorRevisions => &[ArticleStatus::Rejected, ArticleStatus::Pending],
            Self::RevisionRequests => &[ArticleStatus::Rejected],
        }
    }
}

impl std::str::FromStr for AdminQueue {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|queue| queue.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown queue '{s}'. Must be one of: awaiting-triage, reviewer-suggestions, author-revisions, revision-requests"
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an article title (non-blank, at most [`MAX_TITLE_LENGTH`] chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate article content (non-blank, at most [`MAX_CONTENT_LENGTH`] chars).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content must not be empty".into()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}
