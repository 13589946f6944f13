//! Per-article decision ledger.
//!
//! Holds the change spans of every article whose pending change set is being
//! reviewed, together with the admin's per-span decisions. The ledger lives in
//! memory only: a restart loses in-flight decisions, and the next fetch
//! recomputes the same spans (the aligner is deterministic) with every
//! decision reset. Fetches report such recomputation through
//! [`LedgerFetch::fresh`] so callers can tell the user.
//!
//! Each entry remembers the `(original, proposed)` texts its spans were
//! computed from. Spans are only ever handed out against the same texts, so
//! decisions made on one draft can never be applied to another.
//!
//! Designed to be wrapped in `Arc` and shared by the service; tests create
//! their own isolated instances.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::diff::{compute_change_spans, ChangeSpan, Decision, SpanId};
use crate::error::CoreError;
use crate::types::DbId;

/// Result of [`DecisionLedger::compute_or_fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerFetch {
    pub spans: Vec<ChangeSpan>,
    /// `true` when the spans were computed by this call, i.e. every decision
    /// is at its initial default.
    pub fresh: bool,
}

/// Spans of one article plus the texts they were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub original: String,
    pub proposed: String,
    pub spans: Vec<ChangeSpan>,
}

impl LedgerEntry {
    fn compute(original: &str, proposed: &str) -> Self {
        Self {
            original: original.to_string(),
            proposed: proposed.to_string(),
            spans: compute_change_spans(original, proposed),
        }
    }

    /// `true` if the spans describe exactly this change.
    pub fn covers(&self, original: &str, proposed: &str) -> bool {
        self.original == original && self.proposed == proposed
    }
}

#[derive(Debug, Default)]
pub struct DecisionLedger {
    entries: RwLock<HashMap<DbId, LedgerEntry>>,
}

impl DecisionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the article's spans, computing and storing them on first use.
    ///
    /// An entry computed from the same texts is returned with its decisions
    /// intact. An entry computed from other texts is stale and is replaced.
    pub async fn compute_or_fetch(
        &self,
        article_id: DbId,
        original: &str,
        proposed: &str,
    ) -> LedgerFetch {
        let mut entries = self.entries.write().await;
        match entries.entry(article_id) {
            Entry::Occupied(entry) if entry.get().covers(original, proposed) => LedgerFetch {
                spans: entry.get().spans.clone(),
                fresh: false,
            },
            Entry::Occupied(mut entry) => {
                let next = LedgerEntry::compute(original, proposed);
                tracing::info!(
                    article_id,
                    span_count = next.spans.len(),
                    "Pending change was replaced, recomputed change spans"
                );
                let spans = next.spans.clone();
                entry.insert(next);
                LedgerFetch { spans, fresh: true }
            }
            Entry::Vacant(entry) => {
                let next = LedgerEntry::compute(original, proposed);
                tracing::info!(
                    article_id,
                    span_count = next.spans.len(),
                    "Computed change spans for article"
                );
                LedgerFetch {
                    spans: entry.insert(next).spans.clone(),
                    fresh: true,
                }
            }
        }
    }

    /// Snapshot of the article's spans, if a ledger exists.
    pub async fn spans(&self, article_id: DbId) -> Option<Vec<ChangeSpan>> {
        self.entries
            .read()
            .await
            .get(&article_id)
            .map(|entry| entry.spans.clone())
    }

    /// Snapshot of the article's whole entry, texts included.
    pub async fn entry(&self, article_id: DbId) -> Option<LedgerEntry> {
        self.entries.read().await.get(&article_id).cloned()
    }

    /// Record an approve/reject decision for one span and return the updated list.
    ///
    /// Errors:
    /// - `Validation` when `decision` is `Pending`.
    /// - `NotFound` when the article has no ledger or the span does not exist.
    /// - `InvalidOperation` when the span is a `same` span.
    pub async fn set_decision(
        &self,
        article_id: DbId,
        span_id: SpanId,
        decision: Decision,
    ) -> Result<Vec<ChangeSpan>, CoreError> {
        if decision == Decision::Pending {
            return Err(CoreError::Validation(
                "Decision must be APPROVED or REJECTED".into(),
            ));
        }

        let mut entries = self.entries.write().await;
        let spans = &mut entries
            .get_mut(&article_id)
            .ok_or(CoreError::NotFound {
                entity: "ChangeLedger",
                id: article_id,
            })?
            .spans;

        let span = spans
            .iter_mut()
            .find(|s| s.id == span_id)
            .ok_or(CoreError::NotFound {
                entity: "ChangeSpan",
                id: DbId::from(span_id),
            })?;

        if span.is_same() {
            return Err(CoreError::InvalidOperation(
                "Cannot change the decision of an unchanged span".into(),
            ));
        }

        span.decision = decision;
        Ok(spans.clone())
    }

    /// Drop the article's ledger. Returns `true` if one existed.
    pub async fn clear(&self, article_id: DbId) -> bool {
        self.entries.write().await.remove(&article_id).is_some()
    }
}
