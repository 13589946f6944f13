//! Word-level change spans between an original and a proposed text.
//!
//! Both texts are tokenized with [`tokenize`], aligned with a
//! longest-common-subsequence table, and the resulting per-token operations
//! are grouped into maximal runs ("spans") of the same [`ChangeKind`].
//!
//! The table is dense, so time and memory are `O(n * m)` in the token counts.
//! That is fine for article-length text but is a known limit for very large
//! documents.

use serde::{Deserialize, Serialize};

use crate::tokenizer::tokenize;

/// Span ids are 1-based and only stable within one diff computation.
pub type SpanId = u32;

/// Classification of a span relative to the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present in both texts.
    Same,
    /// Present only in the proposed text.
    Added,
    /// Present only in the original text.
    Removed,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin decision attached to a span.
///
/// `same` spans are always `Approved`; the other kinds start out `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Approved,
    Rejected,
    Pending,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One maximal run of identically classified tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSpan {
    pub id: SpanId,
    pub kind: ChangeKind,
    pub text: String,
    pub decision: Decision,
}

impl ChangeSpan {
    pub fn is_same(&self) -> bool {
        self.kind == ChangeKind::Same
    }

    /// A non-`same` span that has not been approved or rejected yet.
    pub fn is_undecided(&self) -> bool {
        !self.is_same() && self.decision == Decision::Pending
    }
}

/// Compute the ordered change spans turning `original` into `proposed`.
///
/// Concatenating the `same` and `removed` spans reproduces `original`;
/// concatenating the `same` and `added` spans reproduces `proposed`.
///
/// When backtracking hits a tie between consuming from the original
/// (upward) and from the proposed text (leftward), the original token is
/// consumed first and reported as `removed`. Because backtracking runs from
/// the end, a replaced word therefore shows up as `added` followed by
/// `removed` in the final span order.
pub fn compute_change_spans(original: &str, proposed: &str) -> Vec<ChangeSpan> {
    let old_tokens = tokenize(original);
    let new_tokens = tokenize(proposed);
    let n = old_tokens.len();
    let m = new_tokens.len();

    // Build LCS table.
    let mut lcs = vec![vec![0u32; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            if old_tokens[i - 1] == new_tokens[j - 1] {
                lcs[i][j] = lcs[i - 1][j - 1] + 1;
            } else {
                lcs[i][j] = lcs[i - 1][j].max(lcs[i][j - 1]);
            }
        }
    }

    // Backtrack from the bottom-right corner, emitting operations end-to-start.
    let mut ops: Vec<(ChangeKind, &str)> = Vec::with_capacity(n + m);
    let mut i = n;
    let mut j = m;
    while i > 0 && j > 0 {
        if old_tokens[i - 1] == new_tokens[j - 1] {
            ops.push((ChangeKind::Same, old_tokens[i - 1]));
            i -= 1;
            j -= 1;
        } else if lcs[i - 1][j] >= lcs[i][j - 1] {
            ops.push((ChangeKind::Removed, old_tokens[i - 1]));
            i -= 1;
        } else {
            ops.push((ChangeKind::Added, new_tokens[j - 1]));
            j -= 1;
        }
    }
    while i > 0 {
        ops.push((ChangeKind::Removed, old_tokens[i - 1]));
        i -= 1;
    }
    while j > 0 {
        ops.push((ChangeKind::Added, new_tokens[j - 1]));
        j -= 1;
    }

    ops.reverse();
    group_operations(ops)
}

/// Merge consecutive operations of the same kind, drop empty runs, and
/// number the survivors from 1.
fn group_operations(ops: Vec<(ChangeKind, &str)>) -> Vec<ChangeSpan> {
    let mut runs: Vec<(ChangeKind, String)> = Vec::new();
    for (kind, text) in ops {
        if let Some((last_kind, last_text)) = runs.last_mut() {
            if *last_kind == kind {
                last_text.push_str(text);
                continue;
            }
        }
        runs.push((kind, text.to_string()));
    }

    runs.into_iter()
        .filter(|(_, text)| !text.is_empty())
        .zip(1..)
        .map(|((kind, text), id)| ChangeSpan {
            id,
            kind,
            text,
            decision: match kind {
                ChangeKind::Same => Decision::Approved,
                ChangeKind::Added | ChangeKind::Removed => Decision::Pending,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::reconstruct::reconstruct;

    fn side(spans: &[ChangeSpan], keep: ChangeKind) -> String {
        spans
            .iter()
            .filter(|s| s.kind == ChangeKind::Same || s.kind == keep)
            .map(|s| s.text.as_str())
            .collect()
    }

    fn summary(spans: &[ChangeSpan]) -> Vec<(ChangeKind, &str)> {
        spans.iter().map(|s| (s.kind, s.text.as_str())).collect()
    }

    // -- shape ---------------------------------------------------------------

    #[test]
    fn identical_texts_yield_single_same_span() {
        let spans = compute_change_spans("Hello brave world", "Hello brave world");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].id, 1);
        assert_eq!(spans[0].kind, ChangeKind::Same);
        assert_eq!(spans[0].text, "Hello brave world");
        assert_eq!(spans[0].decision, Decision::Approved);
    }

    #[test]
    fn both_empty_yield_no_spans() {
        assert!(compute_change_spans("", "").is_empty());
    }

    #[test]
    fn empty_original_is_one_addition() {
        let spans = compute_change_spans("", "brand new text");
        assert_eq!(summary(&spans), vec![(ChangeKind::Added, "brand new text")]);
        assert_eq!(spans[0].decision, Decision::Pending);
    }

    #[test]
    fn empty_proposed_is_one_removal() {
        let spans = compute_change_spans("old words", "");
        assert_eq!(summary(&spans), vec![(ChangeKind::Removed, "old words")]);
    }

    #[test]
    fn replaced_word_orders_added_before_removed() {
        let spans = compute_change_spans("The cat sat", "The dog sat");
        assert_eq!(
            summary(&spans),
            vec![
                (ChangeKind::Same, "The "),
                (ChangeKind::Added, "dog"),
                (ChangeKind::Removed, "cat"),
                (ChangeKind::Same, " sat"),
            ]
        );
        let ids: Vec<SpanId> = spans.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn tie_prefers_consuming_original_first() {
        // "a" vs "b": both neighbours hold LCS 0, so "a" is consumed first
        // while backtracking and ends up last after reversal.
        let spans = compute_change_spans("a", "b");
        assert_eq!(
            summary(&spans),
            vec![(ChangeKind::Added, "b"), (ChangeKind::Removed, "a")]
        );
    }

    #[test]
    fn appended_words_form_one_added_span() {
        let spans = compute_change_spans("Hello", "Hello big world");
        assert_eq!(
            summary(&spans),
            vec![
                (ChangeKind::Same, "Hello"),
                (ChangeKind::Added, " big world"),
            ]
        );
    }

    #[test]
    fn deleted_middle_word_is_one_removed_span() {
        let spans = compute_change_spans("keep this word", "keep word");
        assert_eq!(side(&spans, ChangeKind::Removed), "keep this word");
        assert_eq!(side(&spans, ChangeKind::Added), "keep word");
        assert!(spans.iter().all(|s| s.kind != ChangeKind::Added));
    }

    #[test]
    fn whitespace_change_is_tracked() {
        let spans = compute_change_spans("a b", "a  b");
        assert!(spans.iter().any(|s| s.kind == ChangeKind::Added && s.text == "  "));
        assert!(spans.iter().any(|s| s.kind == ChangeKind::Removed && s.text == " "));
    }

    #[test]
    fn same_spans_are_approved_others_pending() {
        let spans = compute_change_spans("one two three", "one 2 three four");
        for span in &spans {
            match span.kind {
                ChangeKind::Same => assert_eq!(span.decision, Decision::Approved),
                _ => assert_eq!(span.decision, Decision::Pending),
            }
        }
    }

    #[test]
    fn adjacent_spans_never_share_a_kind() {
        let spans = compute_change_spans(
            "the quick brown fox jumps over the lazy dog",
            "a quick red fox leaped over two lazy dogs",
        );
        for pair in spans.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
        assert!(spans.iter().all(|s| !s.text.is_empty()));
    }

    // -- coverage ------------------------------------------------------------

    #[test]
    fn coverage_holds_for_assorted_pairs() {
        let pairs = [
            ("", ""),
            ("", "x"),
            ("x", ""),
            ("The cat sat", "The dog sat"),
            ("  leading", "leading  "),
            ("line one\nline two\n", "line one\nline 2\nline three\n"),
            ("repeat repeat repeat", "repeat"),
            ("a b c d e", "e d c b a"),
            ("tabs\tand\tspaces", "tabs and spaces"),
        ];
        for (original, proposed) in pairs {
            let spans = compute_change_spans(original, proposed);
            assert_eq!(side(&spans, ChangeKind::Removed), original, "original side of {original:?}");
            assert_eq!(side(&spans, ChangeKind::Added), proposed, "proposed side of {proposed:?}");
        }
    }

    #[test]
    fn is_deterministic() {
        let a = compute_change_spans("we wrote this draft", "they wrote that draft today");
        let b = compute_change_spans("we wrote this draft", "they wrote that draft today");
        assert_eq!(a, b);
    }

    /// Short texts drawn from a tiny vocabulary so that random pairs share
    /// words and whitespace runs.
    fn text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop_oneof!["[a-d]{1,3}", "[ \t\n]{1,2}"], 0..12)
            .prop_map(|tokens| tokens.concat())
    }

    fn decide_every(spans: &mut [ChangeSpan], decision: Decision) {
        for span in spans.iter_mut().filter(|s| !s.is_same()) {
            span.decision = decision;
        }
    }

    proptest! {
        #[test]
        fn every_pair_is_covered(original in text(), proposed in text()) {
            let spans = compute_change_spans(&original, &proposed);
            prop_assert_eq!(side(&spans, ChangeKind::Removed), original);
            prop_assert_eq!(side(&spans, ChangeKind::Added), proposed);
            prop_assert!(spans.iter().all(|s| !s.text.is_empty()));
            prop_assert!(spans.windows(2).all(|w| w[0].kind != w[1].kind));
        }

        #[test]
        fn uniform_decisions_restore_either_side(original in text(), proposed in text()) {
            let mut spans = compute_change_spans(&original, &proposed);
            decide_every(&mut spans, Decision::Approved);
            prop_assert_eq!(reconstruct(&spans).unwrap(), proposed);
            decide_every(&mut spans, Decision::Rejected);
            prop_assert_eq!(reconstruct(&spans).unwrap(), original);
        }
    }

    // -- serde ---------------------------------------------------------------

    #[test]
    fn span_serializes_with_wire_names() {
        let span = ChangeSpan {
            id: 3,
            kind: ChangeKind::Removed,
            text: "cat".into(),
            decision: Decision::Pending,
        };
        let json = serde_json::to_value(&span).unwrap();
        assert_eq!(json["kind"], "removed");
        assert_eq!(json["decision"], "PENDING");
        assert_eq!(json["id"], 3);
    }
}
