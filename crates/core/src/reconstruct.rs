//! Final-text reconstruction from a fully decided span list.

use crate::diff::{ChangeKind, ChangeSpan, Decision};
use crate::error::CoreError;

/// Assemble the final text from decided spans, in span order.
///
/// - `same` text is always kept.
/// - `added` text is kept only when the addition was approved.
/// - `removed` text is kept only when the removal was rejected, i.e. the
///   original wording survives.
///
/// Fails with [`CoreError::IncompleteDecision`] while any non-`same` span is
/// still pending.
pub fn reconstruct(spans: &[ChangeSpan]) -> Result<String, CoreError> {
    let pending = spans.iter().filter(|s| s.is_undecided()).count();
    if pending > 0 {
        return Err(CoreError::IncompleteDecision { pending });
    }

    let mut text = String::with_capacity(spans.iter().map(|s| s.text.len()).sum());
    for span in spans {
        let keep = match (span.kind, span.decision) {
            (ChangeKind::Same, _) => true,
            (ChangeKind::Added, decision) => decision == Decision::Approved,
            (ChangeKind::Removed, decision) => decision == Decision::Rejected,
        };
        if keep {
            text.push_str(&span.text);
        }
    }
    Ok(text)
}
