//! Whitespace-preserving word tokenizer.
//!
//! Text is split into alternating runs of whitespace and non-whitespace.
//! Whitespace runs are kept as tokens of their own so that concatenating the
//! tokens in order always reproduces the input byte for byte.

/// Split `text` into maximal whitespace and non-whitespace runs.
///
/// An empty input yields no tokens; no token is ever empty.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (idx, ch) in text.char_indices() {
        let ws = ch.is_whitespace();
        match in_whitespace {
            Some(prev) if prev != ws => {
                tokens.push(&text[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_whitespace = Some(ws);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}
