//! Spelling verdict for typed answers.

use serde::Serialize;

/// Result of checking a typed answer against the expected term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellingVerdict {
    /// Whether the answer is considered correct.
    pub correct: bool,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized expected term (for display).
    pub expected_normalized: String,
}

/// Compare a typed answer against the expected term.
///
/// Verdict rule: case-insensitive, whitespace-trimmed exact match.
pub fn check_spelling(typed: &str, term: &str) -> SpellingVerdict {
    let typed_normalized = normalize(typed);
    let expected_normalized = normalize(term);
    SpellingVerdict {
        correct: typed_normalized == expected_normalized,
        typed_normalized,
        expected_normalized,
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
