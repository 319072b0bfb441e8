//! Vocabulary statistics for the dashboard.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Word;

/// Mastery percentage at or above which a word counts as mastered.
pub const MASTERED_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VocabularyStats {
    pub total_words: usize,
    pub total_reviews: u64,
    pub mastered_words: usize,
    /// Mean mastery across all words, 0.0 for an empty vocabulary.
    pub average_mastery: f64,
    /// Words whose last review falls on the same UTC calendar day as `now`.
    pub reviewed_today: usize,
}

/// Compute dashboard counters over the whole vocabulary.
pub fn summarize(words: &[Word], now: DateTime<Utc>) -> VocabularyStats {
    let total_words = words.len();
    let total_reviews = words.iter().map(|w| u64::from(w.review_count)).sum();
    let mastered_words = words
        .iter()
        .filter(|w| w.mastery >= MASTERED_THRESHOLD)
        .count();
    let average_mastery = if total_words == 0 {
        0.0
    } else {
        words.iter().map(|w| f64::from(w.mastery)).sum::<f64>() / total_words as f64
    };
    let today = now.date_naive();
    let reviewed_today = words
        .iter()
        .filter(|w| w.last_reviewed.is_some_and(|t| t.date_naive() == today))
        .count();

    VocabularyStats {
        total_words,
        total_reviews,
        mastered_words,
        average_mastery,
        reviewed_today,
    }
}
