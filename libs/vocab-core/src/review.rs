//! Review outcome policy.
//!
//! Maps (current word state, correctness) to the next word state. The
//! mastery adjustment is a fixed configurable step, not an adaptive
//! scheduler; tune [`ReviewPolicy::mastery_step`] rather than hardcoding.

use chrono::{DateTime, Utc};

use crate::types::Word;

/// Policy with a configurable mastery step.
#[derive(Debug, Clone, Copy)]
pub struct ReviewPolicy {
    /// Points added on a correct answer and removed on an incorrect one,
    /// clamped so mastery stays in 0..=100.
    pub mastery_step: u8,
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self { mastery_step: 10 }
    }
}

impl ReviewPolicy {
    /// Apply one review outcome to a word.
    ///
    /// Pure: returns the updated record, touching only `mastery`,
    /// `review_count` and `last_reviewed`. Persistence is the caller's
    /// responsibility. Not idempotent: every call counts as one review.
    pub fn apply(&self, word: &Word, correct: bool, now: DateTime<Utc>) -> Word {
        let mastery = if correct {
            word.mastery.saturating_add(self.mastery_step).min(100)
        } else {
            word.mastery.saturating_sub(self.mastery_step)
        };

        Word {
            mastery,
            review_count: word.review_count + 1,
            last_reviewed: Some(now),
            ..word.clone()
        }
    }
}
