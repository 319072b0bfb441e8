//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single vocabulary entry owned by a user.
///
/// Invariants (see [`Word::check_invariants`]):
/// - `mastery` is always in `0..=100`
/// - `review_count == 0` exactly when `last_reviewed` is `None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: Uuid,
    pub term: String,
    pub definition: String,
    pub phonetic: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    pub review_count: u32,
    pub mastery: u8,
}

impl Word {
    /// Build a freshly created word: never reviewed, mastery 0.
    pub fn new(id: Uuid, draft: WordDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            term: draft.term,
            definition: draft.definition,
            phonetic: draft.phonetic,
            tags: draft.tags,
            created_at,
            last_reviewed: None,
            review_count: 0,
            mastery: 0,
        }
    }

    /// Validate the record invariants.
    ///
    /// `last_reviewed == None` is not a free-form flag: it must agree with
    /// `review_count` at all times.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.mastery > 100 {
            return Err(InvariantViolation::MasteryOutOfRange {
                mastery: self.mastery,
            });
        }
        match (self.review_count, self.last_reviewed) {
            (0, Some(_)) => Err(InvariantViolation::ReviewedWithZeroCount),
            (n, None) if n > 0 => Err(InvariantViolation::UnreviewedWithCount { count: n }),
            _ => Ok(()),
        }
    }
}

/// Violations of the word record invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("mastery {mastery} outside 0..=100")]
    MasteryOutOfRange { mastery: u8 },

    #[error("last_reviewed set while review_count is 0")]
    ReviewedWithZeroCount,

    #[error("review_count is {count} but last_reviewed is unset")]
    UnreviewedWithCount { count: u32 },
}

/// User-editable fields of a word, used when inserting a new record.
///
/// The backend assigns `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordDraft {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Practice mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeMode {
    Flashcard,
    Spelling,
    Matching,
}

impl PracticeMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flashcard => "flashcard",
            Self::Spelling => "spelling",
            Self::Matching => "matching",
        }
    }

    /// Parse from string. `flash` is accepted as shorthand.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "flashcard" | "flash" => Some(Self::Flashcard),
            "spelling" => Some(Self::Spelling),
            "matching" => Some(Self::Matching),
            _ => None,
        }
    }
}
