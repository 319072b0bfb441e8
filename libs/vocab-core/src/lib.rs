//! Core vocabulary-trainer library shared by client applications.
//!
//! Provides:
//! - Word records and their invariants
//! - Review outcome policy (mastery / review-count updates)
//! - Session sequencer and the three practice mode strategies
//! - Spelling verdicts, guided learning steps, search and statistics

pub mod error;
pub mod learning;
pub mod modes;
pub mod review;
pub mod search;
pub mod session;
pub mod spelling;
pub mod stats;
pub mod types;

pub use error::{Result, SessionError};
pub use learning::{LearningStep, LearningSteps, StepKind};
pub use modes::{start_session, Answer, AnswerFeedback, Board, PracticeStrategy, Prompt, BOARD_SIZE};
pub use review::ReviewPolicy;
pub use search::{all_tags, filter_words, recent_words};
pub use session::{ReviewOutcome, Sequencer, SessionSummary};
pub use spelling::{check_spelling, SpellingVerdict};
pub use stats::{summarize, VocabularyStats, MASTERED_THRESHOLD};
pub use types::{InvariantViolation, PracticeMode, Word, WordDraft};
