//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors produced when driving a practice session.
///
/// Normal inputs never error: an empty batch starts an already-complete
/// session, and wrong answers are data, not failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selected mode needs more words than the caller supplied.
    #[error("not enough words for this mode: need {required}, have {available}")]
    InsufficientData { required: usize, available: usize },

    /// An answer shape that does not belong to the active mode.
    #[error("answer does not match the {mode} mode")]
    AnswerMismatch { mode: &'static str },
}
