//! Practice mode strategies.
//!
//! Three interchangeable session behaviors share one contract: present the
//! current word(s), turn an answer into a correctness verdict, and hand the
//! outcome to the session sequencer. The mode is selected once at session
//! start via [`start_session`]; there is no mid-session mode switching.

pub mod flashcard;
pub mod matching;
pub mod spelling;

use uuid::Uuid;

use crate::error::{Result, SessionError};
use crate::session::{ReviewOutcome, SessionSummary};
use crate::types::{PracticeMode, Word};

pub use matching::{Board, BOARD_SIZE};

/// Answer shapes, one per mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// Flashcard: the learner self-reports correctness.
    SelfReport(bool),
    /// Spelling: free-text input checked against the term.
    Typed(String),
    /// Matching: a chosen (term, definition) pairing.
    Pair { term_id: Uuid, definition: String },
}

/// What the session wants shown next.
#[derive(Debug)]
pub enum Prompt<'a> {
    Card { word: &'a Word, revealed: bool },
    Spell { word: &'a Word },
    Board(&'a Board),
    Complete(SessionSummary),
}

/// Result of recording one answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerFeedback {
    /// Verdict of this answer.
    pub correct: bool,
    /// The expected term, set when a spelling answer was wrong.
    pub expected: Option<String>,
    /// Outcomes newly committed to the sequencer by this answer. Empty for
    /// matching attempts that leave the board unfinished.
    pub finalized: Vec<ReviewOutcome>,
}

/// Shared contract for practice sessions.
pub trait PracticeStrategy {
    fn mode(&self) -> PracticeMode;

    /// What to present next.
    fn prompt(&self) -> Prompt<'_>;

    /// Record an answer and advance where the mode allows it.
    fn record_answer(&mut self, answer: Answer) -> Result<AnswerFeedback>;

    /// Toggle the flashcard reveal. No-op for other modes.
    fn flip(&mut self) {}

    fn is_complete(&self) -> bool;

    /// (answered, total) for progress display.
    fn progress(&self) -> (usize, usize);

    fn outcomes(&self) -> &[ReviewOutcome];

    fn summary(&self) -> SessionSummary;
}

impl std::fmt::Debug for dyn PracticeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticeStrategy")
            .field("mode", &self.mode())
            .finish_non_exhaustive()
    }
}

/// Start a session in the given mode over the first `batch_size` words.
///
/// The matching mode needs at least [`BOARD_SIZE`] words and reports
/// `InsufficientData` otherwise; the other modes accept any batch, an empty
/// one yielding an already-complete session.
pub fn start_session(
    mode: PracticeMode,
    words: Vec<Word>,
    batch_size: usize,
) -> Result<Box<dyn PracticeStrategy>> {
    match mode {
        PracticeMode::Flashcard => Ok(Box::new(flashcard::FlashcardSession::new(
            words, batch_size,
        ))),
        PracticeMode::Spelling => Ok(Box::new(spelling::SpellingSession::new(words, batch_size))),
        PracticeMode::Matching => {
            let session = matching::MatchingSession::new(words, batch_size)?;
            Ok(Box::new(session))
        }
    }
}

pub(crate) fn mismatch(mode: PracticeMode) -> SessionError {
    SessionError::AnswerMismatch {
        mode: mode.as_str(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_support::batch;

    #[test]
    fn factory_dispatches_on_mode() {
        let session = start_session(PracticeMode::Flashcard, batch(3), 10).unwrap();
        assert_eq!(session.mode(), PracticeMode::Flashcard);
        let session = start_session(PracticeMode::Spelling, batch(3), 10).unwrap();
        assert_eq!(session.mode(), PracticeMode::Spelling);
        let session = start_session(PracticeMode::Matching, batch(4), 10).unwrap();
        assert_eq!(session.mode(), PracticeMode::Matching);
    }

    #[test]
    fn matching_under_four_words_is_insufficient() {
        let err = start_session(PracticeMode::Matching, batch(3), 10).unwrap_err();
        match err {
            SessionError::InsufficientData {
                required,
                available,
            } => {
                assert_eq!(required, BOARD_SIZE);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_flashcard_session_is_complete_at_start() {
        let session = start_session(PracticeMode::Flashcard, Vec::new(), 10).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.summary().total, 0);
    }
}
