//! Flashcard recall: show the term, reveal the definition on demand, and
//! let the learner self-report the verdict.

use super::{mismatch, Answer, AnswerFeedback, PracticeStrategy, Prompt};
use crate::error::Result;
use crate::session::{ReviewOutcome, Sequencer, SessionSummary};
use crate::types::{PracticeMode, Word};

pub struct FlashcardSession {
    seq: Sequencer,
    revealed: bool,
}

impl FlashcardSession {
    pub fn new(words: impl IntoIterator<Item = Word>, batch_size: usize) -> Self {
        Self {
            seq: Sequencer::new(words, batch_size),
            revealed: false,
        }
    }
}

impl PracticeStrategy for FlashcardSession {
    fn mode(&self) -> PracticeMode {
        PracticeMode::Flashcard
    }

    fn prompt(&self) -> Prompt<'_> {
        match self.seq.current() {
            Some(word) => Prompt::Card {
                word,
                revealed: self.revealed,
            },
            None => Prompt::Complete(self.seq.summary()),
        }
    }

    fn record_answer(&mut self, answer: Answer) -> Result<AnswerFeedback> {
        let correct = match answer {
            Answer::SelfReport(correct) => correct,
            _ => return Err(mismatch(self.mode())),
        };
        let before = self.seq.outcomes().len();
        self.seq.advance(correct);
        // Next card starts face down.
        self.revealed = false;
        Ok(AnswerFeedback {
            correct,
            expected: None,
            finalized: self.seq.outcomes()[before..].to_vec(),
        })
    }

    fn flip(&mut self) {
        if !self.seq.is_complete() {
            self.revealed = !self.revealed;
        }
    }

    fn is_complete(&self) -> bool {
        self.seq.is_complete()
    }

    fn progress(&self) -> (usize, usize) {
        (self.seq.position(), self.seq.len())
    }

    fn outcomes(&self) -> &[ReviewOutcome] {
        self.seq.outcomes()
    }

    fn summary(&self) -> SessionSummary {
        self.seq.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::test_support::batch;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_word_incorrect_completes_with_zero_of_one() {
        let mut session = FlashcardSession::new(batch(1), 10);
        assert!(!session.is_complete());
        let feedback = session.record_answer(Answer::SelfReport(false)).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.finalized.len(), 1);
        assert!(session.is_complete());
        assert_eq!(
            session.summary(),
            SessionSummary {
                correct: 0,
                total: 1
            }
        );
    }

    #[test]
    fn flip_toggles_and_resets_on_advance() {
        let mut session = FlashcardSession::new(batch(2), 10);
        session.flip();
        match session.prompt() {
            Prompt::Card { revealed, .. } => assert!(revealed),
            other => panic!("unexpected prompt: {other:?}"),
        }
        session.flip();
        match session.prompt() {
            Prompt::Card { revealed, .. } => assert!(!revealed),
            other => panic!("unexpected prompt: {other:?}"),
        }
        session.flip();
        session.record_answer(Answer::SelfReport(true)).unwrap();
        match session.prompt() {
            Prompt::Card { revealed, .. } => assert!(!revealed),
            other => panic!("unexpected prompt: {other:?}"),
        }
    }

    #[test]
    fn typed_answer_is_rejected() {
        let mut session = FlashcardSession::new(batch(1), 10);
        assert!(session
            .record_answer(Answer::Typed("cat".into()))
            .is_err());
    }

    #[test]
    fn progress_counts_answered_words() {
        let mut session = FlashcardSession::new(batch(3), 10);
        assert_eq!(session.progress(), (0, 3));
        session.record_answer(Answer::SelfReport(true)).unwrap();
        assert_eq!(session.progress(), (1, 3));
    }
}
