//! Spelling recall: show the definition and phonetic cue, accept typed
//! input, and judge it against the term.

use super::{mismatch, Answer, AnswerFeedback, PracticeStrategy, Prompt};
use crate::error::Result;
use crate::session::{ReviewOutcome, Sequencer, SessionSummary};
use crate::spelling::check_spelling;
use crate::types::{PracticeMode, Word};

pub struct SpellingSession {
    seq: Sequencer,
}

impl SpellingSession {
    pub fn new(words: impl IntoIterator<Item = Word>, batch_size: usize) -> Self {
        Self {
            seq: Sequencer::new(words, batch_size),
        }
    }
}

impl PracticeStrategy for SpellingSession {
    fn mode(&self) -> PracticeMode {
        PracticeMode::Spelling
    }

    fn prompt(&self) -> Prompt<'_> {
        match self.seq.current() {
            Some(word) => Prompt::Spell { word },
            None => Prompt::Complete(self.seq.summary()),
        }
    }

    fn record_answer(&mut self, answer: Answer) -> Result<AnswerFeedback> {
        let typed = match answer {
            Answer::Typed(typed) => typed,
            _ => return Err(mismatch(self.mode())),
        };
        let Some(word) = self.seq.current() else {
            return Ok(AnswerFeedback {
                correct: false,
                expected: None,
                finalized: Vec::new(),
            });
        };
        let verdict = check_spelling(&typed, &word.term);
        let expected = (!verdict.correct).then(|| word.term.clone());
        let before = self.seq.outcomes().len();
        self.seq.advance(verdict.correct);
        Ok(AnswerFeedback {
            correct: verdict.correct,
            expected,
            finalized: self.seq.outcomes()[before..].to_vec(),
        })
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
    fn trimmed_case_insensitive_match_is_correct() {
        let mut session = SpellingSession::new(batch(1), 10);
        let feedback = session
            .record_answer(Answer::Typed("Term0 ".into()))
            .unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.expected, None);
        assert!(session.is_complete());
        assert_eq!(session.summary().correct, 1);
    }

    #[test]
    fn wrong_answer_reports_the_expected_term() {
        let mut session = SpellingSession::new(batch(1), 10);
        let feedback = session
            .record_answer(Answer::Typed("nope".into()))
            .unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.expected.as_deref(), Some("term0"));
        assert_eq!(session.summary().correct, 0);
    }

    #[test]
    fn wrong_answer_still_advances() {
        // No within-session retry: one verdict per word.
        let mut session = SpellingSession::new(batch(2), 10);
        session.record_answer(Answer::Typed("nope".into())).unwrap();
        assert_eq!(session.progress(), (1, 2));
    }

    #[test]
    fn self_report_is_rejected() {
        let mut session = SpellingSession::new(batch(1), 10);
        assert!(session.record_answer(Answer::SelfReport(true)).is_err());
    }
}
