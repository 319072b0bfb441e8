//! Pairwise matching: four words dealt as two shuffled columns, resolved
//! pair by pair.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use uuid::Uuid;

use super::{mismatch, Answer, AnswerFeedback, PracticeStrategy, Prompt};
use crate::error::{Result, SessionError};
use crate::session::{ReviewOutcome, Sequencer, SessionSummary};
use crate::types::{PracticeMode, Word};

/// Words per matching board.
pub const BOARD_SIZE: usize = 4;

/// Result of attempting one pairing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PairResult {
    /// The chosen definition belongs to the chosen term.
    Matched,
    /// Wrong definition; the pair stays open.
    Wrong,
    /// The term was already resolved; nothing changes.
    AlreadyResolved,
    /// The term is not on this board.
    UnknownTerm,
}

/// One dealt group of words with shuffled term and definition columns.
#[derive(Debug, Clone)]
pub struct Board {
    words: Vec<Word>,
    term_order: Vec<Uuid>,
    definition_order: Vec<String>,
    resolved: HashSet<Uuid>,
    missed: HashSet<Uuid>,
}

impl Board {
    fn deal(group: &[Word]) -> Self {
        let words = group.to_vec();
        let mut term_order: Vec<Uuid> = words.iter().map(|w| w.id).collect();
        let mut definition_order: Vec<String> =
            words.iter().map(|w| w.definition.clone()).collect();
        let mut rng = rand::thread_rng();
        term_order.shuffle(&mut rng);
        definition_order.shuffle(&mut rng);
        Self {
            words,
            term_order,
            definition_order,
            resolved: HashSet::new(),
            missed: HashSet::new(),
        }
    }

    /// Term column in display (shuffled) order.
    pub fn terms(&self) -> Vec<(Uuid, &str)> {
        self.term_order
            .iter()
            .filter_map(|id| {
                self.words
                    .iter()
                    .find(|w| w.id == *id)
                    .map(|w| (w.id, w.term.as_str()))
            })
            .collect()
    }

    /// Definition column in display (shuffled) order.
    pub fn definitions(&self) -> &[String] {
        &self.definition_order
    }

    pub fn is_resolved(&self, term_id: Uuid) -> bool {
        self.resolved.contains(&term_id)
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    pub fn size(&self) -> usize {
        self.words.len()
    }

    fn try_pair(&mut self, term_id: Uuid, definition: &str) -> PairResult {
        let Some(word) = self.words.iter().find(|w| w.id == term_id) else {
            return PairResult::UnknownTerm;
        };
        if self.resolved.contains(&term_id) {
            return PairResult::AlreadyResolved;
        }
        if word.definition == definition {
            self.resolved.insert(term_id);
            PairResult::Matched
        } else {
            self.missed.insert(term_id);
            PairResult::Wrong
        }
    }

    /// Solved once every pair on the board is resolved. Checked against the
    /// resolved set after insertion, never by comparing pre/post sizes.
    fn is_solved(&self) -> bool {
        self.resolved.len() == self.words.len()
    }

    /// Per-word verdicts in queue order: correct iff the pair resolved
    /// without a single wrong attempt naming that term.
    fn outcome_flags(&self) -> Vec<bool> {
        self.words
            .iter()
            .map(|w| !self.missed.contains(&w.id))
            .collect()
    }
}

pub struct MatchingSession {
    seq: Sequencer,
    board: Option<Board>,
}

impl MatchingSession {
    /// Fails with `InsufficientData` when fewer than [`BOARD_SIZE`] words
    /// are available; otherwise the queue is truncated to whole boards.
    pub fn new(words: impl IntoIterator<Item = Word>, batch_size: usize) -> Result<Self> {
        let mut seq = Sequencer::new(words, batch_size);
        if seq.len() < BOARD_SIZE {
            return Err(SessionError::InsufficientData {
                required: BOARD_SIZE,
                available: seq.len(),
            });
        }
        seq.truncate_to_multiple_of(BOARD_SIZE);
        let board = Some(Board::deal(seq.current_group(BOARD_SIZE)));
        Ok(Self { seq, board })
    }

    /// The active board, or `None` once the session is complete.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }
}

impl PracticeStrategy for MatchingSession {
    fn mode(&self) -> PracticeMode {
        PracticeMode::Matching
    }

    fn prompt(&self) -> Prompt<'_> {
        match &self.board {
            Some(board) => Prompt::Board(board),
            None => Prompt::Complete(self.seq.summary()),
        }
    }

    fn record_answer(&mut self, answer: Answer) -> Result<AnswerFeedback> {
        let (term_id, definition) = match answer {
            Answer::Pair {
                term_id,
                definition,
            } => (term_id, definition),
            _ => return Err(mismatch(self.mode())),
        };
        let Some(board) = self.board.as_mut() else {
            return Ok(AnswerFeedback {
                correct: false,
                expected: None,
                finalized: Vec::new(),
            });
        };

        match board.try_pair(term_id, &definition) {
            PairResult::UnknownTerm => Err(mismatch(PracticeMode::Matching)),
            PairResult::Wrong | PairResult::AlreadyResolved => Ok(AnswerFeedback {
                correct: false,
                expected: None,
                finalized: Vec::new(),
            }),
            PairResult::Matched => {
                if !board.is_solved() {
                    return Ok(AnswerFeedback {
                        correct: true,
                        expected: None,
                        finalized: Vec::new(),
                    });
                }
                // Board done: commit the four verdicts and deal the next.
                let flags = board.outcome_flags();
                let before = self.seq.outcomes().len();
                self.seq.advance_group(&flags);
                let finalized = self.seq.outcomes()[before..].to_vec();
                self.board = if self.seq.is_complete() {
                    None
                } else {
                    Some(Board::deal(self.seq.current_group(BOARD_SIZE)))
                };
                Ok(AnswerFeedback {
                    correct: true,
                    expected: None,
                    finalized,
                })
            }
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
