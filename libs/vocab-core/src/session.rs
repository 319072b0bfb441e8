//! Session sequencer: orders a batch of words into a practice queue,
//! records outcomes, and detects completion.

use serde::Serialize;
use uuid::Uuid;

use crate::types::Word;

/// One recorded correctness signal for one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReviewOutcome {
    pub word_id: Uuid,
    pub correct: bool,
}

/// Session totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub correct: usize,
    pub total: usize,
}

/// Ordered practice queue with a cursor and accumulated outcomes.
///
/// Takes words in the order supplied by the caller; there is no internal
/// relevance ranking and no within-session retry of a word.
#[derive(Debug, Clone)]
pub struct Sequencer {
    words: Vec<Word>,
    cursor: usize,
    outcomes: Vec<ReviewOutcome>,
}

impl Sequencer {
    /// Take the first `batch_size` words and start at the head of the queue.
    ///
    /// An empty batch yields a session that is complete from the start.
    pub fn new(words: impl IntoIterator<Item = Word>, batch_size: usize) -> Self {
        let words: Vec<Word> = words.into_iter().take(batch_size).collect();
        Self {
            words,
            cursor: 0,
            outcomes: Vec::new(),
        }
    }

    /// The word under the cursor, or `None` once the session is complete.
    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.cursor)
    }

    /// The next `n` words starting at the cursor (may be shorter at the
    /// tail). Used by grouped modes.
    pub fn current_group(&self, n: usize) -> &[Word] {
        let end = (self.cursor + n).min(self.words.len());
        &self.words[self.cursor..end]
    }

    /// Record one outcome for the word under the cursor and move on.
    ///
    /// No-op once complete.
    pub fn advance(&mut self, correct: bool) {
        if let Some(word) = self.words.get(self.cursor) {
            self.outcomes.push(ReviewOutcome {
                word_id: word.id,
                correct,
            });
            self.cursor += 1;
        }
    }

    /// Record outcomes for a whole group and advance past it.
    ///
    /// `outcomes` must carry one entry per word in the group, in queue
    /// order; extra entries beyond the remaining queue are ignored.
    pub fn advance_group(&mut self, outcomes: &[bool]) {
        for &correct in outcomes {
            self.advance(correct);
        }
    }

    /// Drop queue entries past the largest multiple of `n`.
    ///
    /// Grouped modes call this at session start so every group is full.
    pub fn truncate_to_multiple_of(&mut self, n: usize) {
        if n > 0 {
            let len = self.words.len() - self.words.len() % n;
            self.words.truncate(len);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.words.len()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Zero-based position of the cursor, capped at the queue length.
    pub fn position(&self) -> usize {
        self.cursor.min(self.words.len())
    }

    pub fn outcomes(&self) -> &[ReviewOutcome] {
        &self.outcomes
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            correct: self.outcomes.iter().filter(|o| o.correct).count(),
            total: self.outcomes.len(),
        }
    }
}
