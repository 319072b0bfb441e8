//! Guided learning steps for a single word.
//!
//! A fixed four-step sequence (read the definition, read the term, spell
//! the term out letter by letter, read the term again) cycled three times
//! before the word counts as learned. Speaking the term aloud is a UI
//! concern; steps only carry a hint for it.

use serde::Serialize;

use crate::types::Word;

/// How many times the step sequence repeats.
pub const REPETITIONS: u32 = 3;

/// The four step kinds, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    ReadDefinition,
    ReadTerm,
    SpellOut,
    ReadTermAgain,
}

const STEP_ORDER: [StepKind; 4] = [
    StepKind::ReadDefinition,
    StepKind::ReadTerm,
    StepKind::SpellOut,
    StepKind::ReadTermAgain,
];

/// One presented step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningStep {
    pub kind: StepKind,
    /// The text to display for this step.
    pub content: String,
    /// Whether the UI should speak the term aloud for this step.
    pub speak_hint: bool,
}

/// Step cursor over one word.
#[derive(Debug, Clone)]
pub struct LearningSteps {
    word: Word,
    step: usize,
    repetition: u32,
    done: bool,
}

impl LearningSteps {
    pub fn new(word: Word) -> Self {
        Self {
            word,
            step: 0,
            repetition: 0,
            done: false,
        }
    }

    /// The step under the cursor, or `None` once finished.
    pub fn current(&self) -> Option<LearningStep> {
        if self.done {
            return None;
        }
        let kind = STEP_ORDER[self.step];
        let (content, speak_hint) = match kind {
            StepKind::ReadDefinition => (self.word.definition.clone(), false),
            StepKind::ReadTerm | StepKind::ReadTermAgain => (self.word.term.clone(), true),
            StepKind::SpellOut => (spell_out(&self.word.term), false),
        };
        Some(LearningStep {
            kind,
            content,
            speak_hint,
        })
    }

    /// Move to the next step; returns `true` once the final repetition of
    /// the final step has been passed.
    pub fn advance(&mut self) -> bool {
        if self.done {
            return true;
        }
        if self.step + 1 < STEP_ORDER.len() {
            self.step += 1;
        } else if self.repetition + 1 < REPETITIONS {
            self.step = 0;
            self.repetition += 1;
        } else {
            self.done = true;
        }
        self.done
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// (current repetition, total repetitions), 1-based for display.
    pub fn repetition(&self) -> (u32, u32) {
        (self.repetition.min(REPETITIONS - 1) + 1, REPETITIONS)
    }

    /// (current step, steps per repetition), 1-based for display.
    pub fn step(&self) -> (usize, usize) {
        (self.step + 1, STEP_ORDER.len())
    }

    pub fn word(&self) -> &Word {
        &self.word
    }
}

/// Letters joined by dashes: `cat` becomes `c-a-t`.
fn spell_out(term: &str) -> String {
    term.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordDraft;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn word() -> Word {
        Word::new(
            Uuid::new_v4(),
            WordDraft {
                term: "cat".into(),
                definition: "a small feline".into(),
                ..Default::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn steps_follow_the_fixed_order() {
        let mut steps = LearningSteps::new(word());
        let kinds: Vec<StepKind> = (0..4)
            .map(|_| {
                let kind = steps.current().unwrap().kind;
                steps.advance();
                kind
            })
            .collect();
        assert_eq!(kinds, STEP_ORDER.to_vec());
    }

    #[test]
    fn spell_out_joins_letters_with_dashes() {
        let mut steps = LearningSteps::new(word());
        steps.advance();
        steps.advance();
        let step = steps.current().unwrap();
        assert_eq!(step.kind, StepKind::SpellOut);
        assert_eq!(step.content, "c-a-t");
        assert!(!step.speak_hint);
    }

    #[test]
    fn sequence_repeats_three_times_before_finishing() {
        let mut steps = LearningSteps::new(word());
        let mut advances = 0;
        while !steps.advance() {
            advances += 1;
            assert!(advances < 100, "learning steps never finished");
        }
        // 4 steps x 3 repetitions = 12 advances total.
        assert_eq!(advances + 1, 12);
        assert!(steps.is_done());
        assert_eq!(steps.current(), None);
    }

    #[test]
    fn term_steps_carry_the_speak_hint() {
        let mut steps = LearningSteps::new(word());
        steps.advance();
        let step = steps.current().unwrap();
        assert_eq!(step.kind, StepKind::ReadTerm);
        assert!(step.speak_hint);
    }
}
