//! Guided learning steps for one word.

use vocab_core::{LearningSteps, StepKind};

use super::read_line;
use crate::store::VocabularyStore;

fn title(kind: StepKind) -> &'static str {
    match kind {
        StepKind::ReadDefinition => "Read the definition",
        StepKind::ReadTerm => "Read the term",
        StepKind::SpellOut => "Spell it out",
        StepKind::ReadTermAgain => "Read the term again",
    }
}

pub fn run(store: &VocabularyStore, term: &str) -> anyhow::Result<()> {
    let word = store
        .find_by_term(term)
        .ok_or_else(|| anyhow::anyhow!("no word \"{term}\""))?;

    let mut steps = LearningSteps::new(word.clone());
    while let Some(step) = steps.current() {
        let (rep, reps) = steps.repetition();
        let (num, total) = steps.step();
        println!("\nround {rep}/{reps}, step {num}/{total}: {}", title(step.kind));
        println!("  {}", step.content);
        if step.speak_hint {
            println!("  (say it out loud)");
        }
        if read_line("press enter to continue... ")?.is_none() {
            println!("\nstopped");
            return Ok(());
        }
        steps.advance();
    }
    println!("\ndone: \"{}\" completed all learning rounds", word.term);
    Ok(())
}
