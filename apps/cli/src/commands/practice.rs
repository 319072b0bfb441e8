//! Interactive practice sessions.

use chrono::Utc;
use uuid::Uuid;

use vocab_core::{
    start_session, Answer, AnswerFeedback, PracticeMode, PracticeStrategy, Prompt, SessionError,
};

use super::{read_line, report_writeback_failure};
use crate::store::VocabularyStore;

pub async fn run(store: &mut VocabularyStore, mode: &str, batch: usize) -> anyhow::Result<()> {
    let mode = PracticeMode::from_str(mode)
        .ok_or_else(|| anyhow::anyhow!("unknown mode \"{mode}\" (flashcard, spelling, matching)"))?;

    if store.words().is_empty() {
        println!("no words available; add some words to start practicing");
        return Ok(());
    }

    let words = store.words().to_vec();
    let mut session = match start_session(mode, words, batch) {
        Ok(session) => session,
        Err(SessionError::InsufficientData {
            required,
            available,
        }) => {
            println!(
                "not enough words for {} practice: need {required}, have {available}",
                mode.as_str()
            );
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    while !session.is_complete() {
        let answer = match ask(session.as_mut())? {
            Some(answer) => answer,
            // EOF abandons the session; nothing more is persisted.
            None => {
                println!("\nsession abandoned");
                return Ok(());
            }
        };
        let feedback = session.record_answer(answer)?;
        show_feedback(mode, &feedback);
        persist(store, &feedback).await;
    }

    let summary = session.summary();
    println!(
        "\npractice complete: {} / {} correct",
        summary.correct, summary.total
    );
    Ok(())
}

/// Owned snapshot of the current prompt, so the interactive loop can call
/// back into the session while rendering.
enum Screen {
    Card {
        term: String,
        phonetic: String,
        definition: String,
        revealed: bool,
    },
    Spell {
        definition: String,
        phonetic: String,
    },
    Board {
        resolved: usize,
        size: usize,
        terms: Vec<(Uuid, String, bool)>,
        definitions: Vec<String>,
    },
    Done,
}

fn snapshot(session: &dyn PracticeStrategy) -> Screen {
    match session.prompt() {
        Prompt::Card { word, revealed } => Screen::Card {
            term: word.term.clone(),
            phonetic: word.phonetic.clone(),
            definition: word.definition.clone(),
            revealed,
        },
        Prompt::Spell { word } => Screen::Spell {
            definition: word.definition.clone(),
            phonetic: word.phonetic.clone(),
        },
        Prompt::Board(board) => Screen::Board {
            resolved: board.resolved_count(),
            size: board.size(),
            terms: board
                .terms()
                .iter()
                .map(|(id, term)| (*id, term.to_string(), board.is_resolved(*id)))
                .collect(),
            definitions: board.definitions().to_vec(),
        },
        Prompt::Complete(_) => Screen::Done,
    }
}

/// Present the current prompt and collect one answer. `None` means EOF.
fn ask(session: &mut dyn PracticeStrategy) -> anyhow::Result<Option<Answer>> {
    let (done, total) = session.progress();
    match snapshot(session) {
        Screen::Card {
            term,
            phonetic,
            definition,
            revealed,
        } => {
            println!("\n[{}/{}] {}", done + 1, total, term);
            if !phonetic.is_empty() {
                println!("        {phonetic}");
            }
            if !revealed {
                if read_line("press enter to reveal... ")?.is_none() {
                    return Ok(None);
                }
                session.flip();
            }
            println!("        {definition}");
            loop {
                match read_line("did you know it? [y/n] ")?.as_deref() {
                    Some("y") => return Ok(Some(Answer::SelfReport(true))),
                    Some("n") => return Ok(Some(Answer::SelfReport(false))),
                    Some(_) => continue,
                    None => return Ok(None),
                }
            }
        }
        Screen::Spell {
            definition,
            phonetic,
        } => {
            println!("\n[{}/{}] definition: {}", done + 1, total, definition);
            if !phonetic.is_empty() {
                println!("        cue: {phonetic}");
            }
            match read_line("spell the term: ")? {
                Some(typed) => Ok(Some(Answer::Typed(typed))),
                None => Ok(None),
            }
        }
        Screen::Board {
            resolved,
            size,
            terms,
            definitions,
        } => {
            println!("\nmatched {resolved} / {size}");
            for (i, (_, term, is_resolved)) in terms.iter().enumerate() {
                let mark = if *is_resolved { "✓" } else { " " };
                println!("  {}{} {}", i + 1, mark, term);
            }
            println!();
            for (i, definition) in definitions.iter().enumerate() {
                println!("  {} {}", (b'a' + i as u8) as char, definition);
            }
            loop {
                let line = match read_line("pair (e.g. `1 c`): ")? {
                    Some(line) => line,
                    None => return Ok(None),
                };
                if let Some(answer) = parse_pair(&line, &terms, &definitions) {
                    return Ok(Some(answer));
                }
                println!("enter a term number and a definition letter");
            }
        }
        Screen::Done => Ok(None),
    }
}

fn parse_pair(
    line: &str,
    terms: &[(Uuid, String, bool)],
    definitions: &[String],
) -> Option<Answer> {
    let mut parts = line.split_whitespace();
    let term_idx: usize = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    let def_char = parts.next()?.chars().next()?;
    let def_idx = (def_char as usize).checked_sub('a' as usize)?;
    let (term_id, _, _) = terms.get(term_idx)?;
    let definition = definitions.get(def_idx)?;
    Some(Answer::Pair {
        term_id: *term_id,
        definition: definition.clone(),
    })
}

fn show_feedback(mode: PracticeMode, feedback: &AnswerFeedback) {
    match mode {
        PracticeMode::Flashcard => {}
        PracticeMode::Spelling => {
            if feedback.correct {
                println!("correct!");
            } else if let Some(expected) = &feedback.expected {
                println!("incorrect, it was \"{expected}\"");
            }
        }
        PracticeMode::Matching => {
            if feedback.correct {
                println!("matched!");
            } else {
                println!("no match");
            }
        }
    }
}

/// Write back every outcome this answer finalized. Failures are reported
/// once and never retried; the session keeps its local progress.
async fn persist(store: &mut VocabularyStore, feedback: &AnswerFeedback) {
    for outcome in &feedback.finalized {
        match store
            .record_review(outcome.word_id, outcome.correct, Utc::now())
            .await
        {
            Ok(writeback) => {
                if let Some(failure) = &writeback.failure {
                    report_writeback_failure(failure);
                }
            }
            Err(e) => report_writeback_failure(&e),
        }
    }
}
