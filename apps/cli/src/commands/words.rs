//! Word management subcommands.

use vocab_core::{Word, WordDraft};

use super::read_line;
use crate::store::VocabularyStore;

fn print_row(word: &Word) {
    let reviewed = match word.last_reviewed {
        Some(t) => t.format("%Y-%m-%d").to_string(),
        None => "never".to_string(),
    };
    println!(
        "{:<20} {:>4}%  reviews {:<4} last {}  {}",
        word.term,
        word.mastery,
        word.review_count,
        reviewed,
        word.definition
    );
}

pub fn list(store: &VocabularyStore, tag: Option<&str>) {
    let words = store.search("", tag);
    if words.is_empty() {
        println!("no words yet; add one with `vocab add <term> <definition>`");
        return;
    }
    for word in words {
        print_row(word);
    }
}

pub async fn add(
    store: &mut VocabularyStore,
    term: String,
    definition: String,
    phonetic: String,
    tags: Vec<String>,
) -> anyhow::Result<()> {
    let draft = WordDraft {
        term: term.trim().to_string(),
        definition: definition.trim().to_string(),
        phonetic,
        tags,
    };
    if draft.term.is_empty() {
        anyhow::bail!("term must not be empty");
    }
    let word = store.add_word(draft).await?;
    println!("added \"{}\" ({})", word.term, word.id);
    Ok(())
}

pub async fn edit(
    store: &mut VocabularyStore,
    term: &str,
    definition: Option<String>,
    phonetic: Option<String>,
    tags: Vec<String>,
) -> anyhow::Result<()> {
    let mut word = store
        .find_by_term(term)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no word \"{term}\""))?;
    if let Some(definition) = definition {
        word.definition = definition;
    }
    if let Some(phonetic) = phonetic {
        word.phonetic = phonetic;
    }
    if !tags.is_empty() {
        word.tags = tags;
    }
    store.edit_word(word).await?;
    println!("updated \"{term}\"");
    Ok(())
}

pub async fn remove(store: &mut VocabularyStore, term: &str) -> anyhow::Result<()> {
    let id = store
        .find_by_term(term)
        .map(|w| w.id)
        .ok_or_else(|| anyhow::anyhow!("no word \"{term}\""))?;
    store.delete_word(id).await?;
    println!("removed \"{term}\"");
    Ok(())
}

pub async fn clear(store: &mut VocabularyStore, yes: bool) -> anyhow::Result<()> {
    let count = store.words().len();
    if count == 0 {
        println!("vocabulary is already empty");
        return Ok(());
    }
    if !yes {
        let answer = read_line(&format!(
            "delete all {count} words? This cannot be undone [y/N] "
        ))?;
        if answer.as_deref() != Some("y") {
            println!("aborted");
            return Ok(());
        }
    }
    store.clear().await?;
    println!("deleted {count} words");
    Ok(())
}

pub fn search(store: &VocabularyStore, query: &str, tag: Option<&str>) {
    let hits = store.search(query, tag);
    if hits.is_empty() {
        println!("no matches");
        return;
    }
    for word in hits {
        print_row(word);
    }
}

pub fn show(store: &VocabularyStore, term: &str) {
    match store.find_by_term(term) {
        Some(word) => {
            println!("term:        {}", word.term);
            if !word.phonetic.is_empty() {
                println!("phonetic:    {}", word.phonetic);
            }
            println!("definition:  {}", word.definition);
            if !word.tags.is_empty() {
                println!("tags:        {}", word.tags.join(", "));
            }
            println!("mastery:     {}%", word.mastery);
            println!("reviews:     {}", word.review_count);
            match word.last_reviewed {
                Some(t) => println!("last review: {}", t.format("%Y-%m-%d %H:%M UTC")),
                None => println!("last review: never"),
            }
            println!("added:       {}", word.created_at.format("%Y-%m-%d"));
        }
        None => println!("no word \"{term}\""),
    }
}

pub fn tags(store: &VocabularyStore) {
    let tags = store.tags();
    if tags.is_empty() {
        println!("no tags in use");
    } else {
        for tag in tags {
            println!("{tag}");
        }
    }
}
