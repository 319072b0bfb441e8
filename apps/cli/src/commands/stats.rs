//! Vocabulary statistics subcommand.

use chrono::Utc;

use crate::store::VocabularyStore;

pub fn show(store: &VocabularyStore) {
    let stats = store.stats(Utc::now());
    println!("words:           {}", stats.total_words);
    println!("total reviews:   {}", stats.total_reviews);
    println!("mastered:        {}", stats.mastered_words);
    println!("average mastery: {:.0}%", stats.average_mastery);
    println!("reviewed today:  {}", stats.reviewed_today);

    let recent = store.recent();
    if !recent.is_empty() {
        println!("\nrecently added:");
        for word in recent {
            println!("  {}: {}", word.term, word.definition);
        }
    }
}
