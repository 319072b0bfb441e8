//! Search and filtering over an in-memory word list.

use crate::types::Word;

/// Words whose term or definition contains `query` (case-insensitive),
/// optionally restricted to an exact tag. An empty query matches all.
pub fn filter_words<'a>(words: &'a [Word], query: &str, tag: Option<&str>) -> Vec<&'a Word> {
    let query = query.to_lowercase();
    words
        .iter()
        .filter(|w| {
            let matches_query = query.is_empty()
                || w.term.to_lowercase().contains(&query)
                || w.definition.to_lowercase().contains(&query);
            let matches_tag = tag.map_or(true, |t| w.tags.iter().any(|wt| wt == t));
            matches_query && matches_tag
        })
        .collect()
}

/// The `n` most recently created words, newest first.
pub fn recent_words(words: &[Word], n: usize) -> Vec<&Word> {
    let mut sorted: Vec<&Word> = words.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

/// Every tag in use, sorted and deduplicated.
pub fn all_tags(words: &[Word]) -> Vec<String> {
    let mut tags: Vec<String> = words.iter().flat_map(|w| w.tags.iter().cloned()).collect();
    tags.sort_unstable();
    tags.dedup();
    tags
}
