//! Integration tests for the vocabulary store against in-memory backends.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use pretty_assertions::assert_eq;

use common::{fixture_word, FlakyBackend, SharedBackend};
use vocab_cli::backend::{MemoryBackend, WordBackend};
use vocab_cli::store::{StoreError, VocabularyStore};
use vocab_core::{start_session, Answer, PracticeMode, WordDraft};

#[tokio::test]
async fn connect_requires_a_signed_in_user() {
    let backend = Box::new(MemoryBackend::signed_out());
    let err = VocabularyStore::connect(backend).await.unwrap_err();
    assert!(matches!(err, StoreError::NotAuthenticated));
}

#[tokio::test]
async fn add_word_writes_through_and_heads_the_cache() {
    let backend = Arc::new(MemoryBackend::signed_in());
    let mut store = VocabularyStore::connect(Box::new(SharedBackend(backend.clone())))
        .await
        .unwrap();

    store
        .add_word(WordDraft {
            term: "cat".into(),
            definition: "a small feline".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    store
        .add_word(WordDraft {
            term: "dog".into(),
            definition: "a loyal companion".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(store.words().len(), 2);
    assert_eq!(store.words()[0].term, "dog");
    assert_eq!(backend.len(), 2);
}

#[tokio::test]
async fn delete_and_clear_remove_from_backend_and_cache() {
    let backend = Arc::new(MemoryBackend::signed_in());
    backend.seed(vec![
        fixture_word("cat", "a small feline"),
        fixture_word("dog", "a loyal companion"),
        fixture_word("fox", "a sly canid"),
    ]);
    let mut store = VocabularyStore::connect(Box::new(SharedBackend(backend.clone())))
        .await
        .unwrap();

    let cat = store.find_by_term("cat").unwrap().id;
    store.delete_word(cat).await.unwrap();
    assert_eq!(store.words().len(), 2);
    assert_eq!(backend.len(), 2);
    assert!(store.find_by_term("cat").is_none());

    store.clear().await.unwrap();
    assert!(store.words().is_empty());
    assert!(backend.is_empty());
}

#[tokio::test]
async fn edit_word_persists_field_changes() {
    let backend = Arc::new(MemoryBackend::signed_in());
    backend.seed(vec![fixture_word("cat", "a small feline")]);
    let mut store = VocabularyStore::connect(Box::new(SharedBackend(backend.clone())))
        .await
        .unwrap();

    let mut word = store.find_by_term("cat").unwrap().clone();
    word.definition = "a domesticated feline".to_string();
    word.tags = vec!["animal".to_string()];
    store.edit_word(word).await.unwrap();

    assert_eq!(
        store.find_by_term("cat").unwrap().definition,
        "a domesticated feline"
    );
    let user = store.user();
    let persisted = backend.fetch_words(user).await.unwrap();
    assert_eq!(persisted[0].definition, "a domesticated feline");
    assert_eq!(persisted[0].tags, vec!["animal".to_string()]);
}

#[tokio::test]
async fn record_review_persists_the_updated_word() {
    let backend = Arc::new(MemoryBackend::signed_in());
    backend.seed(vec![fixture_word("cat", "a small feline")]);
    let mut store = VocabularyStore::connect(Box::new(SharedBackend(backend.clone())))
        .await
        .unwrap();

    let id = store.words()[0].id;
    let now = Utc::now();
    let writeback = store.record_review(id, true, now).await.unwrap();
    assert!(writeback.failure.is_none());
    assert_eq!(writeback.word.mastery, 10);
    assert_eq!(writeback.word.review_count, 1);
    assert_eq!(writeback.word.last_reviewed, Some(now));

    let user = store.user();
    let persisted = backend.fetch_words(user).await.unwrap();
    assert_eq!(persisted[0].mastery, 10);
    assert_eq!(persisted[0].review_count, 1);
}

#[tokio::test]
async fn failed_write_back_keeps_local_state() {
    let inner = Arc::new(MemoryBackend::signed_in());
    inner.seed(vec![fixture_word("cat", "a small feline")]);
    let fail_updates = Arc::new(AtomicBool::new(false));
    let backend = FlakyBackend {
        inner: inner.clone(),
        fail_updates: fail_updates.clone(),
    };
    let mut store = VocabularyStore::connect(Box::new(backend)).await.unwrap();
    let id = store.words()[0].id;

    fail_updates.store(true, Ordering::SeqCst);
    let writeback = store.record_review(id, true, Utc::now()).await.unwrap();
    assert!(matches!(
        writeback.failure,
        Some(StoreError::Persistence(_))
    ));

    // Local view moved on even though the backend did not.
    assert_eq!(store.get(id).unwrap().mastery, 10);
    assert_eq!(store.get(id).unwrap().review_count, 1);
    let user = store.user();
    let persisted = inner.fetch_words(user).await.unwrap();
    assert_eq!(persisted[0].mastery, 0);
    assert_eq!(persisted[0].review_count, 0);

    // Next review after the outage succeeds and carries the local state.
    fail_updates.store(false, Ordering::SeqCst);
    let writeback = store.record_review(id, true, Utc::now()).await.unwrap();
    assert!(writeback.failure.is_none());
    let persisted = inner.fetch_words(user).await.unwrap();
    assert_eq!(persisted[0].mastery, 20);
    assert_eq!(persisted[0].review_count, 2);
}

#[tokio::test]
async fn unknown_word_review_is_an_error() {
    let backend = Box::new(MemoryBackend::signed_in());
    let mut store = VocabularyStore::connect(backend).await.unwrap();
    let err = store
        .record_review(uuid::Uuid::new_v4(), true, Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::UnknownWord(_)));
}

#[tokio::test]
async fn spelling_session_drives_mastery_through_the_store() {
    // End to end: "Cat " (mixed case, trailing space) counts as a correct
    // spelling of "cat" and the persisted record reads mastery 10, one
    // review, last_reviewed set.
    let backend = Arc::new(MemoryBackend::signed_in());
    backend.seed(vec![fixture_word("cat", "a small feline")]);
    let mut store = VocabularyStore::connect(Box::new(SharedBackend(backend.clone())))
        .await
        .unwrap();

    let mut session =
        start_session(PracticeMode::Spelling, store.words().to_vec(), 10).unwrap();
    let feedback = session.record_answer(Answer::Typed("Cat ".into())).unwrap();
    assert!(feedback.correct);
    assert!(session.is_complete());

    let now = Utc::now();
    for outcome in &feedback.finalized {
        store
            .record_review(outcome.word_id, outcome.correct, now)
            .await
            .unwrap();
    }

    let word = store.find_by_term("cat").unwrap();
    assert_eq!(word.mastery, 10);
    assert_eq!(word.review_count, 1);
    assert_eq!(word.last_reviewed, Some(now));
    assert!(word.check_invariants().is_ok());
}

#[tokio::test]
async fn search_and_recent_read_from_the_cache() {
    let backend = Arc::new(MemoryBackend::signed_in());
    let mut store = VocabularyStore::connect(Box::new(SharedBackend(backend)))
        .await
        .unwrap();
    for (term, definition) in [
        ("cat", "a small feline"),
        ("catalog", "an ordered list"),
        ("dog", "a loyal companion"),
    ] {
        store
            .add_word(WordDraft {
                term: term.into(),
                definition: definition.into(),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    assert_eq!(store.search("cat", None).len(), 2);
    assert_eq!(store.search("loyal", None).len(), 1);
    let recent = store.recent();
    assert_eq!(recent[0].term, "dog");
    assert_eq!(store.stats(Utc::now()).total_words, 3);
}
