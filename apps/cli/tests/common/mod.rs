//! Shared test backends and fixtures for store integration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use vocab_cli::backend::{BackendError, MemoryBackend, Result, WordBackend};
use vocab_core::{Word, WordDraft};

/// Delegating wrapper so a test can keep a handle on the backend after the
/// store takes ownership of its `Box`.
pub struct SharedBackend(pub Arc<MemoryBackend>);

#[async_trait]
impl WordBackend for SharedBackend {
    async fn current_user(&self) -> Result<Option<Uuid>> {
        self.0.current_user().await
    }

    async fn fetch_words(&self, user: Uuid) -> Result<Vec<Word>> {
        self.0.fetch_words(user).await
    }

    async fn insert_word(&self, user: Uuid, draft: WordDraft) -> Result<Word> {
        self.0.insert_word(user, draft).await
    }

    async fn update_word(&self, word: &Word) -> Result<()> {
        self.0.update_word(word).await
    }

    async fn delete_word(&self, id: Uuid) -> Result<()> {
        self.0.delete_word(id).await
    }

    async fn delete_all(&self, user: Uuid) -> Result<()> {
        self.0.delete_all(user).await
    }
}

/// Backend whose `update_word` can be switched to fail, for exercising the
/// failed-write-back path.
pub struct FlakyBackend {
    pub inner: Arc<MemoryBackend>,
    pub fail_updates: Arc<AtomicBool>,
}

#[async_trait]
impl WordBackend for FlakyBackend {
    async fn current_user(&self) -> Result<Option<Uuid>> {
        self.inner.current_user().await
    }

    async fn fetch_words(&self, user: Uuid) -> Result<Vec<Word>> {
        self.inner.fetch_words(user).await
    }

    async fn insert_word(&self, user: Uuid, draft: WordDraft) -> Result<Word> {
        self.inner.insert_word(user, draft).await
    }

    async fn update_word(&self, word: &Word) -> Result<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(BackendError::Network("simulated outage".into()));
        }
        self.inner.update_word(word).await
    }

    async fn delete_word(&self, id: Uuid) -> Result<()> {
        self.inner.delete_word(id).await
    }

    async fn delete_all(&self, user: Uuid) -> Result<()> {
        self.inner.delete_all(user).await
    }
}

/// A word as the backend would hand it out: fresh, never reviewed.
pub fn fixture_word(term: &str, definition: &str) -> Word {
    Word::new(
        Uuid::new_v4(),
        WordDraft {
            term: term.into(),
            definition: definition.into(),
            ..Default::default()
        },
        Utc::now(),
    )
}
