//! Explicit vocabulary store.
//!
//! Owns the cached word list and the signed-in user, and is handed to
//! whatever consumes vocabulary (practice loops, search, stats) instead of
//! living as ambient shared state. All durable writes go through the
//! injected backend; the cache mirrors them.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use vocab_core::{
    filter_words, recent_words, summarize, ReviewPolicy, VocabularyStats, Word, WordDraft,
};

use crate::backend::{BackendError, WordBackend};

/// How many words the dashboard's recent list shows.
const RECENT_COUNT: usize = 5;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not signed in")]
    NotAuthenticated,

    #[error("persistence failed: {0}")]
    Persistence(BackendError),

    #[error("no word with id {0}")]
    UnknownWord(Uuid),
}

impl From<BackendError> for StoreError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::NotAuthenticated => StoreError::NotAuthenticated,
            other => StoreError::Persistence(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Outcome of [`VocabularyStore::record_review`]: the updated word, plus the
/// write-back failure when persistence did not go through. The in-memory
/// state is updated either way so a session keeps its local view.
#[derive(Debug)]
pub struct ReviewWriteback {
    pub word: Word,
    pub failure: Option<StoreError>,
}

pub struct VocabularyStore {
    backend: Box<dyn WordBackend>,
    user: Uuid,
    words: Vec<Word>,
    policy: ReviewPolicy,
}

impl std::fmt::Debug for VocabularyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyStore")
            .field("user", &self.user)
            .field("words", &self.words)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl VocabularyStore {
    /// Resolve the current user and load their vocabulary.
    pub async fn connect(backend: Box<dyn WordBackend>) -> Result<Self> {
        let user = backend
            .current_user()
            .await?
            .ok_or(StoreError::NotAuthenticated)?;
        let words = backend.fetch_words(user).await?;
        Ok(Self {
            backend,
            user,
            words,
            policy: ReviewPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: ReviewPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn user(&self) -> Uuid {
        self.user
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, id: Uuid) -> Option<&Word> {
        self.words.iter().find(|w| w.id == id)
    }

    pub fn find_by_term(&self, term: &str) -> Option<&Word> {
        let needle = term.trim().to_lowercase();
        self.words
            .iter()
            .find(|w| w.term.to_lowercase() == needle)
    }

    pub fn recent(&self) -> Vec<&Word> {
        recent_words(&self.words, RECENT_COUNT)
    }

    pub fn search(&self, query: &str, tag: Option<&str>) -> Vec<&Word> {
        filter_words(&self.words, query, tag)
    }

    pub fn tags(&self) -> Vec<String> {
        vocab_core::all_tags(&self.words)
    }

    pub fn stats(&self, now: DateTime<Utc>) -> VocabularyStats {
        summarize(&self.words, now)
    }

    /// Insert a word through the backend and mirror it at the head of the
    /// cache (newest first).
    pub async fn add_word(&mut self, draft: WordDraft) -> Result<&Word> {
        let word = self.backend.insert_word(self.user, draft).await?;
        self.words.insert(0, word);
        Ok(&self.words[0])
    }

    /// Persist an explicit edit to an existing word.
    pub async fn edit_word(&mut self, word: Word) -> Result<()> {
        let slot = self
            .words
            .iter_mut()
            .find(|w| w.id == word.id)
            .ok_or(StoreError::UnknownWord(word.id))?;
        self.backend.update_word(&word).await?;
        *slot = word;
        Ok(())
    }

    pub async fn delete_word(&mut self, id: Uuid) -> Result<()> {
        if self.get(id).is_none() {
            return Err(StoreError::UnknownWord(id));
        }
        self.backend.delete_word(id).await?;
        self.words.retain(|w| w.id != id);
        Ok(())
    }

    /// Delete the user's whole vocabulary. Irreversible.
    pub async fn clear(&mut self) -> Result<()> {
        self.backend.delete_all(self.user).await?;
        self.words.clear();
        Ok(())
    }

    /// Apply one review outcome and write it back.
    ///
    /// The policy is applied to the cache first; a failed write-back keeps
    /// the local state, is logged once at `warn`, and is returned rather
    /// than retried.
    pub async fn record_review(
        &mut self,
        id: Uuid,
        correct: bool,
        now: DateTime<Utc>,
    ) -> Result<ReviewWriteback> {
        let current = self.get(id).ok_or(StoreError::UnknownWord(id))?;
        let updated = self.policy.apply(current, correct, now);

        let failure = match self.backend.update_word(&updated).await {
            Ok(()) => None,
            Err(e) => {
                warn!(word_id = %id, error = %e, "review write-back failed; keeping local state");
                Some(StoreError::from(e))
            }
        };

        let slot = self
            .words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(StoreError::UnknownWord(id))?;
        *slot = updated.clone();

        Ok(ReviewWriteback {
            word: updated,
            failure,
        })
    }
}
