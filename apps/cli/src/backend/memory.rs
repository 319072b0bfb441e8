//! In-memory word backend for tests and local experimentation.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use vocab_core::{Word, WordDraft};

use super::{BackendError, Result, WordBackend};

/// Backend keeping everything in a process-local map. Words survive only as
/// long as the instance does.
pub struct MemoryBackend {
    user: Option<Uuid>,
    words: Mutex<HashMap<Uuid, (Uuid, Word)>>,
}

impl MemoryBackend {
    /// Backend with a signed-in user.
    pub fn signed_in() -> Self {
        Self {
            user: Some(Uuid::new_v4()),
            words: Mutex::new(HashMap::new()),
        }
    }

    /// Backend with no session; `current_user` resolves to `None`.
    pub fn signed_out() -> Self {
        Self {
            user: None,
            words: Mutex::new(HashMap::new()),
        }
    }

    /// Seed words for the signed-in user, keeping their ids.
    pub fn seed(&self, words: impl IntoIterator<Item = Word>) {
        let user = self.user.expect("seed requires a signed-in backend");
        let mut map = self.words.lock().expect("word map lock");
        for word in words {
            map.insert(word.id, (user, word));
        }
    }

    /// Number of stored words across all users.
    pub fn len(&self) -> usize {
        self.words.lock().expect("word map lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl WordBackend for MemoryBackend {
    async fn current_user(&self) -> Result<Option<Uuid>> {
        Ok(self.user)
    }

    async fn fetch_words(&self, user: Uuid) -> Result<Vec<Word>> {
        let map = self.words.lock().expect("word map lock");
        let mut words: Vec<Word> = map
            .values()
            .filter(|(owner, _)| *owner == user)
            .map(|(_, w)| w.clone())
            .collect();
        words.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(words)
    }

    async fn insert_word(&self, user: Uuid, draft: WordDraft) -> Result<Word> {
        let word = Word::new(Uuid::new_v4(), draft, Utc::now());
        self.words
            .lock()
            .expect("word map lock")
            .insert(word.id, (user, word.clone()));
        Ok(word)
    }

    async fn update_word(&self, word: &Word) -> Result<()> {
        let mut map = self.words.lock().expect("word map lock");
        match map.get_mut(&word.id) {
            Some((_, stored)) => {
                *stored = word.clone();
                Ok(())
            }
            None => Err(BackendError::Api {
                status: 404,
                message: format!("word {} not found", word.id),
            }),
        }
    }

    async fn delete_word(&self, id: Uuid) -> Result<()> {
        self.words.lock().expect("word map lock").remove(&id);
        Ok(())
    }

    async fn delete_all(&self, user: Uuid) -> Result<()> {
        self.words
            .lock()
            .expect("word map lock")
            .retain(|_, (owner, _)| *owner != user);
        Ok(())
    }
}
