//! Storage collaborator: the hosted service that owns all durable state.
//!
//! The client holds no durable state of its own; every word lives in the
//! backend's `words` table keyed by user. Implementations: [`RestBackend`]
//! for the hosted service, [`MemoryBackend`] for tests and local runs.

pub mod memory;
pub mod rest;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use vocab_core::{Word, WordDraft};

pub use memory::MemoryBackend;
pub use rest::RestBackend;

/// Backend call failures.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("not signed in")]
    NotAuthenticated,

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, BackendError>;

/// The table and auth operations the trainer needs, request/response only.
#[async_trait]
pub trait WordBackend: Send + Sync {
    /// The signed-in user, or `None` when the session token is absent or
    /// rejected.
    async fn current_user(&self) -> Result<Option<Uuid>>;

    /// All words belonging to `user`, newest first.
    async fn fetch_words(&self, user: Uuid) -> Result<Vec<Word>>;

    /// Insert a word; the backend assigns `id` and `created_at`.
    async fn insert_word(&self, user: Uuid, draft: WordDraft) -> Result<Word>;

    /// Persist the mutable fields of an existing word.
    async fn update_word(&self, word: &Word) -> Result<()>;

    async fn delete_word(&self, id: Uuid) -> Result<()>;

    /// Remove every word belonging to `user`. Irreversible.
    async fn delete_all(&self, user: Uuid) -> Result<()>;
}
