//! REST implementation of the word backend against the hosted service's
//! table API (PostgREST-style filters) and auth endpoint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vocab_core::{Word, WordDraft};

use super::{BackendError, Result, WordBackend};

/// Client for the hosted backend.
pub struct RestBackend {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: String,
}

impl RestBackend {
    pub fn new(base_url: impl Into<String>, api_key: String, access_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            access_token,
        }
    }

    fn words_url(&self) -> String {
        format!("{}/rest/v1/words", self.base_url)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.access_token)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = self
            .authed(builder)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(BackendError::NotAuthenticated);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

// === Wire types (snake_case table columns) ===

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub review_count: u32,
    pub mastery: u8,
}

impl WordRow {
    /// Convert to the domain word type, rejecting rows that break the word
    /// record invariants.
    pub(crate) fn into_word(self) -> Result<Word> {
        let word = Word {
            id: self.id,
            term: self.term,
            definition: self.definition,
            phonetic: self.phonetic,
            tags: self.tags,
            created_at: self.created_at,
            last_reviewed: self.last_reviewed,
            review_count: self.review_count,
            mastery: self.mastery,
        };
        word.check_invariants()
            .map_err(|e| BackendError::Decode(format!("word {}: {e}", word.id)))?;
        Ok(word)
    }
}

#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    user_id: Uuid,
    term: &'a str,
    definition: &'a str,
    phonetic: &'a str,
    tags: &'a [String],
    last_reviewed: Option<DateTime<Utc>>,
    review_count: u32,
    mastery: u8,
}

#[derive(Debug, Serialize)]
struct UpdateRow<'a> {
    term: &'a str,
    definition: &'a str,
    phonetic: &'a str,
    tags: &'a [String],
    last_reviewed: Option<DateTime<Utc>>,
    review_count: u32,
    mastery: u8,
}

#[async_trait]
impl WordBackend for RestBackend {
    async fn current_user(&self) -> Result<Option<Uuid>> {
        let builder = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url));
        match self.send(builder).await {
            Ok(response) => {
                let user: AuthUser = response
                    .json()
                    .await
                    .map_err(|e| BackendError::Decode(e.to_string()))?;
                Ok(Some(user.id))
            }
            Err(BackendError::NotAuthenticated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn fetch_words(&self, user: Uuid) -> Result<Vec<Word>> {
        let builder = self.client.get(self.words_url()).query(&[
            ("user_id", format!("eq.{user}")),
            ("order", "created_at.desc".to_string()),
        ]);
        let rows: Vec<WordRow> = self
            .send(builder)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        rows.into_iter().map(WordRow::into_word).collect()
    }

    async fn insert_word(&self, user: Uuid, draft: WordDraft) -> Result<Word> {
        let row = InsertRow {
            user_id: user,
            term: &draft.term,
            definition: &draft.definition,
            phonetic: &draft.phonetic,
            tags: &draft.tags,
            last_reviewed: None,
            review_count: 0,
            mastery: 0,
        };
        let builder = self
            .client
            .post(self.words_url())
            .header("Prefer", "return=representation")
            .json(&[row]);
        let mut rows: Vec<WordRow> = self
            .send(builder)
            .await?
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        rows.pop()
            .ok_or_else(|| BackendError::Decode("insert returned no row".into()))?
            .into_word()
    }

    async fn update_word(&self, word: &Word) -> Result<()> {
        let row = UpdateRow {
            term: &word.term,
            definition: &word.definition,
            phonetic: &word.phonetic,
            tags: &word.tags,
            last_reviewed: word.last_reviewed,
            review_count: word.review_count,
            mastery: word.mastery,
        };
        let builder = self
            .client
            .patch(self.words_url())
            .query(&[("id", format!("eq.{}", word.id))])
            .json(&row);
        self.send(builder).await?;
        Ok(())
    }

    async fn delete_word(&self, id: Uuid) -> Result<()> {
        let builder = self
            .client
            .delete(self.words_url())
            .query(&[("id", format!("eq.{id}"))]);
        self.send(builder).await?;
        Ok(())
    }

    async fn delete_all(&self, user: Uuid) -> Result<()> {
        let builder = self
            .client
            .delete(self.words_url())
            .query(&[("user_id", format!("eq.{user}"))]);
        self.send(builder).await?;
        Ok(())
    }
}
