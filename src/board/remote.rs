use super::types::Note;
use crate::api::protocol::{DeleteResponse, StickySetResponse};
use crate::store::types::SetId;

use anyhow::{anyhow, Result};

/// Typed HTTP client over the persistence API.
///
/// Holds one reused `reqwest::Client`; no timeout is imposed beyond what the
/// transport provides by default, and no call is retried.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// POST `/api/` — stores the notes as a new set and returns it with the
    /// freshly assigned identifier.
    pub async fn create(&self, notes: &[Note]) -> Result<StickySetResponse> {
        let response = self
            .http
            .post(format!("{}/api/", self.base_url))
            .json(notes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Create failed: {}", response.status()));
        }

        Ok(response.json().await?)
    }

    /// GET `/api/:id` — `Ok(None)` when the set does not exist.
    pub async fn fetch(&self, id: &SetId) -> Result<Option<StickySetResponse>> {
        let response = self
            .http
            .get(format!("{}/api/{}", self.base_url, id))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow!("Fetch failed: {}", response.status()));
        }

        Ok(Some(response.json().await?))
    }

    /// PUT `/api/:id` — replaces the whole note sequence.
    pub async fn replace(&self, id: &SetId, notes: &[Note]) -> Result<StickySetResponse> {
        let response = self
            .http
            .put(format!("{}/api/{}", self.base_url, id))
            .json(notes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Save failed: {}", response.status()));
        }

        Ok(response.json().await?)
    }

    /// DELETE `/api/:id` — removes the set entirely.
    pub async fn delete(&self, id: &SetId) -> Result<DeleteResponse> {
        let response = self
            .http
            .delete(format!("{}/api/{}", self.base_url, id))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("Delete failed: {}", response.status()));
        }

        Ok(response.json().await?)
    }
}
