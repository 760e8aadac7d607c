use super::types::*;
use crate::{
    Error, Result,
    config::StoreConfig,
    llm::{GenerationClient, GenerationRequest, GenerationResponse},
};
use async_trait::async_trait;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Explicit request/response exchange with the remote content/tag store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Stores a block of text and returns its record.
    async fn upload(&self, text: &str) -> Result<StoredContent>;

    /// Asks the store to run the named tagger plugin over the content.
    async fn apply_tag(&self, content_id: &str, tagger: &str) -> Result<()>;

    /// Tags of the given kind currently attached to the content.
    async fn tags(&self, content_id: &str, kind: &str) -> Result<Vec<Tag>>;

    /// Polls until a tag of the given kind is produced, within a bounded budget.
    async fn wait_for_tag(&self, content_id: &str, kind: &str) -> Result<Tag>;
}

pub struct HttpContentStore {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl HttpContentStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            max_polls: config.max_polls,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }
        builder
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(match status.as_u16() {
            401 | 403 => Error::Authentication(format!("store rejected credential: {body}")),
            429 => Error::RateLimited(format!("store rate limit: {body}")),
            _ => Error::RemoteService(format!("store returned {status}: {body}")),
        })
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn upload(&self, text: &str) -> Result<StoredContent> {
        let response = self
            .request(reqwest::Method::POST, "/content")
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let response = Self::check(response).await?;
        let content: StoredContent = response
            .json()
            .await
            .map_err(|e| Error::malformed(format!("undecodable content record: {e}")))?;

        debug!("Uploaded content {}", content.id);
        Ok(content)
    }

    async fn apply_tag(&self, content_id: &str, tagger: &str) -> Result<()> {
        let response = self
            .request(reqwest::Method::POST, &format!("/content/{content_id}/tags"))
            .json(&json!({ "tagger": tagger }))
            .send()
            .await?;

        Self::check(response).await?;
        debug!("Requested tagger {} on content {}", tagger, content_id);
        Ok(())
    }

    async fn tags(&self, content_id: &str, kind: &str) -> Result<Vec<Tag>> {
        let response = self
            .request(reqwest::Method::GET, &format!("/content/{content_id}/tags"))
            .query(&[("kind", kind)])
            .send()
            .await?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| Error::malformed(format!("undecodable tag list: {e}")))
    }

    async fn wait_for_tag(&self, content_id: &str, kind: &str) -> Result<Tag> {
        for attempt in 0..self.max_polls {
            if attempt > 0 {
                tokio::time::sleep(self.poll_interval).await;
            }
            let mut tags = self.tags(content_id, kind).await?;
            if let Some(tag) = tags.pop() {
                debug!(
                    "Tag of kind {} appeared on content {} after {} polls",
                    kind,
                    content_id,
                    attempt + 1
                );
                return Ok(tag);
            }
        }

        Err(Error::Timeout(format!(
            "no {kind} tag produced on content {content_id} after {} polls",
            self.max_polls
        )))
    }
}

/// Generation through the store's tagging flow: upload the prompt, ask the
/// generator plugin to tag it, wait for the tag and read its string value.
pub struct TaggedStoreClient {
    store: Arc<dyn ContentStore>,
    tagger: String,
    tag_kind: String,
}

impl TaggedStoreClient {
    pub fn new(store: Arc<dyn ContentStore>, tagger: String, tag_kind: String) -> Self {
        Self {
            store,
            tagger,
            tag_kind,
        }
    }
}

#[async_trait]
impl GenerationClient for TaggedStoreClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let content = self.store.upload(&request.prompt).await?;
        self.store.apply_tag(&content.id, &self.tagger).await?;
        let tag = self.store.wait_for_tag(&content.id, &self.tag_kind).await?;

        let text = tag.value.ok_or_else(|| {
            Error::malformed(format!(
                "{} tag on content {} carried no value",
                self.tag_kind, content.id
            ))
        })?;

        Ok(GenerationResponse {
            text,
            model: self.tagger.clone(),
            usage: None,
        })
    }
}
