use async_trait::async_trait;
use chrono::Utc;
use promptgen::{
    Error, Result,
    llm::{GenerationClient, GenerationRequest, GenerationResponse},
    store::{ContentStore, StoredContent, Tag},
};
use std::sync::{Arc, Mutex};

/// Mock generation client for testing
pub struct MockGenerationClient {
    pub responses: Arc<Mutex<Vec<GenerationResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub error: Mutex<Option<Error>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: Mutex::new(None),
        }
    }

    pub fn with_text(self, text: &str) -> Self {
        self.responses.lock().unwrap().push(GenerationResponse {
            text: text.to_string(),
            model: "mock-model".to_string(),
            usage: None,
        });
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(error) = self.error.lock().unwrap().take() {
            return Err(error);
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::remote("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

/// In-memory mock content store that records every exchange
pub struct MockContentStore {
    pub uploads: Arc<Mutex<Vec<String>>>,
    pub applied_tags: Arc<Mutex<Vec<(String, String)>>>,
    pub tag_value: Mutex<Option<String>>,
    pub upload_error: Mutex<Option<Error>>,
    pub tag_error: Mutex<Option<Error>>,
}

impl MockContentStore {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(Vec::new())),
            applied_tags: Arc::new(Mutex::new(Vec::new())),
            tag_value: Mutex::new(None),
            upload_error: Mutex::new(None),
            tag_error: Mutex::new(None),
        }
    }

    pub fn with_tag_value(self, value: &str) -> Self {
        *self.tag_value.lock().unwrap() = Some(value.to_string());
        self
    }

    pub fn with_upload_error(self, error: Error) -> Self {
        *self.upload_error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_tag_error(self, error: Error) -> Self {
        *self.tag_error.lock().unwrap() = Some(error);
        self
    }

    pub fn recorded_uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn recorded_tags(&self) -> Vec<(String, String)> {
        self.applied_tags.lock().unwrap().clone()
    }
}

impl Default for MockContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MockContentStore {
    async fn upload(&self, text: &str) -> Result<StoredContent> {
        if let Some(error) = self.upload_error.lock().unwrap().take() {
            return Err(error);
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(text.to_string());
        Ok(StoredContent {
            id: format!("content-{}", uploads.len()),
            text: text.to_string(),
            created_at: Utc::now(),
        })
    }

    async fn apply_tag(&self, content_id: &str, tagger: &str) -> Result<()> {
        if let Some(error) = self.tag_error.lock().unwrap().take() {
            return Err(error);
        }
        self.applied_tags
            .lock()
            .unwrap()
            .push((content_id.to_string(), tagger.to_string()));
        Ok(())
    }

    async fn tags(&self, _content_id: &str, kind: &str) -> Result<Vec<Tag>> {
        Ok(self
            .tag_value
            .lock()
            .unwrap()
            .iter()
            .map(|value| Tag {
                kind: kind.to_string(),
                name: None,
                value: Some(value.clone()),
            })
            .collect())
    }

    async fn wait_for_tag(&self, content_id: &str, kind: &str) -> Result<Tag> {
        self.tags(content_id, kind)
            .await?
            .pop()
            .ok_or_else(|| Error::Timeout("no tag produced".to_string()))
    }
}
