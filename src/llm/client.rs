use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client, config::OpenAIConfig, error::OpenAIError, types as openai_types,
};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
        }
    }
}

#[async_trait]
impl GenerationClient for OpenAiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        debug!(
            "Requesting generation of up to {} tokens at temperature {}",
            request.params.max_tokens, request.params.temperature
        );

        let message = openai_types::ChatCompletionRequestUserMessageArgs::default()
            .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                request.prompt,
            ))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build prompt message: {e}")))?;

        let messages: Vec<openai_types::ChatCompletionRequestMessage> = vec![message.into()];

        let openai_request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(request.params.max_tokens)
            .temperature(request.params.temperature)
            .build()
            .map_err(|e| Error::internal(format!("Failed to build generation request: {e}")))?;

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(classify_openai_error)?;

        debug!(
            "Received generation response with {} choices",
            response.choices.len()
        );

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::malformed("Generation response contained no choices"))?;

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(GenerationResponse {
            text,
            model: response.model,
            usage,
        })
    }
}

/// Maps provider failures onto the distinct error kinds the caller must see:
/// bad credentials, rate limiting, timeouts and undecodable replies each keep
/// their own variant instead of collapsing into a generic failure.
fn classify_openai_error(err: OpenAIError) -> Error {
    match err {
        OpenAIError::ApiError(api) => {
            let code = api.code.as_deref().unwrap_or_default();
            let kind = api.r#type.as_deref().unwrap_or_default();
            if code == "invalid_api_key" || kind == "authentication_error" {
                Error::Authentication(api.message)
            } else if code == "rate_limit_exceeded"
                || kind == "rate_limit_error"
                || kind == "insufficient_quota"
            {
                Error::RateLimited(api.message)
            } else {
                Error::RemoteService(api.message)
            }
        }
        OpenAIError::Reqwest(e) if e.is_timeout() => Error::Timeout(e.to_string()),
        OpenAIError::JSONDeserialize(e) => Error::MalformedResponse(e.to_string()),
        other => Error::RemoteService(other.to_string()),
    }
}
