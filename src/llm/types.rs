use crate::config::LlmConfig;
use serde::{Deserialize, Serialize};

/// Generation parameters, fixed per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on generated output length.
    pub max_tokens: u32,
    /// Sampling randomness, 0.0-1.0.
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 30,
            temperature: 0.8,
        }
    }
}

impl From<&LlmConfig> for GenerationParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// A materialized prompt plus the parameters to generate with.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub params: GenerationParams,
}

/// Raw generated text as returned by the provider, before sanitizing.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub text: String,
    pub model: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}
