use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub prompt: PromptConfig,
    pub llm: LlmConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub store: Option<StoreConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Template with named `{placeholder}` fields, fixed at deployment time.
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    /// Upper bound on generated output length.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling randomness, 0.0-1.0.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    /// Generate through the content store's tagging flow instead of a direct call.
    TaggedStore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Plugin identifier used when tagging stored content.
    #[serde(default = "default_tagger")]
    pub tagger: String,
    /// Tag kind that carries the generation result.
    #[serde(default = "default_tag_kind")]
    pub tag_kind: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_max_polls")]
    pub max_polls: u32,
    /// Store the prompt/response pair after each direct generation.
    #[serde(default)]
    pub archive: bool,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_tokens() -> u32 {
    30
}

fn default_temperature() -> f32 {
    0.8
}

fn default_tagger() -> String {
    "prompt-generator".to_string()
}

fn default_tag_kind() -> String {
    "generation".to_string()
}

fn default_poll_interval_ms() -> u64 {
    250
}

fn default_max_polls() -> u32 {
    40
}
