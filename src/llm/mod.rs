mod client;
mod types;

pub use client::{GenerationClient, OpenAiClient};
pub use types::{GenerationParams, GenerationRequest, GenerationResponse, Usage};
