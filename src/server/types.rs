use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named string parameters for the prompt template; the template decides
/// which names are required.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct GenerateRequest {
    pub params: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
