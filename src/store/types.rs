use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A block of text held by the content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredContent {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A labeled annotation the store attaches to content.
///
/// Generation results arrive as a tag whose `kind` matches the configured
/// tag kind and whose `value` carries the generated text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub kind: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}
