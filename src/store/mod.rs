mod client;
mod types;

pub use client::{ContentStore, HttpContentStore, TaggedStoreClient};
pub use types::{StoredContent, Tag};
