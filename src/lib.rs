pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod prompt;
pub mod sanitize;
pub mod server;
pub mod store;

pub use error::{Error, Result};
