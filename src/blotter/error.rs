use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Post not found: {0}")]
    PostNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed blog store {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;
