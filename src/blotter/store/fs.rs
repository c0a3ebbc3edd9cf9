use super::{validate, PostStore};
use crate::error::{BlogError, Result};
use crate::model::Post;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const INDENT: &[u8] = b"    ";

/// Keeps the whole blog in one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_error(&self, reason: impl Into<String>) -> BlogError {
        BlogError::Parse {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(BlogError::Io)?;
            }
        }
        Ok(())
    }
}

impl PostStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Post>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read(&self.path).map_err(BlogError::Io)?;
        let posts: Vec<Post> =
            serde_json::from_slice(&content).map_err(|e| self.parse_error(e.to_string()))?;
        validate(&posts).map_err(|reason| self.parse_error(reason))?;
        Ok(posts)
    }

    fn save(&mut self, posts: &[Post]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        posts.serialize(&mut ser).map_err(BlogError::Serialization)?;

        fs::write(&self.path, buf).map_err(BlogError::Io)?;
        Ok(())
    }
}
