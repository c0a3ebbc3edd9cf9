//! # Storage Layer
//!
//! The blog is persisted as a single document holding every post and its
//! comments. [`PostStore`] is the seam between the service and that document:
//!
//! - [`fs::JsonFileStore`]: production store, one pretty-printed JSON array on disk
//! - [`memory::InMemoryStore`]: keeps the last saved collection in memory, for tests
//!
//! Stores always deal in the whole collection. There is no incremental update:
//! every mutation rewrites everything, so a crash mid-write can leave a
//! truncated file behind.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": 1,
//!         "title": "Hello",
//!         "content": "First post",
//!         "author": "alice",
//!         "created_at": "2024-03-05 14:07:59",
//!         "comments": [
//!             { "id": 1, "author": "bob", "content": "nice", "created_at": "2024-03-05 14:10:02" }
//!         ]
//!     }
//! ]
//! ```

use crate::error::Result;
use crate::model::{is_valid_timestamp, Post, TIMESTAMP_FORMAT};

pub mod fs;
pub mod memory;

/// Abstract interface for blog persistence.
pub trait PostStore {
    /// Load every post in stored order. A store with nothing saved yet is empty.
    fn load(&self) -> Result<Vec<Post>>;

    /// Replace the stored collection with `posts`, keeping their order.
    fn save(&mut self, posts: &[Post]) -> Result<()>;
}

/// Checks what serde cannot: positive ids and well-formed timestamps.
pub(crate) fn validate(posts: &[Post]) -> std::result::Result<(), String> {
    for (i, post) in posts.iter().enumerate() {
        if post.id == 0 {
            return Err(format!("post #{} has id 0, ids start at 1", i + 1));
        }
        if !is_valid_timestamp(&post.created_at) {
            return Err(format!(
                "post {} has created_at {:?}, expected {}",
                post.id, post.created_at, TIMESTAMP_FORMAT
            ));
        }
        for comment in &post.comments {
            if comment.id == 0 {
                return Err(format!("comment on post {} has id 0", post.id));
            }
            if !is_valid_timestamp(&comment.created_at) {
                return Err(format!(
                    "comment {} on post {} has created_at {:?}, expected {}",
                    comment.id, post.id, comment.created_at, TIMESTAMP_FORMAT
                ));
            }
        }
    }
    Ok(())
}
