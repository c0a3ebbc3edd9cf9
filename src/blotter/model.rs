use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of every `created_at` value, stored and displayed as-is.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// True only for the exact zero-padded `YYYY-MM-DD HH:MM:SS` form.
pub fn is_valid_timestamp(value: &str) -> bool {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|parsed| parsed.format(TIMESTAMP_FORMAT).to_string() == value)
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub created_at: String,
}

impl Comment {
    pub fn new(id: u64, author: String, content: String) -> Self {
        Self {
            id,
            author,
            content,
            created_at: timestamp_now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: String,
    // Kept in insertion order
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(id: u64, title: String, content: String, author: String) -> Self {
        Self {
            id,
            title,
            content,
            author,
            created_at: timestamp_now(),
            comments: Vec::new(),
        }
    }

    /// Id the next comment on this post will receive.
    ///
    /// Derived from the current count, matching how post ids are assigned.
    pub fn next_comment_id(&self) -> u64 {
        self.comments.len() as u64 + 1
    }
}
