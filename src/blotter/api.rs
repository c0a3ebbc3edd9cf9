//! # Blog Service
//!
//! [`Blog`] is the single entry point for blog operations, whatever the UI. It
//! owns the in-memory collection, loaded once when the service is opened, and
//! the store that persists it.
//!
//! Every mutating method (create, delete, comment) dispatches to its command and
//! then rewrites the whole collection through the store before returning. Reads
//! never touch the store.
//!
//! `Blog<S: PostStore>` is generic over storage:
//! - Production: `Blog<JsonFileStore>`
//! - Testing: `Blog<InMemoryStore>`

use crate::commands;
use crate::error::{BlogError, Result};
use crate::model::{Comment, Post};
use crate::store::PostStore;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Blog<S: PostStore> {
    store: S,
    posts: Vec<Post>,
}

impl<S: PostStore> Blog<S> {
    /// Loads the collection from `store`. A malformed store fails here.
    pub fn open(store: S) -> Result<Self> {
        let posts = store.load()?;
        tracing::info!(posts = posts.len(), "blog loaded");
        Ok(Self { store, posts })
    }

    pub fn create_post(&mut self, title: String, content: String, author: String) -> Result<Post> {
        let post = commands::create::run(&mut self.posts, title, content, author);
        self.persist()?;
        tracing::debug!(id = post.id, "post created");
        Ok(post)
    }

    pub fn get_post(&self, id: u64) -> Option<&Post> {
        commands::get::run(&self.posts, id)
    }

    /// Newest first.
    pub fn get_all_posts(&self) -> Vec<&Post> {
        commands::list::run(&self.posts)
    }

    /// Removes all posts with `id` and persists, even when nothing matched.
    pub fn delete_post(&mut self, id: u64) -> Result<usize> {
        let removed = commands::delete::run(&mut self.posts, id);
        self.persist()?;
        tracing::debug!(id, removed, "delete post");
        Ok(removed)
    }

    /// Fails with [`BlogError::PostNotFound`] without persisting when `post_id` is unknown.
    pub fn add_comment(
        &mut self,
        post_id: u64,
        author: String,
        content: String,
    ) -> Result<Comment> {
        let comment = match commands::comment::run(&mut self.posts, post_id, author, content) {
            Ok(comment) => comment,
            Err(BlogError::PostNotFound(id)) => {
                tracing::warn!(post_id = id, "comment on missing post");
                return Err(BlogError::PostNotFound(id));
            }
            Err(e) => return Err(e),
        };
        self.persist()?;
        tracing::debug!(post_id, comment_id = comment.id, "comment added");
        Ok(comment)
    }

    /// Creation order.
    pub fn search_posts(&self, query: &str) -> Vec<&Post> {
        commands::search::run(&self.posts, query)
    }

    /// Writes the blog as a static HTML page to `path`, replacing any existing file.
    pub fn export_html(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let html = commands::export::render_html(&self.get_all_posts())?;
        fs::write(path, html).map_err(BlogError::Io)?;
        tracing::debug!(path = %path.display(), "blog exported");
        Ok(path.to_path_buf())
    }

    /// Stored (creation) order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.posts)?;
        tracing::debug!(posts = self.posts.len(), "blog saved");
        Ok(())
    }
}
