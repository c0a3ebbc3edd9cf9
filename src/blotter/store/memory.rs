use super::PostStore;
use crate::error::Result;
use crate::model::Post;

/// Store that never touches the filesystem.
///
/// `save_count` lets tests assert whether an operation persisted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    posts: Vec<Post>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            save_count: 0,
        }
    }

    /// What the last `save` wrote (or the seed collection).
    pub fn saved(&self) -> &[Post] {
        &self.posts
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl PostStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }

    fn save(&mut self, posts: &[Post]) -> Result<()> {
        self.posts = posts.to_vec();
        self.save_count += 1;
        Ok(())
    }
}
