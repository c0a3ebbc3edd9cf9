use crate::model::Post;

/// First post whose id matches.
pub fn run(posts: &[Post], id: u64) -> Option<&Post> {
    posts.iter().find(|p| p.id == id)
}
