use crate::model::Post;

/// Case-insensitive substring match on title or content, in creation order.
///
/// An empty query matches every post.
pub fn run<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query) || p.content.to_lowercase().contains(&query)
        })
        .collect()
}
