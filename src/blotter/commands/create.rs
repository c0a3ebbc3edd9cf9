use crate::model::Post;

/// Appends a new post and returns a copy of it.
///
/// The id is the current post count plus one, so ids freed by a delete can be
/// handed out again.
pub fn run(posts: &mut Vec<Post>, title: String, content: String, author: String) -> Post {
    let id = posts.len() as u64 + 1;
    let post = Post::new(id, title, content, author);
    posts.push(post.clone());
    post
}
