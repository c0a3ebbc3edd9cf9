use crate::error::{BlogError, Result};
use crate::model::{Comment, Post};

/// Appends a comment to the first post with `post_id`.
///
/// Leaves the collection untouched when no post matches.
pub fn run(posts: &mut [Post], post_id: u64, author: String, content: String) -> Result<Comment> {
    let post = posts
        .iter_mut()
        .find(|p| p.id == post_id)
        .ok_or(BlogError::PostNotFound(post_id))?;

    let comment = Comment::new(post.next_comment_id(), author, content);
    post.comments.push(comment.clone());
    Ok(comment)
}
