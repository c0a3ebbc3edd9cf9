use crate::model::Post;

/// Removes every post with `id`, comments included. Returns how many went.
pub fn run(posts: &mut Vec<Post>, id: u64) -> usize {
    let before = posts.len();
    posts.retain(|p| p.id != id);
    before - posts.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{fixtures, get};

    #[test]
    fn removes_matching_post() {
        let mut posts = fixtures::posts(3);
        assert_eq!(run(&mut posts, 2), 1);
        assert!(get::run(&posts, 2).is_none());
        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn removes_all_duplicates() {
        let mut posts = fixtures::posts(3);
        posts[2].id = 1;
        assert_eq!(run(&mut posts, 1), 2);
        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut posts = fixtures::posts(2);
        assert_eq!(run(&mut posts, 9), 0);
        assert_eq!(posts.len(), 2);
    }
}
