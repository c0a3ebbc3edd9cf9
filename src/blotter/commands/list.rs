use crate::model::Post;

/// All posts, most recently created first. The stored order is left untouched.
pub fn run(posts: &[Post]) -> Vec<&Post> {
    posts.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn lists_newest_first() {
        let posts = fixtures::posts(3);
        let titles: Vec<_> = run(&posts).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Post 3", "Post 2", "Post 1"]);
        assert_eq!(posts[0].title, "Post 1");
    }

    #[test]
    fn empty_collection_lists_nothing() {
        assert!(run(&[]).is_empty());
    }
}
