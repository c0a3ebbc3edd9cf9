//! # Rendering Module
//!
//! Terminal output goes through minijinja templates (see `templates.rs`) with a
//! `style` filter backed by [`BLOG_THEME`]. With colors off the filter is a
//! no-op, so piped output is plain text.

use super::styles::{names, BLOG_THEME};
use super::templates::{
    MENU_TEMPLATE, MESSAGE_TEMPLATE, POST_DETAIL_TEMPLATE, POST_LIST_TEMPLATE, SEARCH_TEMPLATE,
};
use blotter::error::Result;
use blotter::model::Post;
use minijinja::{context, Environment, Value};
use serde::Serialize;

const MENU_TITLE: &str = "=== Simple Blog ===";
const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
}

impl MessageLevel {
    fn style_name(self) -> &'static str {
        match self {
            MessageLevel::Success => names::SUCCESS,
            MessageLevel::Error => names::ERROR,
        }
    }
}

#[derive(Serialize)]
struct MenuItem {
    key: usize,
    label: &'static str,
}

pub struct Renderer {
    env: Environment<'static>,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            BLOG_THEME.apply(&name, &value.to_string(), use_color)
        });

        env.add_template("menu", MENU_TEMPLATE)?;
        env.add_template("post_list", POST_LIST_TEMPLATE)?;
        env.add_template("post_detail", POST_DETAIL_TEMPLATE)?;
        env.add_template("search", SEARCH_TEMPLATE)?;
        env.add_template("message", MESSAGE_TEMPLATE)?;

        Ok(Self { env, use_color })
    }

    fn render<T: Serialize>(&self, name: &str, data: T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    pub fn menu(&self, labels: &[&'static str]) -> Result<String> {
        let items: Vec<MenuItem> = labels
            .iter()
            .copied()
            .enumerate()
            .map(|(i, label)| MenuItem { key: i + 1, label })
            .collect();
        self.render("menu", context! { title => MENU_TITLE, items => items })
    }

    pub fn prompt(&self, text: &str) -> String {
        BLOG_THEME.apply(names::PROMPT, text, self.use_color)
    }

    pub fn post_list(&self, posts: &[&Post]) -> Result<String> {
        self.render(
            "post_list",
            context! { posts => posts, separator => "-".repeat(SEPARATOR_WIDTH) },
        )
    }

    pub fn post_detail(&self, post: &Post) -> Result<String> {
        self.render("post_detail", context! { post => post })
    }

    pub fn search_results(&self, posts: &[&Post]) -> Result<String> {
        self.render("search", context! { posts => posts })
    }

    pub fn message(&self, level: MessageLevel, content: &str) -> Result<String> {
        self.render(
            "message",
            context! { content => content, level => level.style_name() },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blotter::model::Comment;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: title.into(),
            content: "first line\nsecond line".into(),
            author: "alice".into(),
            created_at: "2024-02-03 04:05:06".into(),
            comments: vec![],
        }
    }

    fn plain() -> Renderer {
        Renderer::new(false).unwrap()
    }

    #[test]
    fn menu_numbers_items() {
        let out = plain().menu(&["Create Post", "Exit"]).unwrap();
        assert_eq!(out, "\n=== Simple Blog ===\n1. Create Post\n2. Exit\n");
    }

    #[test]
    fn empty_post_list() {
        assert_eq!(plain().post_list(&[]).unwrap(), "No posts yet\n");
    }

    #[test]
    fn post_list_shows_summary_lines() {
        let mut p = post(2, "Hello");
        p.comments.push(Comment {
            id: 1,
            author: "bob".into(),
            content: "hi".into(),
            created_at: "2024-02-03 05:00:00".into(),
        });
        let out = plain().post_list(&[&p]).unwrap();
        let expected = format!(
            "\nID: 2\nTitle: Hello\nAuthor: alice\nDate: 2024-02-03 04:05:06\nComments: 1\n{}\n",
            "-".repeat(50)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn post_detail_lists_comments() {
        let mut p = post(1, "Hello");
        p.comments.push(Comment {
            id: 1,
            author: "bob".into(),
            content: "nice".into(),
            created_at: "2024-02-03 05:00:00".into(),
        });
        let out = plain().post_detail(&p).unwrap();
        assert_eq!(
            out,
            "\nTitle: Hello\nAuthor: alice\nDate: 2024-02-03 04:05:06\n\nContent:\nfirst line\nsecond line\n\nComments (1):\n  - bob: nice\n    2024-02-03 05:00:00\n"
        );
    }

    #[test]
    fn post_detail_without_comments() {
        let out = plain().post_detail(&post(1, "Solo")).unwrap();
        assert!(out.ends_with("Comments (0):\n"));
    }

    #[test]
    fn search_results_and_empty_search() {
        let a = post(1, "Alpha");
        let b = post(3, "Beta");
        assert_eq!(
            plain().search_results(&[&a, &b]).unwrap(),
            "ID: 1 - Alpha\nID: 3 - Beta\n"
        );
        assert_eq!(plain().search_results(&[]).unwrap(), "No posts found\n");
    }

    #[test]
    fn messages_are_single_lines() {
        let out = plain().message(MessageLevel::Error, "Post not found").unwrap();
        assert_eq!(out, "Post not found\n");
    }

    #[test]
    fn user_text_is_not_escaped() {
        let out = plain().search_results(&[&post(1, "<b>&</b>")]).unwrap();
        assert_eq!(out, "ID: 1 - <b>&</b>\n");
    }
}
