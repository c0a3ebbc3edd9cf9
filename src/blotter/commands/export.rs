//! Static HTML rendering of the blog.
//!
//! The page is a minijinja template rendered with HTML auto-escaping, so every
//! user-supplied string is escaped on output. Timestamps are generated by the
//! application and are marked safe to emit them verbatim.

use crate::error::Result;
use crate::model::Post;
use minijinja::{context, AutoEscape, Environment, Value};

const TEMPLATE_NAME: &str = "blog.html";

const BLOG_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>My Blog</title>
    <style>
        body { font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }
        .post { border: 1px solid #ddd; padding: 20px; margin-bottom: 20px; }
        .post-title { font-size: 24px; font-weight: bold; margin-bottom: 10px; }
        .post-meta { color: #666; font-size: 14px; margin-bottom: 15px; }
        .comment { background: #f5f5f5; padding: 10px; margin-top: 10px; }
        .comment-author { font-weight: bold; }
        .comment-date { font-size: 12px; color: #999; }
    </style>
</head>
<body>
    <h1>My Blog</h1>
{% for post in posts %}
    <div class="post">
        <div class="post-title">{{ post.title }}</div>
        <div class="post-meta">By {{ post.author }} on {{ post.created_at|safe }}</div>
        <div class="post-content">{{ post.content|escape|nl2br }}</div>
{% if post.comments %}
        <h3>Comments ({{ post.comments|length }})</h3>
{% for comment in post.comments %}
        <div class="comment">
            <div class="comment-author">{{ comment.author }}</div>
            <div>{{ comment.content }}</div>
            <div class="comment-date">{{ comment.created_at|safe }}</div>
        </div>
{% endfor %}
{% endif %}
    </div>
{% endfor %}
</body>
</html>
"#;

/// Renders `posts` in the order given; the service passes newest first.
pub fn render_html(posts: &[&Post]) -> Result<String> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_trim_blocks(true);
    env.add_filter("nl2br", |value: Value| Value::from_safe_string(nl2br(&value.to_string())));
    env.add_template(TEMPLATE_NAME, BLOG_TEMPLATE)?;

    let tmpl = env.get_template(TEMPLATE_NAME)?;
    Ok(tmpl.render(context! { posts => posts })?)
}

/// Inserts `<br />` before every line break, keeping the break itself.
///
/// `\r\n` and `\n\r` count as a single break.
fn nl2br(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\n' && c != '\r' {
            out.push(c);
            continue;
        }
        out.push_str("<br />");
        out.push(c);
        if let Some(&next) = chars.peek() {
            if (next == '\n' || next == '\r') && next != c {
                out.push(next);
                chars.next();
            }
        }
    }
    out
}
