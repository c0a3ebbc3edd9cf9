//! Templates for terminal output.
//!
//! Rendered with `trim_blocks` and `keep_trailing_newline`, so each one yields
//! whole lines ending in `\n`.

pub const MENU_TEMPLATE: &str = r#"
{{ title | style("header") }}
{% for item in items %}
{{ item.key | style("menu_key") }}. {{ item.label }}
{% endfor %}
"#;

pub const POST_LIST_TEMPLATE: &str = r#"{% if posts %}
{% for post in posts %}

{{ "ID:" | style("label") }} {{ post.id }}
{{ "Title:" | style("label") }} {{ post.title }}
{{ "Author:" | style("label") }} {{ post.author | style("author") }}
{{ "Date:" | style("label") }} {{ post.created_at | style("date") }}
{{ "Comments:" | style("label") }} {{ post.comments | length }}
{{ separator | style("separator") }}
{% endfor %}
{% else %}
{{ "No posts yet" | style("info") }}
{% endif %}
"#;

pub const POST_DETAIL_TEMPLATE: &str = r#"
{{ "Title:" | style("label") }} {{ post.title }}
{{ "Author:" | style("label") }} {{ post.author | style("author") }}
{{ "Date:" | style("label") }} {{ post.created_at | style("date") }}

{{ "Content:" | style("label") }}
{{ post.content }}

{{ ("Comments (" ~ post.comments | length ~ "):") | style("label") }}
{% for comment in post.comments %}
  - {{ comment.author | style("author") }}: {{ comment.content }}
    {{ comment.created_at | style("date") }}
{% endfor %}
"#;

pub const SEARCH_TEMPLATE: &str = r#"{% if posts %}
{% for post in posts %}
{{ "ID:" | style("label") }} {{ post.id }} - {{ post.title }}
{% endfor %}
{% else %}
{{ "No posts found" | style("info") }}
{% endif %}
"#;

pub const MESSAGE_TEMPLATE: &str = r#"{{ content | style(level) }}
"#;
