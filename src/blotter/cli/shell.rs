//! The interactive menu loop.
//!
//! Generic over input and output so tests can drive it with in-memory buffers.
//! End of input is treated like choosing Exit.

use super::render::{MessageLevel, Renderer};
use blotter::api::Blog;
use blotter::error::{BlogError, Result};
use blotter::store::PostStore;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreatePost,
    ListPosts,
    ViewPost,
    AddComment,
    DeletePost,
    Search,
    Export,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::CreatePost,
        MenuChoice::ListPosts,
        MenuChoice::ViewPost,
        MenuChoice::AddComment,
        MenuChoice::DeletePost,
        MenuChoice::Search,
        MenuChoice::Export,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreatePost => "Create Post",
            MenuChoice::ListPosts => "View All Posts",
            MenuChoice::ViewPost => "View Post Details",
            MenuChoice::AddComment => "Add Comment",
            MenuChoice::DeletePost => "Delete Post",
            MenuChoice::Search => "Search Posts",
            MenuChoice::Export => "Export to HTML",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Menu entries are numbered from 1 in `ALL` order.
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }
}

/// Parses an id the way a lenient numeric cast would: optional sign, then the
/// leading digits. Anything unusable becomes 0, which no post has.
pub fn parse_id(input: &str) -> u64 {
    let s = input.trim();
    if s.starts_with('-') {
        return 0;
    }
    let digits = s.strip_prefix('+').unwrap_or(s);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().unwrap_or(0)
}

enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, S: PostStore, R: BufRead, W: Write> {
    blog: &'a mut Blog<S>,
    input: R,
    output: W,
    renderer: Renderer,
    export_file: PathBuf,
}

impl<'a, S: PostStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(
        blog: &'a mut Blog<S>,
        input: R,
        output: W,
        renderer: Renderer,
        export_file: PathBuf,
    ) -> Self {
        Self {
            blog,
            input,
            output,
            renderer,
            export_file,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let labels: Vec<&'static str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        loop {
            let menu = self.renderer.menu(&labels)?;
            self.write(&menu)?;

            let Some(input) = self.prompt("\nEnter choice: ")? else {
                return Ok(());
            };
            let flow = match MenuChoice::parse(&input) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.message(MessageLevel::Error, "Invalid choice")?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        tracing::debug!(?choice, "menu choice");
        match choice {
            MenuChoice::CreatePost => self.create_post(),
            MenuChoice::ListPosts => self.list_posts(),
            MenuChoice::ViewPost => self.view_post(),
            MenuChoice::AddComment => self.add_comment(),
            MenuChoice::DeletePost => self.delete_post(),
            MenuChoice::Search => self.search(),
            MenuChoice::Export => self.export(),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn create_post(&mut self) -> Result<Flow> {
        let Some(title) = self.prompt("Post title: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(content) = self.prompt("Post content: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt("Author name: ")? else {
            return Ok(Flow::Quit);
        };

        let post = self.blog.create_post(title, content, author)?;
        self.message(
            MessageLevel::Success,
            &format!("Post created with ID: {}", post.id),
        )?;
        Ok(Flow::Continue)
    }

    fn list_posts(&mut self) -> Result<Flow> {
        let out = self.renderer.post_list(&self.blog.get_all_posts())?;
        self.write(&out)?;
        Ok(Flow::Continue)
    }

    fn view_post(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Post ID: ")? else {
            return Ok(Flow::Quit);
        };
        match self.blog.get_post(parse_id(&raw)) {
            Some(post) => {
                let out = self.renderer.post_detail(post)?;
                self.write(&out)?;
            }
            None => self.message(MessageLevel::Error, "Post not found")?,
        }
        Ok(Flow::Continue)
    }

    fn add_comment(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Post ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt("Your name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(content) = self.prompt("Comment: ")? else {
            return Ok(Flow::Quit);
        };

        match self.blog.add_comment(parse_id(&raw), author, content) {
            Ok(_) => self.message(MessageLevel::Success, "Comment added")?,
            Err(BlogError::PostNotFound(_)) => {
                self.message(MessageLevel::Error, "Post not found")?
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn delete_post(&mut self) -> Result<Flow> {
        let Some(raw) = self.prompt("Post ID to delete: ")? else {
            return Ok(Flow::Quit);
        };
        // Reported as deleted even when nothing matched.
        self.blog.delete_post(parse_id(&raw))?;
        self.message(MessageLevel::Success, "Post deleted")?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Search query: ")? else {
            return Ok(Flow::Quit);
        };
        let out = self.renderer.search_results(&self.blog.search_posts(&query))?;
        self.write(&out)?;
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let path = self.blog.export_html(&self.export_file)?;
        self.message(
            MessageLevel::Success,
            &format!("Blog exported to {}", path.display()),
        )?;
        Ok(Flow::Continue)
    }

    /// Shows `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        let styled = self.renderer.prompt(text);
        self.write(&styled)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn message(&mut self, level: MessageLevel, content: &str) -> Result<()> {
        let out = self.renderer.message(level, content)?;
        self.write(&out)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
