use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names referenced from the templates.
pub mod names {
    pub const HEADER: &str = "header";
    pub const MENU_KEY: &str = "menu_key";
    pub const PROMPT: &str = "prompt";
    pub const LABEL: &str = "label";
    pub const DATE: &str = "date";
    pub const AUTHOR: &str = "author";
    pub const SEPARATOR: &str = "separator";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

/// Named `console` styles applied by the `style` template filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styled text, or the text unchanged when colors are off or the name is unknown.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }
}

pub static BLOG_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold().cyan())
        .add(names::MENU_KEY, Style::new().yellow())
        .add(names::PROMPT, Style::new().bold())
        .add(names::LABEL, Style::new().bold())
        .add(names::DATE, Style::new().dim().italic())
        .add(names::AUTHOR, Style::new().cyan())
        .add(names::SEPARATOR, Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::ERROR, Style::new().red())
});
