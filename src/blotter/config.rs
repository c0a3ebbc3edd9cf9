use crate::error::{BlogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "blotter.json";
const DEFAULT_STORE_FILE: &str = "blog.json";
const DEFAULT_EXPORT_FILE: &str = "blog.html";

/// Where the blog lives and where exports go, optionally read from `blotter.json`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BlogConfig {
    /// JSON backing file holding every post
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,

    /// Target of the HTML export
    #[serde(default = "default_export_file")]
    pub export_file: PathBuf,
}

fn default_store_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_export_file() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            export_file: default_export_file(),
        }
    }
}

impl BlogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BlogError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| BlogError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Command-line values win over whatever was loaded.
    pub fn with_overrides(
        mut self,
        store_file: Option<PathBuf>,
        export_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = store_file {
            self.store_file = path;
        }
        if let Some(path) = export_file {
            self.export_file = path;
        }
        self
    }
}
