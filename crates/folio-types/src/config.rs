//! Host configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::node::Node;

/// Top-level configuration (`folio.toml`). Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Prompt shown before the input line and echoed commands.
    pub prompt: String,
    /// First line of the welcome entry.
    pub welcome_title: String,
    /// Hint line of the welcome entry; `{help}` marks the highlighted word.
    pub welcome_hint: String,
    /// Content table to load instead of the built-in one.
    pub content: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            prompt: "hacker@portfolio:~$".to_string(),
            welcome_title: "Welcome to Het's Terminal Portfolio v1.0.0".to_string(),
            welcome_hint: "Type {help} to see available commands".to_string(),
            content: None,
        }
    }
}

impl FolioConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| FolioError::Config(format!("folio.toml: {e}")))
    }

    /// Load a configuration file. A relative `content` path is resolved
    /// against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&source)?;
        if let Some(content) = config.content.take() {
            let resolved = match path.parent() {
                Some(dir) if content.is_relative() => dir.join(content),
                _ => content,
            };
            config.content = Some(resolved);
        }
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the entry a fresh session starts with.
    pub fn welcome_node(&self) -> Node {
        let hint = match self.welcome_hint.split_once("{help}") {
            Some((before, after)) => Node::paragraph(vec![
                Node::text(before),
                Node::emphasis("help"),
                Node::text(after),
            ]),
            None => Node::paragraph(vec![Node::text(self.welcome_hint.as_str())]),
        };
        Node::block(vec![Node::heading(self.welcome_title.as_str()), hint])
    }
}
