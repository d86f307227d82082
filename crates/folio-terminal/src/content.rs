//! Content table: the static output behind each portfolio command.
//!
//! A content table is a TOML file with one `[[commands]]` entry per
//! command. Each entry carries its description and a body of output
//! nodes; an entry with a `url` also asks the host to open that URL.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use folio_types::error::{FolioError, Result};
use folio_types::node::Node;

use crate::interpreter::{Command, CommandOutput, CommandRegistry};

/// Built-in portfolio content.
const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.toml");

/// A parsed content table.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentTable {
    #[serde(default)]
    pub commands: Vec<ContentEntry>,
}

/// One command's static content.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    /// External link the host opens when the command runs.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub body: Vec<Node>,
}

fn default_category() -> String {
    "portfolio".to_string()
}

impl ContentTable {
    /// Parse and validate a content table.
    ///
    /// Names are lower-cased. Empty names, duplicates, and names taken by
    /// the `help`/`clear` built-ins are rejected.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut table: ContentTable =
            toml::from_str(source).map_err(|e| FolioError::Content(format!("content: {e}")))?;

        let mut seen = HashSet::new();
        for entry in &mut table.commands {
            entry.name = entry.name.trim().to_lowercase();
            if entry.name.is_empty() {
                return Err(FolioError::Content("command with empty name".to_string()));
            }
            if entry.name == "help" || entry.name == "clear" {
                return Err(FolioError::Content(format!(
                    "'{}' is a built-in command",
                    entry.name
                )));
            }
            if !seen.insert(entry.name.clone()) {
                return Err(FolioError::Content(format!(
                    "duplicate command: {}",
                    entry.name
                )));
            }
        }
        Ok(table)
    }

    /// The portfolio table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CONTENT)
    }

    /// Load a content table from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Command names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|e| e.name.as_str()).collect()
    }
}

/// Resolve the content table to use.
///
/// Resolution order:
/// 1. The given path, when it names an existing file
/// 2. The built-in portfolio table, with a warning if a path was given
pub fn resolve_content(path: Option<&Path>) -> Result<ContentTable> {
    if let Some(path) = path {
        if path.is_file() {
            let table = ContentTable::load(path)?;
            log::info!(
                "Loaded {} commands from {}",
                table.commands.len(),
                path.display()
            );
            return Ok(table);
        }
        log::warn!(
            "Content '{}' not found -- falling back to built-in table",
            path.display()
        );
    }
    ContentTable::builtin()
}

/// Register one command per content entry.
pub fn register_content_commands(reg: &mut CommandRegistry, table: ContentTable) {
    for entry in table.commands {
        reg.register(Box::new(ContentCmd { entry }));
    }
}

/// A command whose output is a fixed content entry.
struct ContentCmd {
    entry: ContentEntry,
}

impl Command for ContentCmd {
    fn name(&self) -> &str {
        &self.entry.name
    }

    fn description(&self) -> &str {
        &self.entry.description
    }

    fn category(&self) -> &str {
        &self.entry.category
    }

    fn execute(&self) -> Result<CommandOutput> {
        let node = Node::block(self.entry.body.clone());
        Ok(match &self.entry.url {
            Some(url) => CommandOutput::OpenUrl {
                url: url.clone(),
                node,
            },
            None => CommandOutput::Node(node),
        })
    }
}
