//! Renderable output nodes.
//!
//! Command output is a small tree of nodes independent of any rendering
//! technology. Nodes deserialize from TOML (tagged by `kind`) so command
//! content can live in data files. Hosts render the tree themselves; the
//! plain-text renderer here serves line-mode hosts and tests.

use serde::Deserialize;

/// Indentation step applied to list children.
const INDENT: usize = 2;

/// A node in a command's output tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Plain text run.
    Text { text: String },
    /// Section title.
    Heading { text: String },
    /// Highlighted text run (command names, labels).
    Emphasis { text: String },
    /// Hyperlink with a display label.
    Link { text: String, href: String },
    /// Inline children rendered on one line.
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Children rendered one per line, indented.
    List {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Children rendered one per line at the current indentation.
    Block {
        #[serde(default)]
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::Emphasis { text: text.into() }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            href: href.into(),
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::Paragraph { children }
    }

    pub fn list(children: Vec<Node>) -> Self {
        Self::List { children }
    }

    pub fn block(children: Vec<Node>) -> Self {
        Self::Block { children }
    }

    /// An empty block, used where an entry carries no visible output.
    pub fn empty() -> Self {
        Self::Block {
            children: Vec::new(),
        }
    }

    /// Whether the node renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text { text } | Self::Heading { text } | Self::Emphasis { text } => {
                text.is_empty()
            },
            Self::Link { text, href } => text.is_empty() && href.is_empty(),
            Self::Paragraph { children } | Self::List { children } | Self::Block { children } => {
                children.iter().all(Node::is_empty)
            },
        }
    }

    /// Flatten the node into a single line of text.
    pub fn inline_text(&self) -> String {
        match self {
            Self::Text { text } | Self::Heading { text } | Self::Emphasis { text } => text.clone(),
            Self::Link { text, href } => {
                if text.is_empty() || text == href {
                    href.clone()
                } else {
                    format!("{text} ({href})")
                }
            },
            Self::Paragraph { children } => children.iter().map(Node::inline_text).collect(),
            Self::List { children } | Self::Block { children } => children
                .iter()
                .map(Node::inline_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Render the node as indented plain-text lines.
    pub fn render_plain(&self) -> String {
        let mut lines = Vec::new();
        self.render_lines(0, &mut lines);
        lines.join("\n")
    }

    fn render_lines(&self, indent: usize, out: &mut Vec<String>) {
        match self {
            Self::List { children } => {
                for child in children {
                    child.render_lines(indent + INDENT, out);
                }
            },
            Self::Block { children } => {
                for child in children {
                    child.render_lines(indent, out);
                }
            },
            _ => {
                let line = self.inline_text();
                if !line.is_empty() {
                    out.push(format!("{:indent$}{line}", ""));
                }
            },
        }
    }
}
