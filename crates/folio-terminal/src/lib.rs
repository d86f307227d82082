//! Command interpreter and terminal session.
//!
//! The terminal is a registry-based dispatch system. Portfolio commands are
//! loaded from a content table and registered by name; `help` and `clear`
//! are built in. A `Session` turns host input events into buffer edits,
//! history navigation, tab completion, and transcript entries.

mod content;
mod interpreter;
mod session;

/// Content table types and loading.
pub use content::{ContentEntry, ContentTable, register_content_commands, resolve_content};
/// A single dispatchable command trait.
pub use interpreter::Command;
/// Output produced by a command (content, clear signal, open-url request).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Transcript content for an unknown command.
pub use interpreter::not_found_node;
/// Per-view interpreter state.
pub use session::{HostAction, Session, TranscriptEntry};

use folio_types::error::Result;
use folio_types::node::Node;

/// Build a session over the given content table.
pub fn portfolio_session(table: ContentTable, welcome: Node) -> Session {
    let mut reg = CommandRegistry::new();
    register_content_commands(&mut reg, table);
    Session::new(reg, welcome)
}

/// Build a session over the built-in portfolio content.
pub fn builtin_session(welcome: Node) -> Result<Session> {
    Ok(portfolio_session(ContentTable::builtin()?, welcome))
}
