//! Command trait, registry, and dispatch logic.
//!
//! Dispatch is a name lookup: the session hands over an already trimmed,
//! lower-cased command line and the registry resolves it to exactly one
//! output. `help` and `clear` are built in and need registry access.

use std::collections::HashMap;

use folio_types::error::{FolioError, Result};
use folio_types::node::Node;

/// Names handled by the registry itself.
const BUILTINS: [(&str, &str); 2] = [
    ("clear", "Clear the terminal"),
    ("help", "Show this help message"),
];

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Content to append to the transcript.
    Node(Node),
    /// Signal to empty the transcript.
    Clear,
    /// Content to append, plus a request for the host to open a URL.
    OpenUrl { url: String, node: Node },
}

/// A single dispatchable command.
pub trait Command {
    /// The command name (what the user types), lower-case.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Command category.
    fn category(&self) -> &str {
        "general"
    }

    /// Produce the command's output.
    fn execute(&self) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry holding only the built-ins.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let name = cmd.name().to_string();
        if is_builtin(&name) {
            log::warn!("Command '{name}' is shadowed by the built-in of the same name");
        }
        if self.commands.insert(name.clone(), cmd).is_some() {
            log::debug!("Replaced command '{name}'");
        }
    }

    /// Dispatch a trimmed, lower-cased command.
    ///
    /// Returns `FolioError::UnknownCommand` carrying the command as given
    /// when nothing matches.
    pub fn dispatch(&self, command: &str) -> Result<CommandOutput> {
        match command {
            "help" => return Ok(self.execute_help()),
            "clear" => return Ok(CommandOutput::Clear),
            _ => {},
        }
        match self.commands.get(command) {
            Some(cmd) => {
                log::debug!("Dispatching '{command}' ({})", cmd.category());
                cmd.execute()
            },
            None => Err(FolioError::UnknownCommand(command.to_string())),
        }
    }

    /// Built-in help listing every command with its description.
    fn execute_help(&self) -> CommandOutput {
        let items = self
            .list_commands()
            .into_iter()
            .map(|(name, desc)| {
                Node::paragraph(vec![Node::emphasis(name), Node::text(format!(" - {desc}"))])
            })
            .collect();
        CommandOutput::Node(Node::block(vec![
            Node::heading("Available commands:"),
            Node::list(items),
        ]))
    }

    /// Return a sorted list of (name, description) pairs, built-ins included.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = BUILTINS.to_vec();
        cmds.extend(
            self.commands
                .values()
                .filter(|c| !is_builtin(c.name()))
                .map(|c| (c.name(), c.description())),
        );
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Every dispatchable name, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.list_commands()
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Whether `name` dispatches to something.
    pub fn contains(&self, name: &str) -> bool {
        is_builtin(name) || self.commands.contains_key(name)
    }

    /// Return the sorted names starting with `prefix`.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.names()
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn is_builtin(name: &str) -> bool {
    BUILTINS.iter().any(|(builtin, _)| *builtin == name)
}

/// Transcript content for a command nothing matched.
pub fn not_found_node(command: &str) -> Node {
    Node::paragraph(vec![
        Node::text(format!("Command not found: {command}. Type ")),
        Node::emphasis("help"),
        Node::text(" to see available commands."),
    ])
}
