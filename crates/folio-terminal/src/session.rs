//! Terminal session: input line, command history, and transcript.
//!
//! A `Session` owns everything one terminal view needs. The host feeds it
//! input events one at a time and re-renders `input()` and `transcript()`
//! afterwards. Every operation is total: unknown commands become a
//! transcript entry, everything else is a no-op or a well-defined edit.

use folio_types::error::FolioError;
use folio_types::input::InputEvent;
use folio_types::node::Node;

use crate::interpreter::{CommandOutput, CommandRegistry, not_found_node};

/// One scrollback entry: the command as dispatched and what it printed.
///
/// `command` is empty for entries that were not typed by the user
/// (the welcome banner, tab-completion listings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub command: String,
    pub output: Node,
}

/// A side effect the host should perform. The session never waits on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    OpenUrl(String),
}

/// Interpreter state for one terminal view.
pub struct Session {
    registry: CommandRegistry,
    input: String,
    /// Edit position in characters.
    cursor: usize,
    history: Vec<String>,
    /// Recalled history index; `None` while the input holds live typing.
    history_cursor: Option<usize>,
    saved_draft: String,
    transcript: Vec<TranscriptEntry>,
    actions: Vec<HostAction>,
}

impl Session {
    /// Create a session whose transcript starts with `welcome`.
    pub fn new(registry: CommandRegistry, welcome: Node) -> Self {
        Self {
            registry,
            input: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_cursor: None,
            saved_draft: String::new(),
            transcript: vec![TranscriptEntry {
                command: String::new(),
                output: welcome,
            }],
            actions: Vec::new(),
        }
    }

    // -- Accessors --

    /// The live input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Edit position within the input line, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Committed command lines, oldest first, exactly as typed.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Index of the recalled history entry, if browsing.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Scrollback entries, oldest first.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// The command registry this session dispatches through.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Drain the side effects requested since the last call.
    pub fn take_actions(&mut self) -> Vec<HostAction> {
        std::mem::take(&mut self.actions)
    }

    /// Route a host input event to its handler.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Text(text) => self.on_character_input(text),
            InputEvent::Enter => self.on_commit(),
            InputEvent::Tab => self.on_tab_complete(),
            InputEvent::ArrowUp => self.on_history_prev(),
            InputEvent::ArrowDown => self.on_history_next(),
            InputEvent::ArrowLeft => self.on_cursor_left(),
            InputEvent::ArrowRight => self.on_cursor_right(),
            InputEvent::Home => self.cursor = 0,
            InputEvent::End => self.cursor = self.input_len(),
            InputEvent::Backspace => self.on_backspace(),
            InputEvent::Delete => self.on_delete(),
        }
    }

    // -- Editing --

    /// Insert text at the edit position. Line breaks are dropped.
    pub fn on_character_input(&mut self, text: &str) {
        let filtered: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if filtered.is_empty() {
            return;
        }
        self.detach_from_history();
        let at = self.byte_index(self.cursor);
        self.input.insert_str(at, &filtered);
        self.cursor += filtered.chars().count();
    }

    /// Delete the character before the edit position.
    pub fn on_backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.detach_from_history();
        let at = self.byte_index(self.cursor - 1);
        self.input.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character at the edit position.
    pub fn on_delete(&mut self) {
        if self.cursor >= self.input_len() {
            return;
        }
        self.detach_from_history();
        let at = self.byte_index(self.cursor);
        self.input.remove(at);
    }

    pub fn on_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn on_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input_len());
    }

    // -- Commit and dispatch --

    /// Commit the input line.
    ///
    /// Blank input is ignored. Anything else is recorded in history as
    /// typed, dispatched trimmed and lower-cased, and its output appended
    /// to the transcript. The input line is always cleared.
    pub fn on_commit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.history_cursor = None;
        self.saved_draft.clear();

        let command = raw.trim().to_lowercase();
        if command.is_empty() {
            return;
        }
        self.history.push(raw);

        log::debug!("Commit '{command}'");
        match self.registry.dispatch(&command) {
            Ok(CommandOutput::Node(output)) => self.push_entry(command, output),
            Ok(CommandOutput::Clear) => self.transcript.clear(),
            Ok(CommandOutput::OpenUrl { url, node }) => {
                log::info!("Requesting host to open {url}");
                self.actions.push(HostAction::OpenUrl(url));
                self.push_entry(command, node);
            },
            Err(FolioError::UnknownCommand(_)) => {
                let output = not_found_node(&command);
                self.push_entry(command, output);
            },
            Err(e) => {
                log::warn!("Command '{command}' failed: {e}");
                self.push_entry(command, Node::text(format!("error: {e}")));
            },
        }
    }

    fn push_entry(&mut self, command: String, output: Node) {
        self.transcript.push(TranscriptEntry { command, output });
    }

    // -- History --

    /// Recall the previous history entry, saving the live draft first.
    pub fn on_history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_cursor {
            None => {
                self.saved_draft = std::mem::take(&mut self.input);
                self.history.len() - 1
            },
            Some(0) => return,
            Some(i) => i - 1,
        };
        log::trace!("History prev -> {idx}");
        self.recall(Some(idx));
    }

    /// Move forward through history, restoring the draft past the newest.
    pub fn on_history_next(&mut self) {
        let Some(i) = self.history_cursor else {
            return;
        };
        let next = if i + 1 >= self.history.len() {
            None
        } else {
            Some(i + 1)
        };
        log::trace!("History next -> {next:?}");
        self.recall(next);
    }

    fn recall(&mut self, idx: Option<usize>) {
        self.input = match idx {
            Some(i) => self.history[i].clone(),
            None => std::mem::take(&mut self.saved_draft),
        };
        self.history_cursor = idx;
        self.cursor = self.input_len();
    }

    /// An edit turns a recalled entry into live input.
    fn detach_from_history(&mut self) {
        if self.history_cursor.take().is_some() {
            log::trace!("Input edited while browsing history; draft discarded");
            self.saved_draft.clear();
        }
    }

    // -- Completion --

    /// Complete the command name in the input line.
    ///
    /// One match replaces the input. Several matches are listed in the
    /// transcript without touching input or history. No match, or an
    /// empty line, does nothing.
    pub fn on_tab_complete(&mut self) {
        let prefix = self.input.trim().to_lowercase();
        if prefix.is_empty() {
            return;
        }
        let mut matches = self.registry.completions(&prefix);
        match matches.len() {
            0 => {},
            1 => {
                let completed = matches.remove(0);
                if completed != self.input {
                    self.detach_from_history();
                    self.input = completed;
                }
                self.cursor = self.input_len();
            },
            _ => {
                let listing = Node::list(matches.into_iter().map(Node::emphasis).collect());
                self.push_entry(String::new(), listing);
            },
        }
    }

    // -- Helpers --

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(i, _)| i)
    }
}
