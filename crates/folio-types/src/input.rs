//! Host input event types.
//!
//! Every host maps its native keystrokes to these events. The terminal
//! session never sees raw platform input.

/// A single input event delivered by the host view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Text typed into the input line (normally one character).
    Text(String),
    /// Commit the input line.
    Enter,
    /// Complete the command name in the input line.
    Tab,
    /// Recall the previous history entry.
    ArrowUp,
    /// Move forward through history toward the live draft.
    ArrowDown,
    /// Move the edit position one character left.
    ArrowLeft,
    /// Move the edit position one character right.
    ArrowRight,
    /// Move the edit position to the start of the line.
    Home,
    /// Move the edit position to the end of the line.
    End,
    /// Delete the character before the edit position.
    Backspace,
    /// Delete the character at the edit position.
    Delete,
}

impl InputEvent {
    /// Shorthand for a single typed character.
    pub fn char(ch: char) -> Self {
        Self::Text(ch.to_string())
    }

    /// Whether the event moves through history rather than editing.
    pub fn is_history_nav(&self) -> bool {
        matches!(self, Self::ArrowUp | Self::ArrowDown)
    }
}
