//! Plain-text rendering of the session transcript.

use folio_terminal::TranscriptEntry;

/// Render one transcript entry: the echoed command line (if any) followed
/// by the output.
pub fn render_entry(prompt: &str, entry: &TranscriptEntry) -> String {
    let mut out = String::new();
    if !entry.command.is_empty() {
        out.push_str(&format!("{prompt} {}\n", entry.command));
    }
    let body = entry.output.render_plain();
    if !body.is_empty() {
        out.push_str(&body);
        out.push('\n');
    }
    out
}

/// Tracks how much of the transcript the host has already printed.
#[derive(Debug, Default)]
pub struct TranscriptView {
    printed: usize,
}

impl TranscriptView {
    /// Whether `entries` is shorter than what was already printed.
    pub fn is_cleared(&self, entries: &[TranscriptEntry]) -> bool {
        entries.len() < self.printed
    }

    /// Render entries not yet printed. A transcript shorter than what was
    /// printed means it was cleared, so printing restarts from the top.
    pub fn render_new(&mut self, prompt: &str, entries: &[TranscriptEntry]) -> String {
        if self.is_cleared(entries) {
            self.printed = 0;
        }
        let out = entries[self.printed..]
            .iter()
            .map(|e| render_entry(prompt, e))
            .collect::<Vec<_>>()
            .join("\n");
        self.printed = entries.len();
        out
    }
}
