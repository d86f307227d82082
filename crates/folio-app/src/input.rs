//! Translate stdin lines into session input events.
//!
//! In a cooked terminal the host only sees whole lines, so special keys
//! arrive as raw bytes inside the line: a literal tab, ANSI arrow
//! sequences (`ESC [ A` .. `ESC [ D`, also `ESC O x`), and DEL/BS.

use folio_types::input::InputEvent;

const ESC: char = '\u{1b}';
const DEL: char = '\u{7f}';
const BS: char = '\u{8}';

/// Convert one input line (without its newline) into events.
///
/// The line is committed with a trailing `Enter` unless its last event is
/// a tab or an arrow key; then the edited input stays pending so the user
/// can keep typing on the next line.
pub fn line_to_events(line: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let mut text = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        let event = match ch {
            '\t' => Some(InputEvent::Tab),
            DEL | BS => Some(InputEvent::Backspace),
            ESC if matches!(chars.peek(), Some('[' | 'O')) => {
                chars.next();
                match chars.next() {
                    Some('A') => Some(InputEvent::ArrowUp),
                    Some('B') => Some(InputEvent::ArrowDown),
                    Some('C') => Some(InputEvent::ArrowRight),
                    Some('D') => Some(InputEvent::ArrowLeft),
                    Some('H') => Some(InputEvent::Home),
                    Some('F') => Some(InputEvent::End),
                    Some('3') if chars.peek() == Some(&'~') => {
                        chars.next();
                        Some(InputEvent::Delete)
                    },
                    other => {
                        log::debug!("Ignoring escape sequence ending in {other:?}");
                        continue;
                    },
                }
            },
            c if c.is_control() => continue,
            c => {
                text.push(c);
                None
            },
        };
        if let Some(event) = event {
            if !text.is_empty() {
                events.push(InputEvent::Text(std::mem::take(&mut text)));
            }
            events.push(event);
        }
    }
    if !text.is_empty() {
        events.push(InputEvent::Text(text));
    }

    let keeps_pending = events.last().is_some_and(|e| {
        e.is_history_nav()
            || matches!(
                e,
                InputEvent::Tab | InputEvent::ArrowLeft | InputEvent::ArrowRight
            )
    });
    if !keeps_pending {
        events.push(InputEvent::Enter);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_commits() {
        assert_eq!(
            line_to_events("whoami"),
            vec![InputEvent::Text("whoami".into()), InputEvent::Enter]
        );
    }

    #[test]
    fn empty_line_is_bare_enter() {
        assert_eq!(line_to_events(""), vec![InputEvent::Enter]);
    }

    #[test]
    fn trailing_tab_stays_pending() {
        assert_eq!(
            line_to_events("hel\t"),
            vec![InputEvent::Text("hel".into()), InputEvent::Tab]
        );
    }

    #[test]
    fn arrow_up_alone_stays_pending() {
        assert_eq!(line_to_events("\u{1b}[A"), vec![InputEvent::ArrowUp]);
    }

    #[test]
    fn arrow_then_text_commits() {
        assert_eq!(
            line_to_events("\u{1b}[A\u{1b}[Bx"),
            vec![
                InputEvent::ArrowUp,
                InputEvent::ArrowDown,
                InputEvent::Text("x".into()),
                InputEvent::Enter,
            ]
        );
    }

    #[test]
    fn ss3_arrows_and_delete() {
        assert_eq!(
            line_to_events("ab\u{1b}OD\u{1b}[3~"),
            vec![
                InputEvent::Text("ab".into()),
                InputEvent::ArrowLeft,
                InputEvent::Delete,
                InputEvent::Enter,
            ]
        );
    }

    #[test]
    fn backspace_bytes() {
        assert_eq!(
            line_to_events("helpx\u{7f}"),
            vec![
                InputEvent::Text("helpx".into()),
                InputEvent::Backspace,
                InputEvent::Enter,
            ]
        );
    }

    #[test]
    fn unknown_escape_is_dropped() {
        assert_eq!(
            line_to_events("a\u{1b}[Zb"),
            vec![InputEvent::Text("ab".into()), InputEvent::Enter]
        );
    }

    #[test]
    fn stray_control_chars_are_dropped() {
        assert_eq!(
            line_to_events("he\u{0}lp\r"),
            vec![InputEvent::Text("help".into()), InputEvent::Enter]
        );
    }
}
