//! Key event classification.
//!
//! Every key event maps to at most one [`Action`]. Printable characters
//! all go through a single insert command; there is no per-character table.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

use crate::editor::{Direction, EditCommand};

/// What a key press asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Edit(EditCommand),
    Save,
    NewDocument,
    Quit,
}

/// A key name in a script that [`parse_key`] does not understand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name `{0}`")]
pub struct UnknownKey(pub String);

/// Classify a key event.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let command = match key.code {
        KeyCode::Char('s') if ctrl => return Some(Action::Save),
        KeyCode::Char('n') if ctrl => return Some(Action::NewDocument),
        KeyCode::Char('q' | 'c') if ctrl => return Some(Action::Quit),
        // Terminals report backspace and tab as ctrl+h / ctrl+i.
        KeyCode::Char('h') if ctrl => EditCommand::DeleteBackward,
        KeyCode::Char('i') if ctrl => EditCommand::Tab,
        KeyCode::Char(c) if !ctrl && !alt && !c.is_control() => EditCommand::Insert(c),
        KeyCode::Enter => EditCommand::Newline,
        KeyCode::Tab => EditCommand::Tab,
        KeyCode::Backspace => EditCommand::DeleteBackward,
        KeyCode::Left => EditCommand::Move(Direction::Left),
        KeyCode::Right => EditCommand::Move(Direction::Right),
        KeyCode::Up => EditCommand::Move(Direction::Up),
        KeyCode::Down => EditCommand::Move(Direction::Down),
        _ => return None,
    };
    Some(Action::Edit(command))
}

/// Parse a textual key name such as `a`, `space`, `enter`, `left` or
/// `ctrl+s`.
pub fn parse_key(name: &str) -> Option<KeyEvent> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyEvent::new(KeyCode::Char(c), modifiers));
    }

    if let Some(rest) = name.strip_prefix("ctrl+") {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyEvent::new(
                KeyCode::Char(c.to_ascii_lowercase()),
                KeyModifiers::CONTROL,
            )),
            _ => None,
        };
    }

    let code = match name {
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "esc" | "escape" => KeyCode::Esc,
        _ => return None,
    };
    Some(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Parse a whitespace-separated key script.
///
/// # Errors
/// Returns [`UnknownKey`] for the first token that is not a key name.
pub fn parse_key_script(script: &str) -> Result<Vec<KeyEvent>, UnknownKey> {
    script
        .split_whitespace()
        .map(|token| parse_key(token).ok_or_else(|| UnknownKey(token.to_string())))
        .collect()
}
