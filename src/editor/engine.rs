use super::buffer::byte_offset;
use super::{Cursor, Direction, EditError, Position, TextBuffer};

/// Number of spaces inserted by [`EditEngine::insert_tab`] unless configured.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Openers that get their closer inserted automatically.
const AUTO_PAIRS: &[(char, char)] = &[
    ('[', ']'),
    ('(', ')'),
    ('"', '"'),
    ('\'', '\''),
    ('`', '`'),
];

/// Non-digit characters that start a list item worth continuing.
const LIST_BULLETS: &[char] = &['-', '*', '+'];

/// Tunables for an [`EditEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorSettings {
    /// Spaces inserted per tab press.
    pub tab_width: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// One edit operation, as produced by the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insert(char),
    InsertText(String),
    Newline,
    Tab,
    DeleteBackward,
    Move(Direction),
}

/// Buffer plus cursor, with the editing operations of a markdown note.
///
/// Every operation is total: boundary cases are no-ops instead of errors.
#[derive(Debug, Clone)]
pub struct EditEngine {
    buffer: TextBuffer,
    cursor: Cursor,
    settings: EditorSettings,
    dirty: bool,
}

impl EditEngine {
    /// Bind `cursor` to `buffer`.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidState`] if the cursor is out of bounds.
    pub fn new(buffer: TextBuffer, cursor: Cursor) -> Result<Self, EditError> {
        cursor.validate(&buffer)?;
        Ok(Self {
            buffer,
            cursor,
            settings: EditorSettings::default(),
            dirty: false,
        })
    }

    /// Load `text` with the cursor at the end of the text.
    pub fn from_text(text: &str) -> Self {
        let buffer = TextBuffer::from_text(text);
        let cursor = Cursor::end_of_text(&buffer);
        Self {
            buffer,
            cursor,
            settings: EditorSettings::default(),
            dirty: false,
        }
    }

    pub const fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn cursor_position(&self) -> Position {
        self.cursor.position()
    }

    pub const fn settings(&self) -> EditorSettings {
        self.settings
    }

    /// Snapshot of the whole document.
    pub fn current_text(&self) -> String {
        self.buffer.to_text()
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Run a single command.
    pub fn apply(&mut self, command: &EditCommand) {
        match command {
            EditCommand::Insert(ch) => self.insert_text(ch.encode_utf8(&mut [0; 4])),
            EditCommand::InsertText(text) => self.insert_text(text),
            EditCommand::Newline => self.insert_newline(),
            EditCommand::Tab => self.insert_tab(),
            EditCommand::DeleteBackward => self.delete_backward(),
            EditCommand::Move(direction) => self.move_cursor(*direction),
        }
    }

    /// Insert `text` at the cursor and advance past it.
    ///
    /// A lone opener such as `(` also inserts its closer and leaves the
    /// cursor between the two. Text containing `\n` is inserted line by
    /// line without auto-pairing or list continuation.
    pub fn insert_text(&mut self, text: &str) {
        if text.contains('\n') {
            self.paste(text);
            return;
        }
        self.write(text);
        if let Some(closer) = closer_for(text) {
            self.write(closer.encode_utf8(&mut [0; 4]));
            self.cursor.set_column(self.cursor.column() - 1);
        }
    }

    /// Split the current line at the cursor (Enter key), continuing lists.
    pub fn insert_newline(&mut self) {
        let Ok(original) = self
            .buffer
            .line_at(self.cursor.line())
            .map(ToOwned::to_owned)
        else {
            return;
        };
        if !self.break_line() {
            return;
        }
        if let Some(marker) = list_marker(&original) {
            self.insert_text(&marker);
        }
    }

    /// Insert `tab_width` spaces.
    pub fn insert_tab(&mut self) {
        let spaces = " ".repeat(self.settings.tab_width);
        self.insert_text(&spaces);
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// An empty line is removed outright and the cursor jumps to the end of
    /// the text. At column 0 the line is joined onto the previous one.
    pub fn delete_backward(&mut self) {
        let Position { line, column } = self.cursor.position();

        if self.buffer.line_len(line) == 0 {
            if line > 0 && self.buffer.remove_line(line).is_ok() {
                self.cursor = Cursor::end_of_text(&self.buffer);
                self.dirty = true;
            }
            return;
        }

        if column == 0 {
            if line == 0 {
                return;
            }
            let prev_len = self.buffer.line_len(line - 1);
            if self.buffer.merge_line_with_previous(line).is_ok() {
                self.cursor.set(line - 1, prev_len);
                self.dirty = true;
            }
            return;
        }

        self.cursor.step(Direction::Left, &self.buffer);
        let column = self.cursor.column();
        if let Ok(current) = self.buffer.line_mut(line) {
            let at = byte_offset(current, column);
            if at < current.len() {
                current.remove(at);
                self.dirty = true;
            }
        }
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.step(direction, &self.buffer);
    }

    // --- Private helpers ---

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let Position { line, column } = self.cursor.position();
        let Ok(current) = self.buffer.line_mut(line) else {
            return;
        };
        let at = byte_offset(current, column);
        current.insert_str(at, text);
        self.cursor.set_column(column + text.chars().count());
        self.dirty = true;
    }

    fn break_line(&mut self) -> bool {
        let Position { line, column } = self.cursor.position();
        let at = column.min(self.buffer.line_len(line));
        if self.buffer.split_line(line, at).is_err() {
            return false;
        }
        self.cursor.set(line + 1, 0);
        self.dirty = true;
        true
    }

    fn paste(&mut self, text: &str) {
        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            self.write(first);
        }
        for segment in segments {
            if !self.break_line() {
                return;
            }
            self.write(segment);
        }
    }
}

fn closer_for(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let opener = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    AUTO_PAIRS
        .iter()
        .find(|(open, _)| *open == opener)
        .map(|(_, close)| *close)
}

/// Marker to start the line following `line`, if `line` is a list item.
fn list_marker(line: &str) -> Option<String> {
    let mut chars = line.trim().chars();
    let first = chars.next()?;
    let second = chars.next()?;
    if first.is_ascii_digit() {
        if second == '.' {
            Some(format!("{first}. "))
        } else {
            Some(format!("{first} "))
        }
    } else if LIST_BULLETS.contains(&first) {
        Some(format!("{first} "))
    } else {
        None
    }
}
