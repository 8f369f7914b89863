use std::fmt;

use super::{EditError, TextBuffer};

/// A `(line, column)` coordinate. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (character offset within the line).
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The single edit position of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    /// Create a cursor at a specific position.
    pub const fn at(line: usize, column: usize) -> Self {
        Self {
            position: Position::new(line, column),
        }
    }

    /// Cursor at `(0, 0)`.
    pub const fn begin_of_text() -> Self {
        Self::at(0, 0)
    }

    /// Cursor after the last character of the last line.
    pub fn end_of_text(buffer: &TextBuffer) -> Self {
        let last = buffer.line_count() - 1;
        Self::at(last, buffer.line_len(last))
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn line(&self) -> usize {
        self.position.line
    }

    pub const fn column(&self) -> usize {
        self.position.column
    }

    /// Check that the cursor addresses an existing line and a column
    /// within that line.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidState`] when the position does not fit.
    pub fn validate(&self, buffer: &TextBuffer) -> Result<(), EditError> {
        let Position { line, column } = self.position;
        if line < buffer.line_count() && column <= buffer.line_len(line) {
            Ok(())
        } else {
            Err(EditError::InvalidState { line, column })
        }
    }

    pub(super) const fn set(&mut self, line: usize, column: usize) {
        self.position = Position::new(line, column);
    }

    pub(super) const fn set_column(&mut self, column: usize) {
        self.position.column = column;
    }

    /// Move one step in `direction` within `buffer`.
    pub fn step(&mut self, direction: Direction, buffer: &TextBuffer) {
        match direction {
            Direction::Left => self.move_left(buffer),
            Direction::Right => self.move_right(buffer),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(buffer),
        }
    }

    fn move_left(&mut self, buffer: &TextBuffer) {
        let Position { line, column } = self.position;
        if column > 0 {
            self.set_column(column - 1);
        } else if line > 0 {
            self.set(line - 1, buffer.line_len(line - 1));
        }
    }

    fn move_right(&mut self, buffer: &TextBuffer) {
        let Position { line, column } = self.position;
        if column < buffer.line_len(line) {
            self.set_column(column + 1);
        } else if line + 1 < buffer.line_count() {
            self.set(line + 1, 0);
        }
    }

    // Column is not clamped, unlike down.
    const fn move_up(&mut self) {
        if self.position.line > 0 {
            self.position.line -= 1;
        } else {
            *self = Self::begin_of_text();
        }
    }

    fn move_down(&mut self, buffer: &TextBuffer) {
        let Position { line, column } = self.position;
        if line + 1 < buffer.line_count() {
            self.set(line + 1, column.min(buffer.line_len(line + 1)));
        }
    }
}
