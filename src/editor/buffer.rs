use super::EditError;

/// A text buffer stored as one `String` per physical line.
///
/// The line sequence is never empty: an empty document is a single empty
/// line. Columns passed to the buffer count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    /// Create a buffer by splitting `text` on `\n`.
    ///
    /// `TextBuffer::from_text(s).to_text() == s` holds for every `s`.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(ToOwned::to_owned).collect(),
        }
    }

    /// Create a buffer holding one empty line.
    pub fn empty() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Join all lines with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Content of line `idx`.
    ///
    /// # Errors
    /// Returns [`EditError::IndexOutOfRange`] if `idx >= line_count()`.
    pub fn line_at(&self, idx: usize) -> Result<&str, EditError> {
        self.lines
            .get(idx)
            .map(String::as_str)
            .ok_or(EditError::IndexOutOfRange {
                index: idx,
                len: self.lines.len(),
            })
    }

    /// Length of line `idx` in characters, 0 for lines that don't exist.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, |l| l.chars().count())
    }

    /// Replace the content of line `idx`.
    ///
    /// # Errors
    /// Returns [`EditError::IndexOutOfRange`] if the line does not exist.
    pub fn replace_line(
        &mut self,
        idx: usize,
        content: impl Into<String>,
    ) -> Result<(), EditError> {
        let line = self.line_mut(idx)?;
        *line = content.into();
        Ok(())
    }

    /// Insert a new line directly below line `idx`.
    ///
    /// # Errors
    /// Returns [`EditError::IndexOutOfRange`] if the line does not exist.
    pub fn insert_line_after(
        &mut self,
        idx: usize,
        content: impl Into<String>,
    ) -> Result<(), EditError> {
        self.check_line(idx)?;
        self.lines.insert(idx + 1, content.into());
        Ok(())
    }

    /// Remove line `idx`.
    ///
    /// # Errors
    /// Returns [`EditError::IndexOutOfRange`] if the line does not exist and
    /// [`EditError::InvalidOperation`] if it is the only line left.
    pub fn remove_line(&mut self, idx: usize) -> Result<String, EditError> {
        self.check_line(idx)?;
        if self.lines.len() == 1 {
            return Err(EditError::InvalidOperation("cannot remove the only line"));
        }
        Ok(self.lines.remove(idx))
    }

    /// Split line `idx` at `column` into `line[..column]` and `line[column..]`.
    ///
    /// # Errors
    /// Returns [`EditError::IndexOutOfRange`] if the line does not exist or
    /// `column` is past its end.
    pub fn split_line(&mut self, idx: usize, column: usize) -> Result<(), EditError> {
        let len = self.line_len(idx);
        let line = self.line_mut(idx)?;
        if column > len {
            return Err(EditError::IndexOutOfRange { index: column, len });
        }
        let at = byte_offset(line, column);
        let tail = line.split_off(at);
        self.lines.insert(idx + 1, tail);
        Ok(())
    }

    /// Append line `idx` onto line `idx - 1` and remove it.
    ///
    /// # Errors
    /// Returns [`EditError::InvalidOperation`] for line 0 and
    /// [`EditError::IndexOutOfRange`] if the line does not exist.
    pub fn merge_line_with_previous(&mut self, idx: usize) -> Result<(), EditError> {
        if idx == 0 {
            return Err(EditError::InvalidOperation(
                "line 0 has no previous line to merge into",
            ));
        }
        self.check_line(idx)?;
        let line = self.lines.remove(idx);
        self.lines[idx - 1].push_str(&line);
        Ok(())
    }

    // --- Private helpers ---

    fn check_line(&self, idx: usize) -> Result<(), EditError> {
        if idx < self.lines.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                index: idx,
                len: self.lines.len(),
            })
        }
    }

    pub(super) fn line_mut(&mut self, idx: usize) -> Result<&mut String, EditError> {
        let len = self.lines.len();
        self.lines
            .get_mut(idx)
            .ok_or(EditError::IndexOutOfRange { index: idx, len })
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

/// Byte offset of character `column` in `line`, clamped to the line end.
pub(super) fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map_or(line.len(), |(i, _)| i)
}
