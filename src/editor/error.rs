use thiserror::Error;

/// Invariant violations raised by the buffer and cursor layer.
///
/// The edit engine guards every call site, so these only surface when a
/// caller drives [`TextBuffer`](super::TextBuffer) directly or builds an
/// engine from an inconsistent cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A line or column index outside the current bounds.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A structurally impossible request, e.g. merging line 0 upwards.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// A cursor whose position does not fit the buffer it is bound to.
    #[error("cursor at ({line}, {column}) is outside the buffer")]
    InvalidState { line: usize, column: usize },
}
