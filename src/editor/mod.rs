//! Line-oriented editor core for markdown notes.
//!
//! Provides a `Vec<String>` text buffer, a validated cursor, and the
//! edit engine that combines them (auto-pairing, list continuation).

mod buffer;
mod cursor;
mod engine;
mod error;

pub use buffer::TextBuffer;
pub use cursor::{Cursor, Direction, Position};
pub use engine::{EditCommand, EditEngine, EditorSettings, DEFAULT_TAB_WIDTH};
pub use error::EditError;
