#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditError)
    clippy::module_name_repetitions
)]

//! # Marknote
//!
//! The editing core of a terminal markdown note editor.
//!
//! Marknote keeps a note as a sequence of lines and edits it through a
//! single cursor:
//! - Auto-closing of brackets and quotes
//! - List continuation when a list item is broken with Enter
//! - Names derived from the note's setext heading
//!
//! ## Architecture
//!
//! Key events are classified into commands, commands mutate the buffer
//! and cursor, and renderers or the store read snapshots of the result.
//!
//! ## Modules
//!
//! - [`editor`]: Text buffer, cursor and edit engine
//! - [`note`]: File naming and persistence
//! - [`input`]: Key event classification and key scripts
//! - [`session`]: One note being edited
//! - [`config`]: Config files and flags

pub mod config;
pub mod editor;
pub mod input;
pub mod note;
pub mod session;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::{Cursor, Direction, EditCommand, EditEngine, Position, TextBuffer};
    pub use crate::input::Action;
    pub use crate::note::FileIdentity;
    pub use crate::session::Session;
}
