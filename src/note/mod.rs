//! Note naming and persistence.
//!
//! This module handles:
//! - Deriving a file name from a note's creation time, heading and id
//! - Writing notes under a root directory
//! - Reading notes back with a typed failure for unreadable or binary files

mod identity;
mod store;

pub use identity::{FileIdentity, TIMESTAMP_FORMAT, derive_name};
pub use store::{LoadedNote, StoreError, load, save, storage_path};

/// Content of a freshly started note.
pub const NEW_NOTE_TEMPLATE: &str = "Start by entering a title\n===\nHappy hacking :)\n\n";
