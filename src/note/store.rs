use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::FileIdentity;

/// Failure to read or write a note on disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is binary or not valid UTF-8.
    #[error("{} is not a text file", path.display())]
    NotText { path: PathBuf },
}

/// Text and identity of a note read from disk.
#[derive(Debug, Clone)]
pub struct LoadedNote {
    pub text: String,
    pub identity: FileIdentity,
}

/// Where a note called `name` lives under `root`.
pub fn storage_path(root: &Path, name: &str) -> PathBuf {
    root.join(name.replace('/', "-"))
}

/// Write `text` verbatim to `root/<name>`, creating `root` if needed.
///
/// # Errors
/// Returns [`StoreError::Write`] if the directory or file cannot be written.
pub fn save(root: &Path, name: &str, text: &str) -> Result<PathBuf, StoreError> {
    let path = storage_path(root, name);
    let write_err = |source| StoreError::Write {
        path: path.clone(),
        source,
    };
    if !root.as_os_str().is_empty() {
        fs::create_dir_all(root).map_err(write_err)?;
    }
    fs::write(&path, text).map_err(write_err)?;
    Ok(path)
}

/// Read the note at `path`.
///
/// # Errors
/// Returns [`StoreError::Read`] if the file cannot be read and
/// [`StoreError::NotText`] if its bytes are not UTF-8 text.
pub fn load(path: &Path) -> Result<LoadedNote, StoreError> {
    let bytes = fs::read(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.contains(&0) {
        return Err(StoreError::NotText {
            path: path.to_path_buf(),
        });
    }
    let text = String::from_utf8(bytes).map_err(|_| StoreError::NotText {
        path: path.to_path_buf(),
    })?;
    Ok(LoadedNote {
        text,
        identity: FileIdentity::from_path(path),
    })
}
