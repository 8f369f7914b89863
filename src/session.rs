//! One editing session: a single note, its cursor, and its identity.
//!
//! Rendering and persistence collaborators only ever see snapshots
//! ([`Session::current_text`], [`Session::cursor_position`]).

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use crate::editor::{EditCommand, EditEngine, EditorSettings, Position};
use crate::input::Action;
use crate::note::{self, FileIdentity, NEW_NOTE_TEMPLATE, StoreError};

#[derive(Debug)]
pub struct Session {
    engine: EditEngine,
    identity: FileIdentity,
    root: PathBuf,
    diagnostic: Option<String>,
    status: Option<String>,
}

impl Session {
    /// Start a session on a new note saved under `root`.
    pub fn new(root: impl Into<PathBuf>, settings: EditorSettings) -> Self {
        Self {
            engine: EditEngine::from_text(NEW_NOTE_TEMPLATE).with_settings(settings),
            identity: FileIdentity::new_document(),
            root: root.into(),
            diagnostic: None,
            status: None,
        }
    }

    /// Start a session on the note at `path`.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the file cannot be read as text.
    pub fn open(
        path: &Path,
        root: impl Into<PathBuf>,
        settings: EditorSettings,
    ) -> Result<Self, StoreError> {
        let mut session = Self::new(root, settings);
        session.load(path)?;
        Ok(session)
    }

    pub fn current_text(&self) -> String {
        self.engine.current_text()
    }

    pub const fn cursor_position(&self) -> Position {
        self.engine.cursor_position()
    }

    pub const fn engine(&self) -> &EditEngine {
        &self.engine
    }

    pub const fn identity(&self) -> &FileIdentity {
        &self.identity
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Message to show in place of the document, set when a load fails.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// One-line status message, set when a save fails. The document stays on screen.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub const fn is_dirty(&self) -> bool {
        self.engine.is_dirty()
    }

    /// The note's name, derived from the current text if not yet fixed.
    pub fn name(&self) -> String {
        self.identity.name(&self.engine.current_text()).to_string()
    }

    pub fn apply(&mut self, command: &EditCommand) {
        self.engine.apply(command);
        tracing::trace!(?command, cursor = %self.engine.cursor_position(), "edit");
    }

    /// Run one input action. Returns `Break` when the session should end.
    pub fn dispatch(&mut self, action: Action) -> ControlFlow<()> {
        match action {
            Action::Edit(command) => self.apply(&command),
            Action::Save => {
                if let Err(err) = self.save() {
                    self.status = Some(format!("Save failed: {err}"));
                }
            }
            Action::NewDocument => self.new_document(),
            Action::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Replace the current note with a fresh one.
    pub fn new_document(&mut self) {
        let settings = self.engine.settings();
        self.engine = EditEngine::from_text(NEW_NOTE_TEMPLATE).with_settings(settings);
        self.identity = FileIdentity::new_document();
        self.diagnostic = None;
        self.status = None;
        tracing::debug!(id = self.identity.unique_id(), "new note");
    }

    /// Replace the current note with the one at `path`.
    ///
    /// On failure the current note is kept and a diagnostic is recorded.
    ///
    /// # Errors
    /// Returns a [`StoreError`] if the file cannot be read as text.
    pub fn load(&mut self, path: &Path) -> Result<(), StoreError> {
        match note::load(path) {
            Ok(loaded) => {
                let settings = self.engine.settings();
                self.engine = EditEngine::from_text(&loaded.text).with_settings(settings);
                self.identity = loaded.identity;
                self.diagnostic = None;
                tracing::info!(
                    path = %path.display(),
                    lines = self.engine.buffer().line_count(),
                    "loaded note"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "load failed");
                self.diagnostic = Some(format!("Cannot open file: {err}"));
                Err(err)
            }
        }
    }

    /// Write the current text under the root directory.
    ///
    /// # Errors
    /// Returns [`StoreError::Write`] if the note cannot be written.
    pub fn save(&mut self) -> Result<PathBuf, StoreError> {
        let text = self.engine.current_text();
        let name = self.identity.name(&text);
        let path = note::save(&self.root, name, &text).inspect_err(|err| {
            tracing::warn!(root = %self.root.display(), error = %err, "save failed");
        })?;
        self.engine.mark_clean();
        self.status = None;
        tracing::info!(path = %path.display(), "saved note");
        Ok(path)
    }
}
