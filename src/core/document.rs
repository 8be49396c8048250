//! Document State
//!
//! Lifecycle state, backing path and modification tracking for the single
//! open document. The buffer text itself lives in the text surface.

use std::path::{Path, PathBuf};

/// Where the document stands in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Nothing loaded, nothing editable
    #[default]
    None,
    /// Backed by a file that existed when it was loaded or saved
    Loaded,
    /// Never persisted
    New,
}

/// Which file-menu items may be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub save: bool,
    pub save_as: bool,
}

impl MenuState {
    pub fn for_state(state: LifecycleState) -> Self {
        match state {
            LifecycleState::Loaded => Self {
                save: true,
                save_as: true,
            },
            LifecycleState::New => Self {
                save: false,
                save_as: true,
            },
            LifecycleState::None => Self {
                save: false,
                save_as: false,
            },
        }
    }
}

/// The document the controller owns
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: LifecycleState,
    backing_path: Option<PathBuf>,
    modified: bool,
    /// Content as of the last load or save; empty for a new document
    reference: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn backing_path(&self) -> Option<&Path> {
        self.backing_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn is_editable(&self) -> bool {
        self.state != LifecycleState::None
    }

    pub fn menu_state(&self) -> MenuState {
        MenuState::for_state(self.state)
    }

    /// Adopt content read from `path`
    pub fn mark_loaded(&mut self, path: PathBuf, content: String) {
        self.state = LifecycleState::Loaded;
        self.backing_path = Some(path);
        self.modified = false;
        self.reference = content;
    }

    /// Record that `content` now sits on disk at `path`
    pub fn mark_saved(&mut self, path: PathBuf, content: String) {
        self.mark_loaded(path, content);
    }

    /// Start an empty, never-persisted document
    pub fn mark_new(&mut self) {
        self.state = LifecycleState::New;
        self.backing_path = None;
        self.modified = false;
        self.reference.clear();
    }

    /// Re-derive the modified flag from the buffer and a reference text.
    ///
    /// Returns the new flag. No-op in `None`.
    pub fn recompute_modified(&mut self, buffer: &str, reference: &str) -> bool {
        self.modified = match self.state {
            LifecycleState::None => false,
            LifecycleState::New => !buffer.is_empty(),
            LifecycleState::Loaded => buffer != reference,
        };
        self.modified
    }
}
