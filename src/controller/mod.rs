//! Document Controller
//!
//! Owns the document lifecycle and mediates between the front-end and the
//! file system. Every entry point is one of the handler traits in
//! [`handlers`].

pub mod handlers;

use std::path::{Path, PathBuf};

use crate::config::{Config, Settings};
use crate::core::{Document, ExtensionPolicy, FileSystem, StdFileSystem};
use crate::error::EditorError;
use crate::ui::{FileFilter, Frontend, Response};

pub use handlers::{HandleClose, HandleFileMenu, HandleTextChange};

pub(crate) const PROMPT_TITLE: &str = "Select an Option";
pub(crate) const DISCARD_MESSAGE: &str = "OK to discard changes?";
pub(crate) const OVERWRITE_MESSAGE: &str = "OK to overwrite existing file?";

/// How a handler invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user backed out of a prompt or chooser
    Cancelled,
    /// Not permitted in the current lifecycle state
    Ignored,
    /// An I/O failure was reported; state is unchanged
    Failed,
}

/// Answer to a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Close,
    Stay,
}

/// One controller per editor window
pub struct DocumentController<U, F = StdFileSystem> {
    ui: U,
    fs: F,
    document: Document,
    policy: ExtensionPolicy,
    settings: Settings,
    working_dir: PathBuf,
}

impl<U: Frontend> DocumentController<U, StdFileSystem> {
    pub fn new(config: &Config, ui: U) -> Self {
        Self::with_file_system(config, ui, StdFileSystem)
    }
}

impl<U: Frontend, F: FileSystem> DocumentController<U, F> {
    /// Create a controller and put the front-end into the empty state
    pub fn with_file_system(config: &Config, mut ui: U, fs: F) -> Self {
        let settings = config.settings.clone();
        let document = Document::new();
        let menu = document.menu_state();

        ui.set_title(&settings.window_title);
        ui.set_text("");
        ui.set_editable(document.is_editable());
        ui.set_filename("");
        ui.set_modified_marker("");
        ui.set_save_enabled(menu.save);
        ui.set_save_as_enabled(menu.save_as);

        Self {
            ui,
            fs,
            document,
            policy: ExtensionPolicy::from_settings(&settings),
            settings,
            working_dir: config.working_dir.clone(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn frontend(&self) -> &U {
        &self.ui
    }

    pub fn frontend_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Filter offered by both choosers
    pub fn file_filter(&self) -> FileFilter {
        FileFilter::new("Editable Files", self.policy.allowed().to_vec())
    }

    /// Ask before throwing away unsaved edits; true means go ahead
    fn confirm_discard(&mut self) -> bool {
        if !self.document.is_modified() {
            return true;
        }
        self.ui.confirm(DISCARD_MESSAGE, PROMPT_TITLE) == Response::Affirm
    }

    fn refresh_marker(&mut self) {
        let marker = if self.document.is_modified() {
            self.settings.modified_marker.as_str()
        } else {
            ""
        };
        self.ui.set_modified_marker(marker);
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), EditorError> {
        self.fs
            .write(path, content.as_bytes())
            .map_err(|source| EditorError::Save {
                path: path.to_path_buf(),
                source,
            })
    }

    fn report(&mut self, err: EditorError) -> Outcome {
        match std::error::Error::source(&err) {
            Some(cause) => log::error!("{}: {}", err, cause),
            None => log::error!("{}", err),
        }
        self.ui.show_error(&err.to_string());
        Outcome::Failed
    }
}
