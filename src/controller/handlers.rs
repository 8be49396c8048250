use std::path::Path;

use crate::config::{ModificationCheck, SaveAsWrite};
use crate::controller::{
    CloseDecision, DISCARD_MESSAGE, DocumentController, OVERWRITE_MESSAGE, Outcome, PROMPT_TITLE,
};
use crate::core::save_path::{self, display_name};
use crate::core::{FileSystem, LifecycleState, MenuState};
use crate::error::{EditorError, Result};
use crate::ui::{Frontend, Response};

/// Trait for handling the file menu
pub trait HandleFileMenu {
    /// Recompute Save/Save As enablement; called whenever the menu opens
    fn handle_menu_opened(&mut self) -> MenuState;
    fn handle_open(&mut self) -> Outcome;
    fn handle_new(&mut self) -> Outcome;
    fn handle_save(&mut self) -> Outcome;
    fn handle_save_as(&mut self) -> Outcome;
}

/// Trait for handling buffer edits
pub trait HandleTextChange {
    fn handle_text_changed(&mut self) -> Outcome;
}

/// Trait for handling window close requests
pub trait HandleClose {
    fn handle_close_request(&mut self) -> CloseDecision;
}

impl<U: Frontend, F: FileSystem> HandleFileMenu for DocumentController<U, F> {
    fn handle_menu_opened(&mut self) -> MenuState {
        let menu = self.document.menu_state();
        self.ui.set_save_enabled(menu.save);
        self.ui.set_save_as_enabled(menu.save_as);
        menu
    }

    fn handle_open(&mut self) -> Outcome {
        self.open().unwrap_or_else(|err| self.report(err))
    }

    fn handle_new(&mut self) -> Outcome {
        if !self.confirm_discard() {
            log::debug!("New cancelled, keeping unsaved changes");
            return Outcome::Cancelled;
        }

        let label = self.settings.new_file_label.clone();
        self.ui.set_filename(&label);
        self.ui.set_modified_marker("");
        self.ui.set_text("");
        self.document.mark_new();
        self.ui.set_editable(self.document.is_editable());

        log::info!("Started a new document");
        Outcome::Completed
    }

    fn handle_save(&mut self) -> Outcome {
        self.save().unwrap_or_else(|err| self.report(err))
    }

    fn handle_save_as(&mut self) -> Outcome {
        self.save_as().unwrap_or_else(|err| self.report(err))
    }
}

impl<U: Frontend, F: FileSystem> HandleTextChange for DocumentController<U, F> {
    fn handle_text_changed(&mut self) -> Outcome {
        let buffer = self.ui.text();

        let reference = match self.document.state() {
            LifecycleState::None => return Outcome::Ignored,
            LifecycleState::New => String::new(),
            LifecycleState::Loaded => match self.settings.modification_check {
                ModificationCheck::Memory => self.document.reference().to_string(),
                ModificationCheck::Disk => {
                    let Some(path) = self.document.backing_path() else {
                        return Outcome::Ignored;
                    };
                    match self.fs.read_text(path) {
                        Ok(on_disk) => on_disk,
                        Err(e) => {
                            // Flag stays as it was
                            log::warn!("Could not re-read {}: {}", path.display(), e);
                            return Outcome::Failed;
                        }
                    }
                }
            },
        };

        self.document.recompute_modified(&buffer, &reference);
        self.refresh_marker();
        Outcome::Completed
    }
}

impl<U: Frontend, F: FileSystem> HandleClose for DocumentController<U, F> {
    fn handle_close_request(&mut self) -> CloseDecision {
        if !self.document.is_modified() {
            return CloseDecision::Close;
        }

        match self.ui.confirm(DISCARD_MESSAGE, PROMPT_TITLE) {
            Response::Affirm => {
                log::info!("Closing with unsaved changes discarded");
                CloseDecision::Close
            }
            Response::Decline | Response::Cancel => CloseDecision::Stay,
        }
    }
}

impl<U: Frontend, F: FileSystem> DocumentController<U, F> {
    fn open(&mut self) -> Result<Outcome> {
        if !self.confirm_discard() {
            log::debug!("Open cancelled, keeping unsaved changes");
            return Ok(Outcome::Cancelled);
        }

        let filter = self.file_filter();
        let Some(chosen) = self.ui.choose_open_path(&filter) else {
            log::debug!("Open chooser cancelled");
            return Ok(Outcome::Cancelled);
        };
        let path = save_path::resolve(&self.working_dir, &chosen);

        let content = self
            .fs
            .read_text(&path)
            .map_err(|source| EditorError::Open {
                path: path.clone(),
                source,
            })?;

        // Read succeeded; commit
        self.ui.set_text(&content);
        self.ui.move_caret_to_start();
        self.ui.set_filename(&save_path::file_name(&path));
        self.ui.set_modified_marker("");

        log::info!("Opened {} ({} bytes)", path.display(), content.len());
        self.document.mark_loaded(path, content);
        self.ui.set_editable(self.document.is_editable());
        Ok(Outcome::Completed)
    }

    fn save(&mut self) -> Result<Outcome> {
        if self.document.state() != LifecycleState::Loaded {
            log::debug!("Save ignored in state {:?}", self.document.state());
            return Ok(Outcome::Ignored);
        }
        let Some(path) = self.document.backing_path().map(Path::to_path_buf) else {
            return Ok(Outcome::Ignored);
        };

        let content = self.ui.text();
        self.write(&path, &content)?;

        log::info!("Saved {}", path.display());
        self.document.mark_saved(path, content);
        self.refresh_marker();
        Ok(Outcome::Completed)
    }

    fn save_as(&mut self) -> Result<Outcome> {
        if self.document.state() == LifecycleState::None {
            log::debug!("Save As ignored with no document");
            return Ok(Outcome::Ignored);
        }

        let filter = self.file_filter();
        let Some(chosen) = self.ui.choose_save_path(&filter) else {
            log::debug!("Save As chooser cancelled");
            return Ok(Outcome::Cancelled);
        };
        let chosen = save_path::resolve(&self.working_dir, &chosen);
        let target = self.policy.normalize(&chosen);

        if self.fs.exists(&target.candidate)
            && self.ui.confirm(OVERWRITE_MESSAGE, PROMPT_TITLE) != Response::Affirm
        {
            log::debug!("Overwrite of {} declined", target.candidate.display());
            return Ok(Outcome::Cancelled);
        }

        let content = self.ui.text();
        let saved = match self.settings.save_as_write {
            SaveAsWrite::Direct => {
                self.write(&target.candidate, &content)?;
                target.candidate
            }
            SaveAsWrite::WriteThenRename => {
                self.write(&target.chosen, &content)?;
                if !target.needs_rename() || self.fs.rename(&target.chosen, &target.candidate) {
                    target.candidate
                } else {
                    log::warn!(
                        "Keeping {} as the backing file; rename to {} failed",
                        target.chosen.display(),
                        target.candidate.display()
                    );
                    target.chosen
                }
            }
        };

        log::info!("Saved as {}", saved.display());
        self.ui.set_filename(&display_name(&self.working_dir, &saved));
        self.document.mark_saved(saved, content);
        self.refresh_marker();
        Ok(Outcome::Completed)
    }
}
