//! User Interface Collaborators
//!
//! The controller never draws anything itself. It talks to whatever front-end
//! is in use through these traits.

pub mod terminal;

use std::path::{Path, PathBuf};

use crate::core::MenuState;
use crate::core::save_path::has_extension;

pub use terminal::LineFrontend;

/// Answer to a yes/no/cancel prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Affirm,
    Decline,
    Cancel,
}

/// Restricts what a file chooser offers
#[derive(Debug, Clone, PartialEq)]
pub struct FileFilter {
    pub description: String,
    /// Lower-case extensions without a leading dot
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(description: impl Into<String>, extensions: Vec<String>) -> Self {
        Self {
            description: description.into(),
            extensions,
        }
    }

    /// Same rule as the Save As allow-list
    pub fn matches(&self, path: &Path) -> bool {
        has_extension(path, &self.extensions)
    }
}

/// Blocking dialogs
pub trait Dialogs {
    /// Three-way confirmation
    fn confirm(&mut self, message: &str, title: &str) -> Response;
    /// Pick a file to read; `None` on cancel
    fn choose_open_path(&mut self, filter: &FileFilter) -> Option<PathBuf>;
    /// Pick a file to write; `None` on cancel
    fn choose_save_path(&mut self, filter: &FileFilter) -> Option<PathBuf>;
    /// Modal error message
    fn show_error(&mut self, message: &str);
}

/// The text area
pub trait TextSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn set_editable(&mut self, editable: bool);
    fn move_caret_to_start(&mut self);
}

/// Filename and modified indicators
pub trait StatusSurface {
    fn set_title(&mut self, title: &str);
    fn set_filename(&mut self, name: &str);
    /// Empty string when unmodified
    fn set_modified_marker(&mut self, marker: &str);
}

/// Enablement of the Save and Save As menu items
pub trait MenuBar {
    fn set_save_enabled(&mut self, enabled: bool);
    fn set_save_as_enabled(&mut self, enabled: bool);
}

/// File-menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    New,
    Open,
    Save,
    SaveAs,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::New => "New",
            MenuAction::Open => "Open",
            MenuAction::Save => "Save",
            MenuAction::SaveAs => "Save As",
        }
    }

    /// New and Open are always available
    pub fn is_enabled(self, menu: MenuState) -> bool {
        match self {
            MenuAction::New | MenuAction::Open => true,
            MenuAction::Save => menu.save,
            MenuAction::SaveAs => menu.save_as,
        }
    }
}

/// Something the user did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The file menu was opened without picking an item
    MenuOpened,
    Menu(MenuAction),
    TextChanged,
    CloseRequested,
    /// No more input will arrive
    InputClosed,
}

/// Source of user events for the session loop
pub trait EventSource {
    /// Block until the next event
    fn next_event(&mut self) -> anyhow::Result<Event>;
    /// Show the current menu enablement
    fn show_menu(&mut self);
    /// Tell the user a disabled item was picked
    fn action_refused(&mut self, action: MenuAction);
}

/// Everything the controller needs from a front-end
pub trait Frontend: Dialogs + TextSurface + StatusSurface + MenuBar {}

impl<T: Dialogs + TextSurface + StatusSurface + MenuBar> Frontend for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_case_insensitively() {
        let filter = FileFilter::new("Editable Files", vec!["txt".into(), "java".into()]);
        assert!(filter.matches(Path::new("a.txt")));
        assert!(filter.matches(Path::new("/x/B.Java")));
        assert!(!filter.matches(Path::new("c.md")));
        assert!(!filter.matches(Path::new("noext")));
        assert!(!filter.matches(Path::new(".txt")));
    }

    #[test]
    fn test_menu_action_enablement() {
        let new_doc = MenuState::for_state(crate::core::LifecycleState::New);
        assert!(MenuAction::Open.is_enabled(new_doc));
        assert!(MenuAction::SaveAs.is_enabled(new_doc));
        assert!(!MenuAction::Save.is_enabled(new_doc));

        let empty = MenuState::for_state(crate::core::LifecycleState::None);
        assert!(MenuAction::New.is_enabled(empty));
        assert!(!MenuAction::SaveAs.is_enabled(empty));
    }
}
