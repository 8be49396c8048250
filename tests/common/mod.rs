//! Shared test doubles for driving the controller without a terminal
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use txedit::config::{Config, Settings};
use txedit::core::{FileSystem, StdFileSystem};
use txedit::ui::{Dialogs, FileFilter, MenuBar, Response, StatusSurface, TextSurface};

/// Front-end whose dialog answers are queued up front
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    pub responses: VecDeque<Response>,
    pub open_paths: VecDeque<Option<PathBuf>>,
    pub save_paths: VecDeque<Option<PathBuf>>,
    pub prompts: Vec<(String, String)>,
    pub errors: Vec<String>,
    pub text: String,
    pub editable: bool,
    pub caret: usize,
    pub title: String,
    pub filename: String,
    pub marker: String,
    pub save_enabled: bool,
    pub save_as_enabled: bool,
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Dialogs for ScriptedFrontend {
    fn confirm(&mut self, message: &str, title: &str) -> Response {
        self.prompts.push((message.to_string(), title.to_string()));
        self.responses.pop_front().unwrap_or(Response::Cancel)
    }

    fn choose_open_path(&mut self, _filter: &FileFilter) -> Option<PathBuf> {
        self.open_paths.pop_front().flatten()
    }

    fn choose_save_path(&mut self, _filter: &FileFilter) -> Option<PathBuf> {
        self.save_paths.pop_front().flatten()
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

impl TextSurface for ScriptedFrontend {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.text.len();
    }

    fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    fn move_caret_to_start(&mut self) {
        self.caret = 0;
    }
}

impl StatusSurface for ScriptedFrontend {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_filename(&mut self, name: &str) {
        self.filename = name.to_string();
    }

    fn set_modified_marker(&mut self, marker: &str) {
        self.marker = marker.to_string();
    }
}

impl MenuBar for ScriptedFrontend {
    fn set_save_enabled(&mut self, enabled: bool) {
        self.save_enabled = enabled;
    }

    fn set_save_as_enabled(&mut self, enabled: bool) {
        self.save_as_enabled = enabled;
    }
}

/// Real file system whose writes always fail
#[derive(Debug, Default)]
pub struct ReadOnlyFs;

impl FileSystem for ReadOnlyFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        StdFileSystem.read(path)
    }

    fn write(&self, _path: &Path, _contents: &[u8]) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::PermissionDenied))
    }

    fn rename(&self, _from: &Path, _to: &Path) -> bool {
        false
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Real file system whose renames always fail
#[derive(Debug, Default)]
pub struct NoRenameFs;

impl FileSystem for NoRenameFs {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        StdFileSystem.read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        StdFileSystem.write(path, contents)
    }

    fn rename(&self, _from: &Path, _to: &Path) -> bool {
        false
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

pub fn config_in(dir: &Path) -> Config {
    Config::with_working_dir(Settings::default(), dir)
}

pub fn config_with(dir: &Path, settings: Settings) -> Config {
    Config::with_working_dir(settings, dir)
}
