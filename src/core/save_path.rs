//! Save-As Path Normalization
//!
//! Extension enforcement for chosen save paths and the name shown in the
//! filename indicator.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::Settings;

/// Extension allow-list applied to Save As destinations
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionPolicy {
    allowed: Vec<String>,
    default_extension: String,
}

/// Where a Save As should end up
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTarget {
    /// Path the user picked
    pub chosen: PathBuf,
    /// Path checked for existence and adopted as the backing path
    pub candidate: PathBuf,
}

impl SaveTarget {
    /// True when normalization appended an extension
    pub fn needs_rename(&self) -> bool {
        self.chosen != self.candidate
    }
}

impl ExtensionPolicy {
    pub fn new(allowed: Vec<String>, default_extension: impl Into<String>) -> Self {
        Self {
            allowed,
            default_extension: default_extension.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.allowed_extensions.clone(),
            settings.default_extension.clone(),
        )
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    pub fn is_allowed(&self, path: &Path) -> bool {
        has_extension(path, &self.allowed)
    }

    /// Keep allowed paths as they are; otherwise append the default extension.
    ///
    /// The chosen path is rebuilt from its components first, so `notes/`
    /// becomes `notes` and is extended to `notes.txt`.
    pub fn normalize(&self, chosen: &Path) -> SaveTarget {
        let chosen: PathBuf = chosen.components().collect();
        let candidate = if self.is_allowed(&chosen) {
            chosen.clone()
        } else {
            let mut name = OsString::from(chosen.as_os_str());
            name.push(".");
            name.push(&self.default_extension);
            PathBuf::from(name)
        };

        SaveTarget { chosen, candidate }
    }
}

/// Whether the file name ends in `.<ext>` for one of `extensions`.
///
/// ASCII case-insensitive. The name must have something before the dot, so
/// a bare `.txt` does not count. Entries may contain dots (`tar.gz`).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.as_bytes();
    extensions.iter().any(|ext| {
        let ext = ext.as_bytes();
        name.len() > ext.len() + 1
            && name[name.len() - ext.len() - 1] == b'.'
            && name[name.len() - ext.len()..].eq_ignore_ascii_case(ext)
    })
}

/// Resolve a chooser answer against the working directory
pub fn resolve(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

/// Text for the filename indicator after a save.
///
/// A file directly in the working directory shows its bare name, one in a
/// subdirectory shows the path below the working directory, anything else
/// shows the full path.
pub fn display_name(working_dir: &Path, path: &Path) -> String {
    match path.strip_prefix(working_dir) {
        Ok(rest) if !rest.as_os_str().is_empty() => rest.display().to_string(),
        _ => path.display().to_string(),
    }
}

/// Bare file name of a path, falling back to the whole path
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
