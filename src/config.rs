//! Configuration management for the text editor.
//!
//! Handles:
//! - Command-line argument parsing
//! - The optional TOML settings file
//! - Working directory resolution

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line arguments for the editor
#[derive(Debug, Parser)]
#[command(name = "txedit")]
#[command(about = "Minimal text-file editor")]
#[command(version)]
pub struct Args {
    /// Settings file to load instead of the default location
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Log level for the editor
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How the modified flag is re-derived after an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationCheck {
    /// Re-read the backing file and compare against it
    #[default]
    Disk,
    /// Compare against the content cached at the last load or save
    Memory,
}

/// Where Save As writes before adopting the normalized path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveAsWrite {
    /// Write straight to the confirmed candidate path
    #[default]
    Direct,
    /// Write to the chosen path, then rename it to the candidate path
    WriteThenRename,
}

/// Settings file layout (matches TOML); every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub allowed_extensions: Option<Vec<String>>,
    pub default_extension: Option<String>,
    pub modified_marker: Option<String>,
    pub new_file_label: Option<String>,
    pub window_title: Option<String>,
    pub modification_check: Option<ModificationCheck>,
    pub save_as_write: Option<SaveAsWrite>,
}

/// Editor settings after defaults have been applied
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Lower-case extensions without a leading dot
    pub allowed_extensions: Vec<String>,
    pub default_extension: String,
    pub modified_marker: String,
    pub new_file_label: String,
    pub window_title: String,
    pub modification_check: ModificationCheck,
    pub save_as_write: SaveAsWrite,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["txt".to_string(), "java".to_string()],
            default_extension: "txt".to_string(),
            modified_marker: "  *  ".to_string(),
            new_file_label: "<NEW FILE>".to_string(),
            window_title: "TextEditor".to_string(),
            modification_check: ModificationCheck::default(),
            save_as_write: SaveAsWrite::default(),
        }
    }
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        let defaults = Settings::default();

        let allowed_extensions = file
            .allowed_extensions
            .map(|exts| {
                exts.iter()
                    .map(|ext| normalize_extension(ext))
                    .filter(|ext| !ext.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_extensions);

        let default_extension = file
            .default_extension
            .map(|ext| normalize_extension(&ext))
            .filter(|ext| !ext.is_empty())
            .unwrap_or(defaults.default_extension);

        Self {
            allowed_extensions,
            default_extension,
            modified_marker: file.modified_marker.unwrap_or(defaults.modified_marker),
            new_file_label: file.new_file_label.unwrap_or(defaults.new_file_label),
            window_title: file.window_title.unwrap_or(defaults.window_title),
            modification_check: file
                .modification_check
                .unwrap_or(defaults.modification_check),
            save_as_write: file.save_as_write.unwrap_or(defaults.save_as_write),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(text).context("invalid settings file")?;
        Ok(file.into())
    }

    /// Load settings from a file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    /// Directory relative chooser answers and display names are resolved against
    pub working_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let settings = match args.config {
            // An explicitly named file must exist
            Some(path) => Settings::load(&path)?,
            None => match default_settings_path() {
                Some(path) if path.is_file() => Settings::load(&path)?,
                _ => Settings::default(),
            },
        };

        let working_dir =
            std::env::current_dir().context("failed to determine working directory")?;

        Ok(Config {
            settings,
            working_dir,
            log_level: args.log_level,
        })
    }

    /// Build a configuration rooted at an explicit working directory
    pub fn with_working_dir(settings: Settings, working_dir: impl Into<PathBuf>) -> Self {
        Config {
            settings,
            working_dir: working_dir.into(),
            log_level: "info".to_string(),
        }
    }
}

/// Default settings location: `<config_dir>/txedit/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("txedit").join("config.toml"))
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}
