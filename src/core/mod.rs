//! Core Document Logic
//!
//! Document lifecycle, save-path policy and file access.

pub mod document;
pub mod fs;
pub mod save_path;

pub use document::{Document, LifecycleState, MenuState};
pub use fs::{FileSystem, StdFileSystem};
pub use save_path::{ExtensionPolicy, SaveTarget};
