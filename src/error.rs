//! Error Types
//!
//! File I/O failures the controller absorbs and reports to the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A failed read or write on behalf of a document
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Cannot open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot save file {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EditorError>;
