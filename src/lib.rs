//! Minimal Text Editor
//!
//! A single-document plain-text editor core.
//!
//! This library provides:
//! - Document lifecycle and modification tracking
//! - Save-As path normalization
//! - Front-end collaborator traits and a line-oriented terminal front-end
//! - Configuration management

pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod session;
pub mod ui;

// Re-exports for clean public API
pub use config::{Config, Settings};
pub use controller::{CloseDecision, DocumentController, Outcome};
pub use crate::core::{Document, LifecycleState};
pub use error::EditorError;
