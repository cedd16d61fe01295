use std::path::PathBuf;

use thiserror::Error;

use crate::list::EntryKind;

/// Unified error type for notelist operations
#[derive(Debug, Error)]
pub enum NoteListError {
    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read note '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write note '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to list directory '{path}': {source}")]
    Listing {
        path: PathBuf,
        source: std::io::Error,
    },

    // Command errors
    #[error("No active note at '{0}'")]
    NoActiveNote(PathBuf),

    #[error("Cannot resolve a parent directory for '{0}'")]
    NoParentDirectory(PathBuf),

    #[error("No {0} in this directory")]
    EmptyListing(EntryKind),

    #[error("Unknown item type '{0}'. Expected 'files' or 'folders'")]
    UnknownKind(String),

    // Settings errors
    #[error("Settings parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Settings serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Result type alias for notelist operations
pub type Result<T> = std::result::Result<T, NoteListError>;
