//! Filesystem abstraction module.
//!
//! This module provides the `FileSystem` trait for abstracting filesystem
//! operations, allowing different implementations for native and WASM targets
//! (or a host application's vault adapter).
//!
//! For async operations, see the `AsyncFileSystem` trait and `SyncToAsyncFs`
//! adapter.

mod async_fs;
#[cfg(not(target_arch = "wasm32"))]
mod native;

pub use async_fs::{AsyncFileSystem, BoxFuture, SyncToAsyncFs};
#[cfg(not(target_arch = "wasm32"))]
pub use native::RealFileSystem;

use std::io::Result;
use std::path::{Path, PathBuf};

/// Immediate children of a directory, partitioned by kind.
///
/// Mirrors the shape host vault adapters hand out: one bucket of file paths,
/// one bucket of subfolder paths, no recursion.
#[derive(Debug, Clone, Default)]
pub struct DirListing {
    /// Paths of the files directly inside the directory.
    pub files: Vec<PathBuf>,
    /// Paths of the subfolders directly inside the directory.
    pub folders: Vec<PathBuf>,
}

/// Abstraction over filesystem operations
/// Allows for different implementations: real filesystem, in-memory (for WASM), etc.
/// Send + Sync required for multi-threaded environments
pub trait FileSystem: Send + Sync {
    /// Reads the file content (for locating the front-matter block)
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Overwrites an existing file (for writing the note back with the list inserted)
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Checks if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Checks if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Lists the immediate children of a directory, split into files and folders
    fn list_dir(&self, dir: &Path) -> Result<DirListing>;
}

// Blanket implementation for references to FileSystem
impl<T: FileSystem> FileSystem for &T {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        (*self).read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        (*self).write_file(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (*self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (*self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        (*self).create_dir_all(path)
    }

    fn list_dir(&self, dir: &Path) -> Result<DirListing> {
        (*self).list_dir(dir)
    }
}
