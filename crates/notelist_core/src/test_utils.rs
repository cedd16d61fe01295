//! Test utilities for notelist_core
//!
//! This module provides shared testing infrastructure, including a mock
//! filesystem that can be used across all test modules.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::fs::{DirListing, FileSystem};

/// A mock filesystem for testing.
///
/// Uses `Arc<Mutex<..>>` for thread-safety and allows cloning while sharing
/// the same underlying file storage. Directories are tracked explicitly;
/// adding a file registers its ancestor directories.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    dirs: Arc<Mutex<HashSet<PathBuf>>>,
    failing_listings: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystem {
    /// Create a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the mock filesystem (builder pattern).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        let path = PathBuf::from(path);
        self.register_ancestors(&path);
        self.files.lock().unwrap().insert(path, content.to_string());
        self
    }

    /// Add an empty directory to the mock filesystem (builder pattern).
    pub fn with_dir(self, path: &str) -> Self {
        let path = PathBuf::from(path);
        self.register_ancestors(&path);
        self.dirs.lock().unwrap().insert(path);
        self
    }

    /// Make `list_dir` fail for a directory (builder pattern), for testing
    /// how listing errors are surfaced.
    pub fn with_listing_error(self, dir: &str) -> Self {
        self.failing_listings
            .lock()
            .unwrap()
            .insert(PathBuf::from(dir));
        self
    }

    /// Get the content of a file (for test assertions).
    pub fn get_content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(&PathBuf::from(path))
            .cloned()
    }

    fn register_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }

    /// Paths are stored relative; "." and "" both mean the mock's root.
    fn normalize(dir: &Path) -> &Path {
        if dir == Path::new(".") {
            Path::new("")
        } else {
            dir
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn write_file(&self, path: &Path, content: &str) -> io::Result<()> {
        self.register_ancestors(path);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = Self::normalize(path);
        path.as_os_str().is_empty() || self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.register_ancestors(path);
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn list_dir(&self, dir: &Path) -> io::Result<DirListing> {
        let dir = Self::normalize(dir);
        if self.failing_listings.lock().unwrap().contains(dir) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Listing failed",
            ));
        }
        if !self.is_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "Directory not found",
            ));
        }

        let mut files: Vec<PathBuf> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();
        let mut folders: Vec<PathBuf> = self
            .dirs
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect();

        // HashMap iteration order is arbitrary; keep listings deterministic
        files.sort();
        folders.sort();
        Ok(DirListing { files, folders })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_file_registers_parent_dirs() {
        let fs = MockFileSystem::new().with_file("vault/sub/a.md", "x");
        assert!(fs.is_dir(Path::new("vault")));
        assert!(fs.is_dir(Path::new("vault/sub")));
        assert!(!fs.is_dir(Path::new("vault/sub/a.md")));
    }

    #[test]
    fn test_list_dir_is_immediate_children_only() {
        let fs = MockFileSystem::new()
            .with_file("vault/a.md", "")
            .with_file("vault/sub/deep.md", "")
            .with_dir("vault/empty");

        let listing = fs.list_dir(Path::new("vault")).unwrap();
        assert_eq!(listing.files, vec![PathBuf::from("vault/a.md")]);
        assert_eq!(
            listing.folders,
            vec![PathBuf::from("vault/empty"), PathBuf::from("vault/sub")]
        );
    }

    #[test]
    fn test_list_dir_unknown_directory_errors() {
        let fs = MockFileSystem::new();
        assert!(fs.list_dir(Path::new("nowhere")).is_err());
    }

    #[test]
    fn test_dot_means_root() {
        let fs = MockFileSystem::new().with_file("a.md", "");
        let listing = fs.list_dir(Path::new(".")).unwrap();
        assert_eq!(listing.files, vec![PathBuf::from("a.md")]);
    }
}
