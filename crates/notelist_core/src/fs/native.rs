//! Native filesystem implementation.
//!
//! Only available on non-WASM targets.

use std::fs;
use std::io::Result;
use std::path::Path;

use super::{DirListing, FileSystem};

/// This is a simple filesystem implementation that simply maps to std::fs methods
#[derive(Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
    }

    fn list_dir(&self, dir: &Path) -> Result<DirListing> {
        let mut listing = DirListing::default();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                listing.folders.push(path);
            } else {
                listing.files.push(path);
            }
        }
        Ok(listing)
    }
}
