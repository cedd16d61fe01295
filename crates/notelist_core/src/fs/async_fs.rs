//! Async filesystem abstraction module.
//!
//! This module provides the `AsyncFileSystem` trait for abstracting async
//! filesystem operations, allowing different implementations for native and
//! WASM targets.
//!
//! This is particularly useful for:
//! - WASM environments where host APIs are inherently async
//! - Native environments using async runtimes
//!
//! ## Object safety
//!
//! `AsyncFileSystem` is designed to be object-safe so it can be used behind
//! `dyn AsyncFileSystem`. To enable this, all methods return boxed futures.

use std::future::Future;
use std::io::Result;
use std::path::Path;
use std::pin::Pin;

use super::DirListing;

/// A boxed future for object-safe async methods.
///
/// On native targets, futures are `Send` for compatibility with multi-threaded
/// runtimes. On WASM, there's no `Send` requirement since JavaScript is
/// single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A boxed future for object-safe async methods.
///
/// WASM version without `Send` requirement - JavaScript is single-threaded.
#[cfg(target_arch = "wasm32")]
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Async abstraction over filesystem operations.
///
/// This trait mirrors `FileSystem` but with async methods, making it suitable
/// for environments where filesystem operations may be asynchronous (e.g., a
/// host vault adapter, or native code using async IO).
#[cfg(not(target_arch = "wasm32"))]
pub trait AsyncFileSystem: Send + Sync {
    /// Reads the file content as a string.
    fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String>>;

    /// Overwrites an existing file with new content.
    fn write_file<'a>(&'a self, path: &'a Path, content: &'a str) -> BoxFuture<'a, Result<()>>;

    /// Checks if a file or directory exists.
    fn exists<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool>;

    /// Checks if a path is a directory.
    fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool>;

    /// Creates a directory and all parent directories.
    fn create_dir_all<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<()>>;

    /// Lists the immediate children of a directory, split into files and folders.
    fn list_dir<'a>(&'a self, dir: &'a Path) -> BoxFuture<'a, Result<DirListing>>;
}

/// Async abstraction over filesystem operations (WASM version).
///
/// This is the WASM-specific version without Send + Sync bounds since
/// JavaScript environments are single-threaded.
#[cfg(target_arch = "wasm32")]
pub trait AsyncFileSystem {
    /// Reads the file content as a string.
    fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String>>;

    /// Overwrites an existing file with new content.
    fn write_file<'a>(&'a self, path: &'a Path, content: &'a str) -> BoxFuture<'a, Result<()>>;

    /// Checks if a file or directory exists.
    fn exists<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool>;

    /// Checks if a path is a directory.
    fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool>;

    /// Creates a directory and all parent directories.
    fn create_dir_all<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<()>>;

    /// Lists the immediate children of a directory, split into files and folders.
    fn list_dir<'a>(&'a self, dir: &'a Path) -> BoxFuture<'a, Result<DirListing>>;
}

// ============================================================================
// Adapter: Sync FileSystem -> AsyncFileSystem
// ============================================================================

use super::FileSystem;

/// Wrapper that adapts a synchronous `FileSystem` to `AsyncFileSystem`.
///
/// This is useful for wrapping `RealFileSystem` or a mock filesystem to be
/// used in async contexts. The operations complete immediately since the
/// underlying implementation is synchronous.
#[derive(Clone)]
pub struct SyncToAsyncFs<F: FileSystem> {
    inner: F,
}

impl<F: FileSystem> SyncToAsyncFs<F> {
    /// Create a new async wrapper around a synchronous filesystem.
    pub fn new(fs: F) -> Self {
        Self { inner: fs }
    }

    /// Get a reference to the inner synchronous filesystem.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap and return the inner synchronous filesystem.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<F: FileSystem + Send + Sync> AsyncFileSystem for SyncToAsyncFs<F> {
    fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move { self.inner.read_to_string(path) })
    }

    fn write_file<'a>(&'a self, path: &'a Path, content: &'a str) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move { self.inner.write_file(path, content) })
    }

    fn exists<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool> {
        Box::pin(async move { self.inner.exists(path) })
    }

    fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool> {
        Box::pin(async move { self.inner.is_dir(path) })
    }

    fn create_dir_all<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move { self.inner.create_dir_all(path) })
    }

    fn list_dir<'a>(&'a self, dir: &'a Path) -> BoxFuture<'a, Result<DirListing>> {
        Box::pin(async move { self.inner.list_dir(dir) })
    }
}

#[cfg(target_arch = "wasm32")]
impl<F: FileSystem> AsyncFileSystem for SyncToAsyncFs<F> {
    fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move { self.inner.read_to_string(path) })
    }

    fn write_file<'a>(&'a self, path: &'a Path, content: &'a str) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move { self.inner.write_file(path, content) })
    }

    fn exists<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool> {
        Box::pin(async move { self.inner.exists(path) })
    }

    fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool> {
        Box::pin(async move { self.inner.is_dir(path) })
    }

    fn create_dir_all<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move { self.inner.create_dir_all(path) })
    }

    fn list_dir<'a>(&'a self, dir: &'a Path) -> BoxFuture<'a, Result<DirListing>> {
        Box::pin(async move { self.inner.list_dir(dir) })
    }
}

// Blanket implementation for references to AsyncFileSystem
impl<T: AsyncFileSystem + ?Sized> AsyncFileSystem for &T {
    fn read_to_string<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String>> {
        (*self).read_to_string(path)
    }

    fn write_file<'a>(&'a self, path: &'a Path, content: &'a str) -> BoxFuture<'a, Result<()>> {
        (*self).write_file(path, content)
    }

    fn exists<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool> {
        (*self).exists(path)
    }

    fn is_dir<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, bool> {
        (*self).is_dir(path)
    }

    fn create_dir_all<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<()>> {
        (*self).create_dir_all(path)
    }

    fn list_dir<'a>(&'a self, dir: &'a Path) -> BoxFuture<'a, Result<DirListing>> {
        (*self).list_dir(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockFileSystem;
    use futures_lite::future::block_on;

    #[test]
    fn test_sync_to_async_wrapper() {
        let sync_fs = MockFileSystem::new().with_file("vault/test.md", "# Hello");
        let async_fs = SyncToAsyncFs::new(sync_fs);

        let content = block_on(async_fs.read_to_string(Path::new("vault/test.md")));
        assert_eq!(content.unwrap(), "# Hello");

        assert!(block_on(async_fs.exists(Path::new("vault/test.md"))));
        assert!(!block_on(async_fs.exists(Path::new("vault/missing.md"))));
    }

    #[test]
    fn test_async_write_and_read() {
        let async_fs = SyncToAsyncFs::new(MockFileSystem::new());

        let write_result = block_on(async_fs.write_file(Path::new("new.md"), "New content"));
        assert!(write_result.is_ok());

        let content = block_on(async_fs.read_to_string(Path::new("new.md")));
        assert_eq!(content.unwrap(), "New content");
    }

    #[test]
    fn test_async_list_dir() {
        let sync_fs = MockFileSystem::new()
            .with_file("vault/a.md", "")
            .with_file("vault/b.md", "")
            .with_dir("vault/sub");
        let async_fs = SyncToAsyncFs::new(sync_fs);

        let listing = block_on(async_fs.list_dir(Path::new("vault"))).unwrap();
        assert_eq!(listing.files.len(), 2);
        assert_eq!(listing.folders.len(), 1);
    }

    #[test]
    fn test_inner_access() {
        let sync_fs = MockFileSystem::new().with_file("test.md", "content");
        let async_fs = SyncToAsyncFs::new(sync_fs);

        assert!(async_fs.inner().exists(Path::new("test.md")));

        let recovered = async_fs.into_inner();
        assert!(recovered.exists(Path::new("test.md")));
    }
}
