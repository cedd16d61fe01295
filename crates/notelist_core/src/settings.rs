//! User settings for notelist.
//!
//! Two knobs, persisted as TOML (typically at
//! `~/.config/notelist/config.toml` on Unix systems):
//!
//! - `sort_order`: `"asc"` or `"desc"` (default `"desc"`)
//! - `date_formatted_only`: include only names starting with `YYYY-MM-DD`
//!   (default `true`)
//!
//! # Async-first Design
//!
//! Use `Settings::load_from()` with an `AsyncFileSystem` to load settings.
//! For synchronous contexts, use the `_sync` variants or wrap with
//! `SyncToAsyncFs` and use `block_on()`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NoteListError, Result};
use crate::fs::AsyncFileSystem;
#[cfg(not(target_arch = "wasm32"))]
use crate::fs::{FileSystem, SyncToAsyncFs};

/// Sort direction for the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lexicographic (code-point) ascending.
    #[serde(rename = "asc")]
    Ascending,
    /// Ascending, then the whole sequence reversed.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

/// `Settings` is a data structure that represents the parts of notelist that
/// the user can configure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sort order for the rendered list
    pub sort_order: SortOrder,

    /// Include only names that start with `YYYY-MM-DD`
    pub date_formatted_only: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Descending,
            date_formatted_only: true,
        }
    }
}

impl Settings {
    // ========================================================================
    // AsyncFileSystem-based methods (work on all platforms including WASM)
    // ========================================================================

    /// Load settings from a specific path using an AsyncFileSystem.
    pub async fn load_from<FS: AsyncFileSystem>(fs: &FS, path: &Path) -> Result<Self> {
        let contents = fs
            .read_to_string(path)
            .await
            .map_err(|e| NoteListError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        let settings: Settings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Save settings to a specific path using an AsyncFileSystem.
    pub async fn save_to<FS: AsyncFileSystem>(&self, fs: &FS, path: &Path) -> Result<()> {
        // Create parent directory if needed
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs.create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs.write_file(path, &contents)
            .await
            .map_err(|e| NoteListError::FileWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(())
    }

    /// Load settings from an AsyncFileSystem, returning defaults if the file
    /// is missing or unreadable.
    pub async fn load_from_or_default<FS: AsyncFileSystem>(fs: &FS, path: &Path) -> Self {
        match Self::load_from(fs, path).await {
            Ok(settings) => settings,
            Err(_) => Self::default(),
        }
    }

    // ========================================================================
    // Sync wrappers (compatibility layer). Prefer the async APIs above.
    // ========================================================================
    //
    // Only available on non-WASM targets because they require a blocking
    // executor. On WASM, filesystem access is expected to be async.

    /// Sync wrapper for [`Settings::load_from`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_sync<FS: FileSystem>(fs: FS, path: &Path) -> Result<Self> {
        futures_lite::future::block_on(Self::load_from(&SyncToAsyncFs::new(fs), path))
    }

    /// Sync wrapper for [`Settings::save_to`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_sync<FS: FileSystem>(&self, fs: FS, path: &Path) -> Result<()> {
        futures_lite::future::block_on(self.save_to(&SyncToAsyncFs::new(fs), path))
    }
}

// ============================================================================
// Native-only implementation (not available in WASM)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl Settings {
    /// Get the settings file path (~/.config/notelist/config.toml)
    /// Only available on native platforms
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notelist").join("config.toml"))
    }

    /// Load settings from the default location, or return defaults if the
    /// file doesn't exist. Only available on native platforms
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path()
            && path.exists()
        {
            let contents = std::fs::read_to_string(&path)?;
            let settings: Settings = toml::from_str(&contents)?;
            return Ok(settings);
        }

        Ok(Settings::default())
    }

    /// Save settings to the default location
    /// Only available on native platforms
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(NoteListError::NoConfigDir)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        Ok(())
    }
}
