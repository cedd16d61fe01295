//! The note-list command pipeline.
//!
//! One linear pass per invocation: resolve the active note's parent
//! directory, list its children, build the link list, and write the note
//! back with the list inserted below the front matter. No state survives
//! across invocations; either the full list is inserted or nothing is
//! written.

use std::path::{Path, PathBuf};

use crate::error::{NoteListError, Result};
use crate::fs::AsyncFileSystem;
use crate::insert::insert_below_frontmatter;
use crate::list::{EntryKind, build_list};
use crate::settings::Settings;

/// The notelist application, generic over the filesystem seam.
pub struct NoteListApp<FS: AsyncFileSystem> {
    fs: FS,
}

impl<FS: AsyncFileSystem> NoteListApp<FS> {
    /// Create an app on top of the given filesystem.
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Access the underlying filesystem.
    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// List the requested kind of siblings of `note` and insert them into
    /// the note as a `- [[name]]` link list below its front matter.
    ///
    /// All failures are reported through the returned error; the note is
    /// only written after the full list has been built.
    pub async fn create_note_list(
        &self,
        note: &Path,
        kind: EntryKind,
        settings: &Settings,
    ) -> Result<()> {
        if !self.fs.exists(note).await {
            return Err(NoteListError::NoActiveNote(note.to_path_buf()));
        }

        let dir = self.parent_dir(note)?;
        log::debug!("listing {} of {:?}", kind, dir);

        let listing = self
            .fs
            .list_dir(&dir)
            .await
            .map_err(|e| NoteListError::Listing {
                path: dir.clone(),
                source: e,
            })?;
        log::debug!(
            "found {} files and {} folders in {:?}",
            listing.files.len(),
            listing.folders.len(),
            dir
        );

        let list = build_list(&listing, kind, settings)?;

        let content = self
            .fs
            .read_to_string(note)
            .await
            .map_err(|e| NoteListError::FileRead {
                path: note.to_path_buf(),
                source: e,
            })?;

        let updated = insert_below_frontmatter(&content, &list);
        self.fs
            .write_file(note, &updated)
            .await
            .map_err(|e| NoteListError::FileWrite {
                path: note.to_path_buf(),
                source: e,
            })?;

        log::debug!("inserted list into {:?}", note);
        Ok(())
    }

    /// Resolve the directory whose children get listed.
    ///
    /// A bare relative file name has an empty-string parent; treat that as
    /// the current directory so `notelist files note.md` works from inside
    /// a vault folder.
    fn parent_dir(&self, note: &Path) -> Result<PathBuf> {
        match note.parent() {
            Some(p) if !p.as_os_str().is_empty() => Ok(p.to_path_buf()),
            Some(_) => Ok(PathBuf::from(".")),
            None => Err(NoteListError::NoParentDirectory(note.to_path_buf())),
        }
    }
}
