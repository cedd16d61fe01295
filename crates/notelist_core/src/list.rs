//! Building the link list: entry selection, name derivation, date filter,
//! sorting, and rendering.
//!
//! The whole pipeline is pure; it takes a [`DirListing`] plus the user
//! [`Settings`] and produces the text to insert into the note.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{NoteListError, Result};
use crate::fs::DirListing;
use crate::settings::{Settings, SortOrder};

/// Which kind of directory children to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// List the files of the directory.
    Files,
    /// List the subfolders of the directory.
    Folders,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Files => write!(f, "files"),
            EntryKind::Folders => write!(f, "folders"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = NoteListError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "files" => Ok(EntryKind::Files),
            "folders" => Ok(EntryKind::Folders),
            other => Err(NoteListError::UnknownKind(other.to_string())),
        }
    }
}

/// Derive the display name of an entry.
///
/// Strips the directory prefix; for files, additionally strips the final
/// extension. Single pass only - stripping is not idempotent for names that
/// themselves contain a `.`.
pub fn display_name(path: &Path, kind: EntryKind) -> String {
    let component = match kind {
        EntryKind::Files => path.file_stem(),
        EntryKind::Folders => path.file_name(),
    };
    component
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Whether a name starts with an ISO-date prefix (`YYYY-MM-DD`).
///
/// Shape check only, anchored at the start; no calendar validation
/// (`9999-99-99` passes).
pub fn has_date_prefix(name: &str) -> bool {
    let b = name.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

/// Sort names in place according to the configured order.
///
/// Descending is implemented as "sort ascending, then reverse the whole
/// sequence" - the historical behavior, pinned here, rather than a
/// reverse-lexicographic comparator.
pub fn sort_names(names: &mut [String], order: SortOrder) {
    names.sort();
    if order == SortOrder::Descending {
        names.reverse();
    }
}

/// Render names as `- [[name]]` lines joined by newlines, with three
/// trailing newlines to separate the list from the content below it.
pub fn render_list(names: &[String]) -> String {
    let mut out = names
        .iter()
        .map(|name| format!("- [[{}]]", name))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str("\n\n\n");
    out
}

/// Build the full link list for a directory listing.
///
/// Selects entries of the requested kind, derives display names, applies the
/// date-prefix filter, sorts, and renders. Returns
/// [`NoteListError::EmptyListing`] when the selected set is empty before or
/// after filtering - an empty result must never mutate the note.
pub fn build_list(listing: &DirListing, kind: EntryKind, settings: &Settings) -> Result<String> {
    let paths = match kind {
        EntryKind::Files => &listing.files,
        EntryKind::Folders => &listing.folders,
    };
    if paths.is_empty() {
        return Err(NoteListError::EmptyListing(kind));
    }

    let mut names: Vec<String> = paths.iter().map(|p| display_name(p, kind)).collect();
    log::debug!("{} {} after name stripping: {:?}", names.len(), kind, names);

    if settings.date_formatted_only {
        names.retain(|name| has_date_prefix(name));
        log::debug!("{} {} after date-prefix filter", names.len(), kind);
    }
    if names.is_empty() {
        return Err(NoteListError::EmptyListing(kind));
    }

    sort_names(&mut names, settings.sort_order);
    Ok(render_list(&names))
}
