//! `files` and `folders` command handlers

use std::path::Path;

use notelist_core::list::EntryKind;
use notelist_core::settings::Settings;

use crate::cli::{CliApp, block_on};

/// Handle the `files` and `folders` commands.
///
/// Loads the persisted settings, runs the pipeline, and reports the outcome
/// as a single transient-style message. Returns whether the command
/// succeeded.
pub fn handle_list(app: &CliApp, note: &Path, kind: EntryKind) -> bool {
    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("falling back to default settings: {}", e);
            Settings::default()
        }
    };

    match block_on(app.create_note_list(note, kind, &settings)) {
        Ok(()) => {
            println!("✓ List added to {}", note.display());
            true
        }
        Err(e) => {
            log::debug!("create_note_list failed: {:?}", e);
            eprintln!("✗ {}", e);
            false
        }
    }
}
