//! Command-line interface for notelist.
//!
//! Two list commands (`files`, `folders`) plus a `config` command that shows
//! and persists settings. Every failure is reported as one short `✗` line;
//! the process exits nonzero but never panics on expected errors.

/// Clap argument definitions
mod args;

/// Config command handlers
mod config;

/// `files` and `folders` command handlers
mod list;

use clap::Parser;

use notelist_core::app::NoteListApp;
use notelist_core::fs::{RealFileSystem, SyncToAsyncFs};
use notelist_core::list::EntryKind;

/// Type alias for the async filesystem used throughout the CLI.
/// Wraps RealFileSystem with SyncToAsyncFs for use with async-first core APIs.
pub type AsyncFs = SyncToAsyncFs<RealFileSystem>;

/// Type alias for NoteListApp with the CLI's async filesystem.
pub type CliApp = NoteListApp<AsyncFs>;

/// Helper to run async operations in sync context
fn block_on<F: std::future::Future>(f: F) -> F::Output {
    futures_lite::future::block_on(f)
}

pub use args::Cli;
use args::Commands;

/// Main entry point for the CLI
pub fn run_cli() {
    let cli = Cli::parse();

    let app = NoteListApp::new(SyncToAsyncFs::new(RealFileSystem));

    let success = match cli.command {
        Commands::Files { note } => list::handle_list(&app, &note, EntryKind::Files),

        Commands::Folders { note } => list::handle_list(&app, &note, EntryKind::Folders),

        Commands::Config { command } => config::handle_config_command(command),
    };

    if !success {
        std::process::exit(1);
    }
}
