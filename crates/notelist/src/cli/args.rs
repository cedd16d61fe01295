//! Clap argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use notelist_core::settings::SortOrder;

/// Insert a link list of a note's sibling files or folders into the note
#[derive(Parser)]
#[command(name = "notelist", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert a list of the files next to NOTE into the note
    Files {
        /// The note to insert the list into
        note: PathBuf,
    },

    /// Insert a list of the folders next to NOTE into the note
    Folders {
        /// The note to insert the list into
        note: PathBuf,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current settings
    Show,

    /// Show or set the sort order of the list
    SortOrder {
        /// New sort order; omit to show the current value
        value: Option<SortOrderArg>,
    },

    /// Show or set whether only date-prefixed (YYYY-MM-DD) names are listed
    DateOnly {
        /// New value; omit to show the current value
        value: Option<bool>,
    },
}

/// CLI-facing sort order values ("asc"/"desc", same tokens as the config file)
#[derive(Clone, Copy, ValueEnum)]
pub enum SortOrderArg {
    /// Lexicographic ascending
    Asc,
    /// Ascending, then the whole sequence reversed
    Desc,
}

impl From<SortOrderArg> for SortOrder {
    fn from(value: SortOrderArg) -> Self {
        match value {
            SortOrderArg::Asc => SortOrder::Ascending,
            SortOrderArg::Desc => SortOrder::Descending,
        }
    }
}
