#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command pipeline (list a note's siblings and insert into the note)
pub mod app;

/// Error (common error types)
pub mod error;

/// Filesystem abstraction
pub mod fs;

/// Front-matter aware insertion into note content
pub mod insert;

/// Entry selection, date filter, sorting, rendering
pub mod list;

/// User settings (sort order, date filter)
pub mod settings;

#[cfg(test)]
pub mod test_utils;
