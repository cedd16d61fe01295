//! notelist - insert a link list of a note's sibling files or folders into
//! the note, right below its front matter.

/// CLI module - command-line interface for notelist
mod cli;

fn main() {
    env_logger::init();
    cli::run_cli();
}
