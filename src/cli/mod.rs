//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_count, Cli, DEFAULT_LIST_COUNT};
pub use output::format_note_list;
