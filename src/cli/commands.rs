//! CLI command definitions

use clap::Parser;

/// How many notes a plain listing shows.
pub const DEFAULT_LIST_COUNT: u32 = 5;

#[derive(Parser, Debug)]
#[command(name = "sealnote")]
#[command(about = "Encrypted personal notes in your terminal", long_about = None)]
#[command(version)]
#[command(after_help = "Examples:\n  \
    sealnote here is my note text    add a new note\n  \
    sealnote                         list the last 5 notes\n  \
    sealnote -l 10                   list the last 10 notes\n  \
    sealnote -d 3 7                  delete notes 3 and 7")]
pub struct Cli {
    /// List the most recent notes (default count 5)
    #[arg(
        short = 'l',
        long = "list",
        value_name = "COUNT",
        num_args = 0..=1,
        conflicts_with = "delete"
    )]
    pub list: Option<Option<String>>,

    /// Delete notes by id
    #[arg(short = 'd', long = "delete", value_name = "ID", num_args = 0..)]
    pub delete: Option<Vec<String>>,

    /// Note text to encrypt and store
    #[arg(
        value_name = "TEXT",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub text: Vec<String>,
}

/// Resolve the listing count from the raw `-l` argument.
/// Zero, negative or non-numeric values fall back to the default.
pub fn parse_count(raw: Option<&str>) -> u32 {
    match raw.and_then(|arg| arg.parse::<u32>().ok()) {
        Some(0) | None => DEFAULT_LIST_COUNT,
        Some(count) => count,
    }
}
