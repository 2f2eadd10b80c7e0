//! sealnote - Encrypted personal notes in your terminal
//!
//! A command-line note-taking application that stores AES-GCM encrypted
//! notes in a local SQLite database and decrypts them on listing.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SealnoteError;
