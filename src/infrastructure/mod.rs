//! Infrastructure layer - Configuration and persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::NoteRepository;
