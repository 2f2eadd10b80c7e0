//! Domain layer - Note model and encryption

pub mod cipher;
pub mod note;

pub use cipher::NoteCipher;
pub use note::Note;
