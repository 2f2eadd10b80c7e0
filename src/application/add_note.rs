//! Add note use case

use crate::domain::NoteCipher;
use crate::error::Result;
use crate::infrastructure::NoteRepository;

/// Service for encrypting and storing a new note
pub struct AddNoteService {
    repository: NoteRepository,
    cipher: NoteCipher,
}

impl AddNoteService {
    pub fn new(repository: NoteRepository, cipher: NoteCipher) -> Self {
        AddNoteService { repository, cipher }
    }

    /// Join the argument words into one note, encrypt it and append it.
    pub fn execute(&self, words: &[String]) -> Result<()> {
        let text = words.join(" ");
        let sealed = self.cipher.encrypt(&text)?;
        self.repository.insert(&sealed)
    }
}
