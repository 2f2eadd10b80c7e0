//! List notes use case

use crate::domain::{Note, NoteCipher};
use crate::error::Result;
use crate::infrastructure::NoteRepository;

/// Service for listing the most recent notes, decrypted
pub struct ListNotesService {
    repository: NoteRepository,
    cipher: NoteCipher,
}

impl ListNotesService {
    pub fn new(repository: NoteRepository, cipher: NoteCipher) -> Self {
        ListNotesService { repository, cipher }
    }

    /// Fetch up to `count` notes, most recent first, and decrypt each one.
    /// A single row that fails to decrypt fails the whole listing.
    pub fn execute(&self, count: u32) -> Result<Vec<Note>> {
        let rows = self.repository.list_recent(count)?;
        rows.into_iter()
            .map(|row| {
                let text = self.cipher.decrypt(&row.text)?;
                Ok(Note::new(row.id, text, row.pubtime))
            })
            .collect()
    }
}
