//! Delete notes use case

use crate::error::{Result, SealnoteError};
use crate::infrastructure::NoteRepository;

/// Parse raw id arguments, all-or-nothing.
///
/// The whole command is rejected on the first unparseable id, so no
/// deletion happens for a partially valid list. Zero ids is an error.
pub fn parse_ids(raw: &[String]) -> Result<Vec<i64>> {
    if raw.is_empty() {
        return Err(SealnoteError::NoNoteIds);
    }
    raw.iter()
        .map(|arg| {
            arg.parse::<i64>()
                .map_err(|_| SealnoteError::InvalidNoteId(arg.clone()))
        })
        .collect()
}

/// Service for deleting notes by id
pub struct DeleteNotesService {
    repository: NoteRepository,
}

impl DeleteNotesService {
    pub fn new(repository: NoteRepository) -> Self {
        DeleteNotesService { repository }
    }

    /// Delete the given ids in one statement. Missing ids are not an error.
    pub fn execute(&self, ids: &[i64]) -> Result<()> {
        self.repository.delete_by_ids(ids)
    }
}
