//! Application layer - Use cases and orchestration

pub mod add_note;
pub mod delete_notes;
pub mod list_notes;

pub use add_note::AddNoteService;
pub use delete_notes::{parse_ids, DeleteNotesService};
pub use list_notes::ListNotesService;
