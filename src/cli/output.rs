//! Output formatting utilities

use crate::domain::Note;
use chrono::Local;

/// Format decrypted notes for display, one `date: text (id)` line each.
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "You have no notes!\n".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{}: {} ({})\n",
            note.pubtime.with_timezone(&Local).format("%d/%m/%y %H:%M"),
            note.text,
            note.id
        ));
    }
    output
}
