//! Note model

use chrono::{DateTime, Utc};

/// A single note row.
///
/// `text` holds the sealed (base64) form when the note comes straight from
/// storage and the decrypted plaintext once the cipher has opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub pubtime: DateTime<Utc>,
}

impl Note {
    pub fn new(id: i64, text: String, pubtime: DateTime<Utc>) -> Self {
        Note { id, text, pubtime }
    }
}
