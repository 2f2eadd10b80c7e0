//! SQLite note repository
//!
//! One connection per process invocation. The schema is created
//! idempotently on open, so a fresh database file works immediately.

use crate::domain::Note;
use crate::error::Result;
use chrono::Utc;
use rusqlite::{params, Connection};

/// Repository for the `notes` table, scoped to the process lifetime.
pub struct NoteRepository {
    conn: Connection,
}

impl NoteRepository {
    /// Open (or create) the database at the configured path.
    pub fn open(database: &str) -> Result<Self> {
        let conn = Connection::open(database)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory database for testing.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let repository = NoteRepository { conn };
        repository.init_schema()?;
        Ok(repository)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS notes (
                id      INTEGER PRIMARY KEY AUTOINCREMENT,
                note    TEXT NOT NULL,
                pubtime TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_notes_pubtime
                ON notes(pubtime);
            ",
        )?;
        Ok(())
    }

    /// Append one row with the sealed note text, timestamped now.
    pub fn insert(&self, sealed: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO notes (note, pubtime) VALUES (?1, ?2)",
            params![sealed, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Fetch up to `count` rows, most recent first.
    /// The returned notes still carry the sealed text.
    pub fn list_recent(&self, count: u32) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, note, pubtime FROM notes
             ORDER BY pubtime DESC, id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![count], Self::row_to_note)?;
        let notes = rows.collect::<rusqlite::Result<Vec<Note>>>()?;
        Ok(notes)
    }

    /// Delete every row whose id is in `ids`, in one statement.
    /// Ids that match no row are not an error.
    pub fn delete_by_ids(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let placeholders = (1..=ids.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("DELETE FROM notes WHERE id IN ({})", placeholders);

        let params_vec: Vec<&dyn rusqlite::ToSql> =
            ids.iter().map(|id| id as &dyn rusqlite::ToSql).collect();
        self.conn.execute(&sql, params_vec.as_slice())?;
        Ok(())
    }

    fn row_to_note(row: &rusqlite::Row<'_>) -> rusqlite::Result<Note> {
        let id: i64 = row.get(0)?;
        let text: String = row.get(1)?;
        let pubtime_str: String = row.get(2)?;

        let pubtime = chrono::DateTime::parse_from_rfc3339(&pubtime_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    2,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;

        Ok(Note::new(id, text, pubtime))
    }
}
