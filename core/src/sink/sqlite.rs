use std::path::Path;

use rusqlite::{params, Connection};

use super::{Entry, Sink};
use crate::error::ShamrockResult;

/// How many inserts are grouped into a single transaction.
const INSERTS_PER_TRANSACTION: usize = 4096;

/// A sink inserting entries into a SQLite database.
///
/// Entries land in an `entries (digest, plaintext)` table with a non-unique
/// index on the digest. The digest is stored as lowercase hexadecimal text,
/// the same encoding the flat artifact uses.
pub struct SqliteSink {
    conn: Connection,
    pending: usize,
}

impl SqliteSink {
    /// Opens or creates the database artifact and starts the first
    /// transaction.
    pub fn open(path: &Path) -> ShamrockResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS entries (
                digest TEXT NOT NULL,
                plaintext TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS entries_digest ON entries (digest);
            BEGIN;",
        )?;

        Ok(Self { conn, pending: 0 })
    }
}

impl Sink for SqliteSink {
    fn write(&mut self, entry: Entry<'_>) -> ShamrockResult<()> {
        self.conn
            .prepare_cached("INSERT INTO entries (digest, plaintext) VALUES (?1, ?2)")?
            .execute(params![hex::encode(entry.digest), entry.plaintext])?;

        self.pending += 1;
        if self.pending == INSERTS_PER_TRANSACTION {
            self.conn.execute_batch("COMMIT; BEGIN;")?;
            self.pending = 0;
        }

        Ok(())
    }

    fn close(self: Box<Self>) -> ShamrockResult<()> {
        self.conn.execute_batch("COMMIT;")?;
        self.conn.close().map_err(|(_, err)| err)?;

        Ok(())
    }
}
