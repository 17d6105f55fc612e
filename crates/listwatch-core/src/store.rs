//! Durable seen-set store.
//!
//! A [`SeenStore`] is a key-presence set persisted in a single SQLite file:
//! it answers "has this identifier ever been reported?" and records new
//! identifiers so the answer survives process restarts. Presence is all that
//! matters - rows carry no payload - and nothing is ever deleted.
//!
//! `is_new` and `mark` are deliberately separate calls. A crash between them
//! means the identifier is re-discovered and re-emitted on the next run:
//! at-least-once reporting across crashes, not exactly-once.

use crate::{Error, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// How long SQLite waits on a lock held by another process before the
/// operation fails with a storage error.
const BUSY_TIMEOUT_MS: u32 = 5000;

/// Durable set of identifiers that have already been reported.
///
/// The connection is released when the store is dropped, on every exit path.
#[derive(Debug)]
pub struct SeenStore {
    conn: Connection,
}

impl SeenStore {
    /// Opens or creates the store at `path`, ensuring the `seen` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] when the path is not writable or the file is
    /// locked by another process.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            Error::Storage(format!("failed to open store at '{}': {e}", path.display()))
        })?;

        // A locked database should fail the run after a bounded wait instead
        // of hanging the process.
        conn.pragma_update(None, "busy_timeout", BUSY_TIMEOUT_MS)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS seen (id TEXT PRIMARY KEY) WITHOUT ROWID",
            [],
        )
        .map_err(|e| Error::Storage(format!("failed to create seen table: {e}")))?;

        debug!("opened seen store at {}", path.display());
        Ok(Self { conn })
    }

    /// Returns `true` iff `id` has never been recorded.
    ///
    /// Read-only: checking does not mark. The caller decides when to
    /// [`mark`](Self::mark).
    pub fn is_new(&self, id: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM seen WHERE id = ?1")?;
        let known = stmt.exists([id])?;
        Ok(!known)
    }

    /// Records `id` as seen. Idempotent: marking an already-seen identifier is
    /// a no-op, not an error.
    pub fn mark(&self, id: &str) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare_cached("INSERT OR IGNORE INTO seen (id) VALUES (?1)")?;
        stmt.execute([id])?;
        Ok(())
    }

    /// Number of identifiers recorded so far.
    pub fn len(&self) -> Result<u64> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM seen", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Whether no identifier has been recorded yet.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fresh_store_reports_everything_new() {
        let dir = tempdir().unwrap();
        let store = SeenStore::open(dir.path().join("scrape.db")).unwrap();

        assert!(store.is_new("42").unwrap());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn mark_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SeenStore::open(dir.path().join("scrape.db")).unwrap();

        for _ in 0..3 {
            store.mark("42").unwrap();
        }

        assert!(!store.is_new("42").unwrap());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn is_new_does_not_mark() {
        let dir = tempdir().unwrap();
        let store = SeenStore::open(dir.path().join("scrape.db")).unwrap();

        assert!(store.is_new("7").unwrap());
        assert!(store.is_new("7").unwrap());
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn marks_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scrape.db");

        {
            let store = SeenStore::open(&path).unwrap();
            store.mark("42").unwrap();
        }

        let reopened = SeenStore::open(&path).unwrap();
        assert!(!reopened.is_new("42").unwrap());
        assert!(reopened.is_new("43").unwrap());
    }

    #[test]
    fn empty_identifier_is_a_normal_key() {
        let dir = tempdir().unwrap();
        let store = SeenStore::open(dir.path().join("scrape.db")).unwrap();

        assert!(store.is_new("").unwrap());
        store.mark("").unwrap();
        assert!(!store.is_new("").unwrap());
    }

    #[test]
    fn open_fails_on_unwritable_path() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened as a database file.
        let err = SeenStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn identifiers_are_compared_by_exact_string() {
        let dir = tempdir().unwrap();
        let store = SeenStore::open(dir.path().join("scrape.db")).unwrap();

        store.mark("042").unwrap();
        assert!(store.is_new("42").unwrap());
    }
}
