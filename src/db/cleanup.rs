//! Catalog garbage collection
//!
//! Books removed from the device outside a controlled transaction leave
//! rows behind in every table keyed by book id. The cleanup pass restores
//! referential integrity before any matching logic runs: a stale
//! `BOOKS_IMPL` row could otherwise produce a false-positive match.

use crate::error::{Result, SyncError};

/// Rows deleted per table by one cleanup pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupStats {
    pub settings: usize,
    pub genres: usize,
    pub social: usize,
    pub books: usize,
    pub hashes: usize,
    pub folders: usize,
}

impl CleanupStats {
    pub fn total(&self) -> usize {
        self.settings + self.genres + self.social + self.books + self.hashes + self.folders
    }
}

impl super::CatalogDb {
    /// Remove catalog rows that reference no existing on-device file
    ///
    /// Runs once per session, immediately after open and before any book is
    /// synchronized. The dependent tables (`BOOKS_SETTINGS`, `BOOKTOGENRE`,
    /// `SOCIAL`) must be cleared before `BOOKS_IMPL`, since their orphan
    /// check goes through the book rows. All deletions commit as one unit;
    /// a second run in a row deletes nothing.
    pub fn cleanup(&self) -> Result<CleanupStats> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| SyncError::transaction("start cleanup", e))?;

        let mut stats = CleanupStats::default();

        stats.settings = tx
            .execute(
                "DELETE FROM BOOKS_SETTINGS
                 WHERE BOOKID IN
                 (
                     SELECT ID FROM BOOKS_IMPL
                     WHERE ID NOT IN (SELECT BOOK_ID FROM FILES)
                 )",
                [],
            )
            .map_err(|e| SyncError::db_operation("delete orphaned book settings", e))?;

        stats.genres = tx
            .execute(
                "DELETE FROM BOOKTOGENRE
                 WHERE BOOKID IN
                 (
                     SELECT ID FROM BOOKS_IMPL
                     WHERE ID NOT IN (SELECT BOOK_ID FROM FILES)
                 )",
                [],
            )
            .map_err(|e| SyncError::db_operation("delete orphaned genre links", e))?;

        stats.social = tx
            .execute(
                "DELETE FROM SOCIAL
                 WHERE BOOKID IN
                 (
                     SELECT ID FROM BOOKS_IMPL
                     WHERE ID NOT IN (SELECT BOOK_ID FROM FILES)
                 )",
                [],
            )
            .map_err(|e| SyncError::db_operation("delete orphaned social rows", e))?;

        stats.books = tx
            .execute(
                "DELETE FROM BOOKS_IMPL
                 WHERE ID NOT IN (SELECT BOOK_ID FROM FILES)",
                [],
            )
            .map_err(|e| SyncError::db_operation("delete orphaned books", e))?;

        stats.hashes = tx
            .execute(
                "DELETE FROM BOOKS_FAST_HASHES
                 WHERE BOOK_ID NOT IN (SELECT BOOK_ID FROM FILES)",
                [],
            )
            .map_err(|e| SyncError::db_operation("delete orphaned fast hashes", e))?;

        stats.folders = tx
            .execute(
                "DELETE FROM FOLDERS
                 WHERE ID NOT IN (SELECT FOLDER_ID FROM FILES)",
                [],
            )
            .map_err(|e| SyncError::db_operation("delete orphaned folders", e))?;

        tx.commit()
            .map_err(|e| SyncError::transaction("commit cleanup", e))?;

        tracing::debug!(
            settings = stats.settings,
            genres = stats.genres,
            social = stats.social,
            books = stats.books,
            hashes = stats.hashes,
            folders = stats.folders,
            "catalog cleanup pass complete"
        );

        Ok(stats)
    }
}
