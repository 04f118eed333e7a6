//! Deletion cascade for removed files
//!
//! The firmware does not use declarative cascade constraints, so removing a
//! file means deleting its dependent rows across the normalized tables
//! explicitly, in order. The whole batch shares one transaction: callers
//! rely on all-or-nothing semantics for a single removal request.

use rusqlite::params;

use crate::error::{Result, SyncError};
use crate::paths::{normalize_separators, split_folder_name};

use super::resolve::resolve_file;

/// Rows removed by one deletion batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RemoveStats {
    pub files: usize,
    pub books: usize,
    pub folders: usize,
}

impl super::CatalogDb {
    /// Delete catalog rows for a batch of removed device-relative paths
    ///
    /// Per path: resolve the file row, then delete social rows, settings,
    /// the file row itself and fast hashes; the folder row goes only once
    /// no other file references it, and the book row last. A path with no
    /// file row is a legacy/partial state: any stale orphaned folder
    /// matching its folder component is pruned instead.
    pub fn remove_paths(&self, paths: &[String]) -> Result<RemoveStats> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| SyncError::transaction("start removal", e))?;

        let mut stats = RemoveStats::default();

        for path in paths {
            let rel = normalize_separators(path);
            let split = split_folder_name(&rel);

            let Some(file) = resolve_file(&tx, &split.folder, &split.name)? else {
                tracing::debug!(path = %rel, "no catalog row for removed file");
                let pruned = tx
                    .execute(
                        "DELETE FROM FOLDERS
                         WHERE (NAME = ?1 OR NAME LIKE '%/' || ?1)
                         AND ID NOT IN (SELECT FOLDER_ID FROM FILES)",
                        params![split.folder],
                    )
                    .map_err(|e| SyncError::db_operation("prune stale folder", e))?;
                stats.folders += pruned;
                continue;
            };

            tx.execute(
                "DELETE FROM SOCIAL WHERE BOOKID = ?1",
                params![file.book_id],
            )
            .map_err(|e| SyncError::db_operation("delete social rows", e))?;

            tx.execute(
                "DELETE FROM BOOKS_SETTINGS WHERE BOOKID = ?1",
                params![file.book_id],
            )
            .map_err(|e| SyncError::db_operation("delete book settings", e))?;

            tx.execute("DELETE FROM FILES WHERE ID = ?1", params![file.file_id])
                .map_err(|e| SyncError::db_operation("delete file row", e))?;

            tx.execute(
                "DELETE FROM BOOKS_FAST_HASHES WHERE BOOK_ID = ?1",
                params![file.book_id],
            )
            .map_err(|e| SyncError::db_operation("delete fast hashes", e))?;

            // The folder-orphan check must run after the file row is gone.
            let remaining: i64 = tx
                .query_row(
                    "SELECT COUNT(*) FROM FILES WHERE FOLDER_ID = ?1",
                    params![file.folder_id],
                    |row| row.get(0),
                )
                .map_err(|e| SyncError::db_operation("count folder references", e))?;

            if remaining == 0 {
                tx.execute(
                    "DELETE FROM FOLDERS WHERE ID = ?1",
                    params![file.folder_id],
                )
                .map_err(|e| SyncError::db_operation("delete folder row", e))?;
                stats.folders += 1;
            }

            tx.execute(
                "DELETE FROM BOOKS_IMPL WHERE ID = ?1",
                params![file.book_id],
            )
            .map_err(|e| SyncError::db_operation("delete book row", e))?;

            stats.files += 1;
            stats.books += 1;

            tracing::debug!(path = %rel, book_id = file.book_id, "removed book from catalog");
        }

        tx.commit()
            .map_err(|e| SyncError::transaction("commit removal", e))?;

        Ok(stats)
    }
}
