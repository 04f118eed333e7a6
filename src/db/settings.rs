//! Per-book completion state (`BOOKS_SETTINGS`)
//!
//! The device keeps user state per (book, profile). Only the completed flag
//! and its timestamp are ever read or written here; the single-profile
//! assumption fixes `PROFILEID` to 1. Rows are created lazily on first
//! need, by the reconciler.

use rusqlite::params;

use crate::error::{Result, SyncError};

/// Fixed profile id; the driver assumes a single-profile device
pub(crate) const PROFILE_ID: i64 = 1;

impl super::CatalogDb {
    /// Read the completed flag for a book
    ///
    /// `None` means no settings row exists for (book, profile 1), which the
    /// reconciler treats as "unread".
    pub fn completion(&self, book_id: i64) -> Result<Option<bool>> {
        let result = self.conn.query_row(
            "SELECT COMPLETED FROM BOOKS_SETTINGS WHERE BOOKID = ?1 AND PROFILEID = ?2",
            params![book_id, PROFILE_ID],
            |row| row.get::<_, i64>(0),
        );

        match result {
            Ok(value) => Ok(Some(value != 0)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SyncError::db_operation("read completed flag", e)),
        }
    }

    /// Mark a book completed, stamping the current time
    ///
    /// Updates the existing settings row if one exists, otherwise inserts
    /// one. No other `BOOKS_SETTINGS` columns are touched.
    pub fn mark_completed(&self, book_id: i64, has_settings: bool) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        if has_settings {
            self.conn
                .execute(
                    "UPDATE BOOKS_SETTINGS
                     SET COMPLETED = 1, COMPLETED_TS = ?1
                     WHERE BOOKID = ?2 AND PROFILEID = ?3",
                    params![now, book_id, PROFILE_ID],
                )
                .map_err(|e| SyncError::db_operation("update completed flag", e))?;
        } else {
            self.conn
                .execute(
                    "INSERT INTO BOOKS_SETTINGS (BOOKID, PROFILEID, COMPLETED, COMPLETED_TS)
                     VALUES (?1, ?2, 1, ?3)",
                    params![book_id, PROFILE_ID, now],
                )
                .map_err(|e| SyncError::db_operation("insert completed flag", e))?;
            tracing::debug!(book_id, "created settings row for completed flag");
        }

        Ok(())
    }
}
