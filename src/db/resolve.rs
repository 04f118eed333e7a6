//! Book resolution against the device catalog
//!
//! The host library and the device catalog share no identifiers, so a host
//! record is matched by value: exact filename plus folder name, with the
//! folder compared as a suffix because the firmware stores folder names
//! with its own mount prefix. Older catalogs that predate reliable path
//! rows are handled by a legacy author/title match.

use rusqlite::{params, Connection};

use crate::error::{Result, SyncError};

/// A file row resolved in the catalog, with its owning folder and book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FileRef {
    pub file_id: i64,
    pub folder_id: i64,
    pub book_id: i64,
}

/// Device-side book metadata subject to drift correction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BookRow {
    pub title: String,
    pub first_author: Option<String>,
    pub sort_title: Option<String>,
}

/// Resolve a file row by filename and normalized folder name
pub(crate) fn resolve_file(conn: &Connection, folder: &str, name: &str) -> Result<Option<FileRef>> {
    let result = if folder.is_empty() {
        conn.query_row(
            "SELECT f.ID, f.FOLDER_ID, f.BOOK_ID
             FROM FILES f
             WHERE f.NAME = ?1",
            params![name],
            |row| {
                Ok(FileRef {
                    file_id: row.get(0)?,
                    folder_id: row.get(1)?,
                    book_id: row.get(2)?,
                })
            },
        )
    } else {
        // Suffix match tolerates folder names stored with the firmware's
        // own mount prefix (e.g. "/mnt/ext1/Books/Fiction" vs "Books/Fiction").
        conn.query_row(
            "SELECT f.ID, f.FOLDER_ID, f.BOOK_ID
             FROM FILES f
             JOIN FOLDERS d ON d.ID = f.FOLDER_ID
             WHERE f.NAME = ?1
             AND (d.NAME = ?2 OR d.NAME LIKE '%/' || ?2)",
            params![name, folder],
            |row| {
                Ok(FileRef {
                    file_id: row.get(0)?,
                    folder_id: row.get(1)?,
                    book_id: row.get(2)?,
                })
            },
        )
    };

    match result {
        Ok(file) => Ok(Some(file)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(SyncError::db_operation("resolve device file", e)),
    }
}

impl super::CatalogDb {
    /// Resolve a device book id by folder and filename
    pub fn resolve_book(&self, folder: &str, name: &str) -> Result<Option<i64>> {
        Ok(resolve_file(&self.conn, folder, name)?.map(|f| f.book_id))
    }

    /// Legacy resolution by display author and title
    ///
    /// Used when the path join finds nothing; older catalog variants stored
    /// unreliable folder rows. `author` is the host's author list joined
    /// with ", ", matching the catalog's display string.
    pub fn resolve_legacy(&self, author: &str, title: &str) -> Result<Option<i64>> {
        let result = self.conn.query_row(
            "SELECT ID FROM BOOKS_IMPL WHERE AUTHOR = ?1 AND TITLE = ?2",
            params![author, title],
            |row| row.get::<_, i64>(0),
        );

        match result {
            Ok(id) => Ok(Some(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SyncError::db_operation("resolve book by author/title", e)),
        }
    }

    pub(crate) fn fetch_book_row(&self, book_id: i64) -> Result<Option<BookRow>> {
        let result = self.conn.query_row(
            "SELECT TITLE, FIRSTAUTHOR, SORT_TITLE FROM BOOKS_IMPL WHERE ID = ?1",
            params![book_id],
            |row| {
                Ok(BookRow {
                    title: row.get(0)?,
                    first_author: row.get(1)?,
                    sort_title: row.get(2)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(SyncError::db_operation("fetch book row", e)),
        }
    }
}
