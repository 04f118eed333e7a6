//! Title/author drift correction
//!
//! Some firmware format importers mis-extract title and author for certain
//! formats. The host library's metadata is authoritative for these fields:
//! when the device row has drifted, every denormalized title/author column
//! is overwritten from the host record in one immediate commit.

use rusqlite::params;

use crate::error::{Result, SyncError};
use crate::library::HostBook;

/// Uppercased first character, used for the catalog's first-letter indices
fn first_letter(s: &str) -> String {
    s.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

impl super::CatalogDb {
    /// Overwrite drifted device-side metadata from the host record
    ///
    /// Compares title, first author and sort title; if any differ, all six
    /// denormalized columns are rewritten so the catalog's sort indices stay
    /// consistent with the corrected values. Returns whether a write
    /// happened; matching metadata is a no-op.
    pub fn correct_metadata(&self, book_id: i64, book: &HostBook) -> Result<bool> {
        let Some(row) = self.fetch_book_row(book_id)? else {
            return Ok(false);
        };

        let first_author = book.first_author();
        let drifted = row.title != book.title
            || row.first_author.as_deref() != Some(first_author)
            || row.sort_title.as_deref() != Some(book.title_sort.as_str());

        if !drifted {
            return Ok(false);
        }

        self.conn
            .execute(
                "UPDATE BOOKS_IMPL
                 SET TITLE = ?1,
                     FIRST_TITLE_LETTER = ?2,
                     AUTHOR = ?3,
                     FIRSTAUTHOR = ?4,
                     FIRST_AUTHOR_LETTER = ?5,
                     SORT_TITLE = ?6
                 WHERE ID = ?7",
                params![
                    book.title,
                    first_letter(&book.title),
                    book.joined_authors(),
                    first_author,
                    first_letter(first_author),
                    book.title_sort,
                    book_id
                ],
            )
            .map_err(|e| SyncError::db_operation("correct book metadata", e))?;

        tracing::debug!(
            book_id,
            title = %book.title,
            author = %book.joined_authors(),
            "corrected drifted device metadata"
        );

        Ok(true)
    }
}
