//! Host library collaborator interface
//!
//! The host library (the user's primary metadata store) and the device
//! catalog share no identifiers; books are matched by value. This module
//! defines the record the host supplies per book and the narrow field
//! read/write surface the reconciler needs. The trait keeps the core
//! testable without a live host.

use std::collections::{HashMap, HashSet};

/// Identifier of a book in the host library
pub type HostBookId = i64;

/// Per-book metadata supplied by the host library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBook {
    pub id: HostBookId,
    pub title: String,
    /// Ordered author list; the first entry is the primary author
    pub authors: Vec<String>,
    pub title_sort: String,
    pub author_sort: String,
    /// Path of the book file on the device, as recorded by the host
    pub path: String,
}

impl HostBook {
    /// Authors joined as the device catalog displays them
    pub fn joined_authors(&self) -> String {
        self.authors.join(", ")
    }

    /// First listed author, or empty for author-less records
    pub fn first_author(&self) -> &str {
        self.authors.first().map(String::as_str).unwrap_or("")
    }
}

/// Field access into the host library's metadata store
pub trait HostLibrary {
    /// Whether `field` exists and is boolean-typed
    fn is_boolean_field(&self, field: &str) -> bool;

    /// Boolean value of `field` for one book; `None` if unset
    fn field_value(&self, field: &str, book_id: HostBookId) -> Option<bool>;

    /// Apply `updates` to `field`, returning the ids actually changed
    fn set_field(
        &mut self,
        field: &str,
        updates: &HashMap<HostBookId, bool>,
    ) -> HashSet<HostBookId>;
}
