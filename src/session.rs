//! Per-device sync session
//!
//! One session owns the device catalog for its lifetime and carries all
//! session-scoped state explicitly: the opened catalog, the configuration,
//! the cached read-column check and the set of host books changed so far.
//! Opening a session runs the catalog cleanup pass before anything else;
//! stale orphan rows could otherwise produce false-positive matches.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::config::DeviceConfig;
use crate::db::{CatalogDb, RemoveStats};
use crate::error::Result;
use crate::library::{HostBook, HostBookId, HostLibrary};
use crate::paths;

/// What the read-status reconciler did for one book
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatusChange {
    /// Flags agree (including both unread), or the read column is unusable
    #[default]
    None,
    /// Device said read, host said unread: the host field was set
    HostMarkedRead,
    /// Host said read, device said unread: the device settings row was written
    DeviceMarkedRead,
}

/// Result of synchronizing one host book against the device
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Whether a matching device book was found; `false` means the book was
    /// skipped entirely (recoverable, per-book)
    pub resolved: bool,
    /// Whether drifted device metadata was rewritten
    pub metadata_corrected: bool,
    pub read_status: ReadStatusChange,
}

/// A sync session against one mounted device
#[derive(Debug)]
pub struct SyncSession {
    device_root: PathBuf,
    db: CatalogDb,
    config: DeviceConfig,
    /// Cached result of the read-column check, evaluated once per session
    read_column_usable: Option<bool>,
    /// Host book ids whose read flag this session changed
    changed_books: HashSet<HostBookId>,
}

impl SyncSession {
    /// Open a session: locate and open the catalog, then run cleanup
    ///
    /// Fails fatally if no catalog exists under the device root or if the
    /// cleanup pass cannot commit.
    pub fn open(device_root: impl Into<PathBuf>, config: DeviceConfig) -> Result<Self> {
        let device_root = device_root.into();
        let db_path = CatalogDb::locate(&device_root)?;
        tracing::info!(path = %db_path.display(), "opening device catalog");

        let db = CatalogDb::open(&db_path)?;
        let stats = db.cleanup()?;
        if stats.total() > 0 {
            tracing::info!(removed = stats.total(), "cleanup removed orphaned catalog rows");
        }

        Ok(SyncSession {
            device_root,
            db,
            config,
            read_column_usable: None,
            changed_books: HashSet::new(),
        })
    }

    pub fn device_root(&self) -> &Path {
        &self.device_root
    }

    /// Synchronize one host book against the device catalog
    ///
    /// Resolves the device book (path join, then legacy author/title
    /// fallback), corrects drifted metadata, and reconciles the read flag.
    /// A book that cannot be resolved is skipped, not an error; the caller
    /// continues the pass with the next book either way.
    pub fn synchronize_book(
        &mut self,
        library: &mut dyn HostLibrary,
        book: &HostBook,
    ) -> Result<SyncOutcome> {
        let mut outcome = SyncOutcome::default();

        let rel = paths::strip_device_root(&book.path, &self.device_root);
        let split = paths::split_folder_name(&rel);

        let book_id = match self.db.resolve_book(&split.folder, &split.name)? {
            Some(id) => id,
            None => match self.db.resolve_legacy(&book.joined_authors(), &book.title)? {
                Some(id) => id,
                None => {
                    tracing::debug!(
                        title = %book.title,
                        author = %book.joined_authors(),
                        "book not found on device"
                    );
                    return Ok(outcome);
                }
            },
        };

        outcome.resolved = true;
        outcome.metadata_corrected = self.db.correct_metadata(book_id, book)?;
        outcome.read_status = self.reconcile_read_status(library, book, book_id)?;

        Ok(outcome)
    }

    /// Remove a batch of device-relative paths from the catalog
    ///
    /// All-or-nothing: the whole batch shares one transaction.
    pub fn remove_books(&self, paths: &[String]) -> Result<RemoveStats> {
        self.db.remove_paths(paths)
    }

    /// Host book ids whose read flag was changed during this session
    pub fn changed_books(&self) -> &HashSet<HostBookId> {
        &self.changed_books
    }

    pub fn into_changed_books(self) -> HashSet<HostBookId> {
        self.changed_books
    }

    /// Whether the configured read column exists and is boolean, checked
    /// once and cached for the whole session
    fn read_column_usable(&mut self, library: &dyn HostLibrary) -> bool {
        if let Some(usable) = self.read_column_usable {
            return usable;
        }

        let usable = library.is_boolean_field(&self.config.read_column);
        if !usable {
            tracing::warn!(
                column = %self.config.read_column,
                "read column missing or not boolean, skipping read-status sync"
            );
        }
        self.read_column_usable = Some(usable);
        usable
    }

    /// Reconcile the host read flag with the device completed flag
    ///
    /// Acts only when exactly one side says "read": read status spreads
    /// from either side to the other but never retracts.
    fn reconcile_read_status(
        &mut self,
        library: &mut dyn HostLibrary,
        book: &HostBook,
        device_book_id: i64,
    ) -> Result<ReadStatusChange> {
        if !self.read_column_usable(library) {
            return Ok(ReadStatusChange::None);
        }

        let host_read = library
            .field_value(&self.config.read_column, book.id)
            .unwrap_or(false);

        let completion = self.db.completion(device_book_id)?;
        let device_read = completion.unwrap_or(false);

        if !(host_read || device_read) || host_read == device_read {
            return Ok(ReadStatusChange::None);
        }

        if host_read {
            self.db.mark_completed(device_book_id, completion.is_some())?;
            tracing::debug!(device_book_id, title = %book.title, "marked book completed on device");
            Ok(ReadStatusChange::DeviceMarkedRead)
        } else {
            let updates = HashMap::from([(book.id, true)]);
            let changed = library.set_field(&self.config.read_column, &updates);
            self.changed_books.extend(changed);
            tracing::debug!(book_id = book.id, title = %book.title, "marked book read in host library");
            Ok(ReadStatusChange::HostMarkedRead)
        }
    }
}
