//! Device catalog database access
//!
//! The PocketBook firmware maintains an SQLite catalog (`explorer-*.db`)
//! indexing the files on the device. The schema is owned by the firmware;
//! this module only consumes it. A catalog that cannot be located or opened
//! is fatal for the whole session.

mod cleanup;
mod delete;
mod metadata;
mod resolve;
mod settings;

pub use cleanup::CleanupStats;
pub use delete::RemoveStats;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{Result, SyncError};

/// Catalog database versions probed at session start, newest first
const CATALOG_VERSIONS: [u32; 2] = [3, 2];

/// Open handle to one device's catalog database
#[derive(Debug)]
pub struct CatalogDb {
    conn: Connection,
}

impl CatalogDb {
    /// Locate the catalog database under a device root
    ///
    /// Probes `<root>/system/explorer-N/explorer-N.db` for known versions,
    /// newest first. A device without any recognized catalog is unsupported.
    pub fn locate(device_root: &Path) -> Result<PathBuf> {
        for version in CATALOG_VERSIONS {
            let name = format!("explorer-{}", version);
            let candidate = device_root
                .join("system")
                .join(&name)
                .join(format!("{}.db", name));
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "located device catalog");
                return Ok(candidate);
            }
        }

        Err(SyncError::CatalogNotFound {
            root: device_root.to_path_buf(),
        })
    }

    /// Open the catalog database at a located path
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(|e| {
            SyncError::invalid_catalog(format!(
                "failed to open catalog at {}: {}",
                db_path.display(),
                e
            ))
        })?;

        Ok(CatalogDb { conn })
    }
}
