//! pocketbook-sync
//!
//! Catalog consistency and read-status synchronization core for PocketBook
//! readers. Keeps a host library (the user's primary metadata store) and
//! the device's own SQLite catalog mutually consistent: orphan cleanup
//! after out-of-band file changes, by-value book resolution, correction of
//! metadata mangled by faulty on-device import, two-way read-flag
//! reconciliation, and the multi-table deletion cascade.
//!
//! The core has no standalone entry point; it is driven by the device
//! driver's open/sync/delete lifecycle hooks via [`session::SyncSession`].

pub mod config;
pub mod db;
pub mod error;
pub mod library;
pub mod logging;
mod paths;
pub mod session;
