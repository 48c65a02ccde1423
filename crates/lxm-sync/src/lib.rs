//! Synchronic merge for lexicon documents.
//!
//! Folds zero or more sidecar incremental-update files into one canonical
//! base file. Sidecars are ordered by filesystem modification time
//! (last-writer-wins by wall clock, not by content) and applied with
//! whole-entry overwrite semantics: an update fragment replaces a matching
//! entry wholesale or appends a new one at the document's end.
//!
//! # Key Types
//!
//! - [`SynchronicMerger`] -- Discovers, orders, and folds sidecar files
//! - [`ModificationClock`] -- Injected timestamp source, so tests supply
//!   deterministic orderings instead of sleeping between writes
//! - [`SyncError`] -- Discovery and apply failures

pub mod clock;
pub mod error;
pub mod merger;

pub use clock::{FileSystemClock, ModificationClock};
pub use error::{SyncError, SyncResult};
pub use merger::{SynchronicMerger, BACKUP_SUFFIX, BASE_FILE_NAME, UPDATE_SUFFIX};
