//! Three-way structural merge for lexicon documents.
//!
//! Reconciles two divergent full-document edits ("ours", "theirs") against a
//! common ancestor, field by field. Disagreements are never fatal: every
//! conflict is resolved by a deterministic fallback (prefer ours; an edit
//! wins over a deletion) and recorded as a [`Conflict`] for review.
//!
//! # Key Types
//!
//! - [`EntryMerge`] -- Injected capability: merge one entry triple
//! - [`EntryMerger`] -- The field-level decision-table implementation
//! - [`ThreeWayDocumentMerger`] -- Whole-document driver
//! - [`Conflict`] / [`ConflictLog`] -- Records accumulated during one run

pub mod conflict;
pub mod document_merger;
pub mod entry_merger;
pub mod error;

pub use conflict::{Conflict, ConflictLog};
pub use document_merger::{merge_three_way, ThreeWayDocumentMerger};
pub use entry_merger::{EntryMerge, EntryMerger};
pub use error::{MergeError, MergeResult};
