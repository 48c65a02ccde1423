//! Document model for structured lexicon files.
//!
//! A lexicon document is an XML file with one `entry` element per lexeme.
//! This crate provides the shared tree model both merge engines operate on:
//! a generic element tree parsed fresh per invocation, typed accessors for
//! the recognized lexicon shapes (entries, senses, forms), an id-keyed
//! entry index, and version inspection with typed format errors.
//!
//! # Key Types
//!
//! - [`Element`] / [`Node`] -- Generic XML tree with pass-through attributes
//! - [`Document`] -- A parsed lexicon file (root element + entries)
//! - [`EntryIndex`] -- One-pass key -> entry lookup over a document
//! - [`ModelError`] -- Parse, shape, and version errors

pub mod document;
pub mod error;
pub mod index;
pub mod node;
pub mod reader;
pub mod version;
pub mod writer;

pub use document::{entry_key, Document};
pub use error::{ModelError, ModelResult};
pub use index::EntryIndex;
pub use node::{Element, Node};
pub use reader::parse_root;
pub use version::{check_document, check_version, document_version, Validate, SUPPORTED_VERSION};
pub use writer::{write_document, write_fragment};

/// Recognized element and attribute names.
pub mod names {
    /// Root element of a lexicon document.
    pub const ROOT: &str = "lift";
    /// Top-level lexeme record.
    pub const ENTRY: &str = "entry";
    /// Meaning unit nested in an entry.
    pub const SENSE: &str = "sense";
    /// The entry's citation form (a multitext).
    pub const LEXICAL_UNIT: &str = "lexical-unit";
    /// Part-of-speech marker (single `value` attribute).
    pub const GRAMMATICAL_INFO: &str = "grammatical-info";
    /// Language-keyed translation of a sense.
    pub const GLOSS: &str = "gloss";
    /// Usage example (no identity key).
    pub const EXAMPLE: &str = "example";
    /// Language-keyed text inside a multitext.
    pub const FORM: &str = "form";

    /// Entry/sense identifier attribute.
    pub const ATTR_ID: &str = "id";
    /// Stable identifier; preferred over `id` as the matching key.
    pub const ATTR_GUID: &str = "guid";
    /// Language key on `form` and `gloss`.
    pub const ATTR_LANG: &str = "lang";
    /// Value of `grammatical-info`.
    pub const ATTR_VALUE: &str = "value";
    /// Schema version declared on the root element.
    pub const ATTR_VERSION: &str = "version";
}
