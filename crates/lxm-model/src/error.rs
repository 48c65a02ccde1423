use std::path::PathBuf;

/// Errors from parsing, shaping, or version-checking a lexicon document.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The XML is not well-formed.
    #[error("xml syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An attribute could not be decoded.
    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The document contained no root element at all.
    #[error("document has no root element")]
    NoRootElement,

    /// The root element is not a recognized lexicon root.
    #[error("expected `{expected}` root element, found `{found}`")]
    UnexpectedRoot { expected: String, found: String },

    /// The root element carries no `version` attribute.
    #[error("{path}: not recognized as a lexicon file (missing version attribute)")]
    MissingVersion { path: PathBuf },

    /// The file declares a schema version this build does not support.
    ///
    /// This is the typed format error for validator/version mismatches,
    /// deliberately distinct from generic I/O failures.
    #[error("{path}: declares lexicon version {found}, but this build supports {expected}: {detail}")]
    VersionMismatch {
        path: PathBuf,
        expected: String,
        found: String,
        detail: String,
    },

    /// An external validator rejected the document.
    #[error("{path}: failed validation: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    /// An I/O error while reading or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
