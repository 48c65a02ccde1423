use std::path::PathBuf;

/// Errors from the synchronic merge.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The reserved base file does not exist in the target directory.
    #[error("base file not found: {0}")]
    BaseFileMissing(PathBuf),

    /// The base or a sidecar could not be parsed.
    #[error("document error: {0}")]
    Model(#[from] lxm_model::ModelError),

    /// The merged result could not be moved over the base file.
    #[error("failed to replace base file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// An I/O error while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for synchronic merge operations.
pub type SyncResult<T> = Result<T, SyncError>;
