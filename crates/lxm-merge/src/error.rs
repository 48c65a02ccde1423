/// Errors from three-way document merge.
///
/// Field-level conflicts are not errors; they are recorded and the merge
/// completes. Only malformed input stops a run.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// One of the three input documents could not be parsed.
    #[error("document error: {0}")]
    Model(#[from] lxm_model::ModelError),
}

/// Result alias for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
