//! Key-value store error types.

/// Errors that can occur when reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Reading or writing the backing file failed
    #[error("storage I/O error: {message}")]
    Io { message: String },

    /// Stored data could not be (de)serialized
    #[error("JSON error: {message}")]
    Json { message: String },
}
