//! Error types for reading poetry input

/// Error type for reading poetry documents
///
/// Extraction itself never fails. These cover getting text in the first
/// place.
#[derive(Debug, thiserror::Error)]
pub enum PoetryError {
    /// Reading from the source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not UTF-8
    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type for poetry operations
pub type Result<T> = std::result::Result<T, PoetryError>;
