use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for relayhub-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the relay hub
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Clipboard access errors
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Export file errors
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors raised by a clipboard backend
///
/// Both read and write failures are reported to the user once and never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display server)
    #[error("clipboard not available: {0}")]
    Unavailable(String),

    /// Reading the clipboard failed
    #[error("could not read clipboard: {0}")]
    Read(String),

    /// Writing the clipboard failed
    #[error("could not write clipboard: {0}")]
    Write(String),
}

/// Errors raised while writing an export file
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or written
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The destination directory does not exist
    #[error("directory does not exist: {0}")]
    MissingDirectory(PathBuf),
}
