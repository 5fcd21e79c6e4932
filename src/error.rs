use thiserror::Error;

/// Errors surfaced by quickopen.
///
/// A candidate that does not match is not an error; it is simply left out of
/// the results.
#[derive(Debug, Error)]
pub enum QuickOpenError {
    /// The worker pool could not be started.
    #[error("failed to start the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Reading the corpus failed.
    #[error("failed to read the corpus: {0}")]
    Io(#[from] std::io::Error),
    /// The options do not describe a usable configuration.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = QuickOpenError> = std::result::Result<T, E>;
