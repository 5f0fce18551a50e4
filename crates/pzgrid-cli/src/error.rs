use std::{io, path::PathBuf};

use pzgrid_scheme::DecodeError;

/// Errors that end a `pzgrid` invocation.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// An input file or stdin could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was read, `-` for stdin.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A single puzzle failed to decode.
    #[display("{_0}")]
    Decode(#[from] DecodeError),
    /// Output could not be rendered as JSON.
    #[display("failed to render JSON: {_0}")]
    Render(#[from] serde_json::Error),
    /// The `--jobs` thread pool could not be started.
    #[display("failed to start worker threads: {_0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Every record of a non-empty batch failed.
    #[display("all {count} records failed")]
    AllFailed {
        /// Number of records in the batch.
        count: usize,
    },
}
