use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while persisting a rendered log.
///
/// Only file output can fail. Everything else in the accumulator is total:
/// bad format names and write modes fall back to defaults, and bad type
/// patterns simply never match.
#[derive(Debug, Error)]
pub enum LogError {
    /// The target file could not be opened in the configured write mode.
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened but writing the rendered log failed.
    #[error("cannot write log file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LogError>;
