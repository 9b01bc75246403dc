//! Error kinds raised by the extraction and catalog pipeline.
//!
//! Every variant carries the offending path so the build step can report
//! exactly which file or directory failed.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A registered scan directory does not exist or cannot be walked.
    #[error("Cannot resolve scan directory {}: {source}", path.display())]
    ScopeResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A compiled catalog is absent or cannot be parsed.
    #[error("Could not load compiled catalog {}: {reason}", path.display())]
    MissingCatalog { path: PathBuf, reason: String },

    /// The conversion destination cannot be created or written.
    #[error("Could not write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A textual translation file cannot be parsed or compiled.
    #[error("Could not compile {}: {reason}", path.display())]
    Compile { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn missing_catalog(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MissingCatalog {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
