//! Error types for page builds

use pagebake_template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building pages
///
/// Every per-page variant carries the data file name so diagnostics point
/// at the page that failed.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Failed to list the data directory
    #[error("failed to list data directory {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a data or template file
    #[error("{file} : failed to read {}: {source}", path.display())]
    FileAccess {
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON object
    #[error("{file} : invalid JSON data: {source}")]
    DataFormat {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// Template failed to compile or render
    #[error("{file} : {source}")]
    Template {
        file: String,
        #[source]
        source: TemplateError,
    },

    /// Failed to create the output directory
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rendered page
    #[error("{file} : failed to write {}: {source}", path.display())]
    Output {
        file: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// Whether the page can be skipped without stopping the run
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BuildError::FileAccess { .. })
    }

    /// Data file the error belongs to, if it is a per-page error
    pub fn file_name(&self) -> Option<&str> {
        match self {
            BuildError::FileAccess { file, .. }
            | BuildError::DataFormat { file, .. }
            | BuildError::Template { file, .. }
            | BuildError::Output { file, .. } => Some(file),
            BuildError::ListDir { .. } | BuildError::CreateOutputDir { .. } => None,
        }
    }
}
