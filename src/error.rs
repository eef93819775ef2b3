//! Error types for sln2csproj
//!
//! Uses `thiserror` for library errors. Only conditions that abort a run
//! live here; a dependency that cannot be located is never an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for sln2csproj operations
pub type Sln2CsprojResult<T> = Result<T, Sln2CsprojError>;

/// Main error type for sln2csproj operations
#[derive(Error, Debug)]
pub enum Sln2CsprojError {
    /// The solution file given on the command line does not exist
    #[error("solution file not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// The solution contains no Web Site project entries
    #[error("no Website project found in {manifest} (is this a Web Site solution?)")]
    NoWebsiteProjects { manifest: PathBuf },

    /// A configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File system port failure
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
