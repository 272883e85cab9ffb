use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Everything that can stop a scaffold run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("path '{0}' already exists")]
    DestinationExists(Utf8PathBuf),

    #[error("unsupported template '{requested}'. Supported: [{supported}]")]
    UnsupportedTemplate { requested: String, supported: String },

    #[error("cannot derive a project name from '{0}'")]
    InvalidProjectName(Utf8PathBuf),

    #[error("embedded template `{0}` missing")]
    MissingAsset(String),

    #[error("decoding embedded template `{name}`")]
    InvalidAsset {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("failed to create directory {path}")]
    DirectoryCreationFailed {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file {path}")]
    FileWriteFailed {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
