//! Error taxonomy for Colab operations
//!
//! Every failure a command can hit is one of these variants; `main` renders
//! the message and maps the variant to a distinct non-zero exit code.

use std::path::PathBuf;
use thiserror::Error;

use super::settings::ConfigKey;

#[derive(Debug, Error)]
pub enum ColabError {
    /// Config key outside the fixed key set
    #[error("unknown configuration key '{0}' (valid keys: {valid})", valid = ConfigKey::VALID_KEYS)]
    UnknownKey(String),

    /// Target notebook path does not exist locally
    #[error("notebook not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file exists but is not valid JSON
    #[error("configuration file is corrupt: {}", .path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No notebook ID could be extracted from a Colab URL
    #[error("could not extract a notebook ID from '{0}'")]
    MalformedUrl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ColabError {
    /// Process exit code for this failure kind
    pub fn exit_code(&self) -> i32 {
        match self {
            ColabError::UnknownKey(_) => 2,
            ColabError::NotFound(_) => 3,
            ColabError::StorageCorrupt { .. } => 4,
            ColabError::MalformedUrl(_) => 5,
            ColabError::Io(_) => 1,
        }
    }
}
