use std::io;
use std::path::PathBuf;

use gb_cart::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage: gbheader <rom.gbc>")]
    Usage,

    #[error("error: {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },

    #[error("error: {0}")]
    Decode(#[from] DecodeError),
}

impl CliError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage => 2,
            CliError::Io { .. } | CliError::Decode(_) => 1,
        }
    }
}
