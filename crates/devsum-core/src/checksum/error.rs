//! Error taxonomy for checksum calculation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecksumError {
    /// Build output directory, host binary or device bundle could not be resolved.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The local checksum executable could not be launched or exited non-zero.
    #[error("local command {program} failed: {reason}")]
    Execution { program: String, reason: String },

    /// A shell command on the remote target exited non-zero.
    #[error("remote command `{command}` failed with exit status {exit_code}")]
    RemoteCommandFailed {
        command: String,
        exit_code: i32,
        output: Vec<String>,
    },

    /// Pushing the checksum bundle to the remote target failed.
    #[error("deploying {} to {remote} failed: {reason}", .local.display())]
    Deployment {
        local: PathBuf,
        remote: String,
        reason: String,
    },
}
