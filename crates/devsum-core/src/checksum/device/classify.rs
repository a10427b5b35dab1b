//! Classify remote failures for the deploy-and-retry decision.

use crate::checksum::ChecksumError;

/// What a failed remote invocation means for the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The checksum binary is not installed on the target; pushing it may help.
    MissingBinary,
    /// Anything else. Not recoverable by deployment.
    Other,
}

/// Map an error from `RemoteTarget::run_shell_command` to a `FailureKind`.
///
/// Only `RemoteCommandFailed` with one of `missing_binary_exit_codes`
/// counts as a missing binary.
pub fn classify_failure(err: &ChecksumError, missing_binary_exit_codes: &[i32]) -> FailureKind {
    match err {
        ChecksumError::RemoteCommandFailed { exit_code, .. }
            if missing_binary_exit_codes.contains(exit_code) =>
        {
            FailureKind::MissingBinary
        }
        _ => FailureKind::Other,
    }
}
