//! Command-execution collaborators used by the calculators.
//!
//! The calculators only see these traits; `ProcessExecutor` and `AdbTarget`
//! are the production implementations.

mod adb;
mod process;

use std::path::Path;

use crate::checksum::ChecksumError;

pub use adb::AdbTarget;
pub use process::ProcessExecutor;

/// Runs a local program and returns its captured stdout.
pub trait LocalExecutor {
    /// `argv[0]` is the program. Fails with `ChecksumError::Execution` on
    /// launch failure or non-zero exit.
    fn run(&self, argv: &[String]) -> Result<String, ChecksumError>;
}

/// A device reachable through a shell-command channel.
pub trait RemoteTarget {
    /// Run `command` in the target's shell and return its stdout lines.
    /// A non-zero exit becomes `ChecksumError::RemoteCommandFailed`.
    fn run_shell_command(&self, command: &str) -> Result<Vec<String>, ChecksumError>;

    /// Copy the contents of `local_dir` into `remote_dir` on the target.
    /// Fails with `ChecksumError::Deployment`.
    fn push(&self, local_dir: &Path, remote_dir: &str) -> Result<(), ChecksumError>;
}

impl<T: LocalExecutor + ?Sized> LocalExecutor for &T {
    fn run(&self, argv: &[String]) -> Result<String, ChecksumError> {
        (**self).run(argv)
    }
}

impl<T: RemoteTarget + ?Sized> RemoteTarget for &T {
    fn run_shell_command(&self, command: &str) -> Result<Vec<String>, ChecksumError> {
        (**self).run_shell_command(command)
    }

    fn push(&self, local_dir: &Path, remote_dir: &str) -> Result<(), ChecksumError> {
        (**self).push(local_dir, remote_dir)
    }
}

/// Quote `s` for a POSIX shell, leaving plain paths untouched.
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./,:@%+=".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}
