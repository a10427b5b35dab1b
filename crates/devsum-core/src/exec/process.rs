//! Local execution via `std::process::Command`.

use std::process::{Command, Stdio};

use super::LocalExecutor;
use crate::checksum::ChecksumError;

/// Runs programs on the host and captures stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl LocalExecutor for ProcessExecutor {
    fn run(&self, argv: &[String]) -> Result<String, ChecksumError> {
        let (program, args) = argv.split_first().ok_or_else(|| ChecksumError::Execution {
            program: String::new(),
            reason: "empty argument list".to_string(),
        })?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ChecksumError::Execution {
                program: program.clone(),
                reason: format!("spawn: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ChecksumError::Execution {
                program: program.clone(),
                reason: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
