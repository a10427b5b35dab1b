//! Remote target backed by the `adb` command-line tool.
//!
//! `adb shell` does not reliably forward the remote exit status (older
//! devices always report 0), so every command is suffixed with an `echo` of
//! `$?` behind a marker and the status is read back from stdout.

use std::path::Path;
use std::process::{Command, Output, Stdio};

use super::RemoteTarget;
use crate::checksum::ChecksumError;
use crate::config::AdbConfig;

const STATUS_MARKER: &str = "__devsum_status:";

/// A device addressed through `adb [-s serial] ...`.
#[derive(Debug, Clone)]
pub struct AdbTarget {
    adb: String,
    serial: Option<String>,
}

impl AdbTarget {
    pub fn new(adb: impl Into<String>, serial: Option<String>) -> Self {
        Self {
            adb: adb.into(),
            serial,
        }
    }

    pub fn from_config(cfg: &AdbConfig) -> Self {
        Self::new(cfg.path.clone(), cfg.serial.clone())
    }

    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    fn adb_command(&self) -> Command {
        let mut cmd = Command::new(&self.adb);
        if let Some(serial) = &self.serial {
            cmd.arg("-s").arg(serial);
        }
        cmd.stdin(Stdio::null());
        cmd
    }

    fn spawn(&self, mut cmd: Command) -> Result<Output, ChecksumError> {
        cmd.output().map_err(|e| ChecksumError::Execution {
            program: self.adb.clone(),
            reason: format!("spawn: {e}"),
        })
    }
}

impl RemoteTarget for AdbTarget {
    fn run_shell_command(&self, command: &str) -> Result<Vec<String>, ChecksumError> {
        let mut cmd = self.adb_command();
        cmd.arg("shell").arg(with_status_marker(command));
        tracing::debug!("adb shell: {}", command);
        let output = self.spawn(cmd)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let (lines, status) = split_status(&stdout);
        let exit_code = match status {
            Some(code) => code,
            // adb itself failed (no device, connection dropped) or the shell died.
            None if !output.status.success() => output.status.code().unwrap_or(-1),
            None => -1,
        };

        if exit_code != 0 {
            let mut output_lines = lines;
            output_lines.extend(
                String::from_utf8_lossy(&output.stderr)
                    .lines()
                    .map(str::to_string),
            );
            return Err(ChecksumError::RemoteCommandFailed {
                command: command.to_string(),
                exit_code,
                output: output_lines,
            });
        }
        Ok(lines)
    }

    fn push(&self, local_dir: &Path, remote_dir: &str) -> Result<(), ChecksumError> {
        let mut cmd = self.adb_command();
        cmd.arg("push").arg(local_dir).arg(remote_dir);
        tracing::debug!("adb push {} {}", local_dir.display(), remote_dir);

        let output = cmd.output().map_err(|e| ChecksumError::Deployment {
            local: local_dir.to_path_buf(),
            remote: remote_dir.to_string(),
            reason: format!("spawn {}: {e}", self.adb),
        })?;
        if !output.status.success() {
            return Err(ChecksumError::Deployment {
                local: local_dir.to_path_buf(),
                remote: remote_dir.to_string(),
                reason: format!(
                    "{}: {}",
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(())
    }
}

fn with_status_marker(command: &str) -> String {
    format!("{command}; echo {STATUS_MARKER}$?")
}

/// Split shell stdout into output lines and the exit status echoed after
/// the marker. Line endings (`\n` or `\r\n`) are stripped.
fn split_status(stdout: &str) -> (Vec<String>, Option<i32>) {
    let mut lines: Vec<String> = stdout
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let Some(last) = lines.pop() else {
        return (lines, None);
    };
    match last.rfind(STATUS_MARKER) {
        Some(idx) => {
            let status = last[idx + STATUS_MARKER.len()..].trim().parse().ok();
            // Output without a trailing newline shares the marker's line.
            if idx > 0 {
                lines.push(last[..idx].to_string());
            }
            (lines, status)
        }
        None => {
            lines.push(last);
            (lines, None)
        }
    }
}
