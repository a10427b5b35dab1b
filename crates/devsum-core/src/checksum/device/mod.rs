//! Checksums on a remote device, deploying the checksum binary on demand.

mod classify;
mod state;

use tracing::{debug, info, warn};

use super::parse::parse_lines;
use super::{ChecksumError, ChecksumLayout, ChecksumMap, PathSet};
use crate::exec::{shell_quote, RemoteTarget};

pub use classify::{classify_failure, FailureKind};
pub use state::{Attempt, AttemptDecision};

/// Computes digests of device paths through a `RemoteTarget`.
///
/// Every call issues one shell command covering all paths. If the target
/// reports the checksum binary as missing, the bundle from the build output
/// directory is pushed to the install directory and the command is re-issued
/// once. Per call: at most two shell commands and one push.
#[derive(Debug, Clone, Default)]
pub struct DeviceChecksumCalculator {
    layout: ChecksumLayout,
}

impl DeviceChecksumCalculator {
    pub fn new(layout: ChecksumLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ChecksumLayout {
        &self.layout
    }

    /// Shell command hashing every path in `paths` in one invocation.
    pub fn command_for(&self, paths: &PathSet) -> String {
        let install_dir = self.layout.device_install_dir();
        let mut command = format!(
            "LD_LIBRARY_PATH={} {}",
            shell_quote(&install_dir),
            shell_quote(&self.layout.device_binary_path())
        );
        for path in paths {
            command.push(' ');
            command.push_str(&shell_quote(path));
        }
        command
    }

    pub fn compute<T>(
        &self,
        paths: impl Into<PathSet>,
        target: &T,
    ) -> Result<ChecksumMap, ChecksumError>
    where
        T: RemoteTarget + ?Sized,
    {
        let paths = paths.into();
        if paths.is_empty() {
            return Ok(ChecksumMap::new());
        }

        let command = self.command_for(&paths);
        let mut attempt = Attempt::default();
        loop {
            debug!(?attempt, paths = paths.len(), "device checksum");
            let err = match target.run_shell_command(&command) {
                Ok(lines) => {
                    let map = parse_lines(&lines);
                    debug!(requested = paths.len(), hashed = map.len(), "device checksum done");
                    return Ok(map);
                }
                Err(err) => err,
            };

            let kind = classify_failure(&err, &self.layout.missing_binary_exit_codes);
            match attempt.decide(kind) {
                AttemptDecision::GiveUp => return Err(err),
                AttemptDecision::DeployAndRetry => {
                    warn!("device checksum binary missing ({}); deploying", err);
                    self.deploy(target)?;
                    attempt = Attempt::Retried;
                }
            }
        }
    }

    fn deploy<T>(&self, target: &T) -> Result<(), ChecksumError>
    where
        T: RemoteTarget + ?Sized,
    {
        let bundle = self.layout.device_bundle_path()?;
        let install_dir = self.layout.device_install_dir();
        info!("pushing {} to {}", bundle.display(), install_dir);
        target.push(&bundle, &install_dir)
    }
}
