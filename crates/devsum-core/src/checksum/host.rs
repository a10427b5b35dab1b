//! Checksums of host files via the host checksum executable.

use tracing::debug;

use super::parse::parse_output;
use super::{ChecksumError, ChecksumLayout, ChecksumMap, PathSet};
use crate::exec::LocalExecutor;

/// Computes digests of local paths with one invocation of the host binary.
///
/// Local tooling is assumed reliable: there is no retry, and any executor
/// failure is returned as is.
#[derive(Debug, Clone)]
pub struct HostChecksumCalculator<E> {
    executor: E,
    layout: ChecksumLayout,
}

impl<E: LocalExecutor> HostChecksumCalculator<E> {
    pub fn new(executor: E, layout: ChecksumLayout) -> Self {
        Self { executor, layout }
    }

    pub fn layout(&self) -> &ChecksumLayout {
        &self.layout
    }

    pub fn compute(&self, paths: impl Into<PathSet>) -> Result<ChecksumMap, ChecksumError> {
        let paths = paths.into();
        if paths.is_empty() {
            return Ok(ChecksumMap::new());
        }

        let binary = self.layout.host_binary_path()?;
        let requested = paths.len();
        let mut argv = Vec::with_capacity(requested + 1);
        argv.push(binary.to_string_lossy().into_owned());
        argv.extend(paths.into_vec());

        debug!("host checksum: {} ({} paths)", binary.display(), requested);
        let output = self.executor.run(&argv)?;
        let map = parse_output(&output);
        debug!(requested, hashed = map.len(), "host checksum done");
        Ok(map)
    }
}
