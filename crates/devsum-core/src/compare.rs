//! Host vs. device change detection on top of the two calculators.

use std::fmt;
use std::str::FromStr;

use crate::checksum::{ChecksumError, DeviceChecksumCalculator, HostChecksumCalculator, PathSet};
use crate::exec::{LocalExecutor, RemoteTarget};

/// A host file and the device path it is deployed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub host: String,
    pub device: String,
}

impl FilePair {
    pub fn new(host: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            device: device.into(),
        }
    }
}

impl fmt::Display for FilePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.host, self.device)
    }
}

/// Parses `HOST:DEVICE`, splitting at the first `:`.
impl FromStr for FilePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((host, device)) if !host.is_empty() && !device.is_empty() => {
                Ok(FilePair::new(host, device))
            }
            _ => Err(format!("expected HOST:DEVICE, got '{s}'")),
        }
    }
}

/// Pairs whose device copy is missing or differs from the host file.
///
/// One batched invocation per side. A host file without a digest counts as
/// changed so the subsequent push surfaces the real problem.
pub fn changed_files<E, T>(
    host: &HostChecksumCalculator<E>,
    device: &DeviceChecksumCalculator,
    target: &T,
    pairs: &[FilePair],
) -> Result<Vec<FilePair>, ChecksumError>
where
    E: LocalExecutor,
    T: RemoteTarget + ?Sized,
{
    if pairs.is_empty() {
        return Ok(Vec::new());
    }

    let host_sums = host.compute(pairs.iter().map(|p| p.host.as_str()).collect::<PathSet>())?;
    let device_sums =
        device.compute(pairs.iter().map(|p| p.device.as_str()).collect::<PathSet>(), target)?;

    let changed: Vec<FilePair> = pairs
        .iter()
        .filter(|p| match host_sums.get(&p.host) {
            Some(digest) => device_sums.get(&p.device) != Some(digest),
            None => true,
        })
        .cloned()
        .collect();

    tracing::debug!(total = pairs.len(), changed = changed.len(), "compared host and device");
    Ok(changed)
}
