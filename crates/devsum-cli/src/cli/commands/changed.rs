//! Changed command: list host files whose device copy needs a push.

use anyhow::Result;
use devsum_core::checksum::{ChecksumLayout, DeviceChecksumCalculator, HostChecksumCalculator};
use devsum_core::compare::{changed_files, FilePair};
use devsum_core::exec::{AdbTarget, ProcessExecutor};

pub fn run_changed(layout: &ChecksumLayout, target: &AdbTarget, pairs: &[FilePair]) -> Result<()> {
    let host = HostChecksumCalculator::new(ProcessExecutor, layout.clone());
    let device = DeviceChecksumCalculator::new(layout.clone());
    let changed = changed_files(&host, &device, target, pairs)?;

    tracing::info!("{} of {} files need a push", changed.len(), pairs.len());
    for pair in &changed {
        println!("{}:{}", pair.host, pair.device);
    }
    Ok(())
}
