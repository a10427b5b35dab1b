//! Host command: checksum local files.

use anyhow::Result;
use devsum_core::checksum::{ChecksumLayout, HostChecksumCalculator};
use devsum_core::exec::ProcessExecutor;

use super::report::print_checksums;

/// Compute and print checksums of the given host paths.
pub fn run_host(layout: &ChecksumLayout, paths: Vec<String>) -> Result<()> {
    let calc = HostChecksumCalculator::new(ProcessExecutor, layout.clone());
    let sums = calc.compute(paths.as_slice())?;
    print_checksums(&paths, &sums)?;
    Ok(())
}
