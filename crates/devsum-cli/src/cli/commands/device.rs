//! Device command: checksum files on the device.

use anyhow::Result;
use devsum_core::checksum::{ChecksumLayout, DeviceChecksumCalculator};
use devsum_core::exec::AdbTarget;

use super::report::print_checksums;

/// Compute and print checksums of the given device paths.
pub fn run_device(layout: &ChecksumLayout, target: &AdbTarget, paths: Vec<String>) -> Result<()> {
    let calc = DeviceChecksumCalculator::new(layout.clone());
    let sums = calc.compute(paths.as_slice(), target)?;
    print_checksums(&paths, &sums)?;
    Ok(())
}
