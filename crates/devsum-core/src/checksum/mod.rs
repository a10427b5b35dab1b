//! Batched content checksums on the host and on a remote device.
//!
//! Both calculators issue a single invocation of a checksum binary covering
//! every requested path, then feed its output through the shared tolerant
//! parser. Paths the binary could not hash are absent from the result.

mod device;
mod error;
mod host;
mod layout;
mod parse;
mod path_set;

use std::collections::BTreeMap;

pub use device::{
    classify_failure, Attempt, AttemptDecision, DeviceChecksumCalculator, FailureKind,
};
pub use error::ChecksumError;
pub use host::HostChecksumCalculator;
pub use layout::ChecksumLayout;
pub use parse::{parse_line, parse_lines, parse_output, ChecksumEntry, DIGEST_LEN};
pub use path_set::PathSet;

/// Path → 32-char lowercase hex digest.
pub type ChecksumMap = BTreeMap<String, String>;
