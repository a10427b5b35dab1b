//! Shared output formatting for checksum commands.

use devsum_core::checksum::ChecksumMap;
use std::io::{self, Write};

/// Write `<digest>  <path>` in request order; requested paths without a digest
/// go to `missing` as `missing: <path>`.
pub fn write_checksums(
    requested: &[String],
    sums: &ChecksumMap,
    out: &mut impl Write,
    missing: &mut impl Write,
) -> io::Result<()> {
    for path in requested {
        match sums.get(path) {
            Some(digest) => writeln!(out, "{}  {}", digest, path)?,
            None => writeln!(missing, "missing: {}", path)?,
        }
    }
    Ok(())
}

/// `write_checksums` to stdout/stderr.
pub fn print_checksums(requested: &[String], sums: &ChecksumMap) -> io::Result<()> {
    write_checksums(
        requested,
        sums,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_present_and_missing() {
        let mut sums = ChecksumMap::new();
        sums.insert("/b".to_string(), "0123456789abcdeffedcba9876543210".to_string());
        let requested = vec!["/a".to_string(), "/b".to_string()];

        let mut out = Vec::new();
        let mut missing = Vec::new();
        write_checksums(&requested, &sums, &mut out, &mut missing).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0123456789abcdeffedcba9876543210  /b\n"
        );
        assert_eq!(String::from_utf8(missing).unwrap(), "missing: /a\n");
    }
}
