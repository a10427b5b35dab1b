//! Tolerant parser for checksum binary output.
//!
//! A valid line is `<32 lowercase hex><spaces or tabs><path>`. Everything
//! else (linker warnings, "could not open" diagnostics, blank lines) is
//! dropped so that noise from the remote shell never masks good results.

use super::ChecksumMap;

/// Length of an MD5 digest in hex characters.
pub const DIGEST_LEN: usize = 32;

/// One successfully parsed output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumEntry {
    pub digest: String,
    pub path: String,
}

/// Parse a single line; `None` when it is not a checksum line.
///
/// A trailing `\r` (adb shells emit CRLF) is not part of the path.
pub fn parse_line(line: &str) -> Option<ChecksumEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let bytes = line.as_bytes();
    if bytes.len() <= DIGEST_LEN {
        return None;
    }
    if !bytes[..DIGEST_LEN]
        .iter()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    {
        return None;
    }

    // First DIGEST_LEN bytes are ASCII, so this is a char boundary.
    let (digest, rest) = line.split_at(DIGEST_LEN);
    let path = rest.trim_start_matches([' ', '\t']);
    if path.len() == rest.len() || path.is_empty() {
        return None;
    }

    Some(ChecksumEntry {
        digest: digest.to_string(),
        path: path.to_string(),
    })
}

/// Parse a sequence of lines. Later lines for the same path win.
pub fn parse_lines<I, S>(lines: I) -> ChecksumMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref();
            let entry = parse_line(line);
            if entry.is_none() && !line.trim().is_empty() {
                tracing::trace!("ignoring non-checksum line: {}", line);
            }
            entry
        })
        .map(|entry| (entry.path, entry.digest))
        .collect()
}

/// Parse raw multi-line output text.
pub fn parse_output(text: &str) -> ChecksumMap {
    parse_lines(text.lines())
}
