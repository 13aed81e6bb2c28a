use std::fmt;
use std::path::PathBuf;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Why a requested path could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// `%` followed by two bytes that are not both hex digits
    InvalidEscape { offset: usize },
    /// The decoded bytes are not valid UTF-8 (only on platforms whose
    /// file names must be Unicode)
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidEscape { offset } => {
                write!(f, "invalid percent-escape at byte {}", offset)
            }
            DecodeError::InvalidUtf8 => write!(f, "decoded path is not valid UTF-8"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes `%XX` escapes into a freshly allocated buffer.
///
/// A `%` needs two bytes after it to be treated as an escape. With fewer
/// remaining it is copied literally, as are the bytes that follow it.
/// The output is never longer than `raw`.
pub fn percent_decode(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut decoded = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        if raw[i] == b'%' && i + 2 < raw.len() {
            let hi = hex_value(raw[i + 1]);
            let lo = hex_value(raw[i + 2]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => decoded.push((hi << 4) | lo),
                _ => return Err(DecodeError::InvalidEscape { offset: i }),
            }
            i += 3;
        } else {
            decoded.push(raw[i]);
            i += 1;
        }
    }

    Ok(decoded)
}

/// Decodes the requested path into a file name.
///
/// On Unix any byte sequence is a valid file name. Elsewhere the decoded
/// bytes must be UTF-8.
pub fn decode_path(raw: &[u8]) -> Result<PathBuf, DecodeError> {
    let bytes = percent_decode(raw)?;
    bytes_to_path(bytes)
}

#[cfg(unix)]
fn bytes_to_path(bytes: Vec<u8>) -> Result<PathBuf, DecodeError> {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    Ok(PathBuf::from(OsString::from_vec(bytes)))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: Vec<u8>) -> Result<PathBuf, DecodeError> {
    String::from_utf8(bytes)
        .map(PathBuf::from)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Everything outside the RFC 3986 unreserved set, except `/`.
const PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Escapes `raw` for use as a request path.
///
/// `percent_decode(percent_encode(s).as_bytes())` always yields `s`.
pub fn percent_encode(raw: &[u8]) -> String {
    percent_encoding::percent_encode(raw, PATH_SET).to_string()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
