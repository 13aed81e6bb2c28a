use std::fmt;

use crate::http::request::RequestTarget;

const METHOD_PREFIX: &[u8] = b"GET /";
const VERSION_PREFIX: &[u8] = b"HTTP/1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The first line is not `GET /<path> HTTP/1...`
    NoMatch,
    /// Everything so far could still match; more bytes are needed
    Incomplete,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoMatch => write!(f, "request line does not match GET /<path> HTTP/1"),
            ParseError::Incomplete => write!(f, "request line incomplete"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Extracts the requested path from the first line of `buf`.
///
/// Recognises `GET /`, then any run of bytes other than space, CR or LF
/// (possibly empty), then a single space and `HTTP/1`. Whatever follows
/// `HTTP/1` on the line, and every later line, is ignored.
///
/// Returns `Incomplete` while `buf` is a strict prefix of a line that
/// could still match.
pub fn parse_request_line(buf: &[u8]) -> Result<RequestTarget<'_>, ParseError> {
    expect_literal(buf, 0, METHOD_PREFIX)?;

    let start = METHOD_PREFIX.len();
    let mut end = start;
    loop {
        match buf.get(end) {
            None => return Err(ParseError::Incomplete),
            Some(b' ') => break,
            Some(b'\r') | Some(b'\n') => return Err(ParseError::NoMatch),
            Some(_) => end += 1,
        }
    }

    expect_literal(buf, end + 1, VERSION_PREFIX)?;

    Ok(RequestTarget::new(buf, start, end))
}

/// Incremental completeness check over a growing receive buffer.
///
/// Path bytes are examined once, so total work stays linear in the bytes
/// received.
#[derive(Debug, Default)]
pub struct RequestLineScanner {
    /// Bytes of the path token already known to hold no delimiter
    scanned: usize,
    /// A space, CR or LF has been seen after the method prefix
    delimited: bool,
}

impl RequestLineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `buf` already decides the result of `parse_request_line`.
    ///
    /// `buf` must be the same buffer passed to earlier calls, only ever
    /// extended at the end.
    pub fn is_complete(&mut self, buf: &[u8]) -> bool {
        match expect_literal(buf, 0, METHOD_PREFIX) {
            Err(ParseError::Incomplete) => return false,
            Err(ParseError::NoMatch) => return true,
            Ok(()) => {}
        }

        if !self.delimited {
            let from = self.scanned.max(METHOD_PREFIX.len());
            if !buf[from..].iter().any(|b| matches!(b, b' ' | b'\r' | b'\n')) {
                self.scanned = buf.len();
                return false;
            }
            self.delimited = true;
        }

        // Only the version literal is left to arrive, at most a few more reads.
        parse_request_line(buf) != Err(ParseError::Incomplete)
    }
}

fn expect_literal(buf: &[u8], at: usize, literal: &[u8]) -> Result<(), ParseError> {
    let available = &buf[at.min(buf.len())..];
    let n = available.len().min(literal.len());

    if available[..n] != literal[..n] {
        return Err(ParseError::NoMatch);
    }
    if n < literal.len() {
        return Err(ParseError::Incomplete);
    }
    Ok(())
}
