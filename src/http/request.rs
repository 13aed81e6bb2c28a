use std::ops::Range;

/// The requested path as it appears on the wire, still percent-encoded.
///
/// This is a view into the receive buffer: it borrows the buffer and
/// cannot outlive it. Copy it out with `percent_decode` when an owned
/// value is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTarget<'a> {
    raw: &'a [u8],
    start: usize,
    end: usize,
}

impl<'a> RequestTarget<'a> {
    pub(crate) fn new(raw: &'a [u8], start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= raw.len());
        Self { raw, start, end }
    }

    /// The encoded path bytes, without the leading `/`.
    pub fn encoded_path(&self) -> &'a [u8] {
        &self.raw[self.start..self.end]
    }

    /// Offsets of the path within the buffer it was parsed from.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
