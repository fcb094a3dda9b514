//! Growable, NUL-terminated byte string used to build every report.
//!
//! Overview
//! - A [`ByteBuffer`] owns exactly one heap allocation. The allocation is a
//!   `Vec<u8>` whose *length* is the logical capacity, so every byte up to the
//!   capacity is initialized and the terminator can be written in place.
//! - The string occupies `buf[..len]` and `buf[len]` is always `0`, so the
//!   whole allocation can be handed to consumers that expect a C string.
//!
//! Capacity policy
//! - The capacity never drops below [`MIN_CAPACITY`].
//! - Growing past the capacity reallocates to
//!   `max(required_len + 1, capacity * 2)`, which keeps repeated appends
//!   amortized linear.
//! - Truncating below half of the capacity (when the capacity is above the
//!   minimum) reallocates to `max(MIN_CAPACITY, capacity / 2)`.
//!
//! Every allocation goes through `Vec::try_reserve_exact`, so allocation
//! failure is reported as [`ReportError::OutOfMemory`] instead of aborting.

use alloc::vec::Vec;
use core::fmt;

use bstr::{BStr, ByteSlice};

use crate::error::ReportError;

/// Smallest capacity a buffer is ever allocated with.
pub const MIN_CAPACITY: usize = 16;

/// An owned byte string that is always NUL-terminated.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    buf: Vec<u8>,
    len: usize,
}

/// Fails on the first NUL in `bytes`; the terminator must stay the only one.
fn reject_nul(bytes: &[u8]) -> Result<(), ReportError> {
    match bytes.find_byte(0) {
        Some(position) => Err(ReportError::InteriorNul { position }),
        None => Ok(()),
    }
}

fn allocate(capacity: usize) -> Result<Vec<u8>, ReportError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| ReportError::out_of_memory(capacity))?;
    buf.resize(capacity, 0);
    Ok(buf)
}

impl ByteBuffer {
    /// Creates an empty buffer with room for at least `capacity` bytes
    /// (terminator included).
    pub fn with_capacity(capacity: usize) -> Result<Self, ReportError> {
        Ok(Self {
            buf: allocate(capacity.max(MIN_CAPACITY))?,
            len: 0,
        })
    }

    /// Creates an empty buffer with the minimum capacity.
    pub fn new() -> Result<Self, ReportError> {
        Self::with_capacity(0)
    }

    /// Creates a buffer holding a copy of `text`.
    pub fn from_text(text: &str) -> Result<Self, ReportError> {
        let bytes = text.as_bytes();
        reject_nul(bytes)?;
        let capacity = bytes
            .len()
            .checked_add(1)
            .ok_or(ReportError::out_of_memory(usize::MAX))?;
        let mut out = Self::with_capacity(capacity)?;
        out.buf[..bytes.len()].copy_from_slice(bytes);
        out.len = bytes.len();
        Ok(out)
    }

    /// Length of the string, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the backing allocation, terminator included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The string content without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The string content followed by its NUL terminator.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    #[inline]
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }

    /// Last byte of the string, if any.
    #[inline]
    pub fn last_byte(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// Resizes the string to `new_len` bytes.
    ///
    /// New bytes are set to `fill`. With `None` they are left as whatever the
    /// allocation already held, for callers that overwrite them immediately.
    /// Shrinking may release part of the allocation. Filling with `0` is
    /// rejected.
    pub fn resize(&mut self, new_len: usize, fill: Option<u8>) -> Result<(), ReportError> {
        if fill == Some(0) && new_len > self.len {
            return Err(ReportError::InteriorNul { position: self.len });
        }
        let required = new_len
            .checked_add(1)
            .ok_or(ReportError::out_of_memory(usize::MAX))?;

        if required > self.capacity() {
            let new_capacity = required.max(self.capacity().saturating_mul(2));
            let mut new_buf = allocate(new_capacity)?;
            new_buf[..self.len].copy_from_slice(self.as_bytes());
            if let Some(fill) = fill {
                new_buf[self.len..new_len].fill(fill);
            }
            self.buf = new_buf;
        } else if new_len < self.len {
            let capacity = self.capacity();
            if capacity > MIN_CAPACITY && new_len < capacity / 2 {
                let mut new_buf = allocate(MIN_CAPACITY.max(capacity / 2))?;
                new_buf[..new_len].copy_from_slice(&self.buf[..new_len]);
                self.buf = new_buf;
            }
        } else if new_len > self.len {
            if let Some(fill) = fill {
                self.buf[self.len..new_len].fill(fill);
            }
        }

        self.buf[new_len] = 0;
        self.len = new_len;
        Ok(())
    }

    /// Appends raw bytes. Bytes containing a NUL are rejected and leave the
    /// buffer unchanged.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), ReportError> {
        if bytes.is_empty() {
            return Ok(());
        }
        reject_nul(bytes)?;
        let start = self.len;
        let end = start
            .checked_add(bytes.len())
            .ok_or(ReportError::out_of_memory(usize::MAX))?;
        self.resize(end, None)?;
        self.buf[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Appends the whole content of `other`.
    pub fn append(&mut self, other: &ByteBuffer) -> Result<(), ReportError> {
        self.append_bytes(other.as_bytes())
    }

    /// Appends up to `len` bytes of `other`, starting at `offset`.
    ///
    /// Reading is clamped to the end of `other`; an offset at or past its end
    /// appends nothing.
    pub fn append_slice(
        &mut self,
        other: &ByteBuffer,
        offset: usize,
        len: usize,
    ) -> Result<(), ReportError> {
        let Some(tail) = other.as_bytes().get(offset..) else {
            return Ok(());
        };
        self.append_bytes(&tail[..len.min(tail.len())])
    }

    pub fn append_str(&mut self, text: &str) -> Result<(), ReportError> {
        self.append_bytes(text.as_bytes())
    }

    /// Appends formatted text, e.g. `buf.append_fmt(format_args!("{v:.6}"))`.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), ReportError> {
        let mut writer = Writer {
            buf: self,
            error: None,
        };
        match fmt::write(&mut writer, args) {
            Ok(()) => Ok(()),
            // `fmt::Error` carries no payload; the allocation error is
            // stashed on the writer.
            Err(fmt::Error) => Err(writer
                .error
                .unwrap_or(ReportError::out_of_memory(usize::MAX))),
        }
    }

    /// Position of the first `needle` at or after `from`.
    pub fn find_byte(&self, needle: u8, from: usize) -> Option<usize> {
        let tail = self.as_bytes().get(from..)?;
        tail.find_byte(needle).map(|at| at + from)
    }

    /// Whether the content contains `needle` as a substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.as_bytes().contains_str(needle)
    }

    /// Releases the allocation. Equivalent to dropping the buffer.
    pub fn release(self) {}
}

struct Writer<'a> {
    buf: &'a mut ByteBuffer,
    error: Option<ReportError>,
}

impl fmt::Write for Writer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.append_str(s).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}
