//! Bounds-checked buffer reader.
//!
//! A region is a borrowed byte slice together with the length the caller
//! claims is valid. Output always covers the half-open range `[0, len)`;
//! index `len` is never read.

use crate::error::{Error, Result};
use crate::hazard::Hazard;
use serde::Deserialize;
use std::io::Write;
use tracing::{debug, warn};

pub const HAZARD: Hazard = Hazard::OutOfBoundsRead;

/// What to do when the declared length runs past the end of the region.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverreadPolicy {
    /// Fail with [`Error::BufferOverread`] before writing anything.
    #[default]
    Reject,
    /// Write only the bytes the region actually holds.
    Clamp,
}

/// A caller-owned span of bytes plus its declared length.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    bytes: &'a [u8],
    declared: usize,
}

impl<'a> Region<'a> {
    pub fn new(bytes: &'a [u8], declared: usize) -> Self {
        Self { bytes, declared }
    }

    /// Build a region, rejecting a declared length the slice cannot back.
    pub fn checked(bytes: &'a [u8], declared: usize) -> Result<Self> {
        if declared > bytes.len() {
            return Err(Error::overread(declared, bytes.len()));
        }
        Ok(Self { bytes, declared })
    }

    /// Declared length, which may exceed the backing slice.
    pub fn len(&self) -> usize {
        self.declared
    }

    pub fn is_empty(&self) -> bool {
        self.declared == 0
    }

    pub fn is_valid(&self) -> bool {
        self.declared <= self.bytes.len()
    }

    /// The valid prefix: at most `len()` bytes, never past the slice end.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[..self.declared.min(self.bytes.len())]
    }

    pub fn write_to<W: Write>(&self, out: &mut W, policy: OverreadPolicy) -> Result<usize> {
        read_buffer(out, self.bytes, self.declared, policy)
    }
}

/// Write the first `len` bytes of `region` to `out`, one character at a time.
///
/// Returns the number of bytes written. With [`OverreadPolicy::Reject`] an
/// oversized `len` is an error and nothing is written; with
/// [`OverreadPolicy::Clamp`] only `region.len()` bytes are written.
pub fn read_buffer<W: Write>(
    out: &mut W,
    region: &[u8],
    len: usize,
    policy: OverreadPolicy,
) -> Result<usize> {
    let available = region.len();
    let count = if len <= available {
        len
    } else {
        match policy {
            OverreadPolicy::Reject => return Err(Error::overread(len, available)),
            OverreadPolicy::Clamp => {
                warn!(len, available, "declared length exceeds region, clamping");
                available
            }
        }
    };

    for &byte in &region[..count] {
        out.write_all(&[byte])?;
    }
    out.flush()?;

    debug!(count, "buffer written");
    Ok(count)
}

/// [`read_buffer`] to stdout with the default policy.
pub fn print_buffer(region: &[u8], len: usize) -> Result<usize> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    read_buffer(&mut lock, region, len, OverreadPolicy::default())
}
