//! Output buffers exchanged between the host and a generator.
//!
//! This module provides:
//! - [`ReadBuffer`] trait for read-only buffer access
//! - [`OutputBuffer`], the fixed-capacity buffer a generator fills
//! - [`GeneratorOutput`], the output slot plus reported byte count

use crate::error::{Error, Result};

/// Trait for read-only buffer access.
pub trait ReadBuffer {
    /// Returns the valid bytes of the buffer.
    fn as_slice(&self) -> &[u8];

    /// Returns the length of the buffer in bytes.
    fn len(&self) -> usize;

    /// Returns true if the buffer is empty.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Buffer allocated by a generator and handed back to the host.
///
/// The capacity is fixed when the buffer is created; later writes may shrink
/// the valid region but never grow past the original allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    data: Box<[u8]>,
    len: usize,
}

impl OutputBuffer {
    /// Creates a buffer whose capacity and contents are exactly `bytes`.
    #[must_use]
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            data: bytes.into_boxed_slice(),
            len,
        }
    }

    /// Creates a zeroed buffer of the given capacity with no valid bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the capacity of the buffer in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Copies the first `count` bytes of the allocation into an owned vector.
    ///
    /// The count is the one the generator reported, which is trusted only as
    /// far as the allocation reaches.
    ///
    /// # Errors
    /// Returns `BufferTooShort` if `count` exceeds the capacity.
    pub fn copy_prefix(&self, count: usize) -> Result<Vec<u8>> {
        if count > self.capacity() {
            return Err(Error::BufferTooShort {
                required: count,
                available: self.capacity(),
            });
        }
        Ok(self.data[..count].to_vec())
    }

    /// Replaces the contents starting at offset zero.
    ///
    /// Nothing is written unless all of `bytes` fits in the capacity.
    ///
    /// # Errors
    /// Returns `OutputOverflow` if `bytes` is larger than the capacity.
    pub fn overwrite(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.capacity() {
            return Err(Error::OutputOverflow {
                required: bytes.len(),
                capacity: self.capacity(),
            });
        }
        self.data[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        Ok(())
    }
}

impl ReadBuffer for OutputBuffer {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

impl AsRef<[u8]> for OutputBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for OutputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Output slot passed to a generator: the buffer it allocates and the byte
/// count it reports.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneratorOutput {
    contents: Option<OutputBuffer>,
    byte_count: u32,
}

impl GeneratorOutput {
    /// Creates an empty output slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an output slot from a buffer and an explicitly reported count.
    #[must_use]
    pub fn from_parts(contents: Option<OutputBuffer>, byte_count: u32) -> Self {
        Self {
            contents,
            byte_count,
        }
    }

    /// Stores a freshly allocated buffer and reports its full length.
    ///
    /// # Errors
    /// Returns `OutputOverflow` if the buffer is longer than `u32::MAX` bytes.
    pub fn fill(&mut self, bytes: Vec<u8>) -> Result<()> {
        let byte_count = u32::try_from(bytes.len()).map_err(|_| Error::OutputOverflow {
            required: bytes.len(),
            capacity: u32::MAX as usize,
        })?;
        self.contents = Some(OutputBuffer::from_vec(bytes));
        self.byte_count = byte_count;
        Ok(())
    }

    /// Returns the buffer, if the generator allocated one.
    #[must_use]
    pub fn contents(&self) -> Option<&OutputBuffer> {
        self.contents.as_ref()
    }

    /// Returns the buffer mutably, if the generator allocated one.
    pub fn contents_mut(&mut self) -> Option<&mut OutputBuffer> {
        self.contents.as_mut()
    }

    /// Returns the byte count reported by the generator.
    #[must_use]
    pub fn byte_count(&self) -> u32 {
        self.byte_count
    }

    /// Sets the reported byte count.
    pub fn set_byte_count(&mut self, byte_count: u32) {
        self.byte_count = byte_count;
    }

    /// Returns the reported bytes, or `None` when there is nothing to read.
    ///
    /// # Errors
    /// Returns `BufferTooShort` if the reported count exceeds the buffer.
    pub fn reported_bytes(&self) -> Result<Option<Vec<u8>>> {
        match &self.contents {
            Some(buffer) if self.byte_count > 0 => {
                buffer.copy_prefix(self.byte_count as usize).map(Some)
            }
            _ => Ok(None),
        }
    }
}
