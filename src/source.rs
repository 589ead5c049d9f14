//! Byte sources consumed by the decoder.
//!
//! The decoder reads from any random-access byte sequence through the
//! [`ByteSource`] trait: a known total length plus reads of N bytes at a
//! given offset. In-memory slices implement it directly (used by tests and
//! callers that already hold the file bytes); [`FileSource`] is the
//! path-opening wrapper, so path resolution and file lifecycle stay out of
//! the decode logic entirely.

use crate::error::Result;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// File size at or above which [`FileSource::open`] memory-maps the file
/// instead of reading it into memory.
pub const MMAP_THRESHOLD: u64 = 50 * 1024 * 1024;

/// A random-access sequence of bytes with a known total length.
///
/// Reads never fail: a read past the end of the data copies fewer bytes
/// than requested, and the caller decides what a short read means.
pub trait ByteSource {
    /// Total number of bytes in the source.
    fn len(&self) -> u64;

    /// Whether the source contains no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy up to `buf.len()` bytes starting at `offset` into `buf`,
    /// returning the number of bytes copied.
    fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize;
}

impl ByteSource for [u8] {
    fn len(&self) -> u64 {
        <[u8]>::len(self) as u64
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize {
        let len = <[u8]>::len(self);
        let Ok(offset) = usize::try_from(offset) else {
            return 0;
        };
        if offset >= len {
            return 0;
        }
        let n = buf.len().min(len - offset);
        buf[..n].copy_from_slice(&self[offset..offset + n]);
        n
    }
}

/// File-backed byte source.
///
/// Created by [`FileSource::open`]. Small files are read into memory up
/// front; files at or above [`MMAP_THRESHOLD`] are memory-mapped.
pub struct FileSource {
    data: FileData,
}

enum FileData {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl FileSource {
    /// Open the file at `path` as a byte source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use splice::FileSource;
    ///
    /// # fn main() -> splice::Result<()> {
    /// let source = FileSource::open("pattern_1.splice")?;
    /// let pattern = splice::decode(&source)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let size = std::fs::metadata(path)?.len();

        let data = if size >= MMAP_THRESHOLD {
            let file = File::open(path)?;
            let mmap = unsafe { Mmap::map(&file)? };
            FileData::Mapped(mmap)
        } else {
            FileData::Buffered(std::fs::read(path)?)
        };

        Ok(Self { data })
    }

    fn bytes(&self) -> &[u8] {
        match &self.data {
            FileData::Mapped(mmap) => mmap,
            FileData::Buffered(buf) => buf,
        }
    }
}

impl ByteSource for FileSource {
    fn len(&self) -> u64 {
        self.bytes().len() as u64
    }

    fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize {
        self.bytes().read_at(offset, buf)
    }
}
