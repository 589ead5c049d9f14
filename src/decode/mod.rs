//! SPLICE binary format decoding.
//!
//! # Format
//!
//! All integers are little-endian:
//!
//! ```text
//! Offset  Length    Field
//! 0       6         Signature, must be "SPLICE"
//! 6       32        Version text, zero-padded
//! 38      4         Tempo, 32-bit float
//! 42..    variable  Repeated track records
//!
//! Track record:
//! - 1 byte:  id
//! - 3 bytes: padding, must be {0,0,0}
//! - 1 byte:  name length
//! - N bytes: name
//! - 16 bytes: steps, a step is active iff its byte is 1
//! ```
//!
//! # Corruption handling
//!
//! A track record whose padding bytes are not `{0,0,0}` marks the rest of
//! the file as corrupt. Decoding stops at that point, keeps the tracks
//! already read, and reports no error — a cleanly-ended file and a file
//! with a corrupt tail produce indistinguishable results. This is the
//! format's contract, not a parsing shortcut.
//!
//! Data that ends partway through the header or a track record (including
//! a name length that claims more bytes than remain) is different: that
//! fails the whole decode with
//! [`SpliceError::Truncated`](crate::SpliceError).

pub mod header;
pub mod reader;
pub mod track;

pub use header::Header;
pub use reader::FieldReader;

use crate::error::Result;
use crate::pattern::Pattern;
use crate::source::{ByteSource, FileSource};
use std::path::Path;

/// Decode a pattern from a byte source.
///
/// Reads the fixed header, then track records until end-of-data or the
/// corruption marker (see the module docs). The source is consumed in one
/// pass from offset 0; the returned [`Pattern`] is owned by the caller.
///
/// # Errors
///
/// Returns [`MissingSignature`](crate::SpliceError::MissingSignature) when
/// the source does not carry the SPLICE signature, and
/// [`Truncated`](crate::SpliceError::Truncated) when the data ends partway
/// through a field.
///
/// # Example
///
/// ```
/// use splice::decode;
///
/// let mut data = Vec::new();
/// data.extend_from_slice(b"SPLICE");
/// data.extend_from_slice(&[0u8; 32]);
/// data.extend_from_slice(&120.0f32.to_le_bytes());
///
/// let pattern = decode(&data[..])?;
/// assert_eq!(pattern.tempo(), 120.0);
/// assert!(pattern.tracks().is_empty());
/// # Ok::<(), splice::SpliceError>(())
/// ```
pub fn decode<S: ByteSource + ?Sized>(source: &S) -> Result<Pattern> {
    let mut reader = FieldReader::new(source);
    let header = header::read_header(&mut reader)?;
    let tracks = track::read_tracks(&mut reader)?;
    Ok(Pattern::new(header.version, header.tempo, tracks))
}

/// Decode the pattern file at `path`.
///
/// Convenience wrapper over [`FileSource::open`] and [`decode`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not decode.
///
/// # Example
///
/// ```no_run
/// # fn main() -> splice::Result<()> {
/// let pattern = splice::decode_file("pattern_1.splice")?;
/// println!("{}", pattern);
/// # Ok(())
/// # }
/// ```
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Pattern> {
    let source = FileSource::open(path)?;
    decode(&source)
}
