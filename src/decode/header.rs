//! Header parsing: signature, version, tempo.
//!
//! The fixed header occupies the first 42 bytes of a SPLICE file:
//!
//! ```text
//! - 6 bytes:  signature, must be "SPLICE"
//! - 32 bytes: version text, zero-padded
//! - 4 bytes:  tempo, little-endian 32-bit float
//! ```

use super::reader::FieldReader;
use crate::error::{Result, SpliceError};
use crate::source::ByteSource;

/// The 6-byte signature every SPLICE file starts with.
pub const SIGNATURE: &[u8; 6] = b"SPLICE";

/// Length of the zero-padded version region.
pub const VERSION_LEN: usize = 32;

/// Header fields of a SPLICE file.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Version text, trailing zero padding stripped
    pub version: String,
    /// Tempo in beats per minute, as stored
    pub tempo: f32,
}

/// Read and validate the signature.
///
/// # Errors
///
/// Returns [`SpliceError::MissingSignature`] carrying the bytes actually
/// found when they are not `SPLICE`, or
/// [`SpliceError::Truncated`] when fewer than 6 bytes exist.
pub fn read_signature<S: ByteSource + ?Sized>(reader: &mut FieldReader<'_, S>) -> Result<()> {
    let sig = reader.read_array::<6>("signature")?;
    if &sig != SIGNATURE {
        return Err(SpliceError::MissingSignature { actual: sig });
    }
    Ok(())
}

/// Read the 32-byte version region.
///
/// The version text is the bytes before the first zero byte; a region with
/// no zero byte is taken whole. The bytes are treated as text without
/// encoding validation (invalid UTF-8 is replaced, never rejected).
///
/// # Errors
///
/// Returns [`SpliceError::Truncated`] when fewer than 32 bytes exist.
pub fn read_version<S: ByteSource + ?Sized>(reader: &mut FieldReader<'_, S>) -> Result<String> {
    let raw = reader.read_array::<VERSION_LEN>("version")?;
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    Ok(String::from_utf8_lossy(&raw[..end]).into_owned())
}

/// Read the little-endian tempo field.
///
/// No range validation: NaN, zero, and negative tempos decode as stored.
///
/// # Errors
///
/// Returns [`SpliceError::Truncated`] when fewer than 4 bytes exist.
pub fn read_tempo<S: ByteSource + ?Sized>(reader: &mut FieldReader<'_, S>) -> Result<f32> {
    let raw = reader.read_array::<4>("tempo")?;
    Ok(f32::from_le_bytes(raw))
}

/// Read the complete header, leaving the cursor at the first track record.
///
/// # Errors
///
/// Returns [`SpliceError::MissingSignature`] for an unrecognized file and
/// [`SpliceError::Truncated`] when the header itself is cut short.
pub fn read_header<S: ByteSource + ?Sized>(reader: &mut FieldReader<'_, S>) -> Result<Header> {
    read_signature(reader)?;
    let version = read_version(reader)?;
    let tempo = read_tempo(reader)?;
    Ok(Header { version, tempo })
}
