//! Error types for splice

use thiserror::Error;

/// Result type alias for splice operations
pub type Result<T> = std::result::Result<T, SpliceError>;

/// Errors that can occur while decoding a SPLICE file.
///
/// Only two conditions fail a decode: a source that does not carry the
/// SPLICE signature, and data that ends partway through a field. A bad
/// track-record padding sentinel is deliberately *not* an error; it stops
/// the track loop and the tracks read so far are returned (see
/// [`decode`](crate::decode())).
#[derive(Debug, Error)]
pub enum SpliceError {
    /// I/O error while opening or reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The first 6 bytes of the source were not the SPLICE signature
    #[error("missing SPLICE signature: got {actual:?}")]
    MissingSignature {
        /// The bytes actually found at the start of the source
        actual: [u8; 6],
    },

    /// The data ended partway through a field
    #[error(
        "unexpected end of data while reading {context}: needed {needed} bytes at offset {offset}, {available} available"
    )]
    Truncated {
        /// What was being read when the data ran out
        context: &'static str,
        /// Offset of the failed read
        offset: u64,
        /// Number of bytes the field required
        needed: usize,
        /// Number of bytes that remained in the source
        available: usize,
    },
}
