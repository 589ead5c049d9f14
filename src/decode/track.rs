//! Track record parsing.
//!
//! Track records follow the header back to back until end-of-data:
//!
//! ```text
//! - 1 byte:  id
//! - 3 bytes: padding, must be {0,0,0}
//! - 1 byte:  name length
//! - N bytes: name
//! - 16 bytes: steps, a step is active iff its byte is 1
//! ```
//!
//! The padding bytes double as a corruption marker: any value other than
//! `{0,0,0}` stops the loop, keeping the records already read. See
//! [`read_tracks`].

use super::reader::FieldReader;
use crate::error::Result;
use crate::pattern::{Track, STEPS_PER_TRACK};
use crate::source::ByteSource;

/// Padding bytes every well-formed track record carries after its id.
pub const TRACK_PADDING: [u8; 3] = [0, 0, 0];

/// Read one track record.
///
/// Returns `Ok(None)` when the record's padding bytes are not `{0,0,0}`,
/// which marks the remainder of the data as corrupt. The id byte is not
/// validated against any known set and the name bytes are taken as-is.
///
/// # Errors
///
/// Returns [`SpliceError::Truncated`](crate::SpliceError) if the data ends
/// partway through the record, including a name length that claims more
/// bytes than remain.
pub fn read_track<S: ByteSource + ?Sized>(
    reader: &mut FieldReader<'_, S>,
) -> Result<Option<Track>> {
    let id = reader.read_u8("track id")?;

    let padding = reader.read_array::<3>("track padding")?;
    if padding != TRACK_PADDING {
        return Ok(None);
    }

    let name_len = reader.read_u8("track name length")?;
    let name_bytes = reader.read(name_len as usize, "track name")?;
    let name = String::from_utf8_lossy(&name_bytes).into_owned();

    let raw_steps = reader.read_array::<STEPS_PER_TRACK>("track steps")?;
    let mut steps = [false; STEPS_PER_TRACK];
    for (step, byte) in steps.iter_mut().zip(raw_steps) {
        *step = byte == 1;
    }

    Ok(Some(Track::new(id, name, steps)))
}

/// Read track records until end-of-data or the corruption marker.
///
/// Records already read when the marker is hit are kept and the corrupt
/// tail is discarded without error; the result does not record whether the
/// loop ended cleanly. Records appear in file order, duplicates included.
///
/// # Errors
///
/// Returns [`SpliceError::Truncated`](crate::SpliceError) if the data ends
/// partway through a record.
pub fn read_tracks<S: ByteSource + ?Sized>(reader: &mut FieldReader<'_, S>) -> Result<Vec<Track>> {
    let mut tracks = Vec::new();
    while reader.remaining() > 0 {
        match read_track(reader)? {
            Some(track) => tracks.push(track),
            None => break,
        }
    }
    Ok(tracks)
}
