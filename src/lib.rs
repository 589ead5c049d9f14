//! splice: decoder for the SPLICE drum machine pattern format
//!
//! # Overview
//!
//! A SPLICE file is a drum machine's saved state: a hardware version
//! string, a tempo, and any number of instrument tracks, each carrying a
//! 16-step on/off sequence. This crate decodes those files into a
//! [`Pattern`] and renders them as text.
//!
//! ## Quick Start
//!
//! ```no_run
//! # fn main() -> splice::Result<()> {
//! let pattern = splice::decode_file("pattern_1.splice")?;
//!
//! print!("{}", pattern);
//! # Ok(())
//! # }
//! ```
//!
//! Decoding from memory goes through the same [`ByteSource`] seam the file
//! wrapper uses:
//!
//! ```no_run
//! # fn main() -> splice::Result<()> {
//! let bytes = std::fs::read("pattern_1.splice")?;
//! let pattern = splice::decode(&bytes[..])?;
//!
//! for track in pattern.tracks() {
//!     println!("({}) {}\t{}", track.id(), track.name(), track.render_steps());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Corruption is not an error
//!
//! A track record whose padding bytes are off marks the rest of the file
//! as corrupt: decoding stops there and returns the tracks already read,
//! without error. See [`decode()`] for the full contract.
//!
//! ## Module Organization
//!
//! - [`decode`](mod@decode): header and track-record parsing
//! - [`pattern`]: decoded data model and step-grid rendering
//! - [`source`]: byte-source collaborators (files, in-memory slices)
//! - [`error`]: error taxonomy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod decode;
pub mod error;
pub mod pattern;
pub mod source;

// Re-export commonly used types
pub use decode::{decode, decode_file};
pub use error::{Result, SpliceError};
pub use pattern::{Pattern, Track, STEPS_PER_TRACK};
pub use source::{ByteSource, FileSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
