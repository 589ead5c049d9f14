//! Decoded pattern data model and text rendering.
//!
//! A [`Pattern`] is the in-memory form of one SPLICE file: the hardware
//! version it was saved with, the tempo, and the instrument tracks in file
//! order. Values are read-only once decoded; access goes through the
//! accessor methods.

use std::fmt;

/// Number of steps in every track's sequence.
pub const STEPS_PER_TRACK: usize = 16;

/// Steps per beat group in the rendered grid.
const STEPS_PER_BAR: usize = 4;

/// One instrument's metadata and 16-step on/off sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    id: u8,
    name: String,
    steps: [bool; STEPS_PER_TRACK],
}

impl Track {
    /// Create a new track.
    pub fn new(id: u8, name: String, steps: [bool; STEPS_PER_TRACK]) -> Self {
        Self { id, name, steps }
    }

    /// Track identifier byte. Not guaranteed unique within a pattern.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Instrument label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The step flags in playback order.
    pub fn steps(&self) -> &[bool; STEPS_PER_TRACK] {
        &self.steps
    }

    /// Render the step sequence as a bar-delimited grid.
    ///
    /// Opens with `|`, emits `x` for an active step and `-` for an
    /// inactive one, and closes each group of four steps with another `|`:
    ///
    /// ```
    /// use splice::Track;
    ///
    /// let mut steps = [false; 16];
    /// for slot in steps.iter_mut().step_by(4) {
    ///     *slot = true;
    /// }
    ///
    /// let kick = Track::new(0, "kick".to_string(), steps);
    /// assert_eq!(kick.render_steps(), "|x---|x---|x---|x---|");
    /// ```
    pub fn render_steps(&self) -> String {
        let mut out = String::with_capacity(STEPS_PER_TRACK + STEPS_PER_TRACK / STEPS_PER_BAR + 1);
        out.push('|');
        for (i, &active) in self.steps.iter().enumerate() {
            out.push(if active { 'x' } else { '-' });
            if i % STEPS_PER_BAR == STEPS_PER_BAR - 1 {
                out.push('|');
            }
        }
        out
    }
}

/// A decoded SPLICE file.
///
/// Holds the version text, the tempo, and the tracks in on-disk order
/// (which is also display order). A pattern with zero tracks is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    version: String,
    tempo: f32,
    tracks: Vec<Track>,
}

impl Pattern {
    /// Create a new pattern.
    pub fn new(version: String, tempo: f32, tracks: Vec<Track>) -> Self {
        Self {
            version,
            tempo,
            tracks,
        }
    }

    /// Version text, trailing zero padding stripped.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Tempo in beats per minute. Stored as written; never validated.
    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    /// Tracks in file order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl fmt::Display for Pattern {
    /// Version line, tempo line, then one line per track:
    ///
    /// ```text
    /// Saved with HW Version: 0.808-alpha
    /// Tempo: 98.4
    /// (0) kick	|x---|x---|x---|x---|
    /// (1) snare	|----|x---|----|x---|
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "({}) {}\t{}", track.id, track.name, track.render_steps())?;
        }
        Ok(())
    }
}
