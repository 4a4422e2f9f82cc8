//! Gong-mode scale construction.
//!
//! A scale is built by stacking the first six steps of an interval pattern
//! on top of the tonic. Position 0 is the gong; position `i` carries the
//! degree name `Degree::ALL[i]`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::degree::{Degree, DEGREE_COUNT};
use crate::error::TheoryError;
use crate::mode::IntervalPattern;
use crate::pitch::Pitch;

/// An ordered scale, lowest pitch first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale {
    pitches: Vec<Pitch>,
}

impl Scale {
    /// Builds the seven-pitch scale on `tonic` from `pattern`.
    ///
    /// Starting from the tonic, each of the first six steps transposes the
    /// previous pitch upward; the octave-closing seventh step is not applied.
    /// The octave number may increase partway through but never decreases.
    ///
    /// # Errors
    /// Returns [`TheoryError::MalformedMode`] if `pattern` has fewer than six
    /// non-zero leading steps, and [`TheoryError::PitchOutOfRange`] if a pitch
    /// would leave the representable octaves.
    pub fn build(tonic: Pitch, pattern: &IntervalPattern) -> Result<Self, TheoryError> {
        let steps = pattern.scale_steps()?;

        let mut pitches = Vec::with_capacity(DEGREE_COUNT);
        let mut current = tonic;
        pitches.push(current);
        for &step in steps {
            current = current.transpose(i32::from(step))?;
            pitches.push(current);
        }

        Ok(Self { pitches })
    }

    /// Wraps an externally assembled list of pitches.
    ///
    /// No length check happens here; the main-note draw rejects scales whose
    /// length does not match its weight table.
    pub fn from_pitches(pitches: Vec<Pitch>) -> Self {
        Self { pitches }
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// The gong (position 0), if the scale is non-empty.
    pub fn tonic(&self) -> Option<Pitch> {
        self.pitches.first().copied()
    }

    pub fn get(&self, degree: Degree) -> Option<Pitch> {
        self.pitches.get(degree.position()).copied()
    }

    /// Semitones from the first to the last pitch.
    pub fn span(&self) -> i32 {
        match (self.pitches.first(), self.pitches.last()) {
            (Some(first), Some(last)) => last.midi() - first.midi(),
            _ => 0,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pitch) in self.pitches.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pitch)?;
        }
        Ok(())
    }
}
