//! Pitches and candidate tonics.
//!
//! A [`Pitch`] is a pitch class (0-11, C = 0) plus an octave in scientific
//! pitch notation, so C4 is middle C and the octave number increments when
//! moving from B up to C. Names are always spelled with sharps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Octave given to a tonic when it is turned into a pitch.
pub const DEFAULT_OCTAVE: i8 = 4;

/// Octave range accepted when parsing pitch names.
pub const MIN_OCTAVE: i8 = -1;
pub const MAX_OCTAVE: i8 = 9;

/// Sharp spellings indexed by pitch class.
const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A concrete pitch: pitch class plus octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pitch {
    class: u8,
    octave: i8,
}

impl Pitch {
    /// Creates a pitch from a pitch class and octave.
    ///
    /// The class is reduced modulo 12.
    pub fn new(class: u8, octave: i8) -> Self {
        Self {
            class: class % 12,
            octave,
        }
    }

    /// Creates a pitch from a MIDI note number (60 = C4).
    ///
    /// # Errors
    /// Returns [`TheoryError::PitchOutOfRange`] if the octave does not fit in an `i8`.
    pub fn from_midi(midi: i32) -> Result<Self, TheoryError> {
        let octave = i8::try_from(midi.div_euclid(12) - 1).map_err(|_| {
            TheoryError::PitchOutOfRange {
                midi: i64::from(midi),
            }
        })?;
        Ok(Self {
            class: midi.rem_euclid(12) as u8,
            octave,
        })
    }

    /// Pitch class, 0-11 with C = 0.
    pub fn class(&self) -> u8 {
        self.class
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// MIDI note number; used as the pitch height for ordering.
    pub fn midi(&self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.class as i32
    }

    /// Moves the pitch by a number of semitones.
    ///
    /// Crossing from B to C changes the octave number.
    ///
    /// # Errors
    /// Returns [`TheoryError::PitchOutOfRange`] if the result has no octave number.
    pub fn transpose(&self, semitones: i32) -> Result<Self, TheoryError> {
        let target = i64::from(self.midi()) + i64::from(semitones);
        let midi =
            i32::try_from(target).map_err(|_| TheoryError::PitchOutOfRange { midi: target })?;
        Self::from_midi(midi)
    }

    /// Pitch name without octave, e.g. "F#".
    pub fn name(&self) -> &'static str {
        PITCH_NAMES[self.class as usize]
    }

    /// Letter of the pitch name, e.g. 'F' for F#.
    pub fn letter(&self) -> char {
        self.name().chars().next().unwrap_or('C')
    }

    /// Pitch name with octave, e.g. "F#4".
    pub fn name_with_octave(&self) -> String {
        format!("{}{}", self.name(), self.octave)
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.midi().cmp(&other.midi())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.octave)
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    /// Parses "C", "F#4", "Bb3" or "Cs5".
    ///
    /// Flats are respelled as sharps; a missing octave means [`DEFAULT_OCTAVE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidPitch {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let base: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(invalid()),
        };

        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') | Some('s') => (1, &rest[1..]),
            Some('b') => (-1, &rest[1..]),
            _ => (0, rest),
        };

        let octave: i32 = if octave_str.is_empty() {
            DEFAULT_OCTAVE as i32
        } else {
            octave_str.parse().map_err(|_| invalid())?
        };
        if !(i32::from(MIN_OCTAVE)..=i32::from(MAX_OCTAVE)).contains(&octave) {
            return Err(invalid());
        }

        // Respell through MIDI so that Cb4 becomes B3 and B#4 becomes C5.
        let midi = (octave + 1) * 12 + base + accidental;
        Self::from_midi(midi).map_err(|_| invalid())
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.name_with_octave()
    }
}

impl TryFrom<String> for Pitch {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Candidate gong (palace) tones.
///
/// Tonics are drawn from the natural letters of the pentatonic core only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tonic {
    C,
    D,
    E,
    G,
    A,
}

impl Tonic {
    /// All candidate tonics in canonical order.
    pub const ALL: [Tonic; 5] = [Tonic::C, Tonic::D, Tonic::E, Tonic::G, Tonic::A];

    pub fn pitch_class(self) -> u8 {
        match self {
            Tonic::C => 0,
            Tonic::D => 2,
            Tonic::E => 4,
            Tonic::G => 7,
            Tonic::A => 9,
        }
    }

    /// The tonic as a pitch at [`DEFAULT_OCTAVE`].
    pub fn pitch(self) -> Pitch {
        Pitch::new(self.pitch_class(), DEFAULT_OCTAVE)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tonic::C => "C",
            Tonic::D => "D",
            Tonic::E => "E",
            Tonic::G => "G",
            Tonic::A => "A",
        }
    }
}

impl fmt::Display for Tonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tonic {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tonic::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TheoryError::UnknownTonic {
                input: s.to_string(),
            })
    }
}
