//! Scale degrees and the weights used to draw the main note.
//!
//! Degree names are attached by position only. Positions 3 and 6 are the
//! auxiliary (pian) tones: they complete the seven-tone scale but can never
//! serve as the structural main note, so their weight is fixed at zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Number of degrees in a heptatonic scale.
pub const DEGREE_COUNT: usize = 7;

/// Weight of each structural degree in the canonical table.
pub const STRUCTURAL_WEIGHT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Degree {
    Gong,
    Shang,
    Jiao,
    #[serde(rename = "aux-1")]
    Aux1,
    Zhi,
    Yu,
    #[serde(rename = "aux-2")]
    Aux2,
}

impl Degree {
    /// Degrees in scale order; the index is the scale position.
    pub const ALL: [Degree; DEGREE_COUNT] = [
        Degree::Gong,
        Degree::Shang,
        Degree::Jiao,
        Degree::Aux1,
        Degree::Zhi,
        Degree::Yu,
        Degree::Aux2,
    ];

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn from_position(position: usize) -> Option<Degree> {
        Self::ALL.get(position).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Degree::Gong => "gong",
            Degree::Shang => "shang",
            Degree::Jiao => "jiao",
            Degree::Aux1 => "aux-1",
            Degree::Zhi => "zhi",
            Degree::Yu => "yu",
            Degree::Aux2 => "aux-2",
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            Degree::Gong => "宫",
            Degree::Shang => "商",
            Degree::Jiao => "角",
            Degree::Aux1 => "偏1",
            Degree::Zhi => "徵",
            Degree::Yu => "羽",
            Degree::Aux2 => "偏2",
        }
    }

    /// True for the five degrees that may serve as the main note.
    pub fn is_structural(self) -> bool {
        !matches!(self, Degree::Aux1 | Degree::Aux2)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Degree {
    type Err = TheoryError;

    /// Accepts the name ("zhi", "aux-1"), the hanzi ("徵") or the position ("4").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(position) = trimmed.parse::<usize>() {
            if let Some(degree) = Degree::from_position(position) {
                return Ok(degree);
            }
        }
        Degree::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed) || d.hanzi() == trimmed)
            .ok_or_else(|| TheoryError::UnknownDegree {
                input: s.to_string(),
            })
    }
}

/// Main-note weights, one per scale position.
///
/// Construction enforces the auxiliary exclusion: auxiliary positions are
/// exactly zero and structural positions are strictly positive. The total
/// must fit in a `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 7]", into = "[u32; 7]")]
pub struct DegreeWeights([u32; DEGREE_COUNT]);

impl DegreeWeights {
    pub fn new(weights: [u32; DEGREE_COUNT]) -> Result<Self, TheoryError> {
        for degree in Degree::ALL {
            let weight = weights[degree.position()];
            let valid = if degree.is_structural() {
                weight > 0
            } else {
                weight == 0
            };
            if !valid {
                return Err(TheoryError::InvalidDegreeWeights { degree, weight });
            }
        }
        weights
            .iter()
            .try_fold(0u32, |total, &weight| total.checked_add(weight))
            .ok_or(TheoryError::DegreeWeightsOverflow)?;
        Ok(Self(weights))
    }

    pub fn weight(&self, degree: Degree) -> u32 {
        self.0[degree.position()]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DegreeWeights {
    fn default() -> Self {
        let mut weights = [0; DEGREE_COUNT];
        for degree in Degree::ALL.into_iter().filter(|d| d.is_structural()) {
            weights[degree.position()] = STRUCTURAL_WEIGHT;
        }
        Self(weights)
    }
}

impl TryFrom<[u32; DEGREE_COUNT]> for DegreeWeights {
    type Error = TheoryError;

    fn try_from(value: [u32; DEGREE_COUNT]) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DegreeWeights> for [u32; DEGREE_COUNT] {
    fn from(weights: DegreeWeights) -> Self {
        weights.0
    }
}
