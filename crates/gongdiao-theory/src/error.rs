//! Error types for mode-parameter derivation.

use thiserror::Error;

use crate::degree::Degree;

/// Errors that can occur while deriving mode parameters.
///
/// None of these is transient.
#[derive(Debug, Error)]
pub enum TheoryError {
    #[error("cannot choose a {domain}: candidate set is empty")]
    EmptyDomain { domain: &'static str },
    #[error("interval pattern has {usable} usable steps, at least {required} are required")]
    MalformedMode { usable: usize, required: usize },
    #[error("scale has {scale_len} pitches but the degree weight table has {weights_len} entries")]
    ScaleWeightMismatch {
        scale_len: usize,
        weights_len: usize,
    },
    #[error("invalid weight {weight} for degree '{degree}'")]
    InvalidDegreeWeights { degree: Degree, weight: u32 },
    #[error("auxiliary degree '{degree}' can never be the main note")]
    AuxiliaryMainNote { degree: Degree },
    #[error("degree weights add up to more than u32::MAX")]
    DegreeWeightsOverflow,
    #[error("MIDI note {midi} is outside the representable pitch range")]
    PitchOutOfRange { midi: i64 },
    #[error("invalid pitch '{input}'")]
    InvalidPitch { input: String },
    #[error("unknown tonic '{input}' (expected one of C, D, E, G, A)")]
    UnknownTonic { input: String },
    #[error("unknown meter '{input}' (expected one of 2/4, 3/4, 4/4)")]
    UnknownMeter { input: String },
    #[error("unknown mode family '{input}' (expected one of qingyue, yayue, yanyue)")]
    UnknownMode { input: String },
    #[error("unknown degree '{input}' (expected gong, shang, jiao, zhi or yu)")]
    UnknownDegree { input: String },
    #[error("failed to parse parameter pool: {0}")]
    PoolParse(#[from] serde_json::Error),
    #[error("failed to read parameter pool '{path}': {source}")]
    PoolRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl TheoryError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::EmptyDomain { .. } => "THEORY_001",
            TheoryError::MalformedMode { .. } => "THEORY_002",
            TheoryError::ScaleWeightMismatch { .. } => "THEORY_003",
            TheoryError::InvalidDegreeWeights { .. } => "THEORY_004",
            TheoryError::AuxiliaryMainNote { .. } => "THEORY_005",
            TheoryError::InvalidPitch { .. } => "THEORY_006",
            TheoryError::UnknownTonic { .. } => "THEORY_007",
            TheoryError::UnknownMeter { .. } => "THEORY_008",
            TheoryError::UnknownMode { .. } => "THEORY_009",
            TheoryError::PoolParse(_) => "THEORY_010",
            TheoryError::PoolRead { .. } => "THEORY_011",
            TheoryError::UnknownDegree { .. } => "THEORY_012",
            TheoryError::DegreeWeightsOverflow => "THEORY_013",
            TheoryError::PitchOutOfRange { .. } => "THEORY_014",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        match self {
            TheoryError::InvalidPitch { .. }
            | TheoryError::UnknownTonic { .. }
            | TheoryError::UnknownMeter { .. }
            | TheoryError::UnknownMode { .. }
            | TheoryError::UnknownDegree { .. } => "input",
            TheoryError::PoolParse(_) | TheoryError::PoolRead { .. } => "config",
            _ => "theory",
        }
    }
}
