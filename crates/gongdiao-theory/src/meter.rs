//! Meters (time signatures) a melody may be written in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meter {
    #[serde(rename = "2/4")]
    TwoFour,
    #[serde(rename = "3/4")]
    ThreeFour,
    #[serde(rename = "4/4")]
    FourFour,
}

impl Meter {
    /// All candidate meters in canonical order.
    pub const ALL: [Meter; 3] = [Meter::TwoFour, Meter::ThreeFour, Meter::FourFour];

    /// Beats per measure.
    pub fn beats(self) -> u8 {
        match self {
            Meter::TwoFour => 2,
            Meter::ThreeFour => 3,
            Meter::FourFour => 4,
        }
    }

    /// Note value that gets one beat (4 = quarter note).
    pub fn beat_unit(self) -> u8 {
        4
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meter::TwoFour => "2/4",
            Meter::ThreeFour => "3/4",
            Meter::FourFour => "4/4",
        }
    }

    /// Human-readable description, e.g. "3/4 time".
    pub fn beat_text(self) -> String {
        format!("{} time", self.as_str())
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meter {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Meter::ALL
            .into_iter()
            .find(|m| m.as_str() == compact)
            .ok_or_else(|| TheoryError::UnknownMeter {
                input: s.to_string(),
            })
    }
}
