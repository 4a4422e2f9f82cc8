//! Mode families and their interval patterns.
//!
//! The heptatonic tradition knows three canonical mode families. Each family
//! is bound to exactly one interval pattern: the pattern is a function of the
//! variant, so a name can never be paired with the wrong pattern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Number of steps consumed when building a seven-pitch scale.
pub const SCALE_STEPS: usize = 6;

/// Semitones in an octave; canonical patterns sum to this.
pub const OCTAVE_SEMITONES: u32 = 12;

/// Ordered semitone steps from each scale degree to the next going upward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalPattern(Vec<u8>);

impl IntervalPattern {
    /// Wraps an arbitrary list of steps without validating it.
    ///
    /// Use [`IntervalPattern::scale_steps`] to find out whether it can build a scale.
    pub fn custom(steps: Vec<u8>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total semitones covered by every step, including the closing one.
    pub fn span(&self) -> u32 {
        self.0.iter().map(|&s| s as u32).sum()
    }

    /// True when the full pattern closes exactly one octave.
    pub fn spans_octave(&self) -> bool {
        self.span() == OCTAVE_SEMITONES
    }

    /// The steps used to build a scale: the first [`SCALE_STEPS`] entries.
    ///
    /// A seventh, octave-closing step is never applied. A zero step ends the
    /// usable prefix, since the scale must strictly ascend.
    pub fn scale_steps(&self) -> Result<&[u8], TheoryError> {
        let usable = self.0.iter().take_while(|&&step| step > 0).count();
        if usable < SCALE_STEPS {
            return Err(TheoryError::MalformedMode {
                usable,
                required: SCALE_STEPS,
            });
        }
        Ok(&self.0[..SCALE_STEPS])
    }
}

impl fmt::Display for IntervalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", step)?;
        }
        f.write_str("]")
    }
}

/// The three canonical heptatonic mode families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeFamily {
    /// 清乐: the natural major arrangement, semitones at 3-4 and 7-1.
    #[serde(alias = "清乐")]
    Qingyue,
    /// 雅乐: raised fourth, semitones at 4-5 and 7-1.
    #[serde(alias = "雅乐")]
    Yayue,
    /// 燕乐: lowered seventh, semitones at 3-4 and 6-7.
    #[serde(alias = "燕乐")]
    Yanyue,
}

impl ModeFamily {
    /// All mode families in canonical order.
    pub const ALL: [ModeFamily; 3] = [ModeFamily::Qingyue, ModeFamily::Yayue, ModeFamily::Yanyue];

    /// Semitone steps of the family, seven entries summing to an octave.
    pub fn steps(self) -> [u8; 7] {
        match self {
            ModeFamily::Qingyue => [2, 2, 1, 2, 2, 2, 1],
            ModeFamily::Yayue => [2, 2, 2, 1, 2, 2, 1],
            ModeFamily::Yanyue => [2, 2, 1, 2, 2, 1, 2],
        }
    }

    pub fn pattern(self) -> IntervalPattern {
        IntervalPattern(self.steps().to_vec())
    }

    /// Pinyin name, e.g. "qingyue".
    pub fn name(self) -> &'static str {
        match self {
            ModeFamily::Qingyue => "qingyue",
            ModeFamily::Yayue => "yayue",
            ModeFamily::Yanyue => "yanyue",
        }
    }

    pub fn hanzi(self) -> &'static str {
        match self {
            ModeFamily::Qingyue => "清乐",
            ModeFamily::Yayue => "雅乐",
            ModeFamily::Yanyue => "燕乐",
        }
    }
}

impl fmt::Display for ModeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModeFamily {
    type Err = TheoryError;

    /// Accepts the pinyin name in any case, or the hanzi name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ModeFamily::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed) || m.hanzi() == trimmed)
            .ok_or_else(|| TheoryError::UnknownMode {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_patterns_span_an_octave() {
        for mode in ModeFamily::ALL {
            let pattern = mode.pattern();
            assert_eq!(pattern.len(), 7, "{}", mode);
            assert!(pattern.spans_octave(), "{} spans {}", mode, pattern.span());
        }
    }

    #[test]
    fn test_scale_steps_drop_closing_interval() {
        let pattern = ModeFamily::Yanyue.pattern();
        assert_eq!(pattern.scale_steps().unwrap(), &[2, 2, 1, 2, 2, 1]);
    }

    #[test]
    fn test_short_pattern_is_malformed() {
        let pattern = IntervalPattern::custom(vec![2, 2, 1]);
        match pattern.scale_steps() {
            Err(TheoryError::MalformedMode { usable, required }) => {
                assert_eq!(usable, 3);
                assert_eq!(required, SCALE_STEPS);
            }
            other => panic!("expected MalformedMode, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_step_is_malformed() {
        let pattern = IntervalPattern::custom(vec![2, 0, 1, 2, 2, 2]);
        assert!(matches!(
            pattern.scale_steps(),
            Err(TheoryError::MalformedMode {
                usable: 1,
                required: SCALE_STEPS
            })
        ));

        // Only the first six steps matter.
        let pattern = IntervalPattern::custom(vec![2, 2, 1, 2, 2, 2, 0]);
        assert!(pattern.scale_steps().is_ok());
    }

    #[test]
    fn test_six_step_pattern_is_usable() {
        let pattern = IntervalPattern::custom(vec![1, 1, 1, 1, 1, 1]);
        assert_eq!(pattern.scale_steps().unwrap().len(), 6);
        assert!(!pattern.spans_octave());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Yayue".parse::<ModeFamily>().unwrap(), ModeFamily::Yayue);
        assert_eq!("燕乐".parse::<ModeFamily>().unwrap(), ModeFamily::Yanyue);
        assert!("dorian".parse::<ModeFamily>().is_err());
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&ModeFamily::Qingyue).unwrap(),
            "\"qingyue\""
        );
        let mode: ModeFamily = serde_json::from_str("\"雅乐\"").unwrap();
        assert_eq!(mode, ModeFamily::Yayue);
        let pattern: IntervalPattern = serde_json::from_str("[2,2,1]").unwrap();
        assert_eq!(pattern.steps(), &[2, 2, 1]);
    }

    #[test]
    fn test_pattern_display() {
        assert_eq!(
            ModeFamily::Qingyue.pattern().to_string(),
            "[2, 2, 1, 2, 2, 2, 1]"
        );
    }
}
