//! The parameter pool: every enumerated set a derivation draws from.
//!
//! The default pool is the canonical one. A pool may also be loaded from
//! JSON; any field left out keeps its canonical value.
//!
//! ```json
//! {
//!   "tonics": ["C", "G"],
//!   "meters": ["3/4"],
//!   "modes": ["yayue", "yanyue"],
//!   "degree_weights": [30, 10, 10, 0, 30, 20, 0]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::degree::DegreeWeights;
use crate::error::TheoryError;
use crate::meter::Meter;
use crate::mode::ModeFamily;
use crate::pitch::Tonic;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterPool {
    /// Candidate gong tones.
    pub tonics: Vec<Tonic>,
    /// Candidate meters.
    pub meters: Vec<Meter>,
    /// Candidate mode families.
    pub modes: Vec<ModeFamily>,
    /// Main-note weights per scale position.
    pub degree_weights: DegreeWeights,
}

impl Default for ParameterPool {
    fn default() -> Self {
        Self {
            tonics: Tonic::ALL.to_vec(),
            meters: Meter::ALL.to_vec(),
            modes: ModeFamily::ALL.to_vec(),
            degree_weights: DegreeWeights::default(),
        }
    }
}

impl ParameterPool {
    /// Parses a pool from JSON.
    ///
    /// Empty candidate lists are accepted here and reported as
    /// [`TheoryError::EmptyDomain`] when a derivation draws from them.
    pub fn from_json(json: &str) -> Result<Self, TheoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a pool file.
    pub fn from_path(path: &Path) -> Result<Self, TheoryError> {
        let json = fs::read_to_string(path).map_err(|source| TheoryError::PoolRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::degree::Degree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_pool() {
        let pool = ParameterPool::default();
        assert_eq!(pool.tonics, Tonic::ALL.to_vec());
        assert_eq!(pool.meters.len(), 3);
        assert_eq!(pool.modes.len(), 3);
        assert_eq!(pool.degree_weights, DegreeWeights::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let pool = ParameterPool::from_json(r#"{ "tonics": ["G"], "meters": ["3/4"] }"#).unwrap();
        assert_eq!(pool.tonics, vec![Tonic::G]);
        assert_eq!(pool.meters, vec![Meter::ThreeFour]);
        assert_eq!(pool.modes, ModeFamily::ALL.to_vec());
    }

    #[test]
    fn test_json_weights_are_validated() {
        let pool =
            ParameterPool::from_json(r#"{ "degree_weights": [30, 10, 10, 0, 30, 20, 0] }"#).unwrap();
        assert_eq!(pool.degree_weights.weight(Degree::Gong), 30);

        let err = ParameterPool::from_json(r#"{ "degree_weights": [1, 1, 1, 1, 1, 1, 1] }"#)
            .unwrap_err();
        assert!(matches!(err, TheoryError::PoolParse(_)));
    }

    #[test]
    fn test_json_weights_total_must_fit() {
        let err = ParameterPool::from_json(
            r#"{ "degree_weights": [4294967295, 1, 1, 0, 1, 1, 0] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("add up to more than"), "{}", err);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(ParameterPool::from_json(r#"{ "tempo": 90 }"#).is_err());
    }

    #[test]
    fn test_empty_lists_load() {
        let pool = ParameterPool::from_json(r#"{ "modes": [] }"#).unwrap();
        assert!(pool.modes.is_empty());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pool.json");
        fs::write(&path, r#"{ "modes": ["yanyue"] }"#).unwrap();
        let pool = ParameterPool::from_path(&path).unwrap();
        assert_eq!(pool.modes, vec![ModeFamily::Yanyue]);

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            ParameterPool::from_path(&missing),
            Err(TheoryError::PoolRead { .. })
        ));
    }

    #[test]
    fn test_pool_roundtrips_through_json() {
        let pool = ParameterPool::default();
        let json = serde_json::to_string(&pool).unwrap();
        assert_eq!(ParameterPool::from_json(&json).unwrap(), pool);
    }
}
