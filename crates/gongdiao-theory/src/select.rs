//! Random selection over small enumerated sets.
//!
//! The random source is always passed in by the caller.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TheoryError;
use crate::mode::ModeFamily;

/// Picks one candidate uniformly at random.
///
/// `domain` names the candidate set in the error returned for an empty set.
pub fn choose_uniform<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &'a [T],
    domain: &'static str,
) -> Result<&'a T, TheoryError> {
    candidates
        .choose(rng)
        .ok_or(TheoryError::EmptyDomain { domain })
}

/// Picks one mode family uniformly at random.
///
/// The family carries its own interval pattern, so the returned name and
/// pattern always belong together.
pub fn choose_mode<R: Rng + ?Sized>(
    rng: &mut R,
    modes: &[ModeFamily],
) -> Result<ModeFamily, TheoryError> {
    choose_uniform(rng, modes, "mode family").copied()
}

/// Draws an index with probability proportional to its integer weight.
///
/// Indices with weight zero are never returned. Weights are summed as `u64`,
/// so any total of `u32` weights is drawn exactly.
pub fn choose_weighted<R: Rng + ?Sized>(rng: &mut R, weights: &[u32]) -> Result<usize, TheoryError> {
    let dist = WeightedIndex::new(weights.iter().map(|&w| u64::from(w))).map_err(|_| {
        TheoryError::EmptyDomain {
            domain: "weighted position",
        }
    })?;
    Ok(dist.sample(rng))
}
