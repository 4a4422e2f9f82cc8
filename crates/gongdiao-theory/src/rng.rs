//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every derivation draws from a generator created here, so a seed fully
//! determines its result. Batch runs derive an independent seed per run.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives the seed for one run of a batch from the base seed.
///
/// Hashes the base seed concatenated with the run index (little-endian) and
/// truncates the BLAKE3 digest to 32 bits.
pub fn derive_run_seed(base_seed: u32, run_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&run_index.to_le_bytes());
    truncate_hash(blake3::hash(&input))
}

/// Creates the RNG for one run of a batch.
pub fn create_run_rng(base_seed: u32, run_index: u32) -> Pcg32 {
    create_rng(derive_run_seed(base_seed, run_index))
}

fn truncate_hash(hash: blake3::Hash) -> u32 {
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
