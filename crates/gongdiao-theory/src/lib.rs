//! Gongdiao Theory - Seeded Derivation of Chinese Heptatonic Mode Parameters
//!
//! This crate randomly derives a coherent set of theory parameters for a short
//! melody in the Chinese heptatonic modal tradition: a gong (palace) tonic, a
//! meter, one of the three mode families, the seven-pitch gong scale, and the
//! structural main note of the melody, together with a readable mode label.
//!
//! # Determinism
//!
//! All randomness flows through a generator passed in by the caller. Given the
//! same seed, a derivation is identical on every run and platform:
//!
//! - PCG32 random number generator (see [`rng`])
//! - BLAKE3 seed derivation for batches of independent runs
//!
//! # Example
//!
//! ```
//! use gongdiao_theory::{create_rng, MelodyContext, ParameterPool};
//!
//! let pool = ParameterPool::default();
//! let mut rng = create_rng(42);
//! let melody = MelodyContext::derive(&mut rng, &pool)?;
//!
//! println!("{} in {}: {}", melody.scale(), melody.meter(), melody.label());
//! assert!(melody.main_note().degree.is_structural());
//! # Ok::<(), gongdiao_theory::TheoryError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: Pitches and candidate tonics
//! - [`meter`]: Time signatures
//! - [`mode`]: Mode families and interval patterns
//! - [`degree`]: Degree names and main-note weights
//! - [`pool`]: The enumerated parameter pool
//! - [`select`]: Uniform and weighted random selection
//! - [`scale`]: Gong scale construction
//! - [`main_note`]: Main-note selection
//! - [`label`]: Mode label composition
//! - [`context`]: The ordered derivation pipeline
//! - [`notation`]: Hand-off boundary for renderers

pub mod context;
pub mod degree;
pub mod error;
pub mod label;
pub mod main_note;
pub mod meter;
pub mod mode;
pub mod notation;
pub mod pitch;
pub mod pool;
pub mod rng;
pub mod scale;
pub mod select;

// Re-export main types
pub use context::{Derivation, MelodyContext};
pub use degree::{Degree, DegreeWeights};
pub use error::TheoryError;
pub use main_note::{MainNote, MainNoteSelector};
pub use meter::Meter;
pub use mode::{IntervalPattern, ModeFamily};
pub use notation::NotationSink;
pub use pitch::{Pitch, Tonic, DEFAULT_OCTAVE, MAX_OCTAVE, MIN_OCTAVE};
pub use pool::ParameterPool;
pub use rng::{create_rng, create_run_rng, derive_run_seed};
pub use scale::Scale;

/// Crate version for identification in reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
