//! Main-note (tonic-of-use) selection.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::degree::{Degree, DegreeWeights};
use crate::error::TheoryError;
use crate::pitch::Pitch;
use crate::scale::Scale;
use crate::select::choose_weighted;

/// The degree chosen as the melody's functional tonal center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainNote {
    pub degree: Degree,
    pub pitch: Pitch,
}

/// Weighted draw of a structural degree from a scale.
#[derive(Debug, Clone, Default)]
pub struct MainNoteSelector {
    weights: DegreeWeights,
}

impl MainNoteSelector {
    pub fn new(weights: DegreeWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &DegreeWeights {
        &self.weights
    }

    /// Draws one scale position weighted by the degree table.
    ///
    /// Auxiliary positions carry weight zero and are never returned.
    ///
    /// # Errors
    /// Returns [`TheoryError::ScaleWeightMismatch`] if the scale length
    /// differs from the weight table length.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R, scale: &Scale) -> Result<MainNote, TheoryError> {
        self.check_len(scale)?;
        let position = choose_weighted(rng, self.weights.as_slice())?;
        self.note_at(scale, position)
    }

    /// Picks `degree` without drawing.
    ///
    /// # Errors
    /// Returns [`TheoryError::AuxiliaryMainNote`] for an auxiliary degree and
    /// [`TheoryError::ScaleWeightMismatch`] for a scale of the wrong length.
    pub fn force(&self, scale: &Scale, degree: Degree) -> Result<MainNote, TheoryError> {
        self.check_len(scale)?;
        if self.weights.weight(degree) == 0 {
            return Err(TheoryError::AuxiliaryMainNote { degree });
        }
        self.note_at(scale, degree.position())
    }

    fn check_len(&self, scale: &Scale) -> Result<(), TheoryError> {
        if scale.len() != self.weights.len() {
            return Err(TheoryError::ScaleWeightMismatch {
                scale_len: scale.len(),
                weights_len: self.weights.len(),
            });
        }
        Ok(())
    }

    fn note_at(&self, scale: &Scale, position: usize) -> Result<MainNote, TheoryError> {
        let mismatch = || TheoryError::ScaleWeightMismatch {
            scale_len: scale.len(),
            weights_len: self.weights.len(),
        };
        let degree = Degree::from_position(position).ok_or_else(mismatch)?;
        let pitch = scale.get(degree).ok_or_else(mismatch)?;
        Ok(MainNote { degree, pitch })
    }
}
