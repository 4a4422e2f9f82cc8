//! The ordered derivation pipeline and its result.
//!
//! A derivation runs tonic -> meter -> mode -> scale -> main note -> label.
//! Each stage is its own type and only offers the next step, so a later
//! step cannot run before the values it consumes exist:
//!
//! ```
//! use gongdiao_theory::{create_rng, Derivation, ParameterPool};
//!
//! let pool = ParameterPool::default();
//! let mut rng = create_rng(42);
//! let melody = Derivation::new(&mut rng, &pool)
//!     .choose_tonic()?
//!     .choose_meter()?
//!     .choose_mode()?
//!     .build_scale()?
//!     .choose_main_note()?
//!     .finish();
//! assert_eq!(melody.scale().len(), 7);
//! # Ok::<(), gongdiao_theory::TheoryError>(())
//! ```
//!
//! Every `choose_*` step has a `with_*` twin that pins the value instead of
//! drawing it. Pinning consumes no randomness.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::degree::Degree;
use crate::error::TheoryError;
use crate::label;
use crate::main_note::{MainNote, MainNoteSelector};
use crate::meter::Meter;
use crate::mode::ModeFamily;
use crate::notation::NotationSink;
use crate::pitch::{Pitch, Tonic};
use crate::pool::ParameterPool;
use crate::scale::Scale;
use crate::select::{choose_mode, choose_uniform};

/// Nothing chosen yet.
#[derive(Debug)]
pub struct Start;

#[derive(Debug)]
pub struct TonicChosen {
    tonic: Pitch,
}

#[derive(Debug)]
pub struct MeterChosen {
    tonic: Pitch,
    meter: Meter,
}

#[derive(Debug)]
pub struct ModeChosen {
    tonic: Pitch,
    meter: Meter,
    mode: ModeFamily,
}

#[derive(Debug)]
pub struct ScaleBuilt {
    tonic: Pitch,
    meter: Meter,
    mode: ModeFamily,
    scale: Scale,
}

#[derive(Debug)]
pub struct MainNoteChosen {
    tonic: Pitch,
    meter: Meter,
    mode: ModeFamily,
    scale: Scale,
    main_note: MainNote,
}

/// One derivation in progress, parameterized by its current stage.
pub struct Derivation<'a, R: ?Sized, S> {
    rng: &'a mut R,
    pool: &'a ParameterPool,
    state: S,
}

impl<'a, R: Rng + ?Sized, S> Derivation<'a, R, S> {
    fn advance<T>(self, state: T) -> Derivation<'a, R, T> {
        Derivation {
            rng: self.rng,
            pool: self.pool,
            state,
        }
    }
}

impl<'a, R: Rng + ?Sized> Derivation<'a, R, Start> {
    pub fn new(rng: &'a mut R, pool: &'a ParameterPool) -> Self {
        Self {
            rng,
            pool,
            state: Start,
        }
    }

    /// Draws the gong uniformly from the pool's tonics.
    pub fn choose_tonic(self) -> Result<Derivation<'a, R, TonicChosen>, TheoryError> {
        let tonic = *choose_uniform(&mut *self.rng, &self.pool.tonics, "tonic")?;
        debug!(%tonic, "chose gong tonic");
        Ok(self.with_tonic(tonic))
    }

    pub fn with_tonic(self, tonic: Tonic) -> Derivation<'a, R, TonicChosen> {
        self.advance(TonicChosen {
            tonic: tonic.pitch(),
        })
    }
}

impl<'a, R: Rng + ?Sized> Derivation<'a, R, TonicChosen> {
    /// Draws the meter uniformly from the pool's meters.
    pub fn choose_meter(self) -> Result<Derivation<'a, R, MeterChosen>, TheoryError> {
        let meter = *choose_uniform(&mut *self.rng, &self.pool.meters, "meter")?;
        debug!(%meter, "chose meter");
        Ok(self.with_meter(meter))
    }

    pub fn with_meter(self, meter: Meter) -> Derivation<'a, R, MeterChosen> {
        let tonic = self.state.tonic;
        self.advance(MeterChosen { tonic, meter })
    }
}

impl<'a, R: Rng + ?Sized> Derivation<'a, R, MeterChosen> {
    /// Draws the mode family uniformly from the pool's modes.
    pub fn choose_mode(self) -> Result<Derivation<'a, R, ModeChosen>, TheoryError> {
        let mode = choose_mode(&mut *self.rng, &self.pool.modes)?;
        debug!(%mode, hanzi = mode.hanzi(), "chose mode family");
        Ok(self.with_mode(mode))
    }

    pub fn with_mode(self, mode: ModeFamily) -> Derivation<'a, R, ModeChosen> {
        let MeterChosen { tonic, meter } = self.state;
        self.advance(ModeChosen { tonic, meter, mode })
    }
}

impl<'a, R: Rng + ?Sized> Derivation<'a, R, ModeChosen> {
    /// Builds the gong scale from the chosen tonic and mode family.
    pub fn build_scale(self) -> Result<Derivation<'a, R, ScaleBuilt>, TheoryError> {
        let ModeChosen { tonic, meter, mode } = self.state;
        let scale = Scale::build(tonic, &mode.pattern())?;
        debug!(%scale, "built gong scale");
        Ok(self.advance(ScaleBuilt {
            tonic,
            meter,
            mode,
            scale,
        }))
    }
}

impl<'a, R: Rng + ?Sized> Derivation<'a, R, ScaleBuilt> {
    /// Draws the main note using the pool's degree weights.
    pub fn choose_main_note(self) -> Result<Derivation<'a, R, MainNoteChosen>, TheoryError> {
        let selector = MainNoteSelector::new(self.pool.degree_weights);
        let main_note = selector.select(&mut *self.rng, &self.state.scale)?;
        debug!(degree = %main_note.degree, pitch = %main_note.pitch, "chose main note");
        Ok(self.with_main_note(main_note))
    }

    /// Pins the main note to `degree`.
    ///
    /// # Errors
    /// Returns [`TheoryError::AuxiliaryMainNote`] for an auxiliary degree.
    pub fn with_main_degree(
        self,
        degree: Degree,
    ) -> Result<Derivation<'a, R, MainNoteChosen>, TheoryError> {
        let selector = MainNoteSelector::new(self.pool.degree_weights);
        let main_note = selector.force(&self.state.scale, degree)?;
        Ok(self.with_main_note(main_note))
    }

    fn with_main_note(self, main_note: MainNote) -> Derivation<'a, R, MainNoteChosen> {
        let ScaleBuilt {
            tonic,
            meter,
            mode,
            scale,
        } = self.state;
        Derivation {
            rng: self.rng,
            pool: self.pool,
            state: MainNoteChosen {
                tonic,
                meter,
                mode,
                scale,
                main_note,
            },
        }
    }
}

impl<'a, R: Rng + ?Sized> Derivation<'a, R, MainNoteChosen> {
    /// Composes the label and seals the result.
    pub fn finish(self) -> MelodyContext {
        let MainNoteChosen {
            tonic,
            meter,
            mode,
            scale,
            main_note,
        } = self.state;
        let label = label::compose(&tonic, main_note.degree, mode.name());
        let label_hanzi = label::compose_hanzi(&tonic, main_note.degree, mode.hanzi());
        info!(%meter, %label, "derivation complete");
        MelodyContext {
            meter,
            tonic,
            mode,
            scale,
            main_note,
            label,
            label_hanzi,
        }
    }
}

/// The result of one complete derivation.
///
/// Built only by [`Derivation::finish`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MelodyContext {
    meter: Meter,
    tonic: Pitch,
    mode: ModeFamily,
    scale: Scale,
    main_note: MainNote,
    label: String,
    label_hanzi: String,
}

impl MelodyContext {
    /// Runs every step of a derivation with random draws.
    pub fn derive<R: Rng + ?Sized>(rng: &mut R, pool: &ParameterPool) -> Result<Self, TheoryError> {
        Ok(Derivation::new(rng, pool)
            .choose_tonic()?
            .choose_meter()?
            .choose_mode()?
            .build_scale()?
            .choose_main_note()?
            .finish())
    }

    pub fn meter(&self) -> Meter {
        self.meter
    }

    /// The gong pitch (scale position 0).
    pub fn tonic(&self) -> Pitch {
        self.tonic
    }

    pub fn mode(&self) -> ModeFamily {
        self.mode
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn main_note(&self) -> MainNote {
        self.main_note
    }

    /// Label such as "G zhi yanyue".
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Label in traditional notation, such as "G 徵 燕乐调式".
    pub fn label_hanzi(&self) -> &str {
        &self.label_hanzi
    }

    /// Hands the time signature, then the key, to a renderer.
    pub fn write_signature<N: NotationSink + ?Sized>(&self, sink: &mut N) {
        sink.time_signature(self.meter.as_str());
        sink.key_signature(&self.tonic);
    }

    /// Hands every scale pitch, lowest first, to a renderer.
    pub fn write_scale<N: NotationSink + ?Sized>(&self, sink: &mut N) {
        for pitch in self.scale.pitches() {
            sink.note(pitch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::testing::RecordingSink;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derive_is_consistent() {
        let pool = ParameterPool::default();
        for seed in 0..50 {
            let mut rng = create_rng(seed);
            let melody = MelodyContext::derive(&mut rng, &pool).unwrap();
            assert_eq!(melody.scale().len(), 7);
            assert_eq!(melody.scale().tonic(), Some(melody.tonic()));
            assert!(melody.main_note().degree.is_structural());
            assert_eq!(
                melody.scale().get(melody.main_note().degree),
                Some(melody.main_note().pitch)
            );
            assert!(melody.label().ends_with(melody.mode().name()));
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let pool = ParameterPool::default();
        let a = MelodyContext::derive(&mut create_rng(2024), &pool).unwrap();
        let b = MelodyContext::derive(&mut create_rng(2024), &pool).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pinned_pipeline() {
        let pool = ParameterPool::default();
        let mut rng = create_rng(0);
        let melody = Derivation::new(&mut rng, &pool)
            .with_tonic(Tonic::G)
            .with_meter(Meter::ThreeFour)
            .with_mode(ModeFamily::Yanyue)
            .build_scale()
            .unwrap()
            .with_main_degree(Degree::Zhi)
            .unwrap()
            .finish();
        assert_eq!(melody.label(), "G zhi yanyue");
        assert_eq!(melody.label_hanzi(), "G 徵 燕乐调式");
        assert_eq!(melody.main_note().pitch.name_with_octave(), "D5");
        assert_eq!(melody.meter(), Meter::ThreeFour);
    }

    #[test]
    fn test_pinned_auxiliary_main_note_fails() {
        let pool = ParameterPool::default();
        let mut rng = create_rng(0);
        let result = Derivation::new(&mut rng, &pool)
            .with_tonic(Tonic::C)
            .with_meter(Meter::TwoFour)
            .with_mode(ModeFamily::Qingyue)
            .build_scale()
            .unwrap()
            .with_main_degree(Degree::Aux2);
        assert!(matches!(
            result,
            Err(TheoryError::AuxiliaryMainNote {
                degree: Degree::Aux2
            })
        ));
    }

    #[test]
    fn test_empty_pool_domains() {
        let pool = ParameterPool {
            meters: Vec::new(),
            ..ParameterPool::default()
        };
        let err = MelodyContext::derive(&mut create_rng(1), &pool).unwrap_err();
        assert!(matches!(err, TheoryError::EmptyDomain { domain: "meter" }));

        let pool = ParameterPool {
            tonics: Vec::new(),
            ..ParameterPool::default()
        };
        let err = MelodyContext::derive(&mut create_rng(1), &pool).unwrap_err();
        assert!(matches!(err, TheoryError::EmptyDomain { domain: "tonic" }));
    }

    #[test]
    fn test_restricted_pool_is_respected() {
        let pool = ParameterPool {
            tonics: vec![Tonic::E],
            meters: vec![Meter::FourFour],
            modes: vec![ModeFamily::Yayue],
            ..ParameterPool::default()
        };
        for seed in 0..20 {
            let melody = MelodyContext::derive(&mut create_rng(seed), &pool).unwrap();
            assert_eq!(melody.tonic().name_with_octave(), "E4");
            assert_eq!(melody.meter(), Meter::FourFour);
            assert_eq!(melody.mode(), ModeFamily::Yayue);
        }
    }

    #[test]
    fn test_notation_hand_off() {
        let pool = ParameterPool::default();
        let mut rng = create_rng(0);
        let melody = Derivation::new(&mut rng, &pool)
            .with_tonic(Tonic::D)
            .with_meter(Meter::TwoFour)
            .with_mode(ModeFamily::Yayue)
            .build_scale()
            .unwrap()
            .with_main_degree(Degree::Gong)
            .unwrap()
            .finish();

        let mut sink = RecordingSink::default();
        melody.write_signature(&mut sink);
        melody.write_scale(&mut sink);
        assert_eq!(
            sink.events,
            vec![
                "time 2/4",
                "key D",
                "note D4",
                "note E4",
                "note F#4",
                "note G#4",
                "note A4",
                "note B4",
                "note C#5",
            ]
        );
    }

    #[test]
    fn test_serializes_plain_data() {
        let pool = ParameterPool::default();
        let mut rng = create_rng(0);
        let melody = Derivation::new(&mut rng, &pool)
            .with_tonic(Tonic::C)
            .with_meter(Meter::FourFour)
            .with_mode(ModeFamily::Qingyue)
            .build_scale()
            .unwrap()
            .with_main_degree(Degree::Yu)
            .unwrap()
            .finish();
        let value = serde_json::to_value(&melody).unwrap();
        assert_eq!(value["meter"], "4/4");
        assert_eq!(value["tonic"], "C4");
        assert_eq!(value["mode"], "qingyue");
        assert_eq!(value["scale"][6], "B4");
        assert_eq!(value["main_note"]["degree"], "yu");
        assert_eq!(value["main_note"]["pitch"], "A4");
        assert_eq!(value["label"], "C yu qingyue");
    }
}
