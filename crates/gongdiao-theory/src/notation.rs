//! Hand-off boundary towards a notation or playback renderer.
//!
//! Rendering lives outside this crate. A renderer implements
//! [`NotationSink`] and receives plain data only: meter strings and pitches.

use crate::pitch::Pitch;

/// Receiver for the data a score renderer needs.
pub trait NotationSink {
    /// Sets the time signature, e.g. "3/4".
    fn time_signature(&mut self, meter: &str);

    /// Sets the key by its gong (palace) pitch.
    fn key_signature(&mut self, tonic: &Pitch);

    /// Appends one note.
    fn note(&mut self, pitch: &Pitch);
}
