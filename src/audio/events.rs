use crate::intensity::Intensity;

/// MIDI note number understood by the sampler collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch(pub u8);

/// One-way command into the sampler/effects chain. Transient: computed,
/// pushed, forgotten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    NoteOn {
        pitch: Pitch,
        intensity: Intensity,
    },
    SetFilter {
        cutoff_hz: f32,
        resonance_db: f32,
    },
    SetReverbMix {
        mix: f32,
    },
    SetDelay {
        mix: f32,
        time_sec: f32,
    },
    /// Restart the audio engine after a fault or a scene reset.
    Reset,
}
