//! Pointer-to-effect parameter maps and the discrete touch mode.
//!
//! No smoothing between samples: each pointer sample jumps the parameter
//! immediately. The sampler's own ramping is the only interpolation.

use crate::scene::contact::Vec2;

const CUTOFF_SCALE: f32 = 2.6855;
const CUTOFF_OFFSET_HZ: f32 = 250.0;
const RESONANCE_SCALE: f32 = 0.05347593582;
const RESONANCE_OFFSET_DB: f32 = -20.0;
const REVERB_SCALE: f32 = 0.5 / 1792.0;

/// What a pointer sample means right now. Cycled by a discrete button,
/// independent of anything the collision side does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchMode {
    /// Taps spawn free bodies; no effect commands.
    #[default]
    Create,
    Filter,
    Reverb,
}

impl TouchMode {
    pub fn next(self) -> TouchMode {
        match self {
            TouchMode::Create => TouchMode::Filter,
            TouchMode::Filter => TouchMode::Reverb,
            TouchMode::Reverb => TouchMode::Create,
        }
    }

    /// Label shown by the renderer.
    pub fn label(self) -> &'static str {
        match self {
            TouchMode::Create => "CREATE",
            TouchMode::Filter => "FILTER",
            TouchMode::Reverb => "REVERB",
        }
    }
}

/// Low-pass cutoff and resonance for a pointer position: cutoff sweeps the
/// audible 250..3000 Hz band across the scene width, resonance runs from
/// -20 dB upward over the height.
pub fn filter_params(at: Vec2) -> (f32, f32) {
    let cutoff_hz = at.x * CUTOFF_SCALE + CUTOFF_OFFSET_HZ;
    let resonance_db = at.y * RESONANCE_SCALE + RESONANCE_OFFSET_DB;
    (cutoff_hz, resonance_db)
}

/// Reverb wet/dry mix, scaling the scene diagonal into [0, 0.5].
pub fn reverb_mix(at: Vec2) -> f32 {
    (at.x + at.y).trunc() * REVERB_SCALE
}
