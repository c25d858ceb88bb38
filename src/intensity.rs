//! Velocity quantizer: raw 2D contact velocity to a bounded trigger
//! intensity.
//!
//! The linear constants were tuned by ear against the scene's typical body
//! speeds and are kept as-is; the mapping only needs to feel right and stay
//! inside the protocol range.

use crate::scene::contact::Vec2;

/// Quietest trigger the sampler is asked to play. Keeps grazing contacts
/// audible.
pub const FLOOR: u8 = 35;

/// Protocol maximum. Values past this can fault the sampler device.
pub const CEILING: u8 = 128;

const SCALE: f32 = 2.0 / 13.0;
const OFFSET: f32 = -23.0;

/// Note-trigger strength in `[FLOOR, CEILING]`, MIDI-velocity-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Intensity(u8);

impl Intensity {
    pub fn get(self) -> u8 {
        self.0
    }

    /// Lift the trigger, saturating at the protocol ceiling.
    pub fn boosted(self, lift: u8) -> Intensity {
        Intensity(self.0.saturating_add(lift).min(CEILING))
    }
}

/// Unclamped, sign-corrected quantizer level.
///
/// Negative results are negated rather than zeroed so a degenerate contact
/// still produces a nonzero level. The momentum guard thresholds against
/// this value: the clamped [`Intensity`] can never fall below [`FLOOR`], so
/// only the raw level can tell a near-stationary root body apart from a
/// lively one.
pub fn raw_level(velocity: Vec2) -> i32 {
    let avg = (velocity.x.abs() + velocity.y.abs()) / 2.0;
    let level = (SCALE * avg + OFFSET).round() as i32;
    level.abs()
}

/// Quantize a contact velocity into a bounded trigger intensity.
pub fn from_velocity(velocity: Vec2) -> Intensity {
    Intensity(raw_level(velocity).clamp(FLOOR as i32, CEILING as i32) as u8)
}
