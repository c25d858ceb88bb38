//! Liveness guard for the root body.
//!
//! An undamped, frictionless body can still shed almost all tangential
//! velocity at a grazing contact; left alone, the generative loop stalls
//! into silence. After each chord-zone hit the guard inspects the unclamped
//! quantizer level and, when the body is nearly stationary, kicks it back
//! along a diagonal. Heuristic, intentional, not a physics fix.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::EnergizeConfig;
use crate::scene::contact::Vec2;

#[derive(Debug)]
pub struct MomentumGuard {
    cfg: EnergizeConfig,
    /// Diagonal bias, fixed once per run so repeated kicks push the same
    /// way instead of cancelling each other.
    sign: f32,
    rng: SmallRng,
}

impl MomentumGuard {
    pub fn new(cfg: EnergizeConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self { cfg, sign, rng }
    }

    /// `level` is the unclamped, sign-corrected quantizer output for the
    /// contact. Returns the impulse to apply when the root body needs a
    /// kick.
    pub fn check(&mut self, level: i32) -> Option<Vec2> {
        if level >= self.cfg.threshold {
            return None;
        }
        let mag = self.rng.random_range(self.cfg.kick_min..=self.cfg.kick_max) as f32;
        Some(Vec2::new(self.sign * mag, self.sign * mag))
    }

    pub fn sign(&self) -> f32 {
        self.sign
    }
}
