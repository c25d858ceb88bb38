//! The session: all mutable toy state in one place, driven by the
//! collaborator's frame-stepped event loop.
//!
//! One contact or pointer sample is fully processed before the next is
//! accepted; every dispatch is a `&mut self` call, so a degree read and the
//! note it selects can never interleave with a concurrent transition. The
//! audio side runs on its own thread behind [`AudioSink`] and is never
//! waited on.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::audio::events::AudioCommand;
use crate::audio::sink::AudioSink;
use crate::config::EngineConfig;
use crate::effects::{self, TouchMode};
use crate::energize::MomentumGuard;
use crate::harmony::degree::Degree;
use crate::harmony::tables;
use crate::harmony::voices::VoiceMask;
use crate::intensity;
use crate::router::{Dispatch, classify};
use crate::scene::contact::{ContactEvent, Vec2};
use crate::scene::hooks::SceneHooks;

/// Lift added to bass triggers so chord changes cut through the key
/// texture.
const BASS_LIFT: u8 = 30;

pub struct Session<A, H> {
    degree: Degree,
    voices: VoiceMask,
    mode: TouchMode,
    playing: bool,
    free_bodies: usize,
    guard: MomentumGuard,
    rng: SmallRng,
    config: EngineConfig,
    audio: A,
    scene: H,
}

impl<A: AudioSink, H: SceneHooks> Session<A, H> {
    pub fn new(config: EngineConfig, audio: A, scene: H) -> Self {
        Self::with_seed(config, rand::rng().random(), audio, scene)
    }

    /// Seeded constructor; every random choice the session ever makes
    /// (launch kicks, guard kicks, the guard's diagonal bias) derives from
    /// `seed`.
    pub fn with_seed(config: EngineConfig, seed: u64, audio: A, scene: H) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let guard = MomentumGuard::new(config.energize, rng.random());
        Self {
            degree: Degree::I,
            voices: VoiceMask::new(),
            mode: TouchMode::default(),
            playing: true,
            free_bodies: 0,
            guard,
            rng,
            config,
            audio,
            scene,
        }
    }

    /// Set the root body moving. Call once after the scene is built.
    pub fn launch_root(&mut self) {
        let kick = self.launch_impulse();
        self.scene.apply_root_impulse(kick);
        debug!("root launched with {kick:?}");
    }

    /// Process one contact notification from the physics collaborator.
    /// Synchronous; emits at most one note command.
    pub fn on_contact(&mut self, ev: ContactEvent) {
        match classify(&ev) {
            Dispatch::KeyStrike { key, velocity } => self.key_strike(key, velocity),
            Dispatch::ChordStrike { degree, velocity } => self.chord_strike(degree, velocity),
            Dispatch::Silent => {}
        }
    }

    fn key_strike(&mut self, key: usize, velocity: Vec2) {
        let intensity = intensity::from_velocity(velocity);
        let pitch = tables::chord_tone(self.degree, key);
        trace!(
            "key {key} on {} -> pitch {} at {}",
            self.degree,
            pitch.0,
            intensity.get()
        );
        self.audio.send(AudioCommand::NoteOn { pitch, intensity });
    }

    fn chord_strike(&mut self, degree: Degree, velocity: Vec2) {
        // The scene collaborator removes disabled zones from the world, but
        // a contact can still arrive from the same frame as the disable.
        if !self.voices.is_enabled(degree) {
            trace!("contact on disabled chord zone {degree} dropped");
            return;
        }

        let raw = intensity::raw_level(velocity);
        let intensity = intensity::from_velocity(velocity).boosted(BASS_LIFT);
        self.audio.send(AudioCommand::NoteOn {
            pitch: tables::bass_tone(degree),
            intensity,
        });

        if self.degree != degree {
            debug!("chord {} -> {}", self.degree, degree);
        }
        self.degree = degree;

        if let Some(kick) = self.guard.check(raw) {
            self.scene.apply_root_impulse(kick);
            debug!("root re-energized with {kick:?} (level {raw})");
        }
    }

    /// Process a pointer-down sample. In create mode this may spawn a free
    /// body; in the effect modes it steers the active effect exactly like a
    /// move sample.
    pub fn on_pointer_down(&mut self, at: Vec2) {
        match self.mode {
            TouchMode::Create => self.try_spawn(at),
            TouchMode::Filter | TouchMode::Reverb => self.push_effect(at),
        }
    }

    /// Process a pointer-move sample. Create mode ignores drags.
    pub fn on_pointer_move(&mut self, at: Vec2) {
        if self.mode != TouchMode::Create {
            self.push_effect(at);
        }
    }

    fn push_effect(&mut self, at: Vec2) {
        match self.mode {
            TouchMode::Filter => {
                let (cutoff_hz, resonance_db) = effects::filter_params(at);
                self.audio.send(AudioCommand::SetFilter {
                    cutoff_hz,
                    resonance_db,
                });
            }
            TouchMode::Reverb => {
                let mix = effects::reverb_mix(at);
                self.audio.send(AudioCommand::SetReverbMix { mix });
            }
            TouchMode::Create => {}
        }
    }

    fn try_spawn(&mut self, at: Vec2) {
        if self.free_bodies >= self.config.play.max_free_bodies {
            trace!("spawn refused, budget of {} used", self.free_bodies);
            return;
        }
        self.free_bodies += 1;
        self.scene.spawn_free_body(at);
    }

    /// Advance the touch mode; returns the new mode for the renderer.
    pub fn cycle_mode(&mut self) -> TouchMode {
        self.mode = self.mode.next();
        debug!("touch mode -> {}", self.mode.label());
        self.mode
    }

    /// Flip the transport; returns true when playing.
    pub fn toggle_playing(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Enable or disable one chord zone's voice. The mask bit, the zone's
    /// collision body and its visual state all change in this one call.
    pub fn toggle_voice(&mut self, degree: Degree) -> bool {
        let enabled = self.voices.toggle(degree);
        self.scene.set_zone_active(degree, enabled);
        debug!(
            "chord zone {degree} {}",
            if enabled { "enabled" } else { "disabled" }
        );
        enabled
    }

    /// Pass the delay controls through to the sampler.
    pub fn set_delay(&mut self, mix: f32, time_sec: f32) {
        self.audio.send(AudioCommand::SetDelay { mix, time_sec });
    }

    /// External reset request: clear the free bodies, relaunch the root
    /// body, restore the tonic, restart the audio engine. The voice mask is
    /// a user setting and survives.
    pub fn reset(&mut self) {
        self.free_bodies = 0;
        self.scene.clear_free_bodies();
        self.scene.stop_root();
        self.launch_root();
        self.degree = Degree::I;
        self.audio.send(AudioCommand::Reset);
        debug!("session reset");
    }

    fn launch_impulse(&mut self) -> Vec2 {
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let mag = self
            .rng
            .random_range(self.config.play.launch_min..=self.config.play.launch_max)
            as f32;
        Vec2::new(sign * mag, sign * mag)
    }

    // Queries for the rendering collaborator.

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn mode(&self) -> TouchMode {
        self.mode
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play_label(&self) -> &'static str {
        if self.playing { "PLAYING" } else { "PAUSED" }
    }

    pub fn voice_enabled(&self, degree: Degree) -> bool {
        self.voices.is_enabled(degree)
    }

    pub fn free_body_count(&self) -> usize {
        self.free_bodies
    }
}
