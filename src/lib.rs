//! Event-mapping core for a collision-driven generative-music toy.
//!
//! Freely moving bodies bounce around a 2D scene and collide with fixed key
//! zones, seven chord zones and a persistent root body. This crate sits
//! between the physics/rendering collaborator and the sampler/effects chain:
//! it classifies every contact, quantizes impact velocity into a bounded
//! trigger intensity, keeps the harmonic degree state that decides which
//! notes sound next, and keeps the root body moving so the texture never
//! falls silent. It owns no windowing, no physics stepping and no DSP.

pub mod audio;
pub mod config;
pub mod effects;
pub mod energize;
pub mod harmony;
pub mod intensity;
pub mod router;
pub mod scene;
pub mod session;

pub use config::EngineConfig;
pub use session::Session;
