use crate::harmony::degree::Degree;

pub type Vec2 = nalgebra::Vector2<f32>;

/// Role of one side of a physics contact, as tagged by the scene
/// collaborator when it translates its contact notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Participant {
    /// A spawned, freely moving body.
    FreeBody,
    /// The single persistent body whose zone hits drive the harmony.
    RootBody,
    /// One of the fixed key zones, indexed left to right.
    PitchZone(u8),
    /// One of the seven fixed chord zones.
    ChordZone(Degree),
    /// The scene edge loop.
    Boundary,
    /// Anything the scene collaborator could not name.
    Unknown,
}

/// A single contact notification. Consumed by the router and discarded;
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub a: Participant,
    pub b: Participant,
    /// Velocity of the moving participant at the moment of contact.
    pub velocity: Vec2,
}

impl ContactEvent {
    pub fn new(a: Participant, b: Participant, velocity: Vec2) -> Self {
        Self { a, b, velocity }
    }
}
