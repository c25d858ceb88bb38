use super::contact::Vec2;
use crate::harmony::degree::Degree;

/// Mutation interface into the physics/rendering collaborator.
///
/// Every call is a one-way push from the session's event loop; nothing is
/// read back through this trait.
pub trait SceneHooks {
    /// Enable or disable a chord zone. The zone's collision body and its
    /// visual enabled/disabled state change together in this one call, so
    /// the physical world and the picture can never disagree.
    fn set_zone_active(&mut self, degree: Degree, active: bool);

    /// Kick the root body with an impulse vector.
    fn apply_root_impulse(&mut self, impulse: Vec2);

    /// Zero the root body's velocity.
    fn stop_root(&mut self);

    /// Spawn a free body at a scene position.
    fn spawn_free_body(&mut self, at: Vec2);

    /// Remove every free body from the scene.
    fn clear_free_bodies(&mut self);
}

impl<T: SceneHooks + ?Sized> SceneHooks for &mut T {
    fn set_zone_active(&mut self, degree: Degree, active: bool) {
        (**self).set_zone_active(degree, active);
    }
    fn apply_root_impulse(&mut self, impulse: Vec2) {
        (**self).apply_root_impulse(impulse);
    }
    fn stop_root(&mut self) {
        (**self).stop_root();
    }
    fn spawn_free_body(&mut self, at: Vec2) {
        (**self).spawn_free_body(at);
    }
    fn clear_free_bodies(&mut self) {
        (**self).clear_free_bodies();
    }
}

/// Scene that ignores every mutation. Used headless and in tests that only
/// watch the audio side.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHooks;

impl SceneHooks for NullHooks {
    fn set_zone_active(&mut self, _degree: Degree, _active: bool) {}
    fn apply_root_impulse(&mut self, _impulse: Vec2) {}
    fn stop_root(&mut self) {}
    fn spawn_free_body(&mut self, _at: Vec2) {}
    fn clear_free_bodies(&mut self) {}
}
