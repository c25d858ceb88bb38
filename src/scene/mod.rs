pub mod contact;
pub mod hooks;

pub use contact::{ContactEvent, Participant, Vec2};
pub use hooks::{NullHooks, SceneHooks};
