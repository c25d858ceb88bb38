pub mod events;
pub mod sink;

pub use events::{AudioCommand, Pitch};
pub use sink::AudioSink;
