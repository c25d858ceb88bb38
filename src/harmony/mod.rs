pub mod degree;
pub mod tables;
pub mod voices;

pub use degree::Degree;
pub use voices::VoiceMask;
