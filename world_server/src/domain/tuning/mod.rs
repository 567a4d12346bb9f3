// Gameplay tuning records, kept apart from runtime/server configuration.

pub mod levels;
pub mod player;
pub mod weapons;

pub use levels::{LevelConfig, LevelId};
pub use player::PlayerTuning;
pub use weapons::{GunTuning, LockTuning, MissileTuning};
