// Use-case layer: the session world loop and its event/snapshot contracts.

pub mod session;
pub mod types;

pub use session::{snapshot_world, world_task};
pub use types::{ScoreEntry, ScoreboardView, SessionEvent, WorldUpdate};
