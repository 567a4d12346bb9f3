// Per-tick simulation systems; each exposes a step that returns what the
// orchestrator must act on, instead of calling back into other components.

pub mod collision;
pub mod enemies;
pub mod gates;
pub mod lock;
pub mod player;
pub mod projectiles;
pub mod weapons;
