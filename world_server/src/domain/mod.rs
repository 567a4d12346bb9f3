// Domain layer: core simulation types, systems, and rules.

pub mod mission;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod world;

pub use mission::{GateRushStatus, MissionPhase, MissionSnapshot, MissionState};
pub use state::{
    ControlFrame, Enemy, EnemyId, EnemySnapshot, Gate, GateSnapshot, PlayerCraft, PlayerSnapshot,
    ProjectileClass, ProjectileSnapshot, Transform, WeaponMode,
};
pub use world::{MAX_STEP_SECONDS, TickReport, World};
