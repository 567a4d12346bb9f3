// Use-case level inputs/outputs for the session loop.

use crate::domain::systems::lock::LockSnapshot;
use crate::domain::tuning::LevelId;
use crate::domain::{
    ControlFrame, EnemySnapshot, GateSnapshot, MissionSnapshot, PlayerSnapshot, ProjectileSnapshot,
};

/// Everything a connected client can ask of its world.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    Controls(ControlFrame),
    StartLevel { level: LevelId },
    Reset,
    SubmitName { name: String },
}

/// Read-only snapshot of one tick, emitted for presentation. Consumers never
/// feed it back into the simulation.
#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub player: PlayerSnapshot,
    pub enemies: Vec<EnemySnapshot>,
    pub gates: Vec<GateSnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub lock: LockSnapshot,
    pub mission: MissionSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub time_ms: u64,
}

/// Latest leaderboard rows known to the session; stale after a failed refresh
/// until the next one succeeds.
#[derive(Debug, Clone, Default)]
pub struct ScoreboardView {
    pub entries: Vec<ScoreEntry>,
}
