// Wire protocol DTOs and conversions for public session messages.
// Internal service-to-service DTOs live with their clients instead.

use serde::{Deserialize, Serialize};

use crate::domain::mission::{GateRushStatus, MissionPhase, MissionSnapshot};
use crate::domain::state::{
    ControlFrame, EnemySnapshot, GateSnapshot, PlayerSnapshot, ProjectileClass,
    ProjectileSnapshot, WeaponMode,
};
use crate::domain::systems::lock::{LockPhase, LockSnapshot};
use crate::use_cases::types::{ScoreboardView, WorldUpdate};

/// Messages the server sends to the connected client over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Snapshot of the world for a given tick.
    Snapshot(WorldUpdateDto),
    // Latest known leaderboard rows.
    Scoreboard(ScoreboardDto),
}

/// Messages the client sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Per-tick control-axis snapshot.
    Controls(ControlFrameDto),
    // Menu selection entering a level.
    StartLevel(StartLevelPayload),
    // Full-state restart of the current run.
    Reset,
    // Pilot name for the completed run's score submission.
    SubmitName(SubmitNamePayload),
}

/// Control axes as sent by the client; every field defaults so partial
/// frames stay valid.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlFrameDto {
    #[serde(default)]
    pub throttle: f32,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub roll: f32,
    #[serde(default)]
    pub fire: bool,
    #[serde(default)]
    pub switch_weapon: bool,
    #[serde(default)]
    pub cycle_target: bool,
}

impl From<ControlFrameDto> for ControlFrame {
    fn from(dto: ControlFrameDto) -> Self {
        Self {
            throttle: dto.throttle,
            pitch: dto.pitch,
            yaw: dto.yaw,
            roll: dto.roll,
            fire: dto.fire,
            switch_weapon: dto.switch_weapon,
            cycle_target: dto.cycle_target,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartLevelPayload {
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitNamePayload {
    pub name: String,
}

/// Snapshot of the world sent to the client on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub player: PlayerStateDto,
    pub enemies: Vec<EnemyStateDto>,
    pub gates: Vec<GateStateDto>,
    pub projectiles: Vec<ProjectileStateDto>,
    pub lock: LockStateDto,
    pub mission: MissionStateDto,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            player: PlayerStateDto::from(&update.player),
            enemies: update.enemies.iter().map(EnemyStateDto::from).collect(),
            gates: update.gates.iter().map(GateStateDto::from).collect(),
            projectiles: update
                .projectiles
                .iter()
                .map(ProjectileStateDto::from)
                .collect(),
            lock: LockStateDto::from(&update.lock),
            mission: MissionStateDto::from(&update.mission),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateDto {
    pub position: [f32; 3],
    pub orientation: [f32; 4],
    pub speed: f32,
    pub hull: u8,
    pub weapon: &'static str,
}

impl From<&PlayerSnapshot> for PlayerStateDto {
    fn from(player: &PlayerSnapshot) -> Self {
        Self {
            position: player.position.to_array(),
            orientation: player.orientation.to_array(),
            speed: player.speed,
            hull: player.hull,
            weapon: match player.weapon {
                WeaponMode::Gun => "gun",
                WeaponMode::Missile => "missile",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyStateDto {
    pub id: u32,
    pub position: [f32; 3],
    pub active: bool,
}

impl From<&EnemySnapshot> for EnemyStateDto {
    fn from(enemy: &EnemySnapshot) -> Self {
        Self {
            id: enemy.id,
            position: enemy.position.to_array(),
            active: enemy.active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GateStateDto {
    pub position: [f32; 3],
    pub radius: f32,
    pub passed: bool,
}

impl From<&GateSnapshot> for GateStateDto {
    fn from(gate: &GateSnapshot) -> Self {
        Self {
            position: gate.position.to_array(),
            radius: gate.radius,
            passed: gate.passed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileStateDto {
    pub position: [f32; 3],
    pub dir: [f32; 3],
    pub kind: &'static str,
}

impl From<&ProjectileSnapshot> for ProjectileStateDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            position: projectile.position.to_array(),
            dir: projectile.dir.to_array(),
            kind: match projectile.class {
                ProjectileClass::Bullet => "bullet",
                ProjectileClass::Missile => "missile",
                ProjectileClass::EnemyShot => "enemy_shot",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LockStateDto {
    pub phase: &'static str,
    pub percent: u8,
    pub target: Option<u32>,
}

impl From<&LockSnapshot> for LockStateDto {
    fn from(lock: &LockSnapshot) -> Self {
        Self {
            phase: match lock.phase {
                LockPhase::NoLock => "none",
                LockPhase::Acquiring => "acquiring",
                LockPhase::Ready => "ready",
            },
            percent: lock.percent,
            target: lock.target,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MissionStateDto {
    pub phase: &'static str,
    pub level: Option<u8>,
    pub elapsed_ms: u64,
    pub gate_rush_remaining_ms: u64,
    pub gate_rush: &'static str,
    pub gates_passed: u32,
    pub gates_passed_total: u32,
    pub enemies_remaining: usize,
}

impl From<&MissionSnapshot> for MissionStateDto {
    fn from(mission: &MissionSnapshot) -> Self {
        Self {
            phase: match mission.phase {
                MissionPhase::Menu => "menu",
                MissionPhase::LevelActive => "level_active",
                MissionPhase::LevelComplete => "level_complete",
                MissionPhase::LevelFailed => "level_failed",
            },
            level: mission.level.map(|level| level.index()),
            elapsed_ms: mission.elapsed_ms,
            gate_rush_remaining_ms: mission.gate_rush_remaining_ms,
            gate_rush: match mission.gate_rush {
                GateRushStatus::Active => "active",
                GateRushStatus::Complete => "complete",
                GateRushStatus::Failed => "failed",
            },
            gates_passed: mission.gates_passed,
            gates_passed_total: mission.gates_passed_total,
            enemies_remaining: mission.enemies_remaining,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreboardDto {
    pub items: Vec<ScoreItemDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreItemDto {
    pub name: String,
    pub time_ms: u64,
}

impl From<ScoreboardView> for ScoreboardDto {
    fn from(view: ScoreboardView) -> Self {
        Self {
            items: view
                .entries
                .into_iter()
                .map(|entry| ScoreItemDto {
                    name: entry.name,
                    time_ms: entry.time_ms,
                })
                .collect(),
        }
    }
}
