// Domain-level simulation entities and input/snapshot types.

use glam::{Quat, Vec3};

/// Fleet capacity shared by every level; levels only vary how many slots deploy.
pub const MAX_ENEMIES: usize = 16;

/// Number of rings in the rolling gate corridor.
pub const GATE_COUNT: usize = 7;

/// Position plus unit orientation, owned exclusively by its entity.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Transform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Nose direction in world space (-Z in craft-local space).
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponMode {
    Gun,
    Missile,
}

impl WeaponMode {
    pub fn toggled(self) -> Self {
        match self {
            WeaponMode::Gun => WeaponMode::Missile,
            WeaponMode::Missile => WeaponMode::Gun,
        }
    }
}

pub struct PlayerCraft {
    pub transform: Transform,
    pub speed: f32,
    pub hull: u8,
    pub weapon: WeaponMode,
}

/// Stable identity of an enemy slot in the fleet arena.
///
/// Holders look the enemy up by index and must check `active` before acting;
/// the id never implies ownership or liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnemyId(pub usize);

pub struct Enemy {
    pub position: Vec3,
    pub dir: Vec3,
    pub speed: f32,
    pub active: bool,
    pub fire_cooldown: f32,
}

pub struct Gate {
    pub position: Vec3,
    pub radius: f32,
    pub passed: bool,
}

/// Normalized control-axis snapshot sampled once per tick.
///
/// Axes are in [-1, 1]; `fire` is held state while `switch_weapon` and
/// `cycle_target` are edge-triggered and consumed by the tick that sees them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlFrame {
    pub throttle: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub fire: bool,
    pub switch_weapon: bool,
    pub cycle_target: bool,
}

#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub position: Vec3,
    pub orientation: Quat,
    pub speed: f32,
    pub hull: u8,
    pub weapon: WeaponMode,
}

impl From<&PlayerCraft> for PlayerSnapshot {
    fn from(player: &PlayerCraft) -> Self {
        Self {
            position: player.transform.position,
            orientation: player.transform.orientation,
            speed: player.speed,
            hull: player.hull,
            weapon: player.weapon,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnemySnapshot {
    pub id: u32,
    pub position: Vec3,
    pub active: bool,
}

/// Projectile flavor exposed to presentation; homing detail stays internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileClass {
    Bullet,
    Missile,
    EnemyShot,
}

#[derive(Debug, Clone)]
pub struct ProjectileSnapshot {
    pub position: Vec3,
    pub dir: Vec3,
    pub class: ProjectileClass,
}

#[derive(Debug, Clone)]
pub struct GateSnapshot {
    pub position: Vec3,
    pub radius: f32,
    pub passed: bool,
}

impl From<&Gate> for GateSnapshot {
    fn from(gate: &Gate) -> Self {
        Self {
            position: gate.position,
            radius: gate.radius,
            passed: gate.passed,
        }
    }
}
