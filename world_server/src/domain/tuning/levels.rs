use crate::domain::state::MAX_ENEMIES;

/// Selectable difficulty tiers offered in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelId {
    Patrol,
    Assault,
    Gauntlet,
}

impl LevelId {
    /// Maps the wire-level numeric selection to a tier.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(LevelId::Patrol),
            1 => Some(LevelId::Assault),
            2 => Some(LevelId::Gauntlet),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            LevelId::Patrol => 0,
            LevelId::Assault => 1,
            LevelId::Gauntlet => 2,
        }
    }
}

/// Immutable difficulty parameters, swapped wholesale on level entry.
#[derive(Debug, Clone, Copy)]
pub struct LevelConfig {
    /// Enemy slots deployed for the level; at most `MAX_ENEMIES`.
    pub enemy_count: usize,

    /// Distance inside which enemies pursue the player.
    pub track_range: f32,

    /// Seconds between shots once an enemy is in firing range.
    pub fire_interval: f32,

    /// Enemy round speed in world units per second.
    pub shot_speed: f32,

    /// Steering blend rate in radians-equivalent per second.
    pub turn_rate: f32,

    /// Enemy cruise speed range; each slot draws its own value on deploy.
    pub speed_min: f32,
    pub speed_max: f32,

    /// Side-objective window: seconds to clear a full gate loop.
    pub gate_rush_secs: f32,
}

impl LevelConfig {
    pub fn preset(id: LevelId) -> Self {
        let cfg = match id {
            LevelId::Patrol => Self {
                enemy_count: 6,
                track_range: 50.0,
                fire_interval: 1.6,
                shot_speed: 28.0,
                turn_rate: 2.4,
                speed_min: 12.0,
                speed_max: 18.0,
                gate_rush_secs: 90.0,
            },
            LevelId::Assault => Self {
                enemy_count: 10,
                track_range: 60.0,
                fire_interval: 1.3,
                shot_speed: 32.0,
                turn_rate: 2.8,
                speed_min: 14.0,
                speed_max: 21.0,
                gate_rush_secs: 75.0,
            },
            LevelId::Gauntlet => Self {
                enemy_count: 14,
                track_range: 70.0,
                fire_interval: 1.0,
                shot_speed: 36.0,
                turn_rate: 3.2,
                speed_min: 16.0,
                speed_max: 24.0,
                gate_rush_secs: 60.0,
            },
        };
        debug_assert!(cfg.enemy_count <= MAX_ENEMIES);
        cfg
    }
}
