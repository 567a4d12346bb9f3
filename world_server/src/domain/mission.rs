// Mission and side-objective bookkeeping.

use crate::domain::tuning::{LevelConfig, LevelId};

/// Exactly one phase holds at any time. Anything other than `LevelActive`
/// freezes gameplay stepping; snapshots keep flowing for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionPhase {
    Menu,
    LevelActive,
    LevelComplete,
    LevelFailed,
}

/// Timed secondary goal: clear a full gate loop before the window closes.
/// Tracked independently of the main win/lose condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRushStatus {
    Active,
    Complete,
    Failed,
}

pub struct MissionState {
    pub phase: MissionPhase,
    /// Last selected level; retained through menu returns so a reset can
    /// restart the same run.
    pub level: Option<LevelId>,
    /// Run timer in milliseconds; counts up only while the level is active.
    pub elapsed_ms: f64,
    pub gate_rush_remaining: f32,
    pub gate_rush: GateRushStatus,
    pub gates_passed_total: u32,
    pub enemies_remaining: usize,
}

impl MissionState {
    pub fn menu() -> Self {
        Self {
            phase: MissionPhase::Menu,
            level: None,
            elapsed_ms: 0.0,
            gate_rush_remaining: 0.0,
            gate_rush: GateRushStatus::Active,
            gates_passed_total: 0,
            enemies_remaining: 0,
        }
    }

    /// Enters `LevelActive` with fresh timers and counters for `cfg`.
    pub fn begin(&mut self, level: LevelId, cfg: &LevelConfig) {
        self.phase = MissionPhase::LevelActive;
        self.level = Some(level);
        self.elapsed_ms = 0.0;
        self.gate_rush_remaining = cfg.gate_rush_secs;
        self.gate_rush = GateRushStatus::Active;
        self.gates_passed_total = 0;
        self.enemies_remaining = cfg.enemy_count;
    }

    pub fn return_to_menu(&mut self) {
        self.phase = MissionPhase::Menu;
    }

    /// Advances the run timer and the side-objective countdown. The window
    /// expiring forfeits the side reward without ending the level.
    pub fn tick(&mut self, dt: f32) {
        self.elapsed_ms += f64::from(dt) * 1000.0;

        if self.gate_rush == GateRushStatus::Active {
            self.gate_rush_remaining -= dt;
            if self.gate_rush_remaining <= 0.0 {
                self.gate_rush_remaining = 0.0;
                self.gate_rush = GateRushStatus::Failed;
            }
        }
    }

    pub fn record_gate_passes(&mut self, passes: u32, loop_completed: bool) {
        self.gates_passed_total += passes;
        if loop_completed && self.gate_rush == GateRushStatus::Active {
            self.gate_rush = GateRushStatus::Complete;
        }
    }

    /// Marks the level won; only an active level can complete, so a craft
    /// already lost stays lost.
    pub fn complete(&mut self) -> bool {
        if self.phase == MissionPhase::LevelActive {
            self.phase = MissionPhase::LevelComplete;
            return true;
        }
        false
    }

    pub fn fail(&mut self) {
        if self.phase == MissionPhase::LevelActive {
            self.phase = MissionPhase::LevelFailed;
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == MissionPhase::LevelActive
    }
}

/// Read-only mission view handed to presentation each tick.
#[derive(Debug, Clone)]
pub struct MissionSnapshot {
    pub phase: MissionPhase,
    pub level: Option<LevelId>,
    pub elapsed_ms: u64,
    pub gate_rush_remaining_ms: u64,
    pub gate_rush: GateRushStatus,
    pub gates_passed: u32,
    pub gates_passed_total: u32,
    pub enemies_remaining: usize,
}
