// Frame orchestrator: drives every system in a fixed order each tick and
// routes the events they return.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::domain::mission::{MissionSnapshot, MissionState};
use crate::domain::state::{ControlFrame, EnemyId, PlayerCraft, WeaponMode};
use crate::domain::systems::enemies::EnemyFleet;
use crate::domain::systems::gates::GateRing;
use crate::domain::systems::lock::{LockPhase, LockSnapshot, LockTracker};
use crate::domain::systems::player::step_player;
use crate::domain::systems::projectiles::{
    ENEMY_SHOT_LIFE, FLAK_POOL_CAPACITY, Projectile, ProjectileKind, ProjectilePool,
    VOLLEY_POOL_CAPACITY,
};
use crate::domain::systems::weapons::WeaponStation;
use crate::domain::tuning::{
    GunTuning, LevelConfig, LevelId, LockTuning, MissileTuning, PlayerTuning,
};

/// Upper bound on one integration step; frame hitches are clamped to this so
/// proximity checks stay sound at bounded speeds.
pub const MAX_STEP_SECONDS: f32 = 0.05;

/// Everything one tick produced that the session layer may want to log or
/// react to.
#[derive(Debug, Default)]
pub struct TickReport {
    pub enemies_down: Vec<EnemyId>,
    pub player_hits: u32,
    pub gates_passed: u32,
    pub gate_loop_completed: bool,
    pub level_completed: bool,
    pub level_failed: bool,
}

/// The complete simulation for one pilot session.
///
/// All shared state is owned here and mutated synchronously inside `step`;
/// systems communicate only through the reports they return.
pub struct World {
    tuning: PlayerTuning,
    level: LevelConfig,
    player: PlayerCraft,
    fleet: EnemyFleet,
    gates: GateRing,
    lock: LockTracker,
    weapons: WeaponStation,
    /// Player weapon pool: gun rounds and missiles.
    volley: ProjectilePool,
    /// Enemy fire pool.
    flak: ProjectilePool,
    mission: MissionState,
    rng: StdRng,
}

impl World {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic world for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let tuning = PlayerTuning::default();
        Self {
            player: PlayerCraft::spawn(&tuning),
            fleet: EnemyFleet::new(),
            gates: GateRing::new(&mut rng),
            lock: LockTracker::new(LockTuning::default()),
            weapons: WeaponStation::new(GunTuning::default(), MissileTuning::default()),
            volley: ProjectilePool::with_capacity(VOLLEY_POOL_CAPACITY),
            flak: ProjectilePool::with_capacity(FLAK_POOL_CAPACITY),
            mission: MissionState::menu(),
            level: LevelConfig::preset(LevelId::Patrol),
            tuning,
            rng,
        }
    }

    /// Applies the level's difficulty record and rebuilds every pool, timer,
    /// and counter. Reset is this same full-state overwrite, never an
    /// incremental teardown.
    pub fn start_level(&mut self, level: LevelId) {
        let cfg = LevelConfig::preset(level);
        self.level = cfg;
        self.player = PlayerCraft::spawn(&self.tuning);
        self.fleet.deploy(&cfg, &self.player.transform, &mut self.rng);
        self.gates.reset(&mut self.rng);
        self.volley.clear();
        self.flak.clear();
        self.lock.clear();
        self.weapons.reset();
        self.mission.begin(level, &cfg);
        info!(level = level.index(), enemies = cfg.enemy_count, "level start");
    }

    /// Restarts the current run; a no-op before any level was selected.
    pub fn reset(&mut self) {
        if let Some(level) = self.mission.level {
            info!(level = level.index(), "run reset");
            self.start_level(level);
        }
    }

    pub fn return_to_menu(&mut self) {
        self.mission.return_to_menu();
    }

    /// Advances the simulation by one tick in the fixed order: player
    /// kinematics, gates, enemy AI, weapon/lock handling, projectile pools,
    /// mission bookkeeping. Outside `LevelActive` the world is frozen and the
    /// step is a no-op.
    pub fn step(&mut self, dt: f32, controls: &ControlFrame) -> TickReport {
        let dt = dt.clamp(0.0, MAX_STEP_SECONDS);
        let mut report = TickReport::default();

        if !self.mission.is_active() {
            return report;
        }

        self.mission.tick(dt);
        step_player(&mut self.player, dt, controls, &self.tuning);

        let gate_report = self.gates.step(self.player.transform.position, &mut self.rng);
        report.gates_passed = gate_report.passes;
        report.gate_loop_completed = gate_report.loop_completed;
        self.mission
            .record_gate_passes(gate_report.passes, gate_report.loop_completed);

        let patrol = self.fleet.step(dt, &self.level, &self.player);
        for request in patrol.fire_requests {
            let spawned = self.flak.spawn(Projectile {
                position: request.origin,
                dir: request.dir,
                speed: self.level.shot_speed,
                ttl: ENEMY_SHOT_LIFE,
                kind: ProjectileKind::EnemyShot,
            });
            if spawned.is_none() {
                // Sized for a full fleet; reaching this is a defect.
                error!("enemy fire pool exhausted; shot dropped");
            }
        }
        if !patrol.rams.is_empty() {
            // The rammed slots are already deactivated; a ram that takes out
            // the last enemy wins the level before the hull damage lands.
            report.enemies_down.extend(&patrol.rams);
            self.check_level_complete(&mut report);
            for _ in &patrol.rams {
                self.damage_player(&mut report);
            }
        }

        if controls.switch_weapon {
            self.player.weapon = self.player.weapon.toggled();
            self.lock.clear();
        }
        if self.player.weapon == WeaponMode::Missile {
            if controls.cycle_target {
                self.lock.cycle(&self.player, self.fleet.enemies());
            }
            self.lock.step(dt, &self.player, self.fleet.enemies());
        }

        let _ = self
            .weapons
            .step(dt, &self.player, controls.fire, &self.lock, &mut self.volley);

        let volley_report =
            self.volley
                .step(dt, self.fleet.enemies(), self.player.transform.position);
        for id in volley_report.enemy_hits {
            if self.fleet.disable(id) {
                report.enemies_down.push(id);
            }
        }
        self.check_level_complete(&mut report);

        let flak_report = self
            .flak
            .step(dt, self.fleet.enemies(), self.player.transform.position);
        for _ in 0..flak_report.player_hits {
            self.damage_player(&mut report);
        }

        self.mission.enemies_remaining = self.fleet.active_len();
        report
    }

    fn check_level_complete(&mut self, report: &mut TickReport) {
        self.mission.enemies_remaining = self.fleet.active_len();
        if self.mission.enemies_remaining == 0 && self.mission.complete() {
            report.level_completed = true;
            info!(
                elapsed_ms = self.mission.elapsed_ms as u64,
                gates = self.mission.gates_passed_total,
                "level complete"
            );
        }
    }

    fn damage_player(&mut self, report: &mut TickReport) {
        if self.player.hull == 0 {
            return;
        }
        self.player.hull -= 1;
        report.player_hits += 1;
        info!(hull = self.player.hull, "player hit");
        if self.player.hull == 0 && self.mission.is_active() {
            self.mission.fail();
            report.level_failed = true;
            info!("craft destroyed");
        }
    }

    pub fn player(&self) -> &PlayerCraft {
        &self.player
    }

    pub fn fleet(&self) -> &EnemyFleet {
        &self.fleet
    }

    pub fn gates(&self) -> &GateRing {
        &self.gates
    }

    pub fn volley(&self) -> &ProjectilePool {
        &self.volley
    }

    pub fn flak(&self) -> &ProjectilePool {
        &self.flak
    }

    pub fn mission(&self) -> &MissionState {
        &self.mission
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.mission.elapsed_ms.round() as u64
    }

    pub fn mission_snapshot(&self) -> MissionSnapshot {
        MissionSnapshot {
            phase: self.mission.phase,
            level: self.mission.level,
            elapsed_ms: self.elapsed_ms(),
            gate_rush_remaining_ms: (f64::from(self.mission.gate_rush_remaining.max(0.0))
                * 1000.0)
                .round() as u64,
            gate_rush: self.mission.gate_rush,
            gates_passed: self.gates.passed_count() as u32,
            gates_passed_total: self.mission.gates_passed_total,
            enemies_remaining: self.mission.enemies_remaining,
        }
    }

    /// Lock view as presentation should see it; with the gun selected the
    /// lock readout is blank even while the tracker holds residual state.
    pub fn lock_snapshot(&self) -> LockSnapshot {
        if self.player.weapon != WeaponMode::Missile {
            return LockSnapshot {
                phase: LockPhase::NoLock,
                percent: 0,
                target: None,
            };
        }
        LockSnapshot {
            phase: self.lock.phase(),
            percent: self.lock.percent(),
            target: self.lock.target().map(|id| id.0 as u32),
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
