// Missile target-lock state machine.

use crate::domain::state::{Enemy, EnemyId, PlayerCraft};
use crate::domain::tuning::LockTuning;

/// Externally visible lock condition derived from the tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockPhase {
    NoLock,
    Acquiring,
    Ready,
}

/// Read-only lock view handed to presentation each tick.
#[derive(Debug, Clone)]
pub struct LockSnapshot {
    pub phase: LockPhase,
    pub percent: u8,
    pub target: Option<u32>,
}

/// Tracks the current missile-lock candidate and its acquisition progress.
///
/// Progress only accrues while the same candidate stays valid; switching
/// candidates resets it, and an empty candidate set decays it toward zero at
/// an elevated rate so a brief occlusion does not discard a near-complete
/// lock outright.
pub struct LockTracker {
    tuning: LockTuning,
    target: Option<EnemyId>,
    progress: f32,
}

impl LockTracker {
    pub fn new(tuning: LockTuning) -> Self {
        Self {
            tuning,
            target: None,
            progress: 0.0,
        }
    }

    pub fn clear(&mut self) {
        self.target = None;
        self.progress = 0.0;
    }

    pub fn target(&self) -> Option<EnemyId> {
        self.target
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn percent(&self) -> u8 {
        ((self.progress / self.tuning.time) * 100.0).floor().min(100.0) as u8
    }

    pub fn phase(&self) -> LockPhase {
        match self.target {
            None => LockPhase::NoLock,
            Some(_) if self.is_ready() => LockPhase::Ready,
            Some(_) => LockPhase::Acquiring,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.target.is_some() && self.progress >= self.tuning.time
    }

    pub fn step(&mut self, dt: f32, player: &PlayerCraft, enemies: &[Enemy]) {
        let candidates = self.candidates(player, enemies);

        if candidates.is_empty() {
            self.target = None;
            self.progress = (self.progress - dt * self.tuning.decay_rate).max(0.0);
        } else if self
            .target
            .is_some_and(|target| candidates.contains(&target))
        {
            self.progress = (self.progress + dt).min(self.tuning.time);
        } else {
            self.target = Some(candidates[0]);
            self.progress = 0.0;
        }
    }

    /// Advances to the next candidate in nearest-first order, wrapping around,
    /// and restarts acquisition.
    pub fn cycle(&mut self, player: &PlayerCraft, enemies: &[Enemy]) {
        let candidates = self.candidates(player, enemies);
        if candidates.is_empty() {
            self.clear();
            return;
        }

        let next = match self.target.and_then(|target| {
            candidates.iter().position(|candidate| *candidate == target)
        }) {
            Some(index) => candidates[(index + 1) % candidates.len()],
            None => candidates[0],
        };
        self.target = Some(next);
        self.progress = 0.0;
    }

    /// Active enemies inside the range and forward cone, nearest first.
    fn candidates(&self, player: &PlayerCraft, enemies: &[Enemy]) -> Vec<EnemyId> {
        let forward = player.transform.forward();
        let origin = player.transform.position;

        let mut candidates: Vec<(EnemyId, f32)> = enemies
            .iter()
            .enumerate()
            .filter_map(|(slot, enemy)| {
                if !enemy.active {
                    return None;
                }
                let to_enemy = enemy.position - origin;
                let distance = to_enemy.length();
                if distance > self.tuning.range {
                    return None;
                }
                let aligned = to_enemy
                    .try_normalize()
                    .is_some_and(|dir| dir.dot(forward) >= self.tuning.min_dot);
                aligned.then_some((EnemyId(slot), distance))
            })
            .collect();

        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        candidates.into_iter().map(|(id, _)| id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::{Transform, WeaponMode};
    use crate::domain::tuning::PlayerTuning;
    use glam::Vec3;

    const DT: f32 = 0.016;

    fn test_player() -> PlayerCraft {
        let tuning = PlayerTuning::default();
        PlayerCraft {
            transform: Transform::new(tuning.spawn),
            speed: tuning.start_speed,
            hull: tuning.max_hull,
            weapon: WeaponMode::Missile,
        }
    }

    fn enemy_ahead(player: &PlayerCraft, distance: f32) -> Enemy {
        Enemy {
            position: player.transform.position + player.transform.forward() * distance,
            dir: Vec3::Z,
            speed: 0.0,
            active: true,
            fire_cooldown: 1.0,
        }
    }

    #[test]
    fn when_a_candidate_stays_in_the_cone_then_progress_rises_monotonically_to_the_cap() {
        let player = test_player();
        let enemies = vec![enemy_ahead(&player, 40.0)];
        let mut lock = LockTracker::new(LockTuning::default());

        lock.step(DT, &player, &enemies);
        assert_eq!(lock.target(), Some(EnemyId(0)));
        assert_eq!(lock.progress(), 0.0);
        assert_eq!(lock.phase(), LockPhase::Acquiring);

        let mut previous = 0.0;
        for _ in 0..200 {
            lock.step(DT, &player, &enemies);
            assert!(lock.progress() >= previous);
            previous = lock.progress();
        }

        assert!(lock.is_ready());
        assert_eq!(lock.phase(), LockPhase::Ready);
        assert!(lock.progress() <= LockTuning::default().time);
        assert_eq!(lock.percent(), 100);
    }

    #[test]
    fn when_no_candidate_exists_then_progress_decays_faster_and_never_goes_negative() {
        let player = test_player();
        let enemies = vec![enemy_ahead(&player, 40.0)];
        let mut lock = LockTracker::new(LockTuning::default());

        for _ in 0..40 {
            lock.step(DT, &player, &enemies);
        }
        let held = lock.progress();
        assert!(held > 0.0);

        let nobody: Vec<Enemy> = Vec::new();
        lock.step(DT, &player, &nobody);
        assert_eq!(lock.target(), None);
        assert!((held - lock.progress() - DT * 1.5).abs() < 1e-5);

        for _ in 0..500 {
            lock.step(DT, &player, &nobody);
        }
        assert_eq!(lock.progress(), 0.0);
        assert_eq!(lock.phase(), LockPhase::NoLock);
    }

    #[test]
    fn when_the_tracked_target_dies_then_the_nearest_remaining_candidate_takes_over_from_zero() {
        let player = test_player();
        let mut enemies = vec![enemy_ahead(&player, 30.0), enemy_ahead(&player, 60.0)];
        let mut lock = LockTracker::new(LockTuning::default());

        for _ in 0..20 {
            lock.step(DT, &player, &enemies);
        }
        assert_eq!(lock.target(), Some(EnemyId(0)));
        assert!(lock.progress() > 0.0);

        enemies[0].active = false;
        lock.step(DT, &player, &enemies);

        assert_eq!(lock.target(), Some(EnemyId(1)));
        assert_eq!(lock.progress(), 0.0);
    }

    #[test]
    fn when_an_enemy_is_outside_the_forward_cone_then_it_is_never_a_candidate() {
        let player = test_player();
        let beside = Enemy {
            position: player.transform.position + Vec3::new(40.0, 0.0, 0.0),
            dir: Vec3::Z,
            speed: 0.0,
            active: true,
            fire_cooldown: 1.0,
        };
        let mut lock = LockTracker::new(LockTuning::default());

        lock.step(DT, &player, &[beside]);

        assert_eq!(lock.target(), None);
    }

    #[test]
    fn when_an_enemy_is_beyond_lock_range_then_it_is_never_a_candidate() {
        let player = test_player();
        let far = enemy_ahead(&player, 150.0);
        let mut lock = LockTracker::new(LockTuning::default());

        lock.step(DT, &player, &[far]);

        assert_eq!(lock.target(), None);
    }

    #[test]
    fn when_the_pilot_cycles_targets_then_selection_wraps_in_nearest_first_order() {
        let player = test_player();
        let enemies = vec![enemy_ahead(&player, 60.0), enemy_ahead(&player, 30.0)];
        let mut lock = LockTracker::new(LockTuning::default());

        // Nearest first: slot 1 at 30 units.
        lock.step(DT, &player, &enemies);
        assert_eq!(lock.target(), Some(EnemyId(1)));

        for _ in 0..10 {
            lock.step(DT, &player, &enemies);
        }
        assert!(lock.progress() > 0.0);

        lock.cycle(&player, &enemies);
        assert_eq!(lock.target(), Some(EnemyId(0)));
        assert_eq!(lock.progress(), 0.0);

        lock.cycle(&player, &enemies);
        assert_eq!(lock.target(), Some(EnemyId(1)));
    }
}
