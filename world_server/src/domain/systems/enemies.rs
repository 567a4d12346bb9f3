// Enemy steering, fire gating, and ramming resolution.

use glam::Vec3;
use rand::Rng;

use crate::domain::state::{Enemy, EnemyId, MAX_ENEMIES, PlayerCraft, Transform};
use crate::domain::systems::collision;
use crate::domain::tuning::LevelConfig;

/// A shot an enemy wants fired this tick; the orchestrator spawns it into the
/// enemy fire pool.
#[derive(Debug, Clone, Copy)]
pub struct FireRequest {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Everything one fleet step produced for the orchestrator to act on.
#[derive(Debug, Default)]
pub struct PatrolReport {
    pub fire_requests: Vec<FireRequest>,
    /// Enemies that rammed the player this tick; each is already deactivated
    /// and costs the player one hull point, in that order.
    pub rams: Vec<EnemyId>,
}

/// Fixed arena of enemy slots; levels deploy a prefix of it.
pub struct EnemyFleet {
    enemies: Vec<Enemy>,
    active_count: usize,
}

impl EnemyFleet {
    pub fn new() -> Self {
        let enemies = (0..MAX_ENEMIES)
            .map(|_| Enemy {
                position: Vec3::ZERO,
                dir: Vec3::Z,
                speed: 0.0,
                active: false,
                fire_cooldown: 0.0,
            })
            .collect();
        Self {
            enemies,
            active_count: 0,
        }
    }

    /// Activates the level's enemy count and scatters them ahead of the
    /// player; the remaining slots sit out the level.
    pub fn deploy(&mut self, cfg: &LevelConfig, player: &Transform, rng: &mut impl Rng) {
        self.active_count = cfg.enemy_count.min(self.enemies.len());
        for (index, enemy) in self.enemies.iter_mut().enumerate() {
            if index >= self.active_count {
                enemy.active = false;
                continue;
            }

            let offset = Vec3::new(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(3.0..16.0),
                -80.0 - index as f32 * 35.0 - rng.gen_range(0.0..40.0),
            );
            enemy.position = player.position + player.orientation * offset;
            enemy.dir = Vec3::Z;
            enemy.speed = rng.gen_range(cfg.speed_min..cfg.speed_max);
            enemy.active = true;
            enemy.fire_cooldown = rng.gen_range(0.4..1.4);
        }
    }

    /// Deactivates the slot; returns false when it was already out.
    pub fn disable(&mut self, id: EnemyId) -> bool {
        match self.enemies.get_mut(id.0) {
            Some(enemy) if enemy.active => {
                enemy.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn deployed(&self) -> &[Enemy] {
        &self.enemies[..self.active_count]
    }

    pub fn active_len(&self) -> usize {
        self.enemies[..self.active_count]
            .iter()
            .filter(|enemy| enemy.active)
            .count()
    }

    /// Steers, advances, and fire-gates every deployed enemy.
    ///
    /// Inside the tracking range the desired heading is the line to the
    /// player; outside it the fleet falls into a loose trailing formation
    /// along the player's backward vector. Headings blend toward the desired
    /// direction instead of snapping.
    pub fn step(&mut self, dt: f32, cfg: &LevelConfig, player: &PlayerCraft) -> PatrolReport {
        let mut report = PatrolReport::default();
        let backward = -player.transform.forward();
        let player_position = player.transform.position;
        let blend = (cfg.turn_rate * dt).min(1.0);

        for (index, enemy) in self.enemies[..self.active_count].iter_mut().enumerate() {
            if !enemy.active {
                continue;
            }

            let to_player = player_position - enemy.position;
            let distance = to_player.length();
            let desired = to_player
                .try_normalize()
                .filter(|_| distance < cfg.track_range)
                .unwrap_or(backward);
            enemy.dir = enemy.dir.lerp(desired, blend).try_normalize().unwrap_or(desired);
            enemy.position += enemy.dir * enemy.speed * dt;

            enemy.fire_cooldown -= dt;
            if distance < cfg.track_range * 0.9 && enemy.fire_cooldown <= 0.0 {
                report.fire_requests.push(FireRequest {
                    origin: enemy.position,
                    dir: enemy.dir,
                });
                enemy.fire_cooldown = cfg.fire_interval;
            }

            if collision::within(enemy.position, player_position, collision::RAM_RADIUS) {
                enemy.active = false;
                report.rams.push(EnemyId(index));
            }
        }

        report
    }
}

#[cfg(test)]
impl EnemyFleet {
    /// Direct slot access for scenario setup in unit tests.
    pub(crate) fn enemy_mut(&mut self, id: EnemyId) -> &mut Enemy {
        &mut self.enemies[id.0]
    }
}
