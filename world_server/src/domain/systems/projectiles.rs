// Arena-backed projectile pool for gun rounds, missiles, and enemy fire.

use glam::Vec3;

use crate::domain::state::{Enemy, EnemyId, ProjectileClass, ProjectileSnapshot};
use crate::domain::systems::collision;

/// Fraction of the remaining angle a missile closes per tick while its target
/// lives; an exponential-decay steering law rather than an instant snap.
pub const HOMING_BLEND: f32 = 0.12;

/// Lifetime in seconds of an enemy round.
pub const ENEMY_SHOT_LIFE: f32 = 2.2;

/// Capacity of the player weapons pool, sized to the maximum simultaneous
/// demand of both cooldown/lifetime pairs.
pub const VOLLEY_POOL_CAPACITY: usize = 32;

/// Capacity of the enemy fire pool at a full fleet.
pub const FLAK_POOL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    Bullet,
    Missile { target: EnemyId },
    EnemyShot,
}

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub position: Vec3,
    pub dir: Vec3,
    pub speed: f32,
    pub ttl: f32,
    pub kind: ProjectileKind,
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(projectile: &Projectile) -> Self {
        Self {
            position: projectile.position,
            dir: projectile.dir,
            class: match projectile.kind {
                ProjectileKind::Bullet => ProjectileClass::Bullet,
                ProjectileKind::Missile { .. } => ProjectileClass::Missile,
                ProjectileKind::EnemyShot => ProjectileClass::EnemyShot,
            },
        }
    }
}

/// Hits registered by one pool step.
#[derive(Debug, Default)]
pub struct VolleyReport {
    pub enemy_hits: Vec<EnemyId>,
    pub player_hits: u32,
}

/// Fixed-capacity projectile storage addressed by slot index.
///
/// Every slot is in exactly one of {free, live} at all times; expiry or a hit
/// returns the slot in the same tick, and `spawn` is the only path out of the
/// free stack.
pub struct ProjectilePool {
    slots: Vec<Option<Projectile>>,
    free: Vec<usize>,
    live: Vec<usize>,
}

impl ProjectilePool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            free: (0..capacity).rev().collect(),
            live: Vec::with_capacity(capacity),
        }
    }

    /// Takes a free slot for the projectile, or `None` when the pool is
    /// exhausted. Pools are sized so exhaustion cannot happen in play; a
    /// `None` here is a sizing defect, not a runtime condition to recover.
    pub fn spawn(&mut self, projectile: Projectile) -> Option<usize> {
        let slot = self.free.pop()?;
        self.slots[slot] = Some(projectile);
        self.live.push(slot);
        Some(slot)
    }

    /// Returns every live slot to the free stack.
    pub fn clear(&mut self) {
        for slot in self.live.drain(..) {
            self.slots[slot] = None;
            self.free.push(slot);
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Projectile> {
        self.live.iter().filter_map(|slot| self.slots[*slot].as_ref())
    }

    /// Advances every live projectile and resolves its hits.
    ///
    /// Player-weapon kinds test against enemies; enemy rounds test against the
    /// player. A projectile whose lifetime runs out is released before any hit
    /// test so a slot can never be returned twice.
    pub fn step(&mut self, dt: f32, enemies: &[Enemy], player_position: Vec3) -> VolleyReport {
        let mut report = VolleyReport::default();

        let mut index = 0;
        while index < self.live.len() {
            let slot = self.live[index];
            let Some(projectile) = self.slots[slot].as_mut() else {
                debug_assert!(false, "live list referenced an empty slot");
                self.live.swap_remove(index);
                continue;
            };

            projectile.ttl -= dt;

            if let ProjectileKind::Missile { target } = projectile.kind {
                // A dead target leaves the missile flying straight.
                if let Some(enemy) = enemies.get(target.0).filter(|enemy| enemy.active) {
                    if let Some(to_target) = (enemy.position - projectile.position).try_normalize()
                    {
                        projectile.dir = projectile
                            .dir
                            .lerp(to_target, HOMING_BLEND)
                            .try_normalize()
                            .unwrap_or(to_target);
                    }
                }
            }

            projectile.position += projectile.dir * projectile.speed * dt;

            if projectile.ttl <= 0.0 {
                self.release(index);
                continue;
            }

            let hit = match projectile.kind {
                ProjectileKind::Bullet => {
                    Self::hit_enemy(projectile.position, enemies, collision::BULLET_HIT_RADIUS)
                        .inspect(|id| report.enemy_hits.push(*id))
                        .is_some()
                }
                ProjectileKind::Missile { .. } => {
                    Self::hit_enemy(projectile.position, enemies, collision::MISSILE_HIT_RADIUS)
                        .inspect(|id| report.enemy_hits.push(*id))
                        .is_some()
                }
                ProjectileKind::EnemyShot => {
                    let hit = collision::within(
                        projectile.position,
                        player_position,
                        collision::ENEMY_SHOT_HIT_RADIUS,
                    );
                    if hit {
                        report.player_hits += 1;
                    }
                    hit
                }
            };

            if hit {
                self.release(index);
            } else {
                index += 1;
            }
        }

        report
    }

    fn hit_enemy(position: Vec3, enemies: &[Enemy], radius: f32) -> Option<EnemyId> {
        enemies.iter().enumerate().find_map(|(slot, enemy)| {
            (enemy.active && collision::within(enemy.position, position, radius))
                .then_some(EnemyId(slot))
        })
    }

    fn release(&mut self, live_index: usize) {
        let slot = self.live.swap_remove(live_index);
        self.slots[slot] = None;
        self.free.push(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(position: Vec3, dir: Vec3) -> Projectile {
        Projectile {
            position,
            dir,
            speed: 75.0,
            ttl: 1.4,
            kind: ProjectileKind::Bullet,
        }
    }

    fn enemy_at(position: Vec3) -> Enemy {
        Enemy {
            position,
            dir: Vec3::Z,
            speed: 14.0,
            active: true,
            fire_cooldown: 1.0,
        }
    }

    fn far_player() -> Vec3 {
        Vec3::new(0.0, 1_000.0, 0.0)
    }

    #[test]
    fn when_a_projectile_expires_then_its_slot_returns_to_the_free_stack() {
        let mut pool = ProjectilePool::with_capacity(4);
        pool.spawn(Projectile {
            ttl: 0.05,
            ..bullet(Vec3::ZERO, Vec3::NEG_Z)
        })
        .expect("pool has room");
        assert_eq!(pool.live_count(), 1);

        let report = pool.step(0.1, &[], far_player());

        assert_eq!(report.enemy_hits.len(), 0);
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.free_count(), pool.capacity());
    }

    #[test]
    fn when_a_projectile_survives_then_ttl_strictly_decreases_and_it_stays_live() {
        let mut pool = ProjectilePool::with_capacity(4);
        pool.spawn(bullet(Vec3::ZERO, Vec3::NEG_Z))
            .expect("pool has room");

        pool.step(0.016, &[], far_player());

        let round = pool.iter_live().next().expect("round still live");
        assert!(round.ttl < 1.4 && round.ttl > 0.0);
        assert_eq!(pool.live_count() + pool.free_count(), pool.capacity());
    }

    #[test]
    fn when_a_bullet_reaches_an_enemy_then_the_hit_is_reported_and_the_slot_is_freed() {
        let mut pool = ProjectilePool::with_capacity(4);
        let enemies = vec![enemy_at(Vec3::new(0.0, 0.0, -5.0))];
        pool.spawn(bullet(Vec3::new(0.0, 0.0, -4.0), Vec3::NEG_Z))
            .expect("pool has room");

        let report = pool.step(0.016, &enemies, far_player());

        assert_eq!(report.enemy_hits, vec![EnemyId(0)]);
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.free_count(), pool.capacity());
    }

    #[test]
    fn when_a_bullet_passes_an_inactive_enemy_then_no_hit_is_reported() {
        let mut pool = ProjectilePool::with_capacity(4);
        let mut enemies = vec![enemy_at(Vec3::new(0.0, 0.0, -5.0))];
        enemies[0].active = false;
        pool.spawn(bullet(Vec3::new(0.0, 0.0, -4.0), Vec3::NEG_Z))
            .expect("pool has room");

        let report = pool.step(0.016, &enemies, far_player());

        assert!(report.enemy_hits.is_empty());
        assert_eq!(pool.live_count(), 1);
    }

    #[test]
    fn when_a_missile_tracks_a_live_target_then_its_direction_bends_toward_it() {
        let mut pool = ProjectilePool::with_capacity(4);
        let enemies = vec![enemy_at(Vec3::new(50.0, 0.0, -50.0))];
        pool.spawn(Projectile {
            position: Vec3::ZERO,
            dir: Vec3::NEG_Z,
            speed: 42.0,
            ttl: 3.2,
            kind: ProjectileKind::Missile { target: EnemyId(0) },
        })
        .expect("pool has room");

        pool.step(0.016, &enemies, far_player());

        let missile = pool.iter_live().next().expect("missile still live");
        assert!(missile.dir.x > 0.0, "missile should bend toward +x target");
        assert!((missile.dir.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn when_the_target_goes_inactive_then_the_missile_flies_straight() {
        let mut pool = ProjectilePool::with_capacity(4);
        let mut enemies = vec![enemy_at(Vec3::new(50.0, 0.0, -50.0))];
        enemies[0].active = false;
        pool.spawn(Projectile {
            position: Vec3::ZERO,
            dir: Vec3::NEG_Z,
            speed: 42.0,
            ttl: 3.2,
            kind: ProjectileKind::Missile { target: EnemyId(0) },
        })
        .expect("pool has room");

        pool.step(0.016, &enemies, far_player());

        let missile = pool.iter_live().next().expect("missile still live");
        assert_eq!(missile.dir, Vec3::NEG_Z);
    }

    #[test]
    fn when_an_enemy_round_reaches_the_player_then_a_player_hit_is_reported() {
        let mut pool = ProjectilePool::with_capacity(4);
        let player = Vec3::new(0.0, 4.0, 0.0);
        pool.spawn(Projectile {
            position: player + Vec3::new(0.0, 0.0, -1.0),
            dir: Vec3::Z,
            speed: 28.0,
            ttl: ENEMY_SHOT_LIFE,
            kind: ProjectileKind::EnemyShot,
        })
        .expect("pool has room");

        let report = pool.step(0.016, &[], player);

        assert_eq!(report.player_hits, 1);
        assert_eq!(pool.free_count(), pool.capacity());
    }

    #[test]
    fn when_the_pool_is_exhausted_then_spawn_returns_none() {
        let mut pool = ProjectilePool::with_capacity(2);
        assert!(pool.spawn(bullet(Vec3::ZERO, Vec3::NEG_Z)).is_some());
        assert!(pool.spawn(bullet(Vec3::ZERO, Vec3::NEG_Z)).is_some());
        assert!(pool.spawn(bullet(Vec3::ZERO, Vec3::NEG_Z)).is_none());

        pool.clear();

        assert_eq!(pool.free_count(), 2);
        assert!(pool.spawn(bullet(Vec3::ZERO, Vec3::NEG_Z)).is_some());
    }

    #[test]
    fn when_rounds_churn_through_the_pool_then_free_plus_live_always_equals_capacity() {
        let mut pool = ProjectilePool::with_capacity(8);
        let enemies = vec![enemy_at(Vec3::new(0.0, 0.0, -30.0))];

        for round in 0..40 {
            if round % 3 == 0 {
                let _ = pool.spawn(bullet(Vec3::ZERO, Vec3::NEG_Z));
            }
            pool.step(0.05, &enemies, far_player());
            assert_eq!(pool.live_count() + pool.free_count(), pool.capacity());
        }
    }
}
