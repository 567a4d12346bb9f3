// Weapon triggers: independent per-weapon cooldowns feeding the volley pool.

use crate::domain::state::{PlayerCraft, WeaponMode};
use crate::domain::systems::lock::LockTracker;
use crate::domain::systems::projectiles::{Projectile, ProjectileKind, ProjectilePool};
use crate::domain::tuning::{GunTuning, MissileTuning};

/// Owns the player's weapon cooldowns and turns a held trigger into spawns.
pub struct WeaponStation {
    gun: GunTuning,
    missile: MissileTuning,
    gun_cooldown: f32,
    missile_cooldown: f32,
}

impl WeaponStation {
    pub fn new(gun: GunTuning, missile: MissileTuning) -> Self {
        Self {
            gun,
            missile,
            gun_cooldown: 0.0,
            missile_cooldown: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.gun_cooldown = 0.0;
        self.missile_cooldown = 0.0;
    }

    /// Fires the selected weapon when its cooldown has elapsed.
    ///
    /// The gun autofires while the trigger is held; a missile additionally
    /// requires a ready lock and launches at the locked enemy. Both cooldowns
    /// tick down every step regardless of the selected weapon.
    pub fn step(
        &mut self,
        dt: f32,
        player: &PlayerCraft,
        fire: bool,
        lock: &LockTracker,
        pool: &mut ProjectilePool,
    ) -> Option<usize> {
        let mut spawned = None;

        if fire && player.weapon == WeaponMode::Gun && self.gun_cooldown <= 0.0 {
            let transform = &player.transform;
            spawned = pool.spawn(Projectile {
                position: transform.position + transform.orientation * self.gun.muzzle,
                dir: transform.forward(),
                speed: self.gun.speed,
                ttl: self.gun.life_time,
                kind: ProjectileKind::Bullet,
            });
            self.gun_cooldown = self.gun.cooldown;
        }

        if fire && player.weapon == WeaponMode::Missile && self.missile_cooldown <= 0.0 {
            if let Some(target) = lock.target().filter(|_| lock.is_ready()) {
                let transform = &player.transform;
                spawned = pool.spawn(Projectile {
                    position: transform.position + transform.orientation * self.missile.muzzle,
                    dir: transform.forward(),
                    speed: self.missile.speed,
                    ttl: self.missile.life_time,
                    kind: ProjectileKind::Missile { target },
                });
                self.missile_cooldown = self.missile.cooldown;
            }
        }

        self.gun_cooldown = (self.gun_cooldown - dt).max(0.0);
        self.missile_cooldown = (self.missile_cooldown - dt).max(0.0);

        spawned
    }
}
