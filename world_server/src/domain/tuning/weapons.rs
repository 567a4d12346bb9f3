use glam::Vec3;

/// Gameplay tuning for the instant-fire gun.
#[derive(Debug, Clone, Copy)]
pub struct GunTuning {
    /// Round speed in world units per second.
    pub speed: f32,

    /// Lifetime in seconds before a round is despawned.
    pub life_time: f32,

    /// Minimum seconds between rounds while the trigger is held.
    pub cooldown: f32,

    /// Muzzle offset in craft-local space.
    pub muzzle: Vec3,
}

impl Default for GunTuning {
    fn default() -> Self {
        Self {
            speed: 75.0,
            life_time: 1.4,
            cooldown: 0.18,
            muzzle: Vec3::new(0.0, 0.3, -1.6),
        }
    }
}

/// Gameplay tuning for the lock-on missile.
#[derive(Debug, Clone, Copy)]
pub struct MissileTuning {
    /// Missile speed in world units per second.
    pub speed: f32,

    /// Lifetime in seconds before a missile is despawned.
    pub life_time: f32,

    /// Minimum seconds between launches.
    pub cooldown: f32,

    /// Muzzle offset in craft-local space.
    pub muzzle: Vec3,
}

impl Default for MissileTuning {
    fn default() -> Self {
        Self {
            speed: 42.0,
            life_time: 3.2,
            cooldown: 0.6,
            muzzle: Vec3::new(0.0, 0.2, -1.4),
        }
    }
}

/// Tuning for the target-lock acquisition cone and timing.
#[derive(Debug, Clone, Copy)]
pub struct LockTuning {
    /// Maximum lock distance in world units.
    pub range: f32,

    /// Minimum cosine between the craft forward vector and the line to the
    /// candidate; higher means a tighter cone.
    pub min_dot: f32,

    /// Seconds a candidate must be tracked before the lock is ready.
    pub time: f32,

    /// Multiplier on dt for progress decay while no candidate exists.
    pub decay_rate: f32,
}

impl Default for LockTuning {
    fn default() -> Self {
        Self {
            range: 120.0,
            min_dot: 0.86,
            time: 1.3,
            decay_rate: 1.5,
        }
    }
}
