use glam::Vec3;

/// Gameplay tuning for the player craft.
///
/// Keep this separate from runtime/server configuration (tick rates, buffer
/// sizes, etc.).
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Lower speed bound in world units per second.
    pub min_speed: f32,

    /// Upper speed bound in world units per second.
    pub max_speed: f32,

    /// Speed applied on spawn and reset.
    pub start_speed: f32,

    /// Throttle acceleration in units per second squared.
    pub accel: f32,

    /// Pitch rate in radians per second at full stick.
    pub pitch_rate: f32,

    /// Roll rate in radians per second at full stick.
    pub roll_rate: f32,

    /// Yaw rate in radians per second at full stick.
    pub yaw_rate: f32,

    /// Hull points on spawn and reset.
    pub max_hull: u8,

    /// Hard altitude floor; the craft never descends below this.
    pub floor_y: f32,

    /// Spawn position applied on level entry and reset.
    pub spawn: Vec3,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            min_speed: 8.0,
            max_speed: 40.0,
            start_speed: 22.0,
            accel: 18.0,
            pitch_rate: 1.1,
            roll_rate: 1.6,
            yaw_rate: 0.7,
            max_hull: 3,
            floor_y: 1.0,
            spawn: Vec3::new(0.0, 4.0, 0.0),
        }
    }
}
