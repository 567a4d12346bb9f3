// Player craft kinematics.

use glam::Quat;

use crate::domain::state::{ControlFrame, PlayerCraft, Transform, WeaponMode};
use crate::domain::tuning::PlayerTuning;

impl PlayerCraft {
    pub fn spawn(tuning: &PlayerTuning) -> Self {
        Self {
            transform: Transform::new(tuning.spawn),
            speed: tuning.start_speed,
            hull: tuning.max_hull,
            weapon: WeaponMode::Gun,
        }
    }
}

/// Applies one tick of rotation, throttle, and forward integration.
///
/// Rotations are applied about the craft's local axes in pitch, roll, yaw
/// order; the orientation is renormalized to keep drift out of the forward
/// vector.
pub fn step_player(player: &mut PlayerCraft, dt: f32, controls: &ControlFrame, tuning: &PlayerTuning) {
    let pitch = controls.pitch * tuning.pitch_rate * dt;
    let roll = controls.roll * tuning.roll_rate * dt;
    let yaw = controls.yaw * tuning.yaw_rate * dt;

    let orientation = player.transform.orientation
        * Quat::from_rotation_x(pitch)
        * Quat::from_rotation_z(-roll)
        * Quat::from_rotation_y(yaw);
    player.transform.orientation = orientation.normalize();

    player.speed = (player.speed + controls.throttle * tuning.accel * dt)
        .clamp(tuning.min_speed, tuning.max_speed);

    let forward = player.transform.forward();
    player.transform.position += forward * player.speed * dt;

    if player.transform.position.y < tuning.floor_y {
        player.transform.position.y = tuning.floor_y;
    }
}
