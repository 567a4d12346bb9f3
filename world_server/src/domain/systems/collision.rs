// Pure proximity tests shared by the projectile, enemy, and gate systems.
//
// All checks are single-tick Euclidean distance tests; there is no swept or
// continuous collision. With dt clamped to 50ms and bounded speeds this holds
// up in play, but a fast mover can tunnel through a thin target between two
// ticks. That approximation is retained on purpose.

use glam::Vec3;

/// Gun round vs enemy hit distance.
pub const BULLET_HIT_RADIUS: f32 = 1.6;

/// Missile vs enemy hit distance.
pub const MISSILE_HIT_RADIUS: f32 = 2.0;

/// Enemy round vs player hit distance.
pub const ENEMY_SHOT_HIT_RADIUS: f32 = 2.2;

/// Enemy hull vs player hull ramming distance.
pub const RAM_RADIUS: f32 = 2.2;

/// Fraction of a gate's radius that counts as flying through it.
pub const GATE_PASS_FRACTION: f32 = 0.85;

/// True when `a` and `b` are closer than `radius`.
pub fn within(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// True when the player position counts as a traversal of the gate.
pub fn gate_passed(gate_position: Vec3, gate_radius: f32, player_position: Vec3) -> bool {
    within(gate_position, player_position, gate_radius * GATE_PASS_FRACTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_points_are_closer_than_the_radius_then_within_is_true() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        assert!(within(a, b, 1.5));
        assert!(!within(a, b, 1.0));
        assert!(!within(a, b, 0.5));
    }

    #[test]
    fn when_distance_equals_the_radius_then_within_is_false() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 0.0, 0.0);
        assert!(!within(a, b, 2.0));
    }

    #[test]
    fn when_the_player_is_inside_the_pass_fraction_then_the_gate_counts() {
        let gate = Vec3::new(0.0, 10.0, -60.0);
        let radius = 3.5;
        // Just inside 85% of the radius.
        let inside = gate + Vec3::new(radius * GATE_PASS_FRACTION - 0.01, 0.0, 0.0);
        // Inside the ring but outside the pass fraction.
        let rim = gate + Vec3::new(radius * GATE_PASS_FRACTION + 0.01, 0.0, 0.0);
        assert!(gate_passed(gate, radius, inside));
        assert!(!gate_passed(gate, radius, rim));
    }
}
