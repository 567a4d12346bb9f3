// Rolling gate corridor: traversal detection and wholesale recycling.

use glam::Vec3;
use rand::Rng;

use crate::domain::state::{GATE_COUNT, Gate};
use crate::domain::systems::collision;

const GATE_RADIUS: f32 = 3.5;

/// Gate traversals observed in one step.
#[derive(Debug, Default)]
pub struct GateReport {
    pub passes: u32,
    /// Set on the step where the last unpassed gate was cleared; the ring has
    /// already been rescattered by the time the caller sees this.
    pub loop_completed: bool,
}

/// Fixed ring of scoring gates recycled as one unit, decoupled from level
/// completion.
pub struct GateRing {
    gates: Vec<Gate>,
    passed_count: usize,
}

impl GateRing {
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut ring = Self {
            gates: (0..GATE_COUNT)
                .map(|_| Gate {
                    position: Vec3::ZERO,
                    radius: GATE_RADIUS,
                    passed: false,
                })
                .collect(),
            passed_count: 0,
        };
        ring.scatter(rng);
        ring
    }

    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.scatter(rng);
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Gates passed in the current loop.
    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    pub fn step(&mut self, player_position: Vec3, rng: &mut impl Rng) -> GateReport {
        let mut report = GateReport::default();

        for gate in &mut self.gates {
            if gate.passed {
                continue;
            }
            if collision::gate_passed(gate.position, gate.radius, player_position) {
                gate.passed = true;
                self.passed_count += 1;
                report.passes += 1;
            }
        }

        if self.passed_count == self.gates.len() {
            report.loop_completed = true;
            self.scatter(rng);
        }

        report
    }

    fn scatter(&mut self, rng: &mut impl Rng) {
        self.passed_count = 0;
        for (index, gate) in self.gates.iter_mut().enumerate() {
            gate.passed = false;
            gate.position = Vec3::new(
                rng.gen_range(-18.0..18.0),
                rng.gen_range(3.0..14.0),
                -60.0 - index as f32 * 50.0 - rng.gen_range(0.0..25.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn when_the_player_flies_through_a_gate_then_it_is_marked_passed_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ring = GateRing::new(&mut rng);
        let target = ring.gates()[0].position;

        let first = ring.step(target, &mut rng);
        assert_eq!(first.passes, 1);
        assert!(ring.gates()[0].passed);

        // Lingering inside the same gate scores nothing further.
        let second = ring.step(target, &mut rng);
        assert_eq!(second.passes, 0);
        assert_eq!(ring.passed_count(), 1);
    }

    #[test]
    fn when_the_player_misses_every_gate_then_nothing_changes() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ring = GateRing::new(&mut rng);

        let report = ring.step(Vec3::new(500.0, 500.0, 500.0), &mut rng);

        assert_eq!(report.passes, 0);
        assert_eq!(ring.passed_count(), 0);
    }

    #[test]
    fn when_every_gate_is_passed_then_the_ring_recycles_and_the_counter_resets() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut ring = GateRing::new(&mut rng);

        let mut loops = 0;
        for _ in 0..GATE_COUNT {
            let target = ring
                .gates()
                .iter()
                .find(|gate| !gate.passed)
                .map(|gate| gate.position)
                .expect("an unpassed gate remains");
            let report = ring.step(target, &mut rng);
            assert_eq!(report.passes, 1);
            if report.loop_completed {
                loops += 1;
            }
        }

        assert_eq!(loops, 1);
        assert_eq!(ring.passed_count(), 0);
        assert!(ring.gates().iter().all(|gate| !gate.passed));
    }
}
