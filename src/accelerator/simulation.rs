use rand::Rng;

use super::Accelerator;

const DRIFT_STEP: f64 = 0.01;

/// A discrete uniform drift: `(k - offset) * DRIFT_STEP` for `k` in `0..outcomes`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drift {
    outcomes: i32,
    offset: i32,
}

impl Drift {
    /// -0.02, -0.01, 0.0 or 0.01
    pub const NARROW: Drift = Drift { outcomes: 4, offset: 2 };
    /// -0.05 ..= 0.04
    pub const WIDE: Drift = Drift { outcomes: 10, offset: 5 };

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let k = rng.gen_range(0..self.outcomes);
        (k - self.offset) as f64 * DRIFT_STEP
    }

    #[cfg(test)]
    pub fn min(&self) -> f64 {
        -self.offset as f64 * DRIFT_STEP
    }

    #[cfg(test)]
    pub fn max(&self) -> f64 {
        (self.outcomes - 1 - self.offset) as f64 * DRIFT_STEP
    }
}

/// Drift per quantity, in the order of `Component::quantities_mut`:
/// energy, intensity, size, pressure, field, RF, power, cooling.
pub const DRIFT_SCHEDULE: [Drift; 8] = [
    Drift::NARROW,
    Drift::WIDE,
    Drift::NARROW,
    Drift::WIDE,
    Drift::WIDE,
    Drift::WIDE,
    Drift::WIDE,
    Drift::WIDE,
];

/// Advance the accelerator by one time step. Values are never clamped.
pub fn simulate_time_step<R: Rng + ?Sized>(accelerator: &mut Accelerator, rng: &mut R) {
    for component in accelerator.components.iter_mut() {
        for (quantity, drift) in component.quantities_mut().into_iter().zip(DRIFT_SCHEDULE) {
            *quantity += drift.sample(rng);
        }
    }
}
