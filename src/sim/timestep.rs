//! Fixed timestep scheduler
//!
//! Accumulates wall-clock time and hands out whole simulation steps, so the
//! simulation advances at the same rate regardless of host speed.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Seconds per simulation step
    pub dt: f32,
    /// Upper bound on steps per frame
    pub max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    /// Add `elapsed` seconds and return how many steps to run now
    ///
    /// Frame hitches are clamped to 0.1 s, and time that would exceed
    /// `max_substeps` is dropped rather than carried into the next frame.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, 0.1);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.dt);
        }
        steps
    }

    /// Fraction of a step left over in the accumulator
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
