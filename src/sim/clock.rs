//! Fixed-step accumulator shared by every frontend

use crate::consts::{MAX_FRAME_SECS, MAX_SUBSTEPS, SIM_DT};

/// Turns variable frame times into a whole number of fixed ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed real elapsed seconds; returns how many ticks to run now
    ///
    /// Long frames are clamped and the substep count is capped so a stall
    /// never snowballs into ever longer catch-up frames.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let dt = elapsed.clamp(0.0, MAX_FRAME_SECS);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(SIM_DT * 0.5), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
        assert!(clock.alpha() > 0.0 && clock.alpha() < 1.0);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FixedStep::new();
        // 0.1s is six ticks at 60Hz; anything longer is dropped
        let ticks = clock.advance(5.0);
        assert!((5..=6).contains(&ticks), "ticks {ticks}");
        assert!(ticks <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_negative_elapsed_runs_nothing() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_reset_drops_leftover() {
        let mut clock = FixedStep::new();
        clock.advance(SIM_DT * 0.9);
        clock.reset();
        assert_eq!(clock.advance(SIM_DT * 0.5), 0);
    }
}
