//! Fixed-step accumulator
//!
//! Movement and animation are tuned per step, not per second, so the
//! simulation must step at a constant rate no matter how fast frames arrive.
//! Each frame feeds its elapsed time in and gets back how many whole steps to
//! run; the remainder carries over to the next frame.

/// Longest frame the accumulator will accept. Anything longer (a window
/// drag, a breakpoint) is dropped instead of replayed as a burst of steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    step: f64,
    accumulator: f64,
}

impl FixedStep {
    pub fn new(steps_per_second: u32) -> Self {
        Self {
            step: 1.0 / steps_per_second.max(1) as f64,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed time; returns the number of steps to run now.
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        let clamped = frame_time.clamp(0.0, MAX_FRAME_TIME);
        if clamped < frame_time {
            tracing::trace!(
                dropped_ms = (frame_time - clamped) * 1000.0,
                "frame too long, dropping time"
            );
        }
        self.accumulator += clamped;

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_step_per_matching_frame() {
        let mut ts = FixedStep::new(4);
        for _ in 0..10 {
            assert_eq!(ts.advance(0.25), 1);
        }
    }

    #[test]
    fn test_fast_frames_accumulate() {
        let mut ts = FixedStep::new(4);
        assert_eq!(ts.advance(0.125), 0);
        assert_eq!(ts.advance(0.125), 1);
        assert_eq!(ts.advance(0.0625), 0);
    }

    #[test]
    fn test_slow_frames_run_multiple_steps() {
        let mut ts = FixedStep::new(8);
        assert_eq!(ts.advance(0.25), 2);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut ts = FixedStep::new(8);
        // 5 seconds collapses to MAX_FRAME_TIME worth of steps
        assert_eq!(ts.advance(5.0), 2);
        assert_eq!(ts.advance(-1.0), 0);
    }
}
