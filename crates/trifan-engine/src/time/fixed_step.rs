use std::time::Duration;

/// Turns variable frame deltas into whole fixed-length simulation ticks.
///
/// Leftover time carries over to the next frame. At most `max_ticks` are
/// released per frame; anything beyond that is dropped so a long stall does
/// not trigger a burst of catch-up steps.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    max_ticks: u32,
    acc: Duration,
    total_ticks: u64,
}

impl FixedStep {
    pub fn new(step: Duration, max_ticks: u32) -> Self {
        debug_assert!(!step.is_zero(), "fixed step must be positive");
        Self {
            step: step.max(Duration::from_micros(1)),
            max_ticks: max_ticks.max(1),
            acc: Duration::ZERO,
            total_ticks: 0,
        }
    }

    /// Fixed step at `hz` ticks per second.
    pub fn from_hz(hz: u32, max_ticks: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1), max_ticks)
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Ticks released since construction or the last reset.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Adds `dt` and returns how many ticks to simulate this frame.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.acc += dt;

        let mut ticks = 0;
        while self.acc >= self.step && ticks < self.max_ticks {
            self.acc -= self.step;
            ticks += 1;
        }
        if self.acc >= self.step {
            log::debug!("fixed step fell behind; dropping {:?}", self.acc);
            self.acc = Duration::ZERO;
        }

        self.total_ticks += u64::from(ticks);
        ticks
    }

    /// Fraction of a step accumulated but not yet simulated, in `[0, 1)`.
    pub fn alpha(&self) -> f32 {
        self.acc.as_secs_f32() / self.step.as_secs_f32()
    }

    pub fn reset(&mut self) {
        self.acc = Duration::ZERO;
        self.total_ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn remainder_carries_over() {
        let mut s = FixedStep::new(ms(20), 8);
        assert_eq!(s.advance(ms(15)), 0);
        assert_eq!(s.advance(ms(15)), 1);
        assert_eq!(s.advance(ms(30)), 2);
        assert_eq!(s.total_ticks(), 3);
        assert!(s.alpha().abs() < 1e-6);
    }

    #[test]
    fn stall_is_capped() {
        let mut s = FixedStep::new(ms(10), 4);
        assert_eq!(s.advance(ms(1000)), 4);
        assert_eq!(s.advance(ms(5)), 0);
        assert!((s.alpha() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn from_hz_divides_a_second() {
        let s = FixedStep::from_hz(50, 1);
        assert_eq!(s.step(), ms(20));
    }

    #[test]
    fn reset_clears_progress() {
        let mut s = FixedStep::new(ms(10), 4);
        s.advance(ms(25));
        s.reset();
        assert_eq!(s.total_ticks(), 0);
        assert_eq!(s.alpha(), 0.0);
    }
}
