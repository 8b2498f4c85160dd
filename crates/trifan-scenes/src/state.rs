/// Snapshot of a simulation handed to a draw routine.
///
/// `values` is the environment's state vector in its native units;
/// `last_action` is the most recent continuous action, if the environment
/// has one (only the pendulum draws it).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    pub values: Vec<f64>,
    pub last_action: Option<f64>,
}

impl SceneState {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self { values: values.into(), last_action: None }
    }

    pub fn with_action(mut self, action: f64) -> Self {
        self.last_action = Some(action);
        self
    }

    /// Component `i`; components the vector does not have read as 0.
    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.values.get(i).copied().unwrap_or(0.0)
    }
}

/// How a simulation step ended.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct StepOutcome {
    /// The episode reached a terminal state.
    pub terminated: bool,
    /// The episode was cut short (time limit).
    pub truncated: bool,
}

impl StepOutcome {
    pub const CONTINUE: StepOutcome = StepOutcome { terminated: false, truncated: false };

    #[inline]
    pub fn is_done(self) -> bool {
        self.terminated || self.truncated
    }
}

/// An environment that advances one tick at a time.
///
/// Rendering only ever reads [`state`](Self::state). When a step reports
/// [`StepOutcome::is_done`], the owner calls [`reset`](Self::reset) before the
/// next frame is drawn.
pub trait Simulation {
    fn state(&self) -> &SceneState;

    fn step(&mut self) -> StepOutcome;

    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_components_read_as_zero() {
        let s = SceneState::new([0.5, -1.0]);
        assert_eq!(s.get(1), -1.0);
        assert_eq!(s.get(7), 0.0);
    }

    #[test]
    fn either_flag_ends_the_episode() {
        assert!(!StepOutcome::CONTINUE.is_done());
        assert!(StepOutcome { terminated: true, truncated: false }.is_done());
        assert!(StepOutcome { terminated: false, truncated: true }.is_done());
    }
}
