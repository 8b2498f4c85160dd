use std::f64::consts::PI;

use trifan_scenes::{SceneKind, SceneState, Simulation, StepOutcome};

/// Seconds of simulated time per tick.
pub const TICK: f64 = 1.0 / 50.0;

/// Ticks before an episode is truncated.
const EPISODE_TICKS: u64 = 500;

/// Scripted stand-in for a physics environment.
///
/// Each scene's state is a closed-form function of elapsed ticks, so runs are
/// reproducible. Episodes end the way the real environments do: mountain
/// car terminates on reaching the flag, everything is truncated after
/// [`EPISODE_TICKS`].
#[derive(Debug, Clone)]
pub struct PreviewSim {
    kind: SceneKind,
    tick: u64,
    episode: u64,
    state: SceneState,
}

impl PreviewSim {
    pub fn new(kind: SceneKind) -> Self {
        let mut sim = Self {
            kind,
            tick: 0,
            episode: 0,
            state: SceneState::default(),
        };
        sim.refresh();
        sim
    }

    pub fn episode(&self) -> u64 {
        self.episode
    }

    fn refresh(&mut self) {
        let t = self.tick as f64 * TICK;
        // Later episodes differ slightly so resets are visible.
        let phase = self.episode as f64 * 0.7;

        self.state = match self.kind {
            SceneKind::CartPole => {
                let x = 1.2 * (0.5 * t + phase).sin();
                let theta = 0.15 * (1.7 * t + phase).sin();
                SceneState::new([x, 0.6 * (0.5 * t + phase).cos(), theta, 0.255 * (1.7 * t + phase).cos()])
            }
            SceneKind::Pendulum => {
                let w = 1.3;
                let theta = PI + 1.2 * (w * t + phase).sin();
                let u = 2.0 * (w * t + phase).cos();
                SceneState::new([theta, 1.2 * w * (w * t + phase).cos()]).with_action(u)
            }
            SceneKind::Acrobot => {
                let t1 = 0.9 * (0.9 * t + phase).sin();
                let t2 = 1.4 * (1.3 * t + 0.5 + phase).sin();
                SceneState::new([t1, t2, 0.81 * (0.9 * t + phase).cos(), 1.82 * (1.3 * t + 0.5 + phase).cos()])
            }
            SceneKind::MountainCar => {
                // Swings build up until the car crests the right hill.
                let amp = 0.3 + 0.12 * t;
                let x = (-0.5 + amp * (1.2 * t).sin()).clamp(-1.2, 0.6);
                SceneState::new([x, 1.2 * amp * (1.2 * t).cos()])
            }
        };
    }
}

impl Simulation for PreviewSim {
    fn state(&self) -> &SceneState {
        &self.state
    }

    fn step(&mut self) -> StepOutcome {
        self.tick += 1;
        self.refresh();

        let terminated = self.kind == SceneKind::MountainCar && self.state.get(0) >= 0.5;
        let truncated = self.tick >= EPISODE_TICKS;
        StepOutcome { terminated, truncated }
    }

    fn reset(&mut self) {
        log::debug!("{} episode {} ended after {} ticks", self.kind, self.episode, self.tick);
        self.tick = 0;
        self.episode += 1;
        self.refresh();
    }
}
