use std::fmt;
use std::str::FromStr;

use trifan_engine::{Canvas, TessError};

use crate::{SceneState, acrobot, cart_pole, mountain_car, pendulum};

/// The scenes this crate knows how to draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SceneKind {
    MountainCar,
    CartPole,
    Pendulum,
    Acrobot,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scene {0:?} (expected one of: mountain-car, cart-pole, pendulum, acrobot)")]
pub struct UnknownScene(pub String);

impl SceneKind {
    pub const ALL: [SceneKind; 4] = [
        SceneKind::MountainCar,
        SceneKind::CartPole,
        SceneKind::Pendulum,
        SceneKind::Acrobot,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SceneKind::MountainCar => "mountain-car",
            SceneKind::CartPole => "cart-pole",
            SceneKind::Pendulum => "pendulum",
            SceneKind::Acrobot => "acrobot",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            SceneKind::MountainCar => "Mountain Car",
            SceneKind::CartPole => "Cart Pole",
            SceneKind::Pendulum => "Pendulum",
            SceneKind::Acrobot => "Acrobot",
        }
    }

    /// Length of the state vector the scene reads.
    pub const fn state_len(self) -> usize {
        match self {
            SceneKind::MountainCar | SceneKind::Pendulum => 2,
            SceneKind::CartPole | SceneKind::Acrobot => 4,
        }
    }

    pub fn draw(self, state: &SceneState, canvas: &mut Canvas<'_>) -> Result<(), TessError> {
        match self {
            SceneKind::MountainCar => mountain_car::draw(state, canvas),
            SceneKind::CartPole => cart_pole::draw(state, canvas),
            SceneKind::Pendulum => pendulum::draw(state, canvas),
            SceneKind::Acrobot => acrobot::draw(state, canvas),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = UnknownScene;

    /// Accepts the kebab-case name, ignoring case, `_` and `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        SceneKind::ALL
            .into_iter()
            .find(|k| k.name().replace('-', "") == key)
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trifan_engine::{Tessellator, TessellatorConfig};

    #[test]
    fn names_round_trip() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.name().parse::<SceneKind>(), Ok(kind));
        }
        assert_eq!("CartPole".parse::<SceneKind>(), Ok(SceneKind::CartPole));
        assert_eq!("mountain_car".parse::<SceneKind>(), Ok(SceneKind::MountainCar));
        assert!("lunar-lander".parse::<SceneKind>().is_err());
    }

    #[test]
    fn every_scene_fits_one_frame_buffer() {
        let mut t = Tessellator::new();
        for kind in SceneKind::ALL {
            for phase in [-3.0, -1.0, 0.0, 0.4, 2.5] {
                let values = vec![phase; kind.state_len()];
                let state = SceneState::new(values).with_action(phase);
                t.clear();
                kind.draw(&state, &mut Canvas::new(&mut t)).unwrap();
                let (count, bytes) = t.flush();
                assert!(count > 0 && count % 3 == 0, "{kind}");
                assert_eq!(bytes.len(), count as usize * 12);
            }
        }
    }

    #[test]
    fn tiny_buffer_reports_capacity_error() {
        let mut t = Tessellator::with_config(TessellatorConfig {
            capacity_bytes: 64 * 12,
            ..Default::default()
        });
        let err = SceneKind::Acrobot
            .draw(&SceneState::new([0.0; 4]), &mut Canvas::new(&mut t))
            .unwrap_err();
        assert!(err.is_capacity_exceeded());
    }
}
