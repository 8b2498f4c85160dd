use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use trifan_engine::core::{App, AppControl, FrameCtx};
use trifan_engine::time::FixedStep;
use trifan_engine::window::RuntimeConfig;
use trifan_engine::{FrameDriver, FrameOutcome, TessError};
use trifan_scenes::{SceneKind, Simulation, palette};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::preview::{PreviewSim, TICK};

/// Most simulation ticks run in one frame before time is dropped.
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Everything one scene window owns.
struct SceneSlot {
    kind: SceneKind,
    sim: PreviewSim,
    step: FixedStep,
    driver: FrameDriver,
}

impl SceneSlot {
    fn new(kind: SceneKind) -> Self {
        Self {
            kind,
            sim: PreviewSim::new(kind),
            step: FixedStep::new(Duration::from_secs_f64(TICK), MAX_TICKS_PER_FRAME),
            driver: FrameDriver::new(),
        }
    }

    fn advance(&mut self, dt: Duration) {
        for _ in 0..self.step.advance(dt) {
            if self.sim.step().is_done() {
                self.sim.reset();
            }
        }
    }
}

pub struct Studio {
    pending: VecDeque<SceneKind>,
    slots: HashMap<WindowId, SceneSlot>,
}

impl Studio {
    pub fn new(scenes: &[SceneKind]) -> Self {
        Self {
            pending: scenes.iter().copied().collect(),
            slots: HashMap::new(),
        }
    }

    /// One window per scene, in the given order.
    pub fn window_configs(scenes: &[SceneKind]) -> Vec<RuntimeConfig> {
        scenes
            .iter()
            .map(|kind| RuntimeConfig {
                title: format!("trifan · {}", kind.title()),
                ..RuntimeConfig::default()
            })
            .collect()
    }
}

impl App for Studio {
    fn on_window_opened(&mut self, window_id: WindowId, config: &RuntimeConfig) {
        let Some(kind) = self.pending.pop_front() else {
            log::warn!("unexpected window {:?}", config.title);
            return;
        };
        self.slots.insert(window_id, SceneSlot::new(kind));
    }

    fn on_window_closed(&mut self, window_id: WindowId) {
        if let Some(slot) = self.slots.remove(&window_id) {
            log::info!(
                "{} closed after {} frames, {} episodes",
                slot.kind,
                slot.driver.frames_rendered(),
                slot.sim.episode()
            );
        }
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => AppControl::Exit,
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(slot) = self.slots.get_mut(&ctx.window.id) else {
            return AppControl::Continue;
        };

        slot.advance(ctx.time.dt);

        let SceneSlot { kind, sim, driver, .. } = slot;
        let result = ctx.render(driver, palette::BACKGROUND, |canvas| kind.draw(sim.state(), canvas));

        match result {
            Ok(FrameOutcome::Rendered(stats)) => {
                log::trace!("{kind}: frame {} with {} vertices", stats.frame_index, stats.vertex_count);
                AppControl::Continue
            }
            Ok(FrameOutcome::Skipped) => AppControl::Continue,
            // The driver already logged it; the next frame starts clean.
            Err(e) if e.downcast_ref::<TessError>().is_some() => AppControl::Continue,
            Err(e) => {
                log::error!("{kind}: rendering failed: {e:#}");
                AppControl::Exit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_window_per_scene_in_order() {
        let scenes = [SceneKind::CartPole, SceneKind::Acrobot];
        let configs = Studio::window_configs(&scenes);
        assert_eq!(configs.len(), 2);
        assert!(configs[0].title.ends_with("Cart Pole"));
        assert!(configs[1].title.ends_with("Acrobot"));
        assert_eq!(configs[0].canvas, trifan_engine::LogicalCanvas::default());
    }

    #[test]
    fn slot_advances_on_fixed_ticks() {
        let mut slot = SceneSlot::new(SceneKind::CartPole);
        let before = slot.sim.state().clone();
        slot.advance(Duration::from_millis(5));
        assert_eq!(slot.sim.state(), &before);
        slot.advance(Duration::from_millis(20));
        assert_ne!(slot.sim.state(), &before);
    }
}
