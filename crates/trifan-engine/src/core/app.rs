use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;
use crate::window::RuntimeConfig;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// What the runtime drives.
pub trait App {
    /// Called once per window after its GPU context exists, in the order the
    /// windows were requested.
    fn on_window_opened(&mut self, window_id: WindowId, config: &RuntimeConfig) {
        let _ = (window_id, config);
    }

    /// Called once per window when it closes.
    fn on_window_closed(&mut self, window_id: WindowId) {
        let _ = window_id;
    }

    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
