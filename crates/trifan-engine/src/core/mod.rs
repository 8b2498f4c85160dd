//! Contract between the runtime loop and the application.
//!
//! The runtime owns windows and GPU contexts; the app only sees them through
//! [`FrameCtx`] for the duration of one frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
