use super::ctx::{FrameCtx, StartCtx};

/// Returned from frame callbacks to keep running or shut down.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by [`Runtime`](crate::window::Runtime).
///
/// Call order is `on_start` once, `on_frame` once per redraw until it returns
/// [`AppControl::Exit`], then `on_exit` once. Window-close requests arrive as
/// [`InputEvent::Quit`](crate::input::InputEvent::Quit) in the event queue;
/// the runtime does not close the window on its own.
pub trait App {
    /// Called once the window and GPU exist. Load GPU resources here.
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) {
        let _ = ctx;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called before the GPU and window are dropped. Release everything
    /// that refers to the device here.
    fn on_exit(&mut self) {}
}
