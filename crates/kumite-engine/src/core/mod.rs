//! The contract between the window runtime and the application.
//!
//! The runtime owns the window, the GPU and the event queue; the app owns
//! everything it loads. Each callback receives a context borrowing the
//! runtime's side for the duration of the call.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, StartCtx, WindowCtx};
