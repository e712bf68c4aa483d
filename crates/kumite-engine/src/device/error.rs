/// What the caller should do after the surface refused to hand out a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame should succeed.
    Reconfigured,
    /// Transient; drop this frame and carry on.
    SkipFrame,
    /// Unrecoverable (out of memory). Shut down.
    Fatal,
}
