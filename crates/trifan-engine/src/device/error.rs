/// What the caller should do after `get_current_texture` fails.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Lost or outdated surface was reconfigured; try again next tick.
    Reconfigured,
    /// Timeout or other transient error; skip this tick.
    SkipFrame,
    /// Out of memory; stop rendering.
    Fatal,
}
