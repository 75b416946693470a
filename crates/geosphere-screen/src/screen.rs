//! The screen contract.

use geosphere_render::DrawSurface;

use crate::InputSignal;

/// Identifies a registered screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Title / menu screen.
    Menu,
    /// Rotating planet.
    Globe,
}

/// Accepts requests to switch screens.
pub trait ScreenRegistry {
    /// Ask for `id` to become the active screen once the current update ends.
    fn request_screen(&mut self, id: ScreenId);
}

/// Everything a screen may touch during one update.
pub struct FrameContext<'a> {
    /// Where to paint.
    pub surface: &'a mut dyn DrawSurface,
    /// This frame's input.
    pub input: &'a dyn InputSignal,
    /// Screen switch requests.
    pub screens: &'a mut dyn ScreenRegistry,
}

/// One state of the application.
pub trait Screen {
    /// Which id this screen is registered under.
    fn id(&self) -> ScreenId;

    /// Called when the screen becomes active. Resets state.
    fn on_enter(&mut self);

    /// Called once per tick while active. `delta_time` and `elapsed` are in seconds.
    fn on_update(&mut self, ctx: &mut FrameContext<'_>, delta_time: f64, elapsed: f64);

    /// Called when another screen takes over.
    fn on_exit(&mut self) {}
}
