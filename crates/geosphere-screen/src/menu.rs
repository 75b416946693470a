//! Title screen shown before and after the globe.

use geosphere_render::Color;
use tracing::debug;

use crate::{FrameContext, Screen, ScreenId};

/// Clears the canvas and waits for confirm to start the globe.
pub struct MenuScreen {
    background: Color,
    frames_shown: u64,
}

impl MenuScreen {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            frames_shown: 0,
        }
    }

    /// Updates since the menu was last entered.
    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }
}

impl Screen for MenuScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Menu
    }

    fn on_enter(&mut self) {
        debug!("menu entered");
        self.frames_shown = 0;
    }

    fn on_update(&mut self, ctx: &mut FrameContext<'_>, _delta_time: f64, _elapsed: f64) {
        let (w, h) = (ctx.surface.width(), ctx.surface.height());
        ctx.surface.save();
        ctx.surface.fill_rect(0.0, 0.0, w, h, self.background);
        ctx.surface.restore();
        self.frames_shown += 1;

        if ctx.input.confirm_requested() {
            ctx.screens.request_screen(ScreenId::Globe);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Controls, ScreenRegistry};
    use geosphere_render::RecordingSurface;

    struct LastRequest(Option<ScreenId>);

    impl ScreenRegistry for LastRequest {
        fn request_screen(&mut self, id: ScreenId) {
            self.0 = Some(id);
        }
    }

    #[test]
    fn test_confirm_requests_globe() {
        let mut menu = MenuScreen::new(Color::BLACK);
        menu.on_enter();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut controls = Controls::new();
        let mut last = LastRequest(None);

        {
            let mut ctx = FrameContext {
                surface: &mut surface,
                input: &controls,
                screens: &mut last,
            };
            menu.on_update(&mut ctx, 0.016, 0.016);
        }
        assert_eq!(last.0, None);
        assert_eq!(surface.fill_count(), 1);

        controls.press(Action::Confirm);
        let mut ctx = FrameContext {
            surface: &mut surface,
            input: &controls,
            screens: &mut last,
        };
        menu.on_update(&mut ctx, 0.016, 0.032);
        assert_eq!(last.0, Some(ScreenId::Globe));
        assert_eq!(menu.frames_shown(), 2);
    }
}
