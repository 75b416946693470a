//! Screen switching.

use geosphere_render::DrawSurface;
use tracing::{info, warn};

use crate::{FrameContext, InputSignal, Screen, ScreenId, ScreenRegistry};

/// Holds the screen requested during an update until the update returns.
///
/// The last request in a frame wins.
#[derive(Debug, Default)]
pub struct TransitionQueue {
    pending: Option<ScreenId>,
}

impl TransitionQueue {
    /// Remove and return the pending request.
    pub fn take(&mut self) -> Option<ScreenId> {
        self.pending.take()
    }

    /// The pending request, if any.
    pub fn pending(&self) -> Option<ScreenId> {
        self.pending
    }
}

impl ScreenRegistry for TransitionQueue {
    fn request_screen(&mut self, id: ScreenId) {
        self.pending = Some(id);
    }
}

/// Owns every screen and forwards ticks to the active one.
#[derive(Default)]
pub struct ScreenStateMachine {
    screens: Vec<Box<dyn Screen>>,
    current: Option<usize>,
    transitions: TransitionQueue,
}

impl ScreenStateMachine {
    /// Creates an empty machine with no screens and no current state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a screen. A screen registered under an existing id replaces it.
    pub fn register(&mut self, screen: Box<dyn Screen>) {
        let id = screen.id();
        match self.position(id) {
            Some(i) => {
                warn!("replacing screen {id:?}");
                self.screens[i] = screen;
            }
            None => self.screens.push(screen),
        }
    }

    /// Id of the active screen.
    pub fn current(&self) -> Option<ScreenId> {
        self.current.map(|i| self.screens[i].id())
    }

    /// Leave the active screen and enter `id` right away.
    ///
    /// Returns `false` and changes nothing if no screen has that id.
    pub fn set_state(&mut self, id: ScreenId) -> bool {
        let Some(next) = self.position(id) else {
            warn!("no screen registered as {id:?}");
            return false;
        };
        if let Some(prev) = self.current {
            self.screens[prev].on_exit();
        }
        info!("switching to {id:?}");
        self.current = Some(next);
        self.screens[next].on_enter();
        true
    }

    /// Tick the active screen, then apply any switch it requested.
    pub fn update(
        &mut self,
        surface: &mut dyn DrawSurface,
        input: &dyn InputSignal,
        delta_time: f64,
        elapsed: f64,
    ) {
        if let Some(i) = self.current {
            let mut ctx = FrameContext {
                surface,
                input,
                screens: &mut self.transitions,
            };
            self.screens[i].on_update(&mut ctx, delta_time, elapsed);
        }

        if let Some(id) = self.transitions.take() {
            self.set_state(id);
        }
    }

    /// Borrow a registered screen.
    pub fn screen(&self, id: ScreenId) -> Option<&dyn Screen> {
        self.position(id).map(|i| self.screens[i].as_ref())
    }

    fn position(&self, id: ScreenId) -> Option<usize> {
        self.screens.iter().position(|s| s.id() == id)
    }
}
