//! Per-frame input flags polled by screens.

use std::collections::HashSet;

/// Something the user can ask for during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Leave the current screen.
    Exit,
    /// Accept / start.
    Confirm,
    /// Show or hide the wireframe overlay.
    ToggleWireframe,
}

/// Read-only view of this frame's input, polled once per update.
pub trait InputSignal {
    /// The user asked to leave the current screen.
    fn exit_requested(&self) -> bool;

    /// The user confirmed / asked to start.
    fn confirm_requested(&self) -> bool {
        false
    }

    /// The user asked to flip the wireframe overlay.
    fn wireframe_toggled(&self) -> bool {
        false
    }
}

/// Actions triggered during the current frame.
///
/// Call [`press`](Self::press) as events arrive and
/// [`clear_transients`](Self::clear_transients) at the end of every frame.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    just_pressed: HashSet<Action>,
}

impl Controls {
    /// Creates controls with nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `action` for the current frame.
    pub fn press(&mut self, action: Action) {
        self.just_pressed.insert(action);
    }

    /// Whether `action` was triggered this frame.
    #[must_use]
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Forget this frame's actions.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}

impl InputSignal for Controls {
    fn exit_requested(&self) -> bool {
        self.just_pressed(Action::Exit)
    }

    fn confirm_requested(&self) -> bool {
        self.just_pressed(Action::Confirm)
    }

    fn wireframe_toggled(&self) -> bool {
        self.just_pressed(Action::ToggleWireframe)
    }
}
