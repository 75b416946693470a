//! Screens of the geosphere viewer and the state machine that switches them.
//!
//! A [`Screen`] is entered once and then updated every tick with a
//! [`FrameContext`] giving it the draw surface, this frame's input and a way to
//! request a switch to another screen. Requests are applied by the
//! [`ScreenStateMachine`] after the current update returns.

mod globe;
mod input;
mod machine;
mod menu;
mod screen;

pub use globe::{GlobeScreen, GlobeSettings};
pub use input::{Action, Controls, InputSignal};
pub use machine::{ScreenStateMachine, TransitionQueue};
pub use menu::MenuScreen;
pub use screen::{FrameContext, Screen, ScreenId, ScreenRegistry};
