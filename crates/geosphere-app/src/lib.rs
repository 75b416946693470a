//! Geosphere viewer application.
//!
//! Wires configuration, logging, the screen state machine and the fixed-step
//! loop together into a headless viewer that renders onto a pixel canvas.

pub mod game_loop;
pub mod runner;

pub use runner::{AppError, RunReport, Viewer, globe_settings};
