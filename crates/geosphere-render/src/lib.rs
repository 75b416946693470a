//! Software rendering of the rotating planet onto a 2D draw surface.
//!
//! The renderer never touches pixels directly: it issues canvas-style path
//! commands through [`DrawSurface`]. Two surfaces ship with the crate: a
//! [`RecordingSurface`] that keeps the command stream for inspection and a
//! [`PixelCanvas`] that rasterizes into an RGBA buffer and can export PNG.

pub mod color;
pub mod error;
pub mod frame;
pub mod raster;
pub mod recording;
pub mod surface;

pub use color::{Color, Palette};
pub use error::RenderError;
pub use frame::{
    DEFAULT_FIELD_OF_VIEW, FaceDepth, FrameRenderer, FrameStats, Projection, RenderOptions,
    for_each_unique_edge, rotate_vertices, rotate_y, sort_back_to_front, unique_edges,
};
pub use raster::PixelCanvas;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::DrawSurface;
