//! The canvas-style drawing interface the renderer paints through.

use crate::Color;

/// A 2D painting context with canvas path semantics.
///
/// A path is started with [`begin_path`](Self::begin_path), built from
/// [`move_to`](Self::move_to) / [`line_to`](Self::line_to) calls and then
/// filled or stroked with the current style. [`save`](Self::save) and
/// [`restore`](Self::restore) push and pop the style state.
pub trait DrawSurface {
    /// Canvas width in pixels.
    fn width(&self) -> f64;
    /// Canvas height in pixels.
    fn height(&self) -> f64;

    /// Push the current fill, stroke and line width.
    fn save(&mut self);
    /// Pop the state pushed by the matching `save`.
    fn restore(&mut self);

    /// Discard the current path.
    fn begin_path(&mut self);
    /// Close the current subpath back to its first point.
    fn close_path(&mut self);
    /// Start a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);
    /// Extend the current subpath to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Color used by [`fill`](Self::fill).
    fn set_fill_style(&mut self, color: Color);
    /// Color used by [`stroke`](Self::stroke).
    fn set_stroke_style(&mut self, color: Color);
    /// Stroke width in pixels.
    fn set_line_width(&mut self, width: f64);

    /// Fill the current path.
    fn fill(&mut self);
    /// Stroke the current path.
    fn stroke(&mut self);

    /// Fill an axis-aligned rectangle, replacing the current path.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.set_fill_style(color);
        self.begin_path();
        self.move_to(x, y);
        self.line_to(x + w, y);
        self.line_to(x + w, y + h);
        self.line_to(x, y + h);
        self.close_path();
        self.fill();
    }
}
