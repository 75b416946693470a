//! A draw surface that records commands instead of painting.

use glam::DVec2;

use crate::{Color, DrawSurface};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Style state pushed.
    Save,
    /// Style state popped.
    Restore,
    /// Path discarded.
    BeginPath,
    ClosePath,
    /// Start of a new subpath.
    MoveTo(DVec2),
    LineTo(DVec2),
    FillStyle(Color),
    StrokeStyle(Color),
    /// Stroke width in pixels.
    LineWidth(f64),
    /// Current path filled with the fill style.
    Fill,
    /// Current path stroked with the stroke style.
    Stroke,
}

/// Keeps every draw call in order. Used for headless inspection and tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// An empty recording for a canvas of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// All recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop the recording, keeping the canvas size.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of `fill` calls.
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill))
            .count()
    }

    /// Every filled polygon with the fill color active when it was filled.
    pub fn filled_polygons(&self) -> Vec<(Color, Vec<DVec2>)> {
        let mut out = Vec::new();
        let mut style = Color::BLACK;
        let mut path: Vec<DVec2> = Vec::new();
        for command in &self.commands {
            match *command {
                DrawCommand::FillStyle(c) => style = c,
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => path.push(p),
                DrawCommand::Fill => out.push((style, path.clone())),
                _ => {}
            }
        }
        out
    }

    /// Every stroked line segment as `(from, to)` pairs.
    pub fn stroked_segments(&self) -> Vec<(DVec2, DVec2)> {
        let mut out = Vec::new();
        let mut segments: Vec<(DVec2, DVec2)> = Vec::new();
        let mut cursor: Option<DVec2> = None;
        for command in &self.commands {
            match *command {
                DrawCommand::BeginPath => {
                    segments.clear();
                    cursor = None;
                }
                DrawCommand::MoveTo(p) => cursor = Some(p),
                DrawCommand::LineTo(p) => {
                    if let Some(from) = cursor {
                        segments.push((from, p));
                    }
                    cursor = Some(p);
                }
                DrawCommand::Stroke => out.extend_from_slice(&segments),
                _ => {}
            }
        }
        out
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(DVec2::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(DVec2::new(x, y)));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}
