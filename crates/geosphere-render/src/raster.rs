//! CPU rasterizer implementing [`DrawSurface`] over an RGBA8 buffer.
//!
//! Fills use the nonzero winding rule sampled at pixel centers. Strokes cover
//! every pixel whose center lies within half the line width of a segment.
//! There is no anti-aliasing and colors overwrite instead of blending.

use std::path::Path;

use glam::DVec2;

use crate::{Color, DrawSurface, RenderError};

#[derive(Debug, Clone, Copy)]
struct Style {
    fill: Color,
    stroke: Color,
    line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct SubPath {
    points: Vec<DVec2>,
    closed: bool,
}

/// An in-memory RGBA canvas.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    style: Style,
    saved: Vec<Style>,
    path: Vec<SubPath>,
}

impl PixelCanvas {
    /// A canvas of `width x height` pixels cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
            style: Style::default(),
            saved: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Width in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[i..i + 4];
        Some(Color {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        })
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Encode the canvas as a PNG image.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut buf = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(std::io::Cursor::new(&mut buf), self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(buf)
    }

    /// Encode the canvas and write it to `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn put(&mut self, x: i64, y: i64, rgba: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    fn fill_path(&mut self) {
        let mut edges: Vec<(DVec2, DVec2)> = Vec::new();
        for sub in &self.path {
            let n = sub.points.len();
            if n < 3 {
                continue;
            }
            for i in 0..n {
                edges.push((sub.points[i], sub.points[(i + 1) % n]));
            }
        }
        if edges.is_empty() {
            return;
        }

        let (min_y, max_y) = edges.iter().fold((f64::MAX, f64::MIN), |(lo, hi), (a, b)| {
            (lo.min(a.y).min(b.y), hi.max(a.y).max(b.y))
        });
        let y_start = (min_y.floor() as i64).max(0);
        let y_end = (max_y.ceil() as i64).min(self.height as i64);
        let rgba = self.style.fill.to_rgba();
        let mut crossings: Vec<(f64, i32)> = Vec::new();

        for y in y_start..y_end {
            let sy = y as f64 + 0.5;
            crossings.clear();
            for &(a, b) in &edges {
                if a.y == b.y {
                    continue;
                }
                let (top, bottom, dir) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
                if sy < top.y || sy >= bottom.y {
                    continue;
                }
                let t = (sy - top.y) / (bottom.y - top.y);
                crossings.push((top.x + t * (bottom.x - top.x), dir));
            }
            crossings.sort_by(|l, r| l.0.total_cmp(&r.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding == 0 {
                    continue;
                }
                // Pixels whose centers fall inside [x0, x1), kept on the canvas.
                let x0 = ((pair[0].0 - 0.5).ceil() as i64).max(0);
                let x1 = ((pair[1].0 - 0.5).ceil() as i64).min(self.width as i64);
                for x in x0..x1 {
                    self.put(x, y, rgba);
                }
            }
        }
    }

    fn stroke_segment(&mut self, a: DVec2, b: DVec2, half: f64, rgba: [u8; 4]) {
        let x_start = ((a.x.min(b.x) - half).floor() as i64).max(0);
        let x_end = ((a.x.max(b.x) + half).ceil() as i64).min(self.width as i64);
        let y_start = ((a.y.min(b.y) - half).floor() as i64).max(0);
        let y_end = ((a.y.max(b.y) + half).ceil() as i64).min(self.height as i64);
        let ab = b - a;
        let len_sq = ab.length_squared();

        for y in y_start..y_end {
            for x in x_start..x_end {
                let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                let t = if len_sq > 0.0 {
                    ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                if p.distance(a + ab * t) <= half {
                    self.put(x, y, rgba);
                }
            }
        }
    }
}

impl DrawSurface for PixelCanvas {
    fn width(&self) -> f64 {
        self.width as f64
    }

    fn height(&self) -> f64 {
        self.height as f64
    }

    fn save(&mut self) {
        self.saved.push(self.style);
    }

    fn restore(&mut self) {
        if let Some(style) = self.saved.pop() {
            self.style = style;
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn close_path(&mut self) {
        if let Some(sub) = self.path.last_mut() {
            sub.closed = true;
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(SubPath {
            points: vec![DVec2::new(x, y)],
            closed: false,
        });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = DVec2::new(x, y);
        match self.path.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            _ => self.path.push(SubPath {
                points: vec![p],
                closed: false,
            }),
        }
    }

    fn set_fill_style(&mut self, color: Color) {
        self.style.fill = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.style.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        if width > 0.0 && width.is_finite() {
            self.style.line_width = width;
        }
    }

    fn fill(&mut self) {
        self.fill_path();
    }

    fn stroke(&mut self) {
        let half = (self.style.line_width * 0.5).max(0.5);
        let rgba = self.style.stroke.to_rgba();
        let mut segments = Vec::new();
        for sub in &self.path {
            for pair in sub.points.windows(2) {
                segments.push((pair[0], pair[1]));
            }
            if sub.closed && sub.points.len() > 2 {
                segments.push((sub.points[sub.points.len() - 1], sub.points[0]));
            }
        }
        for (a, b) in segments {
            self.stroke_segment(a, b, half, rgba);
        }
    }
}
