//! Per-frame transform, depth sort and painting of a [`Planet`].
//!
//! Every frame the vertices are rotated about the Y axis, faces are sorted
//! farthest-first by the mean depth of their corners and painted in that order
//! (painter's algorithm, no depth buffer). An optional wireframe is stroked on
//! top in face order, each shared edge once.

use geosphere_biome::Planet;
use geosphere_mesh::EdgeKey;
use glam::{DVec2, DVec3};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::{DrawSurface, Palette};

/// Default perspective field of view, in canvas units.
pub const DEFAULT_FIELD_OF_VIEW: f64 = 400.0;

/// Knobs for [`FrameRenderer::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Perspective distance used by [`Projection`].
    pub field_of_view: f64,
    /// Stroke every mesh edge after the filled faces.
    pub show_wireframe: bool,
    /// Wireframe stroke width in pixels.
    pub wireframe_width: f64,
    /// Display colors.
    pub palette: Palette,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            show_wireframe: false,
            wireframe_width: 1.0,
            palette: Palette::default(),
        }
    }
}

/// Rotate `v` about the Y axis, given the sine and cosine of the angle.
#[inline]
pub fn rotate_y(v: DVec3, sin: f64, cos: f64) -> DVec3 {
    DVec3::new(v.x * cos - v.z * sin, v.y, v.x * sin + v.z * cos)
}

/// Rotate every vertex about the Y axis into `out`, replacing its contents.
pub fn rotate_vertices(vertices: &[DVec3], angle: f64, out: &mut Vec<DVec3>) {
    let (sin, cos) = angle.sin_cos();
    out.clear();
    out.extend(vertices.iter().map(|&v| rotate_y(v, sin, cos)));
}

/// Sort key of one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDepth {
    /// Index into the face list.
    pub index: usize,
    /// Mean depth of the face's rotated corners.
    pub depth: f64,
}

/// Order faces farthest first. Equal depths fall back to ascending face index,
/// so the result does not depend on the input order.
pub fn sort_back_to_front(order: &mut [FaceDepth]) {
    order.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth).then(a.index.cmp(&b.index)));
}

/// Call `visit` with each undirected edge of `faces` exactly once, in
/// first-seen face order. `seen` is cleared first and left holding every edge.
pub fn for_each_unique_edge(
    faces: &[[u32; 3]],
    seen: &mut FxHashSet<EdgeKey>,
    mut visit: impl FnMut(EdgeKey),
) {
    seen.clear();
    for &face in faces {
        for edge in EdgeKey::of_face(face) {
            if seen.insert(edge) {
                visit(edge);
            }
        }
    }
}

/// Each undirected edge of `faces` exactly once, in first-seen face order.
pub fn unique_edges(faces: &[[u32; 3]]) -> Vec<EdgeKey> {
    let mut seen = FxHashSet::default();
    let mut edges = Vec::new();
    for_each_unique_edge(faces, &mut seen, |edge| edges.push(edge));
    edges
}

/// Perspective divide around the canvas center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Canvas midpoint.
    pub center: DVec2,
    /// Field of view distance.
    pub field_of_view: f64,
}

impl Projection {
    /// Projection centered on a canvas of the given size.
    pub fn for_canvas(width: f64, height: f64, field_of_view: f64) -> Self {
        Self {
            center: DVec2::new(width / 2.0, height / 2.0),
            field_of_view,
        }
    }

    /// `center + (x, y) * fov / (fov + z)`.
    #[inline]
    pub fn project(&self, v: DVec3) -> DVec2 {
        let scale = self.field_of_view / (self.field_of_view + v.z);
        self.center + DVec2::new(v.x, v.y) * scale
    }
}

/// What a single [`FrameRenderer::render`] call painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles filled.
    pub faces_drawn: usize,
    /// Wireframe edges stroked.
    pub edges_drawn: usize,
}

/// Paints a planet. Holds scratch buffers that are refilled every frame.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    rotated: Vec<DVec3>,
    order: Vec<FaceDepth>,
    drawn_edges: FxHashSet<EdgeKey>,
}

impl FrameRenderer {
    /// Creates a renderer with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices as rotated by the last [`render`](Self::render) call.
    pub fn rotated_vertices(&self) -> &[DVec3] {
        &self.rotated
    }

    /// Face paint order of the last [`render`](Self::render) call.
    pub fn paint_order(&self) -> &[FaceDepth] {
        &self.order
    }

    /// Rotate, sort and paint `planet` at the given rotation angle.
    pub fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        planet: &Planet,
        rotation: f64,
        options: &RenderOptions,
    ) -> FrameStats {
        let faces = planet.faces();
        let biomes = planet.face_biomes();
        let projection =
            Projection::for_canvas(surface.width(), surface.height(), options.field_of_view);

        rotate_vertices(planet.vertices(), rotation, &mut self.rotated);

        self.order.clear();
        self.order
            .extend(faces.iter().enumerate().map(|(index, &[a, b, c])| FaceDepth {
                index,
                depth: (self.rotated[a as usize].z
                    + self.rotated[b as usize].z
                    + self.rotated[c as usize].z)
                    / 3.0,
            }));
        sort_back_to_front(&mut self.order);

        let mut stats = FrameStats::default();
        surface.save();

        for entry in &self.order {
            let [a, b, c] = faces[entry.index];
            let pa = projection.project(self.rotated[a as usize]);
            let pb = projection.project(self.rotated[b as usize]);
            let pc = projection.project(self.rotated[c as usize]);

            surface.begin_path();
            surface.move_to(pa.x, pa.y);
            surface.line_to(pb.x, pb.y);
            surface.line_to(pc.x, pc.y);
            surface.close_path();
            surface.set_fill_style(options.palette.biome(biomes[entry.index]));
            surface.fill();
            stats.faces_drawn += 1;
        }

        if options.show_wireframe {
            surface.set_stroke_style(options.palette.wireframe);
            surface.set_line_width(options.wireframe_width);
            surface.begin_path();
            let rotated = &self.rotated;
            for_each_unique_edge(faces, &mut self.drawn_edges, |edge| {
                let from = projection.project(rotated[edge.lo() as usize]);
                let to = projection.project(rotated[edge.hi() as usize]);
                surface.move_to(from.x, from.y);
                surface.line_to(to.x, to.y);
                stats.edges_drawn += 1;
            });
            surface.stroke();
        }

        surface.restore();
        trace!(
            faces = stats.faces_drawn,
            edges = stats.edges_drawn,
            rotation,
            "rendered frame"
        );
        stats
    }
}
