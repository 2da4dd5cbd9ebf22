//! Draw contract between the simulation and the (external) render surface.
//!
//! The engine never rasterizes. Each entity draws itself through the
//! [`DrawSurface`] trait; [`DrawList`] is the built-in implementation that
//! records symbolic commands plus a flat vertex arena the host renderer
//! (canvas, GPU, test harness) consumes after every tick.

use glam::{Vec2, Vec3};

use crate::renderer::color::Color;

/// Which of the two simultaneous projections a draw call targets.
///
/// Top projects the world (X, Y) plane with Z as the depth axis; Side
/// projects (X, Z) with Y as the depth axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTag {
    Top,
    Side,
}

impl ViewTag {
    /// The two world-space coordinates shown by this projection.
    pub fn plane(self, p: Vec3) -> Vec2 {
        match self {
            ViewTag::Top => Vec2::new(p.x, p.y),
            ViewTag::Side => Vec2::new(p.x, p.z),
        }
    }

    /// The world-space coordinate along this projection's depth axis.
    pub fn depth(self, p: Vec3) -> f32 {
        match self {
            ViewTag::Top => p.z,
            ViewTag::Side => p.y,
        }
    }
}

/// Pixel dimensions of one view's drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a screen-space box (center ± half) overlaps the viewport.
    pub fn intersects_box(&self, center: Vec2, half: f32) -> bool {
        center.x > -half
            && center.x < self.width + half
            && center.y > -half
            && center.y < self.height + half
    }

    /// Whether a screen-space point lies inside the viewport, with a margin
    /// extending the bounds outward.
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x > -margin
            && point.x < self.width + margin
            && point.y > -margin
            && point.y < self.height + margin
    }
}

/// One stop of a radial gradient ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the ramp, 0.0 (center) to 1.0 (edge).
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Handle to a gradient resource owned by a surface.
/// Valid for the lifetime of the surface that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientId(pub u32);

/// The 2-D drawing operations an entity's draw contract may invoke.
pub trait DrawSurface {
    /// Build a radial gradient resource from a color ramp.
    /// Expensive on real backends; callers are expected to cache the handle.
    fn create_radial_gradient(&mut self, stops: &[GradientStop]) -> GradientId;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color);
    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: GradientId);
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color);
    fn stroke_line_gradient(&mut self, from: Vec2, to: Vec2, width: f32, gradient: GradientId);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: Color);
    fn fill_text(&mut self, anchor: Vec2, text: &str, size: f32, color: Color);
}

/// Range into a [`DrawList`]'s vertex arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRange {
    pub start: u32,
    pub len: u32,
}

/// A recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle { center: Vec2, radius: f32, color: Color },
    StrokeCircle { center: Vec2, radius: f32, width: f32, color: Color },
    FillCircleGradient { center: Vec2, radius: f32, gradient: GradientId },
    StrokePolyline { range: VertexRange, width: f32, color: Color },
    StrokeLineGradient { from: Vec2, to: Vec2, width: f32, gradient: GradientId },
    FillPolygon { range: VertexRange, color: Color },
    StrokePolygon { range: VertexRange, width: f32, color: Color },
    FillText { anchor: Vec2, text: String, size: f32, color: Color },
}

/// Command-recording surface.
///
/// Commands and vertices are cleared every frame; gradient resources persist
/// for the surface's lifetime, mirroring how a real canvas keeps gradient
/// objects alive across frames.
pub struct DrawList {
    commands: Vec<DrawCommand>,
    vertices: Vec<Vec2>,
    gradients: Vec<Vec<GradientStop>>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            vertices: Vec::with_capacity(1024),
            gradients: Vec::new(),
        }
    }

    /// Drop this frame's commands and vertices. Gradients survive.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.vertices.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Vertices referenced by a recorded range.
    pub fn points_of(&self, range: VertexRange) -> &[Vec2] {
        &self.vertices[range.start as usize..(range.start + range.len) as usize]
    }

    /// The ramp a gradient handle was built from.
    pub fn gradient_stops(&self, id: GradientId) -> Option<&[GradientStop]> {
        self.gradients.get(id.0 as usize).map(Vec::as_slice)
    }

    /// Number of gradient resources created on this surface.
    pub fn gradient_count(&self) -> usize {
        self.gradients.len()
    }

    /// Raw vertex arena as bytes (x, y pairs of f32) for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn push_vertices(&mut self, points: &[Vec2]) -> VertexRange {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(points);
        VertexRange {
            start,
            len: points.len() as u32,
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSurface for DrawList {
    fn create_radial_gradient(&mut self, stops: &[GradientStop]) -> GradientId {
        let id = GradientId(self.gradients.len() as u32);
        self.gradients.push(stops.to_vec());
        id
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    fn fill_circle_gradient(&mut self, center: Vec2, radius: f32, gradient: GradientId) {
        self.commands.push(DrawCommand::FillCircleGradient { center, radius, gradient });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        let range = self.push_vertices(points);
        self.commands.push(DrawCommand::StrokePolyline { range, width, color });
    }

    fn stroke_line_gradient(&mut self, from: Vec2, to: Vec2, width: f32, gradient: GradientId) {
        self.commands.push(DrawCommand::StrokeLineGradient { from, to, width, gradient });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let range = self.push_vertices(points);
        self.commands.push(DrawCommand::FillPolygon { range, color });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], width: f32, color: Color) {
        let range = self.push_vertices(points);
        self.commands.push(DrawCommand::StrokePolygon { range, width, color });
    }

    fn fill_text(&mut self, anchor: Vec2, text: &str, size: f32, color: Color) {
        self.commands.push(DrawCommand::FillText {
            anchor,
            text: text.to_string(),
            size,
            color,
        });
    }
}
