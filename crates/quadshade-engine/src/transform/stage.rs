use crate::coords::{ClipPosition, ColorRgba, Vec2};

use super::TransformParams;

/// Per-vertex input of the transform stage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    /// Object-space position in pixels.
    pub position: Vec2,
    /// Per-vertex color; opaque white when absent.
    pub color: Option<ColorRgba>,
    /// Surface coordinate in texels; the raw position when absent.
    pub tex_coord: Option<Vec2>,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2) -> Self {
        Self {
            position,
            color: None,
            tex_coord: None,
        }
    }

    #[inline]
    pub const fn with_color(mut self, color: ColorRgba) -> Self {
        self.color = Some(color);
        self
    }

    #[inline]
    pub const fn with_tex_coord(mut self, tex_coord: Vec2) -> Self {
        self.tex_coord = Some(tex_coord);
        self
    }
}

/// Values handed from the vertex stage to the rasterizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VertexOutput {
    pub clip: ClipPosition,
    pub color: ColorRgba,
    pub tex_coord: Vec2,
}

/// The vertex program: clip position plus pass-through attributes.
///
/// Pure function of its inputs; safe to run for any number of vertices
/// concurrently.
pub fn vertex_stage(params: &TransformParams, vertex: &Vertex) -> VertexOutput {
    VertexOutput {
        clip: params.to_clip(vertex.position),
        color: vertex.color.unwrap_or(ColorRgba::white()),
        tex_coord: vertex.tex_coord.unwrap_or(vertex.position),
    }
}
