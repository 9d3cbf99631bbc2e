//! Coordinate transform stage (the vertex program).
//!
//! Maps object-space pixel positions to clip space through one fixed order of
//! operations described on [`TransformParams`], and forwards color and
//! surface coordinates to the fragment stage.

mod params;
mod stage;

pub use params::{step_scale, TransformParams, YAxis};
pub use stage::{vertex_stage, Vertex, VertexOutput};
