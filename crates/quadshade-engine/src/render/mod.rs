//! GPU form of the programs.
//!
//! Holds the WGSL source and the descriptions a host needs to build a
//! pipeline around it: uniform blocks, vertex layout, bind group layout,
//! blend and primitive state. Device, buffer and pipeline creation stay with
//! the host.
//!
//! Convention:
//! - CPU geometry is in pixels, with the Y direction chosen by `YAxis`.
//! - `vs_main` converts to clip space exactly like `TransformParams::to_clip`.

mod common;
mod program;

pub use common::{alpha_blend, QuadVertex, ShadingUniform, TransformUniform};
pub use program::{
    bind_group_layout_entries, color_target, module_descriptor, primitive_state, QUAD_SHADER,
    SHADING_BINDING, SURFACE_BINDING, TRANSFORM_BINDING, VERTEX_ENTRY,
};
