//! GPU-side mirrors of the program inputs.

use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Rect, Vec2};
use crate::shading::ShadingMode;
use crate::transform::{TransformParams, Vertex};

// ── blend ─────────────────────────────────────────────────────────────────

/// Straight-alpha "over" blending (src-alpha, one-minus-src-alpha).
///
/// The fragment programs emit straight alpha, so this is the blend a host
/// should attach to their color target.
pub fn alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── transform uniform ─────────────────────────────────────────────────────

/// `Transform` uniform block of `quad.wgsl` (binding 0).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub offset: [i32; 2],
    pub delta: [i32; 2],
    pub viewport_pos: [i32; 2],
    pub scene_pos: [f32; 2],
    pub screen_dims: [f32; 2],
    pub scale: f32,
    pub y_sign: f32,
}

impl From<&TransformParams> for TransformUniform {
    fn from(p: &TransformParams) -> Self {
        Self {
            offset: p.offset.to_array(),
            delta: p.delta.to_array(),
            viewport_pos: p.viewport_pos.to_array(),
            scene_pos: p.scene_pos.to_array(),
            screen_dims: p.screen_dims.to_array(),
            scale: p.scale,
            y_sign: p.y_axis.sign(),
        }
    }
}

// ── shading uniform ───────────────────────────────────────────────────────

/// `Shading` uniform block of `quad.wgsl` (binding 1).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ShadingUniform {
    pub tint: [u32; 4],
    pub alpha_pct: u32,
    pub _pad: [u32; 3], // 16-byte alignment
}

impl From<&ShadingMode> for ShadingUniform {
    fn from(mode: &ShadingMode) -> Self {
        Self {
            tint: mode.tint().to_uvec4(),
            alpha_pct: mode.alpha().0 as u32,
            _pad: [0; 3],
        }
    }
}

// ── quad vertex ───────────────────────────────────────────────────────────

/// Vertex buffer element consumed by `vs_main`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub tex_coord: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4, // color
        2 => Float32x2  // tex_coord
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Triangle-strip corners of `rect`: top-left, top-right, bottom-left,
    /// bottom-right.
    ///
    /// Positions are the rect's corners; tex coords are relative to the rect
    /// origin, so the strip shows a surface of the rect's size texel for pixel.
    pub fn strip(rect: Rect, color: ColorRgba) -> [QuadVertex; 4] {
        let r = rect.normalized();
        let (w, h) = (r.size.x, r.size.y);
        [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)].map(|(dx, dy)| {
            let local = Vec2::new(dx, dy);
            QuadVertex {
                position: (r.origin + local).to_array(),
                color: color.to_array(),
                tex_coord: local.to_array(),
            }
        })
    }
}

/// Fills absent attributes the way the vertex stage does.
impl From<&Vertex> for QuadVertex {
    fn from(v: &Vertex) -> Self {
        Self {
            position: v.position.to_array(),
            color: v.color.unwrap_or(ColorRgba::white()).to_array(),
            tex_coord: v.tex_coord.unwrap_or(v.position).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::IVec2;
    use crate::paint::{AlphaPercent, Tint};
    use crate::transform::YAxis;

    #[test]
    fn uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 48);
        assert_eq!(std::mem::size_of::<ShadingUniform>(), 32);
        assert_eq!(std::mem::size_of::<QuadVertex>(), 32);
    }

    #[test]
    fn transform_uniform_from_params() {
        let p = TransformParams::new(Vec2::new(640.0, 480.0))
            .with_offset(IVec2::new(3, 4))
            .with_scale(2.0)
            .with_y_axis(YAxis::Up);
        let u = TransformUniform::from(&p);
        assert_eq!(u.offset, [3, 4]);
        assert_eq!(u.screen_dims, [640.0, 480.0]);
        assert_eq!(u.scale, 2.0);
        assert_eq!(u.y_sign, 1.0);
        assert_eq!(TransformUniform::from(&TransformParams::default()).y_sign, -1.0);
    }

    #[test]
    fn shading_uniform_from_mode() {
        let mode = ShadingMode::TintMaskAlpha {
            tint: Tint::new(255, 128, 0),
            alpha: AlphaPercent(50),
        };
        let u = ShadingUniform::from(&mode);
        assert_eq!(u.tint, [255, 128, 0, 0]);
        assert_eq!(u.alpha_pct, 50);
        assert_eq!(ShadingUniform::from(&ShadingMode::PassThrough).alpha_pct, 100);
    }

    #[test]
    fn strip_covers_rect_with_local_tex_coords() {
        let v = QuadVertex::strip(Rect::new(10.0, 20.0, 4.0, 2.0), ColorRgba::white());
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[3].position, [14.0, 22.0]);
        assert_eq!(v[1].tex_coord, [4.0, 0.0]);
        assert_eq!(v[2].tex_coord, [0.0, 2.0]);
    }

    #[test]
    fn vertex_defaults_match_stage() {
        let q = QuadVertex::from(&Vertex::new(Vec2::new(5.0, 6.0)));
        assert_eq!(q.color, [1.0; 4]);
        assert_eq!(q.tex_coord, [5.0, 6.0]);
    }

    #[test]
    fn layout_stride() {
        let l = QuadVertex::layout();
        assert_eq!(l.array_stride, 32);
        assert_eq!(l.attributes.len(), 3);
        assert_eq!(l.attributes[2].offset, 24);
    }
}
