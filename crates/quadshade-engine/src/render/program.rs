use super::common::{alpha_blend, ShadingUniform, TransformUniform};

/// WGSL source of the quad programs: `vs_main` plus one fragment entry point
/// per [`ShadingMode`](crate::shading::ShadingMode).
pub const QUAD_SHADER: &str = include_str!("shaders/quad.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";

pub const TRANSFORM_BINDING: u32 = 0;
pub const SHADING_BINDING: u32 = 1;
pub const SURFACE_BINDING: u32 = 2;

/// Shader module descriptor for [`QUAD_SHADER`]. Compiling it is up to the host.
pub fn module_descriptor() -> wgpu::ShaderModuleDescriptor<'static> {
    log::debug!("quad shader module descriptor requested");
    wgpu::ShaderModuleDescriptor {
        label: Some("quadshade quad shader"),
        source: wgpu::ShaderSource::Wgsl(QUAD_SHADER.into()),
    }
}

/// Group 0 layout shared by every entry point.
///
/// The surface is read with `textureLoad`, so it needs no sampler and may be
/// a non-filterable format.
pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 3] {
    [
        wgpu::BindGroupLayoutEntry {
            binding: TRANSFORM_BINDING,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(
                    std::mem::size_of::<TransformUniform>() as u64,
                ),
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: SHADING_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(
                    std::mem::size_of::<ShadingUniform>() as u64,
                ),
            },
            count: None,
        },
        wgpu::BindGroupLayoutEntry {
            binding: SURFACE_BINDING,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: false },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        },
    ]
}

/// Color target with [`alpha_blend`] for the given attachment format.
pub fn color_target(format: wgpu::TextureFormat) -> wgpu::ColorTargetState {
    wgpu::ColorTargetState {
        format,
        blend: Some(alpha_blend()),
        write_mask: wgpu::ColorWrites::ALL,
    }
}

/// Quads are drawn as 4-vertex triangle strips (see `QuadVertex::strip`).
pub fn primitive_state() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleStrip,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{AlphaPercent, Tint};
    use crate::shading::ShadingMode;

    fn all_modes() -> [ShadingMode; 7] {
        let tint = Tint::new(1, 2, 3);
        [
            ShadingMode::PassThrough,
            ShadingMode::GrayMask,
            ShadingMode::TintMask { tint },
            ShadingMode::TintMaskAlpha { tint, alpha: AlphaPercent(10) },
            ShadingMode::SolidTint { tint, alpha: None },
            ShadingMode::SolidTint { tint, alpha: Some(AlphaPercent(10)) },
            ShadingMode::Blend,
        ]
    }

    #[test]
    fn every_mode_has_an_entry_point() {
        for mode in all_modes() {
            let decl = format!("fn {}(", mode.fragment_entry());
            assert!(QUAD_SHADER.contains(&decl), "missing {decl}");
        }
        assert!(QUAD_SHADER.contains(&format!("fn {VERTEX_ENTRY}(")));
    }

    #[test]
    fn bindings_match_source() {
        for binding in [TRANSFORM_BINDING, SHADING_BINDING, SURFACE_BINDING] {
            assert!(QUAD_SHADER.contains(&format!("@binding({binding})")));
        }
        let entries = bind_group_layout_entries();
        assert_eq!(entries.map(|e| e.binding), [0, 1, 2]);
    }

    #[test]
    fn descriptor_carries_source() {
        let desc = module_descriptor();
        match desc.source {
            wgpu::ShaderSource::Wgsl(src) => assert_eq!(src, QUAD_SHADER),
            _ => panic!("expected WGSL source"),
        }
    }

    fn parse_and_validate() -> naga::Module {
        let module = naga::front::wgsl::parse_str(QUAD_SHADER)
            .unwrap_or_else(|e| panic!("{}", e.emit_to_string(QUAD_SHADER)));
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .unwrap_or_else(|e| panic!("{}", e.emit_to_string(QUAD_SHADER)));
        module
    }

    /// `(member name, offset)` pairs and total size of a WGSL struct.
    fn struct_layout(module: &naga::Module, name: &str) -> (Vec<(String, usize)>, usize) {
        let (_, ty) = module
            .types
            .iter()
            .find(|(_, ty)| ty.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("no struct {name}"));
        match &ty.inner {
            naga::TypeInner::Struct { members, span } => (
                members
                    .iter()
                    .map(|m| (m.name.clone().unwrap_or_default(), m.offset as usize))
                    .collect(),
                *span as usize,
            ),
            other => panic!("{name} is not a struct: {other:?}"),
        }
    }

    #[test]
    fn shader_validates() {
        let module = parse_and_validate();
        let mut fragment: Vec<_> = module
            .entry_points
            .iter()
            .filter(|ep| ep.stage == naga::ShaderStage::Fragment)
            .map(|ep| ep.name.as_str())
            .collect();
        fragment.sort_unstable();
        let mut expected: Vec<_> = all_modes().iter().map(|m| m.fragment_entry()).collect();
        expected.sort_unstable();
        assert_eq!(fragment, expected);
        assert!(module
            .entry_points
            .iter()
            .any(|ep| ep.stage == naga::ShaderStage::Vertex && ep.name == VERTEX_ENTRY));
    }

    #[test]
    fn transform_block_matches_uniform() {
        use std::mem::{offset_of, size_of};
        let (members, span) = struct_layout(&parse_and_validate(), "Transform");
        let expected = [
            ("offset", offset_of!(TransformUniform, offset)),
            ("delta", offset_of!(TransformUniform, delta)),
            ("viewport_pos", offset_of!(TransformUniform, viewport_pos)),
            ("scene_pos", offset_of!(TransformUniform, scene_pos)),
            ("screen_dims", offset_of!(TransformUniform, screen_dims)),
            ("scale", offset_of!(TransformUniform, scale)),
            ("y_sign", offset_of!(TransformUniform, y_sign)),
        ]
        .map(|(n, o)| (n.to_string(), o));
        assert_eq!(members, expected);
        assert_eq!(span, size_of::<TransformUniform>());
    }

    #[test]
    fn shading_block_matches_uniform() {
        use std::mem::{offset_of, size_of};
        let (members, span) = struct_layout(&parse_and_validate(), "Shading");
        assert_eq!(members[0], ("tint".to_string(), offset_of!(ShadingUniform, tint)));
        assert_eq!(members[1], ("alpha_pct".to_string(), offset_of!(ShadingUniform, alpha_pct)));
        assert_eq!(span, size_of::<ShadingUniform>());
    }

    #[test]
    fn color_target_blends() {
        let t = color_target(wgpu::TextureFormat::Bgra8Unorm);
        assert_eq!(t.blend, Some(alpha_blend()));
    }
}
