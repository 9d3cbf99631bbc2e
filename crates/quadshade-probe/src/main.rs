use anyhow::Result;

use quadshade_engine::coords::{ColorRgba, IVec2, Rect, Vec2};
use quadshade_engine::logging::{init_logging, LoggingConfig};
use quadshade_engine::paint::{AlphaPercent, Tint};
use quadshade_engine::render::{QuadVertex, ShadingUniform, TransformUniform};
use quadshade_engine::shading::{FragCoordOrigin, FragmentInput, ShadingMode, Surface};
use quadshade_engine::transform::{vertex_stage, TransformParams, Vertex};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // A 4x2 mask drawn at (100, 50) on an 800x600 screen, zoomed to 2x about the centre.
    let mut params = TransformParams::new(Vec2::new(800.0, 600.0)).with_offset(IVec2::new(100, 50));
    params.zoom_at(Vec2::new(400.0, 300.0), 1);
    log::info!("transform: {:?}", TransformUniform::from(&params));

    let coverage = [0.0, 0.1, 0.3, 0.6, 1.0, 0.5, 0.2, 0.0];
    let mask = Surface::from_coverage(4, 2, &coverage)?;

    let strip = QuadVertex::strip(Rect::from_size(4.0, 2.0), ColorRgba::new(1.0, 0.0, 0.0, 1.0));
    let outputs: Vec<_> = strip
        .iter()
        .map(|q| {
            let v = Vertex::new(q.position.into())
                .with_color(q.color.into())
                .with_tex_coord(q.tex_coord.into());
            vertex_stage(&params, &v)
        })
        .collect();
    for (q, out) in strip.iter().zip(&outputs) {
        log::info!("vertex {:?} -> clip {:?}", q.position, out.clip.to_array());
    }

    let modes = [
        ShadingMode::PassThrough,
        ShadingMode::GrayMask,
        ShadingMode::TintMask { tint: Tint::new(0, 0, 255) },
        ShadingMode::TintMaskAlpha { tint: Tint::new(127, 127, 127), alpha: AlphaPercent(50) },
        ShadingMode::SolidTint { tint: Tint::new(255, 128, 0), alpha: None },
        ShadingMode::SolidTint { tint: Tint::new(255, 128, 0), alpha: Some(AlphaPercent(25)) },
        ShadingMode::Blend,
    ];

    for mode in modes {
        let uniform = ShadingUniform::from(&mode);
        log::info!("{} (tint {:?}, alpha {}%)", mode.fragment_entry(), uniform.tint, uniform.alpha_pct);
        for y in 0..mask.height() {
            let row: Vec<[f32; 4]> = (0..mask.width())
                .map(|x| {
                    let frag = FragCoordOrigin::UpperLeft.frag_coord(x, y, mask.height());
                    // Surface texels line up with target pixels in this probe.
                    let input = FragmentInput::new(frag)
                        .with_color(outputs[0].color)
                        .with_frag_coord(frag);
                    mode.shade(&input, &mask).to_array()
                })
                .collect();
            log::info!("  row {y}: {row:.3?}");
        }
    }

    Ok(())
}
