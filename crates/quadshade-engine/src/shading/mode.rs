use crate::coords::{ColorRgba, Vec2};
use crate::paint::{AlphaPercent, Tint};
use crate::transform::VertexOutput;

use super::SampledSurface;

/// RGB written by [`ShadingMode::GrayMask`].
pub const MASK_GRAY: f32 = 0.5;

/// Weight of the sampled color in [`ShadingMode::Blend`].
pub const BLEND_WEIGHT: f32 = 0.5;

/// Interpolated values reaching one fragment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FragmentInput {
    /// Surface coordinate in texels.
    pub tex_coord: Vec2,
    /// Interpolated per-vertex color.
    pub color: ColorRgba,
    /// Window position of the fragment, see [`FragCoordOrigin`].
    ///
    /// No mode reads it; it is carried for host-side logic keyed on window
    /// position, such as scissoring or picking.
    pub frag_coord: Vec2,
}

impl FragmentInput {
    #[inline]
    pub const fn new(tex_coord: Vec2) -> Self {
        Self {
            tex_coord,
            color: ColorRgba::white(),
            frag_coord: Vec2::zero(),
        }
    }

    /// Fragment lying exactly on a vertex, i.e. with uninterpolated attributes.
    #[inline]
    pub const fn at_vertex(out: &VertexOutput, frag_coord: Vec2) -> Self {
        Self {
            tex_coord: out.tex_coord,
            color: out.color,
            frag_coord,
        }
    }

    #[inline]
    pub const fn with_color(mut self, color: ColorRgba) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub const fn with_frag_coord(mut self, frag_coord: Vec2) -> Self {
        self.frag_coord = frag_coord;
        self
    }
}

/// Where window row 0 of a fragment coordinate lies.
///
/// Only computations on the fragment's window position care; surface
/// sampling always uses the interpolated `tex_coord`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FragCoordOrigin {
    /// Row 0 at the top, +Y down. WGSL `@builtin(position)` uses this.
    #[default]
    UpperLeft,
    /// Row 0 at the bottom, +Y up.
    LowerLeft,
}

impl FragCoordOrigin {
    /// Fragment coordinate of the center of pixel `(x, y)`, where `y` counts
    /// rows from the top of a target `target_height` pixels tall.
    #[inline]
    pub fn frag_coord(self, x: u32, y: u32, target_height: u32) -> Vec2 {
        let cx = x as f32 + 0.5;
        match self {
            FragCoordOrigin::UpperLeft => Vec2::new(cx, y as f32 + 0.5),
            FragCoordOrigin::LowerLeft => Vec2::new(cx, target_height as f32 - y as f32 - 0.5),
        }
    }
}

/// Fragment program selected by the host for a draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShadingMode {
    /// Sampled color, all four channels unchanged.
    PassThrough,
    /// Constant mid-gray with the sampled red channel as alpha.
    GrayMask,
    /// Tint with the sampled red channel as alpha.
    TintMask { tint: Tint },
    /// Tint with alpha `mask * alpha / 100`.
    TintMaskAlpha { tint: Tint, alpha: AlphaPercent },
    /// Tint without sampling; opaque unless `alpha` is given.
    SolidTint { tint: Tint, alpha: Option<AlphaPercent> },
    /// Even mix of the per-vertex color and the sampled color.
    Blend,
}

impl ShadingMode {
    /// Runs the fragment program for one fragment.
    pub fn shade(&self, input: &FragmentInput, surface: &dyn SampledSurface) -> ColorRgba {
        match *self {
            ShadingMode::PassThrough => surface.sample(input.tex_coord),
            ShadingMode::GrayMask => {
                let mask = surface.sample(input.tex_coord).r;
                ColorRgba::new(MASK_GRAY, MASK_GRAY, MASK_GRAY, mask)
            }
            ShadingMode::TintMask { tint } => {
                let mask = surface.sample(input.tex_coord).r;
                with_alpha(tint, mask)
            }
            ShadingMode::TintMaskAlpha { tint, alpha } => {
                let mask = surface.sample(input.tex_coord).r;
                with_alpha(tint, mask * alpha.fraction())
            }
            ShadingMode::SolidTint { tint, alpha } => {
                with_alpha(tint, alpha.map_or(1.0, AlphaPercent::fraction))
            }
            ShadingMode::Blend => input.color.mix(surface.sample(input.tex_coord), BLEND_WEIGHT),
        }
    }

    /// Whether the program reads the bound surface.
    #[inline]
    pub fn samples_surface(&self) -> bool {
        !matches!(self, ShadingMode::SolidTint { .. })
    }

    /// Name of the matching fragment entry point in the WGSL program.
    pub fn fragment_entry(&self) -> &'static str {
        match self {
            ShadingMode::PassThrough => "fs_pass_through",
            ShadingMode::GrayMask => "fs_gray_mask",
            ShadingMode::TintMask { .. } => "fs_tint_mask",
            ShadingMode::TintMaskAlpha { .. } => "fs_tint_mask_alpha",
            ShadingMode::SolidTint { alpha: None, .. } => "fs_solid_tint",
            ShadingMode::SolidTint { alpha: Some(_), .. } => "fs_solid_tint_alpha",
            ShadingMode::Blend => "fs_blend",
        }
    }

    /// Tint uniform of the mode; black for modes that ignore it.
    pub fn tint(&self) -> Tint {
        match *self {
            ShadingMode::TintMask { tint }
            | ShadingMode::TintMaskAlpha { tint, .. }
            | ShadingMode::SolidTint { tint, .. } => tint,
            _ => Tint::black(),
        }
    }

    /// Alpha uniform of the mode; opaque for modes that ignore it.
    pub fn alpha(&self) -> AlphaPercent {
        match *self {
            ShadingMode::TintMaskAlpha { alpha, .. } => alpha,
            ShadingMode::SolidTint { alpha: Some(alpha), .. } => alpha,
            _ => AlphaPercent::OPAQUE,
        }
    }
}

#[inline]
fn with_alpha(tint: Tint, a: f32) -> ColorRgba {
    let [r, g, b] = tint.normalized();
    ColorRgba::new(r, g, b, a)
}
