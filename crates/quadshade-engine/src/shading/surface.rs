use anyhow::{Context, Result};

use crate::coords::{ColorRgba, Vec2};

/// Read-only image addressed in texels (unnormalized coordinates).
///
/// The fragment programs only ever read through [`sample`](Self::sample),
/// which fetches the texel containing `coord`: `floor(coord)` clamped to the
/// edge. This matches `textureLoad` on the clamped integer coordinate in the
/// GPU form of the programs.
pub trait SampledSurface {
    /// `(width, height)` in texels.
    fn size(&self) -> (u32, u32);

    /// Texel at `(x, y)`, row 0 at the top. Callers keep `x < width`, `y < height`.
    fn texel(&self, x: u32, y: u32) -> ColorRgba;

    /// Nearest-texel fetch with clamp-to-edge.
    ///
    /// A zero-sized surface reads as opaque black, like an incomplete texture.
    fn sample(&self, coord: Vec2) -> ColorRgba {
        let (w, h) = self.size();
        if w == 0 || h == 0 {
            return ColorRgba::black();
        }
        self.texel(clamp_index(coord.x, w), clamp_index(coord.y, h))
    }
}

// NaN lands on texel 0.
fn clamp_index(c: f32, len: u32) -> u32 {
    let i = c.floor();
    if !(i >= 0.0) {
        0
    } else if i >= len as f32 {
        len - 1
    } else {
        i as u32
    }
}

/// In-memory RGBA surface, row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    texels: Vec<ColorRgba>,
}

impl Surface {
    /// Surface with no texels; samples read as opaque black.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            texels: Vec::new(),
        }
    }

    pub fn solid(width: u32, height: u32, color: ColorRgba) -> Self {
        Self {
            width,
            height,
            texels: vec![color; width as usize * height as usize],
        }
    }

    pub fn from_texels(width: u32, height: u32, texels: Vec<ColorRgba>) -> Result<Self> {
        let expected = texel_count(width, height)?;
        anyhow::ensure!(
            texels.len() == expected,
            "surface {width}x{height} needs {expected} texels, got {}",
            texels.len()
        );
        Ok(Self { width, height, texels })
    }

    /// Builds a surface from tightly packed RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = texel_count(width, height)?
            .checked_mul(4)
            .context("surface byte size overflows")?;
        anyhow::ensure!(
            bytes.len() == expected,
            "RGBA8 surface {width}x{height} needs {expected} bytes, got {}",
            bytes.len()
        );

        let texels = bytes
            .chunks_exact(4)
            .map(|px| ColorRgba::from_rgba8([px[0], px[1], px[2], px[3]]))
            .collect();
        log::debug!("surface: {width}x{height} from RGBA8");
        Ok(Self { width, height, texels })
    }

    /// Builds a single-channel mask surface from one byte per texel.
    ///
    /// Reads like an R8 texture: the mask lands in the red channel, green and
    /// blue are zero and alpha is one.
    pub fn from_mask8(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = texel_count(width, height)?;
        anyhow::ensure!(
            bytes.len() == expected,
            "mask surface {width}x{height} needs {expected} bytes, got {}",
            bytes.len()
        );

        let texels = bytes
            .iter()
            .map(|&m| ColorRgba::new(m as f32 / 255.0, 0.0, 0.0, 1.0))
            .collect();
        log::debug!("surface: {width}x{height} mask");
        Ok(Self { width, height, texels })
    }

    /// Builds a mask surface from rasterizer coverage values.
    ///
    /// Coverage is doubled before quantization (`v * 512` saturated to a
    /// byte) so that half-covered edge pixels are already fully opaque.
    pub fn from_coverage(width: u32, height: u32, coverage: &[f32]) -> Result<Self> {
        let bytes: Vec<u8> = coverage.iter().map(|&v| coverage_to_mask(v)).collect();
        Self::from_mask8(width, height, &bytes)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Quantizes one coverage value to a mask byte. Float-to-int `as` saturates
/// and maps NaN to 0.
#[inline]
pub fn coverage_to_mask(v: f32) -> u8 {
    (v * 512.0) as u8
}

fn texel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .with_context(|| format!("surface {width}x{height} is too large"))
}

impl SampledSurface for Surface {
    #[inline]
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn texel(&self, x: u32, y: u32) -> ColorRgba {
        self.texels[y as usize * self.width as usize + x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Surface {
        // 2x2: red, green / blue, white
        Surface::from_rgba8(
            2,
            2,
            &[
                255, 0, 0, 255, 0, 255, 0, 255, //
                0, 0, 255, 255, 255, 255, 255, 255,
            ],
        )
        .unwrap()
    }

    #[test]
    fn sample_picks_containing_texel() {
        let s = checker();
        assert_eq!(s.sample(Vec2::new(0.5, 0.5)), ColorRgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.sample(Vec2::new(1.5, 0.5)), ColorRgba::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(s.sample(Vec2::new(0.9, 1.0)), ColorRgba::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(s.sample(Vec2::new(1.99, 1.99)), ColorRgba::white());
    }

    #[test]
    fn sample_clamps_to_edge() {
        let s = checker();
        assert_eq!(s.sample(Vec2::new(-5.0, -5.0)), s.texel(0, 0));
        assert_eq!(s.sample(Vec2::new(2.0, 0.0)), s.texel(1, 0));
        assert_eq!(s.sample(Vec2::new(100.0, 100.0)), s.texel(1, 1));
        assert_eq!(s.sample(Vec2::new(f32::NAN, 1.5)), s.texel(0, 1));
    }

    #[test]
    fn empty_surface_reads_opaque_black() {
        assert_eq!(Surface::empty().sample(Vec2::new(3.0, 4.0)), ColorRgba::black());
    }

    #[test]
    fn byte_length_is_checked() {
        assert!(Surface::from_rgba8(2, 2, &[0; 15]).is_err());
        assert!(Surface::from_mask8(3, 1, &[0; 2]).is_err());
        assert!(Surface::from_texels(1, 1, vec![]).is_err());
    }

    #[test]
    fn mask_lives_in_red_channel() {
        let s = Surface::from_mask8(1, 1, &[255]).unwrap();
        assert_eq!(s.texel(0, 0), ColorRgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn coverage_saturates_at_half() {
        assert_eq!(coverage_to_mask(0.0), 0);
        assert_eq!(coverage_to_mask(0.25), 128);
        assert_eq!(coverage_to_mask(0.5), 255);
        assert_eq!(coverage_to_mask(1.0), 255);
        assert_eq!(coverage_to_mask(-1.0), 0);
        assert_eq!(coverage_to_mask(f32::NAN), 0);
    }

    #[test]
    fn coverage_surface_matches_mask() {
        let s = Surface::from_coverage(2, 1, &[0.5, 0.0]).unwrap();
        assert_eq!(s.texel(0, 0).r, 1.0);
        assert_eq!(s.texel(1, 0).r, 0.0);
    }
}
