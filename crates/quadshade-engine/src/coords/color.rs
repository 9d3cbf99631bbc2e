/// Straight-alpha RGBA color, channels nominally in `[0, 1]`.
///
/// This is the output type of every fragment program and the per-vertex color
/// passed through the vertex stage. Channels are not clamped: out-of-range
/// inputs produce out-of-range outputs, as they would on the GPU before the
/// color attachment store.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Straight conversion of 8-bit channels (`c / 255`).
    #[inline]
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Per-channel linear interpolation, `self * (1 - t) + other * t`.
    ///
    /// Same formula as WGSL/GLSL `mix`.
    #[inline]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let lerp = |a: f32, b: f32| a * (1.0 - t) + b * t;
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for ColorRgba {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_half_is_average() {
        let red = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
        let green = ColorRgba::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(red.mix(green, 0.5), ColorRgba::new(0.5, 0.5, 0.0, 1.0));
    }

    #[test]
    fn mix_endpoints() {
        let a = ColorRgba::new(0.2, 0.4, 0.6, 0.8);
        let b = ColorRgba::white();
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn from_rgba8_full_range() {
        assert_eq!(ColorRgba::from_rgba8([0, 0, 0, 255]), ColorRgba::black());
        assert_eq!(ColorRgba::from_rgba8([255; 4]), ColorRgba::white());
    }
}
