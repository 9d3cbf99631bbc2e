/// Integer RGB tint, one byte per channel (`0`–`255`).
///
/// Supplied once per draw and applied uniformly to every fragment. The
/// programs see it normalized to `[0, 1]` by [`Tint::normalized`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Channels divided by 255.
    #[inline]
    pub fn normalized(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Uniform-layout form (`vec4<u32>`, `w` unused).
    #[inline]
    pub const fn to_uvec4(self) -> [u32; 4] {
        [self.r as u32, self.g as u32, self.b as u32, 0]
    }
}

impl From<[u8; 3]> for Tint {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Tint::new(r, g, b)
    }
}

/// Global opacity as a whole percentage, nominally `0`–`100`.
///
/// Values above 100 are not rejected and yield alpha above 1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AlphaPercent(pub u8);

impl AlphaPercent {
    pub const OPAQUE: AlphaPercent = AlphaPercent(100);

    /// Percentage divided by 100.
    #[inline]
    pub fn fraction(self) -> f32 {
        self.0 as f32 / 100.0
    }
}

impl Default for AlphaPercent {
    fn default() -> Self {
        Self::OPAQUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_endpoints() {
        assert_eq!(Tint::black().normalized(), [0.0, 0.0, 0.0]);
        assert_eq!(Tint::white().normalized(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn normalized_mid_channel() {
        let [_, g, _] = Tint::new(0, 128, 0).normalized();
        assert!((g - 0.502).abs() < 1e-3);
    }

    #[test]
    fn alpha_fraction() {
        assert_eq!(AlphaPercent(50).fraction(), 0.5);
        assert_eq!(AlphaPercent::default().fraction(), 1.0);
        assert_eq!(AlphaPercent(0).fraction(), 0.0);
    }
}
