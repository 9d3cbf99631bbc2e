use super::Vec2;

/// Homogeneous clip-space position emitted by the vertex stage.
///
/// The pipeline is strictly 2D: `z` is always `0` and `w` is always `1`, so
/// `(x, y)` are already normalized device coordinates in `[-1, 1]` for visible
/// geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl ClipPosition {
    #[inline]
    pub const fn from_ndc(ndc: Vec2) -> Self {
        Self { x: ndc.x, y: ndc.y, z: 0.0, w: 1.0 }
    }

    #[inline]
    pub const fn ndc(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}
