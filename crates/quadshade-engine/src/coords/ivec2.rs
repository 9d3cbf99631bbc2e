use core::ops::{Add, Sub};

/// Integer 2D vector, used for whole-pixel offsets.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

impl IVec2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    #[inline]
    pub const fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }
}

impl From<[i32; 2]> for IVec2 {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        IVec2::new(x, y)
    }
}

// Wrapping arithmetic matches GPU integer semantics.
impl Add for IVec2 {
    type Output = IVec2;
    #[inline]
    fn add(self, rhs: IVec2) -> IVec2 {
        IVec2::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for IVec2 {
    type Output = IVec2;
    #[inline]
    fn sub(self, rhs: IVec2) -> IVec2 {
        IVec2::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}
