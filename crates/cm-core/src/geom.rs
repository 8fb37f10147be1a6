use core::ops::{Add, Sub};

/// Integer pixel position; `x` grows rightwards, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2i {
    pub x: i64,
    pub y: i64,
}

impl Point2i {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vec2i {
    pub x: i64,
    pub y: i64,
}

impl Vec2i {
    /// Z component of the 2-D cross product.
    pub fn cross(self, rhs: Self) -> i64 {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl Add<Vec2i> for Point2i {
    type Output = Point2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Point2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub<Point2i> for Point2i {
    type Output = Vec2i;

    fn sub(self, rhs: Point2i) -> Self::Output {
        Vec2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
