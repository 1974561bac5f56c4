use std::ops::{Add, Mul, Sub};

/// Generate a trait impl for an operation involving two [Vec2D]s, like [Add] or [Sub]
macro_rules! impl_bin_op {
    ($trait: ident, $fn: ident, $op: tt) => {
        impl<T: $trait<T, Output = T>> $trait for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: Self) -> Self::Output {
                Self {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    };
}

/// Generate a trait impl for an operation involving a [Vec2D] and a scalar value of unknown type
macro_rules! impl_scalar_op {
    ($trait: ident, $fn: ident, $op: tt, $rhs: ident) => {
        impl<T: $trait<$rhs, Output = T>> $trait<$rhs> for Vec2D<T> {
            type Output = Vec2D<T>;

            #[must_use]
            fn $fn(self, rhs: $rhs) -> Self::Output {
                Self {
                    x: self.x $op rhs,
                    y: self.y $op rhs,
                }
            }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2D<T = i32> {
    pub x: T,
    pub y: T,
}

/// An exact pixel location on a canvas.
pub type Point = Vec2D<i32>;

impl<T> Vec2D<T> {
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Vec2D<U>
    where
        F: Fn(T) -> U,
    {
        Vec2D {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl Vec2D<i32> {
    /// Swap the two coordinates, mirroring the point along the main diagonal
    #[inline]
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    #[inline]
    #[must_use]
    pub fn to_float(self) -> Vec2D<f64> {
        self.map(f64::from)
    }
}

impl Vec2D<f64> {
    /// Round both coordinates to the nearest pixel, with halfway cases rounded away from zero
    #[inline]
    #[must_use]
    pub fn round_to_grid(&self) -> Vec2D<i32> {
        Vec2D {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

impl_bin_op!(Add, add, +);
impl_bin_op!(Sub, sub, -);

impl_scalar_op!(Mul, mul, *, f64);
impl_scalar_op!(Mul, mul, *, i32);
