use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use super::{DivideByZero, Vec2f, Vec2i};

/// A position plus size rectangle with integer fields.
///
/// Arithmetic applies to all four fields independently; there is no
/// intersection/union geometry here, only the value-type contract shared with
/// [`Vec2i`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Recti {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Recti {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn splat(n: i32) -> Self {
        Self::new(n, n, n, n)
    }

    pub const fn from_position_size(position: Vec2i, size: Vec2i) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub const fn position(self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    pub const fn size(self) -> Vec2i {
        Vec2i::new(self.w, self.h)
    }

    pub const fn as_rectf(self) -> Rectf {
        Rectf::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }

    /// Field-wise division. Fails if any divisor field is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, DivideByZero> {
        if rhs.x == 0 || rhs.y == 0 || rhs.w == 0 || rhs.h == 0 {
            return Err(DivideByZero);
        }
        Ok(Self::new(
            self.x / rhs.x,
            self.y / rhs.y,
            self.w / rhs.w,
            self.h / rhs.h,
        ))
    }

    pub fn try_div_scalar(self, rhs: i32) -> Result<Self, DivideByZero> {
        self.try_div(Self::splat(rhs))
    }
}

impl Add for Recti {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.w + rhs.w,
            self.h + rhs.h,
        )
    }
}

impl Sub for Recti {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.w - rhs.w,
            self.h - rhs.h,
        )
    }
}

impl Mul for Recti {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.w * rhs.w,
            self.h * rhs.h,
        )
    }
}

impl Add<i32> for Recti {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        self + Self::splat(rhs)
    }
}

impl Sub<i32> for Recti {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        self - Self::splat(rhs)
    }
}

impl Mul<i32> for Recti {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        self * Self::splat(rhs)
    }
}

impl AddAssign for Recti {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Recti {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Recti {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl AddAssign<i32> for Recti {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl SubAssign<i32> for Recti {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl MulAssign<i32> for Recti {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

/// A position plus size rectangle with `f32` fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectf {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rectf {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn splat(n: f32) -> Self {
        Self::new(n, n, n, n)
    }

    pub const fn from_position_size(position: Vec2f, size: Vec2f) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub const fn position(self) -> Vec2f {
        Vec2f::new(self.x, self.y)
    }

    pub const fn size(self) -> Vec2f {
        Vec2f::new(self.w, self.h)
    }

    /// Truncates all four fields toward zero.
    pub const fn as_recti(self) -> Recti {
        Recti::new(self.x as i32, self.y as i32, self.w as i32, self.h as i32)
    }

    /// Field-wise division. Fails if any divisor field is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, DivideByZero> {
        if rhs.x == 0.0 || rhs.y == 0.0 || rhs.w == 0.0 || rhs.h == 0.0 {
            return Err(DivideByZero);
        }
        Ok(Self::new(
            self.x / rhs.x,
            self.y / rhs.y,
            self.w / rhs.w,
            self.h / rhs.h,
        ))
    }

    pub fn try_div_scalar(self, rhs: f32) -> Result<Self, DivideByZero> {
        self.try_div(Self::splat(rhs))
    }
}

impl Add for Rectf {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.w + rhs.w,
            self.h + rhs.h,
        )
    }
}

impl Sub for Rectf {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.w - rhs.w,
            self.h - rhs.h,
        )
    }
}

impl Mul for Rectf {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x * rhs.x,
            self.y * rhs.y,
            self.w * rhs.w,
            self.h * rhs.h,
        )
    }
}

impl Add<f32> for Rectf {
    type Output = Self;

    fn add(self, rhs: f32) -> Self::Output {
        self + Self::splat(rhs)
    }
}

impl Sub<f32> for Rectf {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self::Output {
        self - Self::splat(rhs)
    }
}

impl Mul<f32> for Rectf {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self * Self::splat(rhs)
    }
}

impl AddAssign for Rectf {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rectf {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Rectf {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl AddAssign<f32> for Rectf {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign<f32> for Rectf {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Rectf {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_round_trip() {
        let a = Recti::new(1, 2, 30, 40);
        let b = Recti::new(-4, 9, 2, 2);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn division_checks_all_four_fields() {
        // A zero in the size fields fails just like a zero in the position
        // fields.
        let a = Recti::new(8, 8, 8, 8);
        assert_eq!(a.try_div(Recti::new(2, 2, 2, 0)), Err(DivideByZero));
        assert_eq!(a.try_div(Recti::new(0, 2, 2, 2)), Err(DivideByZero));
        assert_eq!(a.try_div(Recti::splat(2)), Ok(Recti::splat(4)));

        let f = Rectf::splat(1.0);
        assert_eq!(f.try_div(Rectf::new(1.0, 1.0, 0.0, 1.0)), Err(DivideByZero));
    }

    #[test]
    fn position_size_accessors() {
        let r = Recti::from_position_size(Vec2i::new(3, 4), Vec2i::new(100, 50));
        assert_eq!(r.position(), Vec2i::new(3, 4));
        assert_eq!(r.size(), Vec2i::new(100, 50));
        assert_eq!(r.as_rectf().as_recti(), r);
    }
}
