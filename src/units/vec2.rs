use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use super::DivideByZero;

/// A 2D vector with integer components, used for pixel-space positions and
/// sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Broadcasts a single scalar to both components.
    pub const fn splat(n: i32) -> Self {
        Self::new(n, n)
    }

    pub const fn as_vec2f(self) -> Vec2f {
        Vec2f::new(self.x as f32, self.y as f32)
    }

    /// Component-wise division. Fails if either divisor component is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, DivideByZero> {
        if rhs.x == 0 || rhs.y == 0 {
            return Err(DivideByZero);
        }
        Ok(Self::new(self.x / rhs.x, self.y / rhs.y))
    }

    pub fn try_div_scalar(self, rhs: i32) -> Result<Self, DivideByZero> {
        self.try_div(Self::splat(rhs))
    }
}

impl Add for Vec2i {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2i {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2i {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Add<i32> for Vec2i {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        self + Self::splat(rhs)
    }
}

impl Sub<i32> for Vec2i {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        self - Self::splat(rhs)
    }
}

impl Mul<i32> for Vec2i {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        self * Self::splat(rhs)
    }
}

impl AddAssign for Vec2i {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2i {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec2i {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl AddAssign<i32> for Vec2i {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl SubAssign<i32> for Vec2i {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl MulAssign<i32> for Vec2i {
    fn mul_assign(&mut self, rhs: i32) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "glam")]
impl From<glam::IVec2> for Vec2i {
    fn from(v: glam::IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(feature = "glam")]
impl From<Vec2i> for glam::IVec2 {
    fn from(v: Vec2i) -> Self {
        Self::new(v.x, v.y)
    }
}

/// A 2D vector with `f32` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(n: f32) -> Self {
        Self::new(n, n)
    }

    /// Truncates both components toward zero.
    pub const fn as_vec2i(self) -> Vec2i {
        Vec2i::new(self.x as i32, self.y as i32)
    }

    /// Component-wise division. Fails if either divisor component is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, DivideByZero> {
        if rhs.x == 0.0 || rhs.y == 0.0 {
            return Err(DivideByZero);
        }
        Ok(Self::new(self.x / rhs.x, self.y / rhs.y))
    }

    pub fn try_div_scalar(self, rhs: f32) -> Result<Self, DivideByZero> {
        self.try_div(Self::splat(rhs))
    }
}

impl Add for Vec2f {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2f {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2f {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Add<f32> for Vec2f {
    type Output = Self;

    fn add(self, rhs: f32) -> Self::Output {
        self + Self::splat(rhs)
    }
}

impl Sub<f32> for Vec2f {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self::Output {
        self - Self::splat(rhs)
    }
}

impl Mul<f32> for Vec2f {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self * Self::splat(rhs)
    }
}

impl AddAssign for Vec2f {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2f {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Vec2f {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl AddAssign<f32> for Vec2f {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}

impl SubAssign<f32> for Vec2f {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec2f {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec2> for Vec2f {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(feature = "glam")]
impl From<Vec2f> for glam::Vec2 {
    fn from(v: Vec2f) -> Self {
        Self::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_round_trip() {
        let a = Vec2i::new(3, -7);
        let b = Vec2i::new(11, 4);
        assert_eq!(a + b - b, a);

        let a = Vec2f::new(1.5, -2.25);
        let b = Vec2f::new(0.5, 8.0);
        let r = a + b - b;
        assert!((r.x - a.x).abs() < 1e-6);
        assert!((r.y - a.y).abs() < 1e-6);
    }

    #[test]
    fn scalar_broadcast() {
        assert_eq!(Vec2i::new(2, 3) * 4, Vec2i::new(8, 12));
        assert_eq!(Vec2i::splat(5), Vec2i::new(5, 5));
        assert_eq!(Vec2f::new(1.0, 2.0) + 0.5, Vec2f::new(1.5, 2.5));
    }

    #[test]
    fn division_by_zero_component_fails() {
        assert_eq!(Vec2i::new(4, 4).try_div(Vec2i::new(2, 0)), Err(DivideByZero));
        assert_eq!(Vec2i::new(4, 4).try_div_scalar(0), Err(DivideByZero));
        assert_eq!(Vec2f::new(1.0, 1.0).try_div(Vec2f::new(0.0, 2.0)), Err(DivideByZero));
        assert_eq!(Vec2i::new(9, 6).try_div(Vec2i::new(3, 2)), Ok(Vec2i::new(3, 3)));
    }

    #[test]
    fn conversion_truncates() {
        assert_eq!(Vec2f::new(3.9, -1.2).as_vec2i(), Vec2i::new(3, -1));
        assert_eq!(Vec2i::new(2, -4).as_vec2f(), Vec2f::new(2.0, -4.0));
    }

    #[cfg(feature = "glam")]
    #[test]
    fn glam_round_trip() {
        let v = Vec2i::new(7, -3);
        assert_eq!(Vec2i::from(glam::IVec2::from(v)), v);
    }
}
