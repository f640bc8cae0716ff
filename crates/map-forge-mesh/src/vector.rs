//! The 3D vector value type and the named unit directions models build with.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::Serialize;

use crate::{Error, EPSILON};

/// A point or direction in 3D Euclidean space.
///
/// Arithmetic is pure and always produces a new value. Equality at the vertex
/// pool boundary is tolerance-based (see [`Vec3::close_to`]); the derived
/// `PartialEq` compares coordinates exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec3 {
    /// Value of the X axis.
    pub x: f64,
    /// Value of the Y axis.
    pub y: f64,
    /// Value of the Z axis.
    pub z: f64,
}

impl Vec3 {
    /// Zero-filled vector.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    /// One-filled vector.
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
    /// Forward unit direction (+x).
    pub const FORWARD: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    /// Backward unit direction (-x).
    pub const BACK: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
    /// Left unit direction (+y).
    pub const LEFT: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    /// Right unit direction (-y).
    pub const RIGHT: Vec3 = Vec3::new(0.0, -1.0, 0.0);
    /// Up unit direction (+z).
    pub const UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);
    /// Down unit direction (-z).
    pub const DOWN: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    #[must_use]
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    #[must_use]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared distance to another position. Cheaper than the distance
    /// itself and exact on both sides of the merge boundary.
    #[must_use]
    pub fn distance_sq(self, other: Vec3) -> f64 {
        (self - other).dot(self - other)
    }

    /// Whether this position falls within the merge tolerance of `other`.
    ///
    /// The comparison is strict: positions at exactly [`EPSILON`] apart are
    /// NOT close.
    #[must_use]
    pub fn close_to(self, other: Vec3) -> bool {
        self.distance_sq(other) < EPSILON * EPSILON
    }

    #[must_use]
    pub fn normalize(self) -> Vec3 {
        self / self.length()
    }

    /// Scale by a checked scalar.
    ///
    /// This is the boundary where user-supplied factors enter vector
    /// arithmetic, so it rejects what the pure operators silently absorb.
    ///
    /// # Errors
    /// Returns [`Error::InvalidValue`] if `factor` is not finite.
    pub fn scaled(self, factor: f64) -> Result<Vec3, Error> {
        if factor.is_finite() {
            Ok(self * factor)
        } else {
            Err(Error::InvalidValue)
        }
    }

    /// Rotate clockwise about the Z axis in exact 90° steps.
    ///
    /// Quarter turns swap and negate coordinates instead of going through
    /// trigonometry, so rotated positions merge exactly with hand-placed
    /// ones. Negative counts rotate counter-clockwise.
    #[must_use]
    pub fn rotated_z(self, quarter_turns: i32) -> Vec3 {
        match quarter_turns.rem_euclid(4) {
            1 => Vec3::new(self.y, -self.x, self.z),
            2 => Vec3::new(-self.x, -self.y, self.z),
            3 => Vec3::new(-self.y, self.x, self.z),
            _ => self,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

/// Componentwise product, used as an axis mask (`v * Vec3::LEFT` keeps only
/// the Y component).
impl Mul for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f64) -> Self::Output {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_round_trips() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-5.0, 8.0, 14.0);

        assert!((a + b - b).close_to(a));
        assert_eq!(a + b, Vec3::new(-4.0, 10.0, 17.0));
    }

    #[test]
    fn scaling_identities() {
        let v = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(v * 1.0, v);
        assert_eq!(v * 0.0, Vec3::ZERO);
        assert_eq!(2.0 * v, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(v / 2.0, Vec3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn checked_scaling_rejects_non_finite_factors() {
        let v = Vec3::ONE;

        assert_eq!(v.scaled(2.0), Ok(Vec3::new(2.0, 2.0, 2.0)));
        assert_eq!(v.scaled(f64::NAN), Err(Error::InvalidValue));
        assert_eq!(v.scaled(f64::INFINITY), Err(Error::InvalidValue));
        assert_eq!(v.scaled(f64::NEG_INFINITY), Err(Error::InvalidValue));
    }

    #[test]
    fn componentwise_product_masks_axes() {
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0) * Vec3::LEFT,
            Vec3::new(0.0, 2.0, 0.0)
        );
    }

    #[test]
    fn cross_product_follows_the_right_hand_rule() {
        assert_eq!(Vec3::FORWARD.cross(Vec3::LEFT), Vec3::UP);
        assert_eq!(Vec3::LEFT.cross(Vec3::FORWARD), Vec3::DOWN);
        assert!(Vec3::FORWARD.dot(Vec3::UP).abs() < EPSILON);
    }

    #[test]
    fn quarter_turns_cycle() {
        assert_eq!(Vec3::FORWARD.rotated_z(1), Vec3::RIGHT);
        assert_eq!(Vec3::RIGHT.rotated_z(-2), Vec3::LEFT);
        assert_eq!(Vec3::LEFT.rotated_z(7), Vec3::BACK);

        let v = Vec3::new(2.0, 1.0, 3.0);
        assert_eq!(v.rotated_z(4), v);
        assert_eq!(v.rotated_z(1).rotated_z(-1), v);
        assert_eq!(v.rotated_z(1), Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn tolerance_band_is_closed_open() {
        let origin = Vec3::ZERO;

        assert!(!origin.close_to(Vec3::new(EPSILON, 0.0, 0.0)));
        assert!(origin.close_to(Vec3::new(EPSILON / 2.0, 0.0, 0.0)));
    }

    #[test]
    fn opposite_directions_cancel() {
        assert_eq!(Vec3::UP + Vec3::DOWN, Vec3::ZERO);
        assert_eq!(Vec3::FORWARD, -Vec3::BACK);
        assert_eq!(Vec3::LEFT, -Vec3::RIGHT);
    }
}
