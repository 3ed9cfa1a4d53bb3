//! A minimal 2D vector type used to place hex geometry in continuous
//! ("screen") space. The hex modules only ever consume this through simple
//! add/subtract/scale/rotate operations, so it stays deliberately small.

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use nalgebra::Rotation2;
use serde::{Deserialize, Serialize};

/// A 2D point in screen space. The y axis points north (up) and the x axis
/// points east, matching the hex coordinate system's orientation (see
/// [crate::hex]).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// The point `(0, 0)`
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Maximum distance between two points that are still considered equal
    /// by [Self::approx_eq]. Geometry for a shared hex vertex can be computed
    /// from any of its incident tiles, and the different float paths disagree
    /// by a few ulps at most.
    pub const APPROX_GAP: f64 = 1.0e-12;

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product of two points interpreted as vectors from the origin
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance from the origin
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Rotate this point counter-clockwise by `theta` radians about the
    /// origin
    pub fn rotated(self, theta: f64) -> Self {
        let rotated =
            Rotation2::new(theta) * nalgebra::Point2::new(self.x, self.y);
        rotated.into()
    }

    /// Rotate this point counter-clockwise by `theta` radians about an
    /// arbitrary center point
    pub fn rotated_around(self, theta: f64, center: Self) -> Self {
        (self - center).rotated(theta) + center
    }

    /// Fuzzy equality check, to compensate for float imprecision. Two points
    /// are equal iff the distance between them is less than
    /// [Self::APPROX_GAP].
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).norm() < Self::APPROX_GAP
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_arithmetic() {
        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(-3.0, 0.5);
        assert_eq!(p + q, Point2::new(-2.0, 2.5));
        assert_eq!(p - q, Point2::new(4.0, 1.5));
        assert_eq!(p * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(p.dot(q), -2.0);
        assert_approx_eq!(Point2::new(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn test_rotated() {
        // A quarter turn counter-clockwise maps east onto north
        let east = Point2::new(1.0, 0.0);
        let north = east.rotated(FRAC_PI_2);
        assert_approx_eq!(north.x, 0.0);
        assert_approx_eq!(north.y, 1.0);

        // A full turn is a no-op (modulo float error)
        let p = Point2::new(3.25, -1.5);
        assert!(p.rotated(2.0 * PI).approx_eq(p));
    }

    #[test]
    fn test_rotated_around() {
        let center = Point2::new(1.0, 1.0);
        let p = Point2::new(2.0, 1.0);
        let q = p.rotated_around(PI, center);
        assert_approx_eq!(q.x, 0.0);
        assert_approx_eq!(q.y, 1.0);
    }

    #[test]
    fn test_approx_eq() {
        let p = Point2::new(1.0, 1.0);
        assert!(p.approx_eq(p + Point2::new(1.0e-13, 0.0)));
        assert!(!p.approx_eq(p + Point2::new(1.0e-9, 0.0)));
    }
}
