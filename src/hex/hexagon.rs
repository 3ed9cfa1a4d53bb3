//! Generates the corner points of a single hexagon in screen space

use crate::{hex::HexDirection, Point2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

/// Half the interior angle of a hexagon corner, i.e. the acute angle of each
/// of the 12 right triangles a hexagon decomposes into. Links the inradius to
/// the side length (`side = 2r·tan`) and circumradius (`circum = r / cos`).
pub const TRIANGLE_ANGLE: f64 = FRAC_PI_6;

/// The angle between two consecutive corners, as seen from the center
pub const ROTATE_ANGLE: f64 = FRAC_PI_3;

/// The 6 corner points of one flat-top hexagon, in corner-index order
/// (counter-clockwise from the south-west corner, matching
/// [VertexCoord](crate::hex::VertexCoord)'s indexing).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hexagon {
    points: [Point2; 6],
}

impl Hexagon {
    /// Compute the corners of the hexagon centered at `center` whose
    /// *inradius* (center-to-side distance) is `radius`. Corner 0 sits
    /// south-west of the center; each subsequent corner is the previous one
    /// rotated 60° counter-clockwise about the center.
    pub fn new(center: Point2, radius: f64) -> Self {
        let half_side = radius * TRIANGLE_ANGLE.tan();
        let mut points = [Point2::ORIGIN; 6];
        points[0] = Point2::new(-half_side, -radius);
        for k in 1..6 {
            points[k] = points[k - 1].rotated(ROTATE_ANGLE);
        }
        for point in &mut points {
            *point += center;
        }
        Self { points }
    }

    /// The distance from the center to each corner of a hexagon with the
    /// given inradius
    pub fn circumradius(radius: f64) -> f64 {
        radius / TRIANGLE_ANGLE.cos()
    }

    /// All 6 corners, in corner-index order
    pub fn points(&self) -> &[Point2; 6] {
        &self.points
    }

    /// The corner with the given index, or `None` if `k` is out of `[0, 5]`
    pub fn point(&self, k: u8) -> Option<Point2> {
        self.points.get(k as usize).copied()
    }

    /// The two corners bounding the side facing the given direction, in
    /// corner-index order. `None` for E and W, which face corners rather
    /// than sides.
    pub fn edge_points(
        &self,
        direction: HexDirection,
    ) -> Option<(Point2, Point2)> {
        let (k, l) = direction.edge_indices()?;
        Some((self.points[k as usize], self.points[l as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_regularity() {
        let center = Point2::new(10.0, -4.0);
        let radius = 80.0;
        let hexagon = Hexagon::new(center, radius);

        let circumradius = Hexagon::circumradius(radius);
        for (k, point) in hexagon.points().iter().enumerate() {
            // Every corner is at the circumradius...
            assert_approx_eq!((*point - center).norm(), circumradius, 1e-9);
            // ...and exactly 60° counter-clockwise of the previous one
            let next = hexagon.points()[(k + 1) % 6];
            assert!(point
                .rotated_around(ROTATE_ANGLE, center)
                .approx_eq(next));
        }

        // All 6 sides have the hexagon side length
        let side = 2.0 * radius * TRIANGLE_ANGLE.tan();
        for (k, point) in hexagon.points().iter().enumerate() {
            let next = hexagon.points()[(k + 1) % 6];
            assert_approx_eq!((next - *point).norm(), side, 1e-9);
        }
    }

    #[test]
    fn test_corner_placement() {
        // Corner 0 is south-west of the center, corner 2 due east
        let hexagon = Hexagon::new(Point2::ORIGIN, 1.0);
        let sw = hexagon.point(0).unwrap();
        assert!(sw.x < 0.0 && sw.y < 0.0);
        let east = hexagon.point(2).unwrap();
        assert_approx_eq!(east.x, Hexagon::circumradius(1.0));
        assert_approx_eq!(east.y, 0.0);

        assert_eq!(hexagon.point(6), None);
    }

    #[test]
    fn test_edge_points() {
        let hexagon = Hexagon::new(Point2::ORIGIN, 1.0);
        // The south side runs between corners 0 and 1, below the center
        let (a, b) = hexagon.edge_points(HexDirection::S).unwrap();
        assert_eq!(a, hexagon.point(0).unwrap());
        assert_eq!(b, hexagon.point(1).unwrap());
        assert_approx_eq!(a.y, -1.0);
        assert_approx_eq!(b.y, -1.0);

        assert_eq!(hexagon.edge_points(HexDirection::E), None);
        assert_eq!(hexagon.edge_points(HexDirection::W), None);
    }
}
