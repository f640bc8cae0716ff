//! Validated planar polygons, the unit a mesh is declared in.

use crate::vector::Vec3;
use crate::{DegenerateKind, Error, EPSILON};

/// An ordered polygon of at least 3 distinct, coplanar points.
///
/// The traversal order is the winding: the outward normal follows the
/// right-hand rule on the first three points, so reversing the order flips
/// the face.
#[derive(Debug, Clone)]
pub struct Face {
    points: Vec<Vec3>,
    normal: Vec3,
}

impl Face {
    /// Validate a point list into a face.
    ///
    /// # Errors
    /// Returns [`Error::DegenerateFace`] if fewer than 3 pairwise-distinct
    /// points are supplied, if the first three points are collinear, or if
    /// any later point lies further than [`EPSILON`] from their plane.
    pub fn new(points: Vec<Vec3>) -> Result<Self, Error> {
        let mut distinct: Vec<Vec3> = Vec::new();
        for &point in &points {
            if !distinct.iter().any(|d| d.close_to(point)) {
                distinct.push(point);
            }
        }
        if distinct.len() < 3 {
            return Err(Error::DegenerateFace(DegenerateKind::TooFewPoints));
        }

        let normal = (points[1] - points[0]).cross(points[2] - points[1]);
        let length = normal.length();
        if length < EPSILON {
            return Err(Error::DegenerateFace(DegenerateKind::Collinear));
        }
        let normal = normal / length;

        for point in &points[3..] {
            if (*point - points[0]).dot(normal).abs() > EPSILON {
                return Err(Error::DegenerateFace(DegenerateKind::NonPlanar));
            }
        }

        Ok(Self { points, normal })
    }

    /// The ordered point list.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// The unit outward normal.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// A copy of the face moved by `offset`. Translation cannot degenerate
    /// a valid face, so no revalidation happens.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Face {
        Face {
            points: self.points.iter().map(|&p| p + offset).collect(),
            normal: self.normal,
        }
    }

    /// A copy of the face rotated clockwise about the Z axis in exact 90°
    /// steps, normal included.
    #[must_use]
    pub fn rotated_z(&self, quarter_turns: i32) -> Face {
        Face {
            points: self
                .points
                .iter()
                .map(|p| p.rotated_z(quarter_turns))
                .collect(),
            normal: self.normal.rotated_z(quarter_turns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Face {
        Face::new(vec![
            Vec3::ZERO,
            Vec3::FORWARD,
            Vec3::FORWARD + Vec3::LEFT,
            Vec3::LEFT,
        ])
        .unwrap()
    }

    #[test]
    fn normal_is_unit_length() {
        let face = Face::new(vec![
            Vec3::ZERO,
            Vec3::new(3.0, 0.0, 0.0),
            Vec3::new(3.0, 5.0, 0.0),
        ])
        .unwrap();

        assert!((face.normal().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn reversing_the_winding_negates_the_normal() {
        let quad = unit_quad();
        let reversed = Face::new(quad.points().iter().rev().copied().collect()).unwrap();

        assert!(reversed.normal().close_to(-quad.normal()));
        assert!(quad.normal().close_to(Vec3::UP));
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let result = Face::new(vec![
            Vec3::ZERO,
            Vec3::FORWARD,
            Vec3::new(2.0, 0.0, 0.0),
        ]);

        assert_eq!(
            result.unwrap_err(),
            Error::DegenerateFace(DegenerateKind::Collinear)
        );
    }

    #[test]
    fn repeated_points_are_degenerate() {
        let result = Face::new(vec![Vec3::ZERO, Vec3::ZERO, Vec3::LEFT]);

        assert_eq!(
            result.unwrap_err(),
            Error::DegenerateFace(DegenerateKind::TooFewPoints)
        );
    }

    #[test]
    fn too_few_points_are_degenerate() {
        let result = Face::new(vec![Vec3::ZERO, Vec3::LEFT]);

        assert_eq!(
            result.unwrap_err(),
            Error::DegenerateFace(DegenerateKind::TooFewPoints)
        );
    }

    #[test]
    fn off_plane_points_are_degenerate() {
        let result = Face::new(vec![
            Vec3::ZERO,
            Vec3::FORWARD,
            Vec3::FORWARD + Vec3::LEFT,
            Vec3::LEFT + Vec3::UP,
        ]);

        assert_eq!(
            result.unwrap_err(),
            Error::DegenerateFace(DegenerateKind::NonPlanar)
        );
    }

    #[test]
    fn within_tolerance_points_are_coplanar() {
        let result = Face::new(vec![
            Vec3::ZERO,
            Vec3::FORWARD,
            Vec3::FORWARD + Vec3::LEFT,
            Vec3::LEFT + Vec3::new(0.0, 0.0, EPSILON / 2.0),
        ]);

        assert!(result.is_ok());
    }

    #[test]
    fn translation_preserves_the_normal() {
        let quad = unit_quad();
        let moved = quad.translated(Vec3::new(4.0, -2.0, 7.0));

        assert_eq!(moved.normal(), quad.normal());
        assert_eq!(moved.points()[0], Vec3::new(4.0, -2.0, 7.0));
    }

    #[test]
    fn rotation_turns_points_and_normal_together() {
        let wall = Face::new(vec![
            Vec3::ZERO,
            Vec3::LEFT,
            Vec3::LEFT + Vec3::UP,
            Vec3::UP,
        ])
        .unwrap();
        let turned = wall.rotated_z(1);

        assert_eq!(turned.normal(), wall.normal().rotated_z(1));
        assert_eq!(turned.points()[1], Vec3::LEFT.rotated_z(1));
    }
}
