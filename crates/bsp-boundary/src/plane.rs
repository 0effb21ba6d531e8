//! Oriented planes used as partitioning hyperplanes in 3D.

use nalgebra::{Point3, Vector3};

/// Default epsilon for plane classification.
/// Points within this distance of the plane are considered "on" the plane.
pub const PLANE_EPSILON: f64 = 1e-10;

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Point is on the side the normal points to
    Plus,
    /// Point is on the side opposite to the normal
    Minus,
    /// Point lies on the plane (within epsilon tolerance)
    On,
}

/// An oriented plane in 3D space, represented as `normal · point = offset`.
///
/// The plus half-space is the one the normal points into.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane3D {
    normal: Vector3<f64>,
    offset: f64,
}

impl Plane3D {
    /// Creates a new plane from a normal vector and offset.
    /// The normal will be normalized automatically.
    ///
    /// # Panics
    /// Panics if the normal vector has zero length.
    pub fn new(normal: Vector3<f64>, offset: f64) -> Self {
        let norm = normal.norm();
        assert!(norm > f64::EPSILON, "Plane normal cannot be zero");
        Self {
            normal: normal / norm,
            offset: offset / norm,
        }
    }

    /// Creates a plane from a point on the plane and a normal vector.
    ///
    /// # Panics
    /// Panics if the normal vector has zero length.
    pub fn from_point_and_normal(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        let norm = normal.norm();
        assert!(norm > f64::EPSILON, "Plane normal cannot be zero");
        let unit_normal = normal / norm;
        Self {
            offset: unit_normal.dot(&point.coords),
            normal: unit_normal,
        }
    }

    /// Creates a plane from three non-collinear points.
    /// The normal direction follows the right-hand rule: (b - a) × (c - a).
    ///
    /// # Panics
    /// Panics if the points are collinear (or nearly so).
    pub fn from_three_points(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self::from_point_and_normal(a, (b - a).cross(&(c - a)))
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Returns the signed distance from the origin to the plane along the normal.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance from a point to the plane, positive on the plus side.
    #[inline]
    pub fn signed_distance(&self, point: Point3<f64>) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Classifies which side of the plane a point lies on.
    pub fn classify_point_with_epsilon(&self, point: Point3<f64>, epsilon: f64) -> PlaneSide {
        let dist = self.signed_distance(point);
        if dist > epsilon {
            PlaneSide::Plus
        } else if dist < -epsilon {
            PlaneSide::Minus
        } else {
            PlaneSide::On
        }
    }

    /// Classifies a point using the default [`PLANE_EPSILON`] tolerance.
    #[inline]
    pub fn classify_point(&self, point: Point3<f64>) -> PlaneSide {
        self.classify_point_with_epsilon(point, PLANE_EPSILON)
    }

    /// Returns the same plane with its plus and minus sides swapped.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Checks whether both planes describe the same set of points,
    /// regardless of orientation.
    pub fn coincides_with(&self, other: &Plane3D, epsilon: f64) -> bool {
        let dot = self.normal.dot(&other.normal);
        if 1.0 - dot.abs() > epsilon {
            return false;
        }
        if dot > 0.0 {
            (self.offset - other.offset).abs() <= epsilon
        } else {
            (self.offset + other.offset).abs() <= epsilon
        }
    }

    /// Point of the plane closest to the origin.
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        Point3::from(self.normal * self.offset)
    }

    /// Returns an orthonormal basis `(u, v)` spanning the plane, with
    /// `u × v` pointing along the normal.
    pub fn basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        let helper = if self.normal.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let u = helper.cross(&self.normal).normalize();
        let v = self.normal.cross(&u);
        (u, v)
    }

    /// Computes the intersection of a line segment with the plane.
    ///
    /// Returns `Some((t, point))` where `t` is the interpolation parameter
    /// (0.0 = start, 1.0 = end). Returns `None` if the segment is parallel
    /// to the plane or doesn't reach it.
    pub fn intersect_segment(
        &self,
        start: Point3<f64>,
        end: Point3<f64>,
    ) -> Option<(f64, Point3<f64>)> {
        let direction = end - start;
        let denom = self.normal.dot(&direction);

        if denom.abs() < f64::EPSILON {
            return None;
        }

        let t = (self.offset - self.normal.dot(&start.coords)) / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        Some((t, start + direction * t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn classify_point_sides() {
        let plane = Plane3D::new(Vector3::new(0.0, 0.0, 2.0), 2.0);
        assert_eq!(plane.offset(), 1.0);
        assert_eq!(plane.classify_point(Point3::new(0.0, 0.0, 3.0)), PlaneSide::Plus);
        assert_eq!(plane.classify_point(Point3::new(5.0, 1.0, -1.0)), PlaneSide::Minus);
        assert_eq!(plane.classify_point(Point3::new(4.0, -2.0, 1.0)), PlaneSide::On);
    }

    #[test]
    fn flipped_plane_swaps_sides() {
        let plane = Plane3D::from_point_and_normal(Point3::new(1.0, 0.0, 0.0), Vector3::x());
        let point = Point3::new(2.0, 0.0, 0.0);
        assert_eq!(plane.classify_point(point), PlaneSide::Plus);
        assert_eq!(plane.flipped().classify_point(point), PlaneSide::Minus);
    }

    #[test]
    fn coincidence_ignores_orientation() {
        let plane = Plane3D::from_point_and_normal(Point3::new(0.0, 3.0, 0.0), Vector3::y());
        let scaled = Plane3D::new(Vector3::new(0.0, 4.0, 0.0), 12.0);
        let parallel = Plane3D::from_point_and_normal(Point3::new(0.0, 2.0, 0.0), Vector3::y());
        let tilted = Plane3D::new(Vector3::new(0.0, 1.0, 0.1), 3.0);

        assert!(plane.coincides_with(&scaled, PLANE_EPSILON));
        assert!(plane.coincides_with(&plane.flipped(), PLANE_EPSILON));
        assert!(!plane.coincides_with(&parallel, PLANE_EPSILON));
        assert!(!plane.coincides_with(&parallel.flipped(), PLANE_EPSILON));
        assert!(!plane.coincides_with(&tilted, PLANE_EPSILON));
    }

    #[test]
    fn basis_is_orthonormal_and_oriented() {
        for normal in [Vector3::x(), Vector3::y(), Vector3::new(1.0, -2.0, 0.5)] {
            let plane = Plane3D::new(normal, 0.0);
            let (u, v) = plane.basis();
            assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(v.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(u.dot(&v), 0.0, epsilon = 1e-12);
            assert_relative_eq!(u.cross(&v).dot(&plane.normal()), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn segment_intersection() {
        let plane = Plane3D::from_point_and_normal(Point3::origin(), Vector3::z());
        let (t, point) = plane
            .intersect_segment(Point3::new(0.0, 0.0, -1.0), Point3::new(2.0, 0.0, 3.0))
            .unwrap();
        assert_relative_eq!(t, 0.25);
        assert_relative_eq!(point.x, 0.5);
        assert_relative_eq!(point.z, 0.0);

        assert!(plane
            .intersect_segment(Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 2.0))
            .is_none());
    }
}
