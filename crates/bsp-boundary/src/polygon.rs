//! Convex planar polygons, the building blocks of [`PlaneRegion`](crate::PlaneRegion).

use nalgebra::{Point3, Vector3};

use crate::{Plane3D, PlaneSide};

/// Position of a polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonSide {
    /// No vertex lies on the minus side, at least one on the plus side
    Plus,
    /// No vertex lies on the plus side, at least one on the minus side
    Minus,
    /// All vertices lie on the plane
    On,
    /// Vertices on both sides
    Spanning,
}

/// A convex polygon in 3D space, defined by an ordered list of vertices.
///
/// Vertices should be coplanar. Winding only matters for [`Polygon::normal`];
/// areas are always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3<f64>>,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    ///
    /// # Panics (debug builds only)
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Point3<f64>>) -> Self {
        debug_assert!(
            vertices.len() >= 3,
            "Polygon must have at least 3 vertices"
        );
        Self { vertices }
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Area-weighted normal (Newell's method). Its length is twice the area.
    ///
    /// Unlike a cross product of the first three vertices this stays
    /// well-defined when consecutive vertices are collinear, which happens
    /// routinely after repeated splitting.
    pub fn normal(&self) -> Vector3<f64> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| self.vertices[i].coords.cross(&self.vertices[(i + 1) % n].coords))
            .sum()
    }

    /// Area of the polygon.
    pub fn area(&self) -> f64 {
        0.5 * self.normal().norm()
    }

    /// Computes the vertex centroid of the polygon.
    pub fn centroid(&self) -> Point3<f64> {
        let sum: Vector3<f64> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len() as f64)
    }

    /// Classifies this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane3D, epsilon: f64) -> PolygonSide {
        let mut plus = false;
        let mut minus = false;

        for vertex in &self.vertices {
            match plane.classify_point_with_epsilon(*vertex, epsilon) {
                PlaneSide::Plus => plus = true,
                PlaneSide::Minus => minus = true,
                PlaneSide::On => {}
            }
        }

        match (plus, minus) {
            (false, false) => PolygonSide::On,
            (true, false) => PolygonSide::Plus,
            (false, true) => PolygonSide::Minus,
            (true, true) => PolygonSide::Spanning,
        }
    }

    /// Splits the polygon by a plane into its plus and minus parts.
    ///
    /// Uses a variant of the Sutherland-Hodgman algorithm: walks the edges
    /// and builds two vertex lists, adding intersection points where an edge
    /// crosses the plane. Vertices on the plane go to both lists. A side
    /// that ends up with fewer than three vertices is `None`.
    pub fn split(&self, plane: &Plane3D, epsilon: f64) -> (Option<Polygon>, Option<Polygon>) {
        let n = self.vertices.len();
        let mut plus_verts = Vec::with_capacity(n + 1);
        let mut minus_verts = Vec::with_capacity(n + 1);

        let sides: Vec<PlaneSide> = self
            .vertices
            .iter()
            .map(|v| plane.classify_point_with_epsilon(*v, epsilon))
            .collect();

        for i in 0..n {
            let current = self.vertices[i];
            let next_idx = (i + 1) % n;

            match sides[i] {
                PlaneSide::Plus => plus_verts.push(current),
                PlaneSide::Minus => minus_verts.push(current),
                PlaneSide::On => {
                    plus_verts.push(current);
                    minus_verts.push(current);
                }
            }

            let crosses = matches!(
                (sides[i], sides[next_idx]),
                (PlaneSide::Plus, PlaneSide::Minus) | (PlaneSide::Minus, PlaneSide::Plus)
            );
            if crosses {
                if let Some((_, intersection)) =
                    plane.intersect_segment(current, self.vertices[next_idx])
                {
                    plus_verts.push(intersection);
                    minus_verts.push(intersection);
                }
            }
        }

        let build = |verts: Vec<Point3<f64>>| (verts.len() >= 3).then(|| Polygon::new(verts));
        (build(plus_verts), build(minus_verts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn area_and_normal() {
        let square = unit_square();
        assert_relative_eq!(square.area(), 1.0);
        assert!(square.normal().z > 0.0);

        let centroid = square.centroid();
        assert_relative_eq!(centroid.x, 0.5);
        assert_relative_eq!(centroid.y, 0.5);
    }

    #[test]
    fn area_survives_collinear_leading_vertices() {
        let polygon = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.5, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        ]);
        assert_relative_eq!(polygon.area(), 2.0);
    }

    #[test]
    fn classify_against_planes() {
        let square = unit_square();
        let eps = crate::PLANE_EPSILON;

        let below = Plane3D::from_point_and_normal(Point3::new(0.0, 0.0, -1.0), Vector3::z());
        assert_eq!(square.classify(&below, eps), PolygonSide::Plus);
        assert_eq!(square.classify(&below.flipped(), eps), PolygonSide::Minus);

        let own = Plane3D::from_point_and_normal(Point3::origin(), Vector3::z());
        assert_eq!(square.classify(&own, eps), PolygonSide::On);

        let through = Plane3D::from_point_and_normal(Point3::new(0.5, 0.0, 0.0), Vector3::x());
        assert_eq!(square.classify(&through, eps), PolygonSide::Spanning);

        // Touching along an edge does not make it spanning.
        let edge = Plane3D::from_point_and_normal(Point3::new(1.0, 0.0, 0.0), Vector3::x());
        assert_eq!(square.classify(&edge, eps), PolygonSide::Minus);
    }

    #[test]
    fn split_preserves_area() {
        let square = unit_square();
        let plane = Plane3D::from_point_and_normal(Point3::new(0.25, 0.0, 0.0), Vector3::x());

        let (plus, minus) = square.split(&plane, crate::PLANE_EPSILON);
        let plus = plus.unwrap();
        let minus = minus.unwrap();

        assert_relative_eq!(plus.area(), 0.75, epsilon = 1e-12);
        assert_relative_eq!(minus.area(), 0.25, epsilon = 1e-12);
        assert!(plus.vertices().iter().all(|v| v.x >= 0.25 - 1e-12));
        assert!(minus.vertices().iter().all(|v| v.x <= 0.25 + 1e-12));
    }

    #[test]
    fn split_through_vertices() {
        // Diagonal cut through two opposite corners.
        let square = unit_square();
        let plane = Plane3D::new(Vector3::new(1.0, -1.0, 0.0), 0.0);

        let (plus, minus) = square.split(&plane, crate::PLANE_EPSILON);
        let plus = plus.unwrap();
        let minus = minus.unwrap();

        assert_eq!(plus.len(), 3);
        assert_eq!(minus.len(), 3);
        assert_relative_eq!(plus.area(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(minus.area(), 0.5, epsilon = 1e-12);
    }
}
