//! Planar regions: the 3D sub-hyperplane used as BSP cut fragments.

use nalgebra::Point3;

use crate::{Plane3D, PLANE_EPSILON, Polygon, PolygonSide, Split, SubHyperplane};

/// A region of a plane made of non-overlapping convex polygons.
///
/// Splitting keeps every piece in the same plane, and reuniting two regions
/// of the same plane simply collects their polygons, so a region is always a
/// flat list of convex pieces.
///
/// The tolerance given by [`PlaneRegion::with_epsilon`] is used for every
/// classification and is inherited by all pieces split from the region.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneRegion {
    plane: Plane3D,
    polygons: Vec<Polygon>,
    epsilon: f64,
}

impl PlaneRegion {
    /// Creates a region of `plane` covered by `polygons`.
    ///
    /// The polygons are expected to lie in `plane` and not to overlap.
    pub fn new(plane: Plane3D, polygons: Vec<Polygon>) -> Self {
        Self {
            plane,
            polygons,
            epsilon: PLANE_EPSILON,
        }
    }

    /// Creates a region with no extent.
    pub fn empty(plane: Plane3D) -> Self {
        Self::new(plane, Vec::new())
    }

    /// Creates a square of half-size `half_size` centred on the point of
    /// `plane` closest to the origin.
    ///
    /// Large squares are a practical stand-in for a whole, unbounded plane
    /// when building cuts with [`BspTree::insert_cut`](crate::BspTree::insert_cut).
    pub fn square(plane: Plane3D, half_size: f64) -> Self {
        let center = plane.origin();
        let (u, v) = plane.basis();
        let corner = |a: f64, b: f64| -> Point3<f64> { center + u * a + v * b };
        let polygon = Polygon::new(vec![
            corner(-half_size, -half_size),
            corner(half_size, -half_size),
            corner(half_size, half_size),
            corner(-half_size, half_size),
        ]);
        Self::new(plane, vec![polygon])
    }

    /// Overrides the classification tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the plane the region lies on.
    #[inline]
    pub fn plane(&self) -> &Plane3D {
        &self.plane
    }

    /// Returns the convex pieces making up the region.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns the classification tolerance.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Total area of the region.
    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    fn with_polygons(&self, polygons: Vec<Polygon>) -> Self {
        Self {
            plane: self.plane.clone(),
            polygons,
            epsilon: self.epsilon,
        }
    }
}

impl SubHyperplane for PlaneRegion {
    type Hyperplane = Plane3D;

    fn hyperplane(&self) -> &Plane3D {
        &self.plane
    }

    fn split(&self, hyperplane: &Plane3D) -> Split<Self> {
        // With no vertex to test, fall back on comparing the planes.
        if self.polygons.is_empty() && self.plane.coincides_with(hyperplane, self.epsilon) {
            return Split::Coincident;
        }

        let sides: Vec<PolygonSide> = self
            .polygons
            .iter()
            .map(|polygon| polygon.classify(hyperplane, self.epsilon))
            .collect();
        if !sides.is_empty() && sides.iter().all(|side| *side == PolygonSide::On) {
            return Split::Coincident;
        }

        let mut plus = Vec::new();
        let mut minus = Vec::new();
        for (polygon, side) in self.polygons.iter().zip(sides) {
            match side {
                PolygonSide::Plus => plus.push(polygon.clone()),
                // Only a degenerate sliver can lie flat on the plane while the
                // rest of the region does not.
                PolygonSide::Minus | PolygonSide::On => minus.push(polygon.clone()),
                PolygonSide::Spanning => {
                    let (plus_part, minus_part) = polygon.split(hyperplane, self.epsilon);
                    plus.extend(plus_part);
                    minus.extend(minus_part);
                }
            }
        }

        match (plus.is_empty(), minus.is_empty()) {
            // An empty region has no side; it is reported as uncut on the
            // plus side so callers keep using it unchanged.
            (_, true) => Split::Plus,
            (true, false) => Split::Minus,
            (false, false) => Split::Both {
                plus: self.with_polygons(plus),
                minus: self.with_polygons(minus),
            },
        }
    }

    fn reunite(mut self, other: Self) -> Self {
        debug_assert!(
            self.plane.coincides_with(&other.plane, self.epsilon),
            "Only regions of the same plane can be reunited"
        );
        self.polygons.extend(other.polygons);
        self
    }

    /// Empty when the total area is within `epsilon²`, the area tolerance
    /// matching the length tolerance used for classification.
    fn is_empty(&self) -> bool {
        self.area() <= self.epsilon * self.epsilon
    }
}
