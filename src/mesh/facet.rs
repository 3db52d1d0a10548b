//! Struct and functions for working with oriented triangles.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

/// An oriented triangle.
///
/// Winding is **counter-clockwise (CCW) when viewed from the outside**, so the
/// right-hand-rule cross product `(v1 - v0) × (v2 - v0)` points outward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facet {
    pub vertices: [Point3<Real>; 3],
}

impl Facet {
    #[inline]
    pub const fn new(v0: Point3<Real>, v1: Point3<Real>, v2: Point3<Real>) -> Self {
        Facet { vertices: [v0, v1, v2] }
    }

    #[inline]
    pub const fn vertices(&self) -> &[Point3<Real>; 3] {
        &self.vertices
    }

    /// Unit normal of the triangle, oriented by the stored vertex order.
    ///
    /// Collinear or repeated vertices have no defined normal; the result is
    /// then NaN. No code path in this crate builds such a facet.
    pub fn normal(&self) -> Vector3<Real> {
        let [p0, p1, p2] = self.vertices;
        let u = p1 - p0;
        let v = p2 - p0;
        let n = u.cross(&v);
        n / n.norm()
    }

    /// Area of the triangle.
    pub fn area(&self) -> Real {
        let [p0, p1, p2] = self.vertices;
        (p1 - p0).cross(&(p2 - p0)).norm() * 0.5
    }

    /// Average of the three vertices.
    pub fn centroid(&self) -> Point3<Real> {
        let [p0, p1, p2] = self.vertices;
        Point3::from((p0.coords + p1.coords + p2.coords) / 3.0)
    }

    /// True if [`Facet::normal`] has unit length within the crate tolerance.
    pub fn has_unit_normal(&self) -> bool {
        (self.normal().norm() - 1.0).abs() <= tolerance()
    }
}

impl From<[Point3<Real>; 3]> for Facet {
    fn from(vertices: [Point3<Real>; 3]) -> Self {
        Facet { vertices }
    }
}
