//! Planar four-vertex polygons and their fixed split into two facets.

use crate::float_types::Real;
use crate::mesh::facet::Facet;
use nalgebra::{Point3, Vector3};

/// A planar, simple polygon with four vertices in a consistent winding.
///
/// The quad is always split along the `v2`–`v0` diagonal; callers are
/// responsible for supplying the vertices in the order they want the
/// resulting normals to follow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub vertices: [Point3<Real>; 4],
}

impl Quad {
    #[inline]
    pub const fn new(vertices: [Point3<Real>; 4]) -> Self {
        Quad { vertices }
    }

    /// Build a quad from twelve raw coordinates, `x y z` per vertex.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn from_coords(
        c0: Real, c1: Real, c2: Real,
        c3: Real, c4: Real, c5: Real,
        c6: Real, c7: Real, c8: Real,
        c9: Real, c10: Real, c11: Real,
    ) -> Self {
        Quad {
            vertices: [
                Point3::new(c0, c1, c2),
                Point3::new(c3, c4, c5),
                Point3::new(c6, c7, c8),
                Point3::new(c9, c10, c11),
            ],
        }
    }

    #[inline]
    pub const fn vertices(&self) -> &[Point3<Real>; 4] {
        &self.vertices
    }

    /// Split into `(v0, v1, v2)` and `(v2, v3, v0)`.
    pub const fn facets(&self) -> [Facet; 2] {
        let [v0, v1, v2, v3] = self.vertices;
        [Facet::new(v0, v1, v2), Facet::new(v2, v3, v0)]
    }

    /// Normal of the first facet, which orientation checks rely on.
    pub fn normal(&self) -> Vector3<Real> {
        self.facets()[0].normal()
    }

    /// Same quad with the winding reversed, keeping `v0` in place:
    /// `v0, v3, v2, v1`.
    pub const fn reversed(&self) -> Self {
        let [v0, v1, v2, v3] = self.vertices;
        Quad { vertices: [v0, v3, v2, v1] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_uses_v2_v0_diagonal() {
        let q = Quad::from_coords(
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            1.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
        );
        let [a, b] = q.facets();
        assert_eq!(a.vertices, [q.vertices[0], q.vertices[1], q.vertices[2]]);
        assert_eq!(b.vertices, [q.vertices[2], q.vertices[3], q.vertices[0]]);
    }

    #[test]
    fn reversed_flips_normal() {
        let q = Quad::from_coords(
            0.0, 0.0, 0.0,
            1.0, 0.0, 0.0,
            1.0, 1.0, 0.0,
            0.0, 1.0, 0.0,
        );
        assert!(q.normal().z > 0.0);
        assert!(q.reversed().normal().z < 0.0);
        assert_eq!(q.reversed().reversed(), q);
    }
}
