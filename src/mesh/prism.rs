//! Closed solids bounded by a bottom quad, a top quad and four derived side walls.

use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use crate::mesh::{facet::Facet, quad::Quad};

/// A box-like solid extruded between two end-cap quads.
///
/// Only the caps are stored; the side walls are rebuilt from matching vertex
/// pairs whenever they are needed. Construction guarantees the bottom cap
/// faces -Z and the top cap faces +Z, which fixes the chirality the side
/// walls rely on.
///
/// Vertex `i` of the bottom sits under vertex `(4 - i) % 4` of the top, so a
/// top cap is the bottom outline in reverse order (`v0, v3, v2, v1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism {
    bottom: Quad,
    top: Quad,
}

impl Prism {
    /// Validate cap orientation and build the solid.
    ///
    /// Returns [`ValidationError::BottomNormal`] when the bottom cap does not
    /// point down and [`ValidationError::TopNormal`] when the top cap does not
    /// point up.
    pub fn new(bottom: Quad, top: Quad) -> Result<Self, ValidationError> {
        let normal = bottom.normal();
        if normal.z.is_nan() || normal.z >= -tolerance() {
            return Err(ValidationError::BottomNormal { normal });
        }
        let normal = top.normal();
        if normal.z.is_nan() || normal.z <= tolerance() {
            return Err(ValidationError::TopNormal { normal });
        }
        Ok(Prism { bottom, top })
    }

    #[inline]
    pub const fn bottom(&self) -> &Quad {
        &self.bottom
    }

    #[inline]
    pub const fn top(&self) -> &Quad {
        &self.top
    }

    /// The four side walls, one per bottom edge, each wound to face outward.
    pub const fn side_quads(&self) -> [Quad; 4] {
        let t = self.top.vertices;
        let b = self.bottom.vertices;
        // Side i joins bottom edge (b[i], b[i+1]) with the top edge above it,
        // walked in the direction that keeps the normal outward.
        [
            Quad::new([t[0], t[3], b[1], b[0]]),
            Quad::new([t[3], t[2], b[2], b[1]]),
            Quad::new([t[2], t[1], b[3], b[2]]),
            Quad::new([t[1], t[0], b[0], b[3]]),
        ]
    }

    /// All 12 outward facing triangles: bottom cap, top cap, then the sides.
    pub const fn facets(&self) -> [Facet; 12] {
        let [b0, b1] = self.bottom.facets();
        let [t0, t1] = self.top.facets();
        let [s0, s1, s2, s3] = self.side_quads();
        let [s00, s01] = s0.facets();
        let [s10, s11] = s1.facets();
        let [s20, s21] = s2.facets();
        let [s30, s31] = s3.facets();
        [b0, b1, t0, t1, s00, s01, s10, s11, s20, s21, s30, s31]
    }

    /// Height of the top cap above the bottom cap, measured at `v0`.
    pub fn height(&self) -> Real {
        self.top.vertices[0].z - self.bottom.vertices[0].z
    }
}
