//! Four-vertex 2D outlines and the transform stages applied to them before extrusion.

use crate::errors::ValidationError;
use crate::float_types::{Real, cos_30, sin_30};
use crate::mesh::{Prism, Quad};
use geo::{Area, Centroid, LineString, Polygon as GeoPolygon};
use nalgebra::{Point2, Point3, Rotation2, Vector2};

/// A flat quadrilateral outline in the XY plane.
///
/// Each stage returns a new footprint; vertex order is preserved by every
/// stage except [`Footprint::reflect`], which reverses it so the winding
/// survives the mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub vertices: [Point2<Real>; 4],
}

impl Footprint {
    #[inline]
    pub const fn new(vertices: [Point2<Real>; 4]) -> Self {
        Footprint { vertices }
    }

    #[inline]
    fn map(self, f: impl Fn(Point2<Real>) -> Point2<Real>) -> Self {
        Footprint { vertices: self.vertices.map(f) }
    }

    /// Shrink toward the origin by `1 - inset`, then shift by
    /// `(inset·sin30°, inset·cos30°)`.
    ///
    /// The shift keeps the groove anchored against the kite edge that runs
    /// through the origin. A non-positive inset returns the footprint unchanged.
    pub fn deflate(self, inset: Real) -> Self {
        if inset <= 0.0 {
            return self;
        }
        let deflate = 1.0 - inset;
        let offset = Vector2::new(inset * sin_30(), inset * cos_30());
        self.map(|p| Point2::from(p.coords * deflate + offset))
    }

    /// Uniform scale about the origin.
    pub fn scale(self, factor: Real) -> Self {
        self.map(|p| Point2::from(p.coords * factor))
    }

    /// Rotate about the origin by `degrees`, counter-clockwise.
    pub fn rotate(self, degrees: Real) -> Self {
        let rotation = Rotation2::new(degrees.to_radians());
        self.map(|p| rotation * p)
    }

    pub fn translate(self, offset: Vector2<Real>) -> Self {
        self.map(|p| p + offset)
    }

    /// Mirror across the Y axis.
    ///
    /// X is negated and the order reversed (`v0↔v3`, `v1↔v2`); negating
    /// alone would flip the winding and with it every derived normal.
    pub fn reflect(self) -> Self {
        let [v0, v1, v2, v3] = self.vertices;
        let mirror = |p: Point2<Real>| Point2::new(-p.x, p.y);
        Footprint {
            vertices: [mirror(v3), mirror(v2), mirror(v1), mirror(v0)],
        }
    }

    /// Convert to a `geo` polygon for area and centroid queries.
    pub fn to_geo(&self) -> GeoPolygon<Real> {
        let ring: Vec<(Real, Real)> = self.vertices.iter().map(|p| (p.x, p.y)).collect();
        GeoPolygon::new(LineString::from(ring), vec![])
    }

    /// Signed area: negative when the outline runs clockwise.
    pub fn signed_area(&self) -> Real {
        self.to_geo().signed_area()
    }

    pub fn area(&self) -> Real {
        self.to_geo().unsigned_area()
    }

    /// Area centroid, `None` for a degenerate outline.
    pub fn centroid(&self) -> Option<Point2<Real>> {
        self.to_geo().centroid().map(|c| Point2::new(c.x(), c.y()))
    }

    /// Lift the outline into a closed solid of the given height.
    ///
    /// The bottom cap keeps the footprint order at `z = 0`; the top cap uses
    /// the reverse order at `z = height`. A clockwise footprint therefore
    /// yields a valid [`Prism`]; a counter-clockwise one is rejected.
    pub fn extrude(&self, height: Real) -> Result<Prism, ValidationError> {
        let at = |z: Real| self.vertices.map(|p| Point3::new(p.x, p.y, z));
        let bottom = Quad::new(at(0.0));
        let top = Quad::new(at(height)).reversed();
        Prism::new(bottom, top)
    }
}
