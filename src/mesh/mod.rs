//! Oriented triangle primitives and the closed solids assembled from them.

pub mod facet;
pub mod prism;
pub mod quad;

pub use facet::Facet;
pub use prism::Prism;
pub use quad::Quad;

use crate::triangulated::Triangulated3D;

impl Triangulated3D for Facet {
    fn visit_facets<F>(&self, mut f: F)
    where
        F: FnMut(Facet),
    {
        f(*self);
    }
}

impl Triangulated3D for Quad {
    fn visit_facets<F>(&self, f: F)
    where
        F: FnMut(Facet),
    {
        self.facets().into_iter().for_each(f);
    }
}

impl Triangulated3D for Prism {
    fn visit_facets<F>(&self, f: F)
    where
        F: FnMut(Facet),
    {
        self.facets().into_iter().for_each(f);
    }
}
