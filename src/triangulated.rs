//! A trait for any shape which can be represented by oriented triangles

use crate::mesh::Facet;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of facets in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each facet, in a stable order.
    fn visit_facets<F>(&self, f: F)
    where
        F: FnMut(Facet);

    /// Number of facets [`Triangulated3D::visit_facets`] will produce.
    fn facet_count(&self) -> usize {
        let mut count = 0;
        self.visit_facets(|_| count += 1);
        count
    }

    /// Collect every facet into a `Vec`.
    fn to_facets(&self) -> Vec<Facet> {
        let mut facets = Vec::new();
        self.visit_facets(|f| facets.push(f));
        facets
    }
}

impl<T: Triangulated3D> Triangulated3D for [T] {
    fn visit_facets<F>(&self, mut f: F)
    where
        F: FnMut(Facet),
    {
        for shape in self {
            shape.visit_facets(&mut f);
        }
    }
}

impl<T: Triangulated3D> Triangulated3D for Vec<T> {
    fn visit_facets<F>(&self, f: F)
    where
        F: FnMut(Facet),
    {
        self.as_slice().visit_facets(f);
    }
}
