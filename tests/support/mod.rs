//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use monotile::{
    float_types::Real,
    mesh::{Facet, Prism},
};
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;

/// Approximately compare two floats.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Average of every vertex of every facet.
pub fn facets_centroid(facets: &[Facet]) -> Point3<Real> {
    let sum: Vector3<Real> = facets
        .iter()
        .flat_map(|f| f.vertices.iter().map(|p| p.coords))
        .sum();
    Point3::from(sum / (facets.len() * 3) as Real)
}

/// For a convex solid, every facet normal points away from the centroid.
pub fn all_normals_outward(prism: &Prism) -> bool {
    let facets = prism.facets();
    let center = facets_centroid(&facets);
    facets
        .iter()
        .all(|f| f.normal().dot(&(f.centroid() - center)) > 0.0)
}

/// Signed volume by the divergence theorem; positive when facets face outward.
pub fn signed_volume(facets: &[Facet]) -> Real {
    facets
        .iter()
        .map(|f| {
            let [a, b, c] = f.vertices;
            a.coords.dot(&b.coords.cross(&c.coords)) / 6.0
        })
        .sum()
}

type Key = [u64; 3];

fn key(p: &Point3<Real>) -> Key {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

/// A closed, consistently oriented surface uses every directed edge exactly
/// once and its reverse exactly once.
pub fn is_closed_and_consistent(facets: &[Facet]) -> bool {
    let mut edges: HashMap<(Key, Key), usize> = HashMap::new();
    for f in facets {
        for i in 0..3 {
            let a = key(&f.vertices[i]);
            let b = key(&f.vertices[(i + 1) % 3]);
            *edges.entry((a, b)).or_default() += 1;
        }
    }
    edges
        .iter()
        .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
}
