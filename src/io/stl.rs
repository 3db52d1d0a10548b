use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::io::IoError;
use crate::mesh::Facet;
use crate::monotile::NamedSolid;
use crate::triangulated::Triangulated3D;
use nalgebra::{Point3, Vector3};
use std::io::Write;
use tracing::trace;

/// Format a real the way C's `%.6e` does: `1.200000e+01`, `-5.000000e-01`.
///
/// Rust's `{:.6e}` writes the exponent without sign or padding (`1.200000e1`);
/// mesh tools are happier with the C form.
pub fn format_real(value: Real) -> String {
    let s = format!("{value:.6e}");
    match s.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        },
        None => s,
    }
}

fn format_vector(v: &Vector3<Real>) -> String {
    format!("{} {} {}", format_real(v.x), format_real(v.y), format_real(v.z))
}

fn format_point(p: &Point3<Real>) -> String {
    format_vector(&p.coords)
}

/// One `facet normal ... endfacet` record, newline terminated.
pub fn facet_record(facet: &Facet) -> String {
    let mut out = String::new();
    out.push_str(&format!("facet normal {}\n", format_vector(&facet.normal())));
    out.push_str("  outer loop\n");
    for v in facet.vertices() {
        out.push_str(&format!("    vertex {}\n", format_point(v)));
    }
    out.push_str("  endloop\n");
    out.push_str("endfacet\n");
    out
}

/// Lazy sequence of formatted facet records.
///
/// Each record is rendered only when it is pulled; the sequence cannot be
/// restarted.
#[derive(Debug, Clone)]
pub struct FacetRecords<I> {
    facets: I,
}

impl<I: Iterator<Item = Facet>> FacetRecords<I> {
    pub fn new<T: IntoIterator<IntoIter = I>>(facets: T) -> Self {
        FacetRecords { facets: facets.into_iter() }
    }
}

impl<I: Iterator<Item = Facet>> Iterator for FacetRecords<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.facets.next().map(|f| facet_record(&f))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.facets.size_hint()
    }
}

pub fn solid_header(name: &str) -> String {
    format!("solid {name}\n\n")
}

/// Closing line of a solid block.
///
/// Strict ASCII STL readers reject a `solid` that is never closed, so every
/// block ends with `endsolid <name>`.
pub fn solid_footer(name: &str) -> String {
    format!("endsolid {name}\n\n")
}

/// Header, one blank-line separated record per facet, then footer.
pub fn solid_records(solid: &NamedSolid) -> impl Iterator<Item = String> + '_ {
    std::iter::once(solid_header(&solid.name))
        .chain(FacetRecords::new(solid.prism.facets()).map(|record| record + "\n"))
        .chain(std::iter::once(solid_footer(&solid.name)))
}

/// Stream named solids as ASCII STL, one `solid` block each.
///
/// Stops at the first solid that failed to build; blocks already written stay
/// written. Returns the number of solids written.
pub fn write_ascii<W, I>(writer: &mut W, solids: I) -> Result<usize, IoError>
where
    W: Write,
    I: IntoIterator<Item = Result<NamedSolid, ValidationError>>,
{
    let mut written = 0;
    for solid in solids {
        let solid = solid?;
        trace!(name = %solid.name, "writing solid");
        for record in solid_records(&solid) {
            writer.write_all(record.as_bytes())?;
        }
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Export to ASCII STL
/// Render any triangulated shape as a single **ASCII STL** `solid` block with the given `name`.
///
/// ```rust
/// # use monotile::{Monotile, io::stl::to_stl_ascii};
/// let solids = Monotile::default().build().unwrap();
/// let text = to_stl_ascii(&solids[0], "kite0");
/// assert!(text.starts_with("solid kite0"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D + ?Sized>(shape: &T, name: &str) -> String {
    let mut out = solid_header(name);
    shape.visit_facets(|facet| {
        out.push_str(&facet_record(&facet));
        out.push('\n');
    });
    out.push_str(&solid_footer(name));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Binary STL has no notion of separate solids, so everything `shape` visits
/// lands in one body.
#[cfg(feature = "stl-io")]
pub fn to_stl_binary<T: Triangulated3D + ?Sized>(shape: &T) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_facets(|facet| {
        let n = facet.normal();
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: facet
                .vertices
                .map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
        });
    });

    let mut bytes = Vec::new();
    write_stl(&mut bytes, triangles.iter())?;
    Ok(bytes)
}

/// Write `shape` as binary STL to `writer`.
#[cfg(feature = "stl-io")]
pub fn write_binary<W: Write, T: Triangulated3D + ?Sized>(
    writer: &mut W,
    shape: &T,
) -> Result<(), IoError> {
    let bytes = to_stl_binary(shape)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
