#![cfg(feature = "stl-io")]

use monotile::{Monotile, Triangulated3D, io::stl};
use std::io::Cursor;

#[test]
fn binary_stl_holds_every_facet() -> Result<(), Box<dyn std::error::Error>> {
    let solids = Monotile::default().build()?;
    let bytes = stl::to_stl_binary(&solids)?;
    // 80 byte header, u32 count, 50 bytes per triangle.
    assert_eq!(bytes.len(), 84 + 50 * 192);

    let mesh = stl_io::read_stl(&mut Cursor::new(bytes))?;
    assert_eq!(mesh.faces.len(), solids.facet_count());
    Ok(())
}

#[test]
fn binary_normals_match_the_geometry() -> Result<(), Box<dyn std::error::Error>> {
    let solids = Monotile::default().reflected(true).build()?;
    let mut out = Vec::new();
    stl::write_binary(&mut out, &solids[0])?;

    let mesh = stl_io::read_stl(&mut Cursor::new(out))?;
    assert_eq!(mesh.faces.len(), 12);
    for (face, facet) in mesh.faces.iter().zip(solids[0].to_facets()) {
        let n = facet.normal();
        assert!((face.normal[0] as f64 - n.x).abs() < 1e-6);
        assert!((face.normal[1] as f64 - n.y).abs() < 1e-6);
        assert!((face.normal[2] as f64 - n.z).abs() < 1e-6);
    }
    Ok(())
}
