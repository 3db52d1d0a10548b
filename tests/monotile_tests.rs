use monotile::{
    KITES, Monotile, TileConfig, Triangulated3D, ValidationError, Variant,
    io::{IoError, stl},
};

mod support;

use crate::support::{all_normals_outward, is_closed_and_consistent};

fn ascii_run(reflect: bool) -> String {
    let tile = Monotile::new(TileConfig::default()).reflected(reflect);
    let mut out = Vec::new();
    let written = stl::write_ascii(&mut out, tile.solids()).unwrap();
    assert_eq!(written, 16);
    String::from_utf8(out).unwrap()
}

#[test]
fn builds_sixteen_solids_in_order() {
    let tile = Monotile::default();
    assert_eq!(tile.solid_count(), 16);
    let solids = tile.build().unwrap();
    assert_eq!(solids.len(), 16);
    for (i, pair) in solids.chunks(2).enumerate() {
        assert_eq!(pair[0].name, format!("kite{i}"));
        assert_eq!(pair[1].name, format!("kite-inset{i}"));
    }
    assert_eq!(solids.facet_count(), 192);
}

#[test]
fn every_solid_is_closed_and_outward() {
    for reflect in [false, true] {
        for solid in Monotile::default().reflected(reflect).build().unwrap() {
            let facets = solid.prism.facets();
            assert!(is_closed_and_consistent(&facets), "{} is open", solid.name);
            assert!(all_normals_outward(&solid.prism), "{} faces inward", solid.name);
        }
    }
}

#[test]
fn reflected_tile_is_mirror_image() {
    let plain = Monotile::default().build().unwrap();
    let mirrored = Monotile::default().reflected(true).build().unwrap();
    for (a, b) in plain.iter().zip(&mirrored) {
        assert_eq!(a.name, b.name);
        let a_bottom = a.prism.bottom().vertices;
        let b_bottom = b.prism.bottom().vertices;
        for i in 0..4 {
            assert_eq!(b_bottom[i].x, -a_bottom[3 - i].x);
            assert_eq!(b_bottom[i].y, a_bottom[3 - i].y);
        }
    }
}

#[test]
fn solid_lookup_past_the_table_is_none() {
    let tile = Monotile::default();
    assert!(tile.solid(KITES.len(), Variant::Base).is_none());
    assert_eq!(
        tile.solid(3, Variant::Inset).unwrap().unwrap().name,
        "kite-inset3"
    );
}

#[test]
fn ascii_output_matches_the_format() {
    for reflect in [false, true] {
        let text = ascii_run(reflect);
        let headers = text.lines().filter(|l| l.starts_with("solid ")).count();
        let footers = text.lines().filter(|l| l.starts_with("endsolid ")).count();
        let facets = text.lines().filter(|l| l.starts_with("facet normal ")).count();
        let loops = text.lines().filter(|l| *l == "  outer loop").count();
        let vertices = text.lines().filter(|l| l.starts_with("    vertex ")).count();
        assert_eq!(headers, 16);
        assert_eq!(footers, 16);
        assert_eq!(facets, 192);
        assert_eq!(loops, 192);
        assert_eq!(vertices, 192 * 3);
    }
}

#[test]
fn every_emitted_coordinate_is_a_finite_real() {
    for reflect in [false, true] {
        let text = ascii_run(reflect);
        let numbers: Vec<&str> = text
            .lines()
            .filter_map(|l| {
                l.strip_prefix("facet normal ")
                    .or_else(|| l.strip_prefix("    vertex "))
            })
            .flat_map(str::split_whitespace)
            .collect();
        assert_eq!(numbers.len(), 192 * 3 + 192 * 9);
        for n in numbers {
            let value: f64 = n.parse().unwrap_or_else(|_| panic!("{n} is not a real"));
            assert!(value.is_finite());
            let (mantissa, exponent) = n.split_once('e').unwrap();
            assert_eq!(mantissa.trim_start_matches('-').len(), 8, "{n}");
            assert!(exponent.starts_with('+') || exponent.starts_with('-'), "{n}");
        }
    }
}

#[test]
fn first_solid_block_layout() {
    let text = ascii_run(false);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("solid kite0"));
    assert_eq!(lines.next(), Some(""));
    assert!(lines.next().unwrap().starts_with("facet normal "));
    assert_eq!(lines.next(), Some("  outer loop"));
}

#[test]
fn bad_config_stops_the_stream() {
    let tile = Monotile::new(TileConfig::default().with_inset(2.0));
    let mut out = Vec::new();
    let err = stl::write_ascii(&mut out, tile.solids()).unwrap_err();
    assert!(matches!(
        err,
        IoError::Validation(ValidationError::InvalidInset(_))
    ));
    assert!(out.is_empty());
}

#[test]
fn bad_config_is_reported_once() {
    let tile = Monotile::new(TileConfig::default().with_unit(-1.0));
    let results: Vec<_> = tile.solids().collect();
    assert_eq!(results, vec![Err(ValidationError::InvalidUnit(-1.0))]);
    assert_eq!(tile.build(), Err(ValidationError::InvalidUnit(-1.0)));
    assert_eq!(
        tile.solid(0, Variant::Base),
        Some(Err(ValidationError::InvalidUnit(-1.0)))
    );
}

#[test]
fn to_stl_ascii_wraps_any_shape() {
    let solids = Monotile::default().build().unwrap();
    let text = stl::to_stl_ascii(&solids, "hat");
    assert!(text.starts_with("solid hat\n"));
    assert!(text.contains("endsolid hat"));
    assert_eq!(text.matches("endfacet").count(), 192);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_build_matches_sequential() {
    let tile = Monotile::default().reflected(true);
    assert_eq!(tile.solids_par().unwrap(), tile.build().unwrap());
}
