//! The kite outline and the eight placements that make up the "hat" monotile.
//!
//! See <https://arxiv.org/pdf/2303.10798.pdf> for the construction.

use crate::config::{TileConfig, validate_inset};
use crate::errors::ValidationError;
use crate::float_types::{Real, SQRT_3, cos_30, sin_30};
use crate::mesh::Prism;
use crate::sketch::footprint::Footprint;
use nalgebra::{Point2, Vector2};
use tracing::debug;

/// One kite of the monotile: where it goes and how far it is turned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KitePlacement {
    /// Destination in kite units, scaled by the unit size at build time.
    pub pos: [Real; 2],
    /// Rotation in degrees, counter-clockwise.
    pub rotation: Real,
}

impl KitePlacement {
    pub const fn new(x: Real, y: Real, rotation: Real) -> Self {
        KitePlacement { pos: [x, y], rotation }
    }
}

/// The eight kites of one hat tile.
pub const KITES: [KitePlacement; 8] = [
    KitePlacement::new(0.0, 0.0, -60.0),
    KitePlacement::new(0.0, 0.0, -120.0),
    KitePlacement::new(0.0, 0.0, -180.0),
    KitePlacement::new(0.0, 0.0, -240.0),
    KitePlacement::new(0.0, -2.0 * SQRT_3, 60.0),
    KitePlacement::new(0.0, -2.0 * SQRT_3, 120.0),
    KitePlacement::new(-3.0, -SQRT_3, -60.0),
    KitePlacement::new(-3.0, -SQRT_3, 0.0),
];

/// The kite in kite units, wound clockwise, with its tail at the origin.
pub fn canonical_kite() -> Footprint {
    Footprint::new([
        Point2::new(0.0, 0.0),
        Point2::new(0.0, SQRT_3),
        Point2::new(1.0, SQRT_3),
        Point2::new(SQRT_3 * cos_30(), SQRT_3 * sin_30()),
    ])
}

/// Place the kite outline: deflate, scale, rotate, translate, then mirror.
pub fn kite_footprint(
    placement: &KitePlacement,
    inset: Real,
    reflect: bool,
    config: &TileConfig,
) -> Footprint {
    let destination = Vector2::new(placement.pos[0], placement.pos[1]) * config.unit;
    let footprint = canonical_kite()
        .deflate(inset)
        .scale(config.unit)
        .rotate(placement.rotation)
        .translate(destination);
    if reflect { footprint.reflect() } else { footprint }
}

/// Build the solid for one kite.
///
/// With `inset > 0` the result is the slightly smaller, slightly taller
/// groove solid that outlines the tile when printed on top of the base.
/// `config` is expected to be validated already; [`crate::Monotile`] does so
/// once per run.
pub fn kite_prism(
    placement: &KitePlacement,
    inset: Real,
    reflect: bool,
    config: &TileConfig,
) -> Result<Prism, ValidationError> {
    validate_inset(inset)?;
    let footprint = kite_footprint(placement, inset, reflect, config);
    debug!(
        pos = ?placement.pos,
        rotation = placement.rotation,
        inset,
        reflect,
        "extruding kite"
    );
    footprint.extrude(config.height(inset))
}
