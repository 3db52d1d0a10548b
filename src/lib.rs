//! Watertight **STL** solids for the "hat" aperiodic monotile, ready for 3D printing.
//!
//! The hat is built from eight congruent kites. Each kite outline is
//! placed by a fixed transform pipeline (deflate, scale, rotate, translate,
//! mirror), extruded into a closed [`Prism`](mesh::Prism) whose twelve facets
//! all face outward, and written out as a named `solid` block. Every kite is
//! emitted twice: the tile body and a slightly smaller, slightly taller
//! groove solid that outlines it once printed.
//!
//! See <https://arxiv.org/pdf/2303.10798.pdf> for the tile itself.
//!
//! # Features
//! #### Default
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): binary `.stl` export via `stl_io`
//!
//! #### Optional
//! - **parallel**: build the solids on the rayon pool
//!
//! ```rust
//! use monotile::{Monotile, TileConfig, Triangulated3D};
//!
//! let solids = Monotile::new(TileConfig::default()).build().unwrap();
//! assert_eq!(solids.len(), 16);
//! assert_eq!(solids.facet_count(), 192);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod monotile;
pub mod sketch;
pub mod triangulated;

pub use config::TileConfig;
pub use errors::ValidationError;
pub use mesh::{Facet, Prism, Quad};
pub use monotile::{Monotile, NamedSolid, Variant};
pub use sketch::{Footprint, KITES, KitePlacement};
pub use triangulated::Triangulated3D;
