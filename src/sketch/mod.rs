//! 2D outlines: the kite footprint and its placement pipeline.

pub mod footprint;
pub mod kite;

pub use footprint::Footprint;
pub use kite::{KITES, KitePlacement, canonical_kite, kite_footprint, kite_prism};
