//! The full "hat" monotile: every kite, each as a base solid and a groove solid.

use crate::config::TileConfig;
use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::{Facet, Prism};
use crate::sketch::{KITES, KitePlacement, kite_prism};
use crate::triangulated::Triangulated3D;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which of the two solids built per kite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The full-size tile body.
    Base,
    /// The inset, slightly taller solid that forms the outline groove.
    Inset,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Base, Variant::Inset];

    /// Name of the solid for kite `index`: `kite3`, `kite-inset3`.
    pub fn solid_name(self, index: usize) -> String {
        match self {
            Variant::Base => format!("kite{index}"),
            Variant::Inset => format!("kite-inset{index}"),
        }
    }
}

/// A prism tagged with the name it is emitted under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSolid {
    pub name: String,
    pub prism: Prism,
}

impl Triangulated3D for NamedSolid {
    fn visit_facets<F>(&self, f: F)
    where
        F: FnMut(Facet),
    {
        self.prism.visit_facets(f);
    }
}

/// Generator for the solids of one monotile.
#[derive(Debug, Clone, PartialEq)]
pub struct Monotile {
    pub config: TileConfig,
    pub reflect: bool,
    pub placements: Vec<KitePlacement>,
}

impl Default for Monotile {
    fn default() -> Self {
        Monotile::new(TileConfig::default())
    }
}

impl Monotile {
    /// The standard eight-kite tile with the given dimensions.
    pub fn new(config: TileConfig) -> Self {
        Monotile {
            config,
            reflect: false,
            placements: KITES.to_vec(),
        }
    }

    /// Mirror every kite (the reversed tile).
    pub fn reflected(mut self, reflect: bool) -> Self {
        self.reflect = reflect;
        self
    }

    /// Replace the kite table.
    pub fn with_placements(mut self, placements: Vec<KitePlacement>) -> Self {
        self.placements = placements;
        self
    }

    const fn inset(&self, variant: Variant) -> Real {
        match variant {
            Variant::Base => 0.0,
            Variant::Inset => self.config.inset,
        }
    }

    /// Build one solid.
    ///
    /// `None` when `index` is past the end of the kite table.
    pub fn solid(
        &self,
        index: usize,
        variant: Variant,
    ) -> Option<Result<NamedSolid, ValidationError>> {
        let placement = self.placements.get(index)?;
        if let Err(err) = self.config.validate() {
            return Some(Err(err));
        }
        Some(self.build_solid(placement, index, variant))
    }

    /// Build one solid from an already validated config.
    fn build_solid(
        &self,
        placement: &KitePlacement,
        index: usize,
        variant: Variant,
    ) -> Result<NamedSolid, ValidationError> {
        let prism = kite_prism(placement, self.inset(variant), self.reflect, &self.config)?;
        Ok(NamedSolid {
            name: variant.solid_name(index),
            prism,
        })
    }

    /// Every (placement, index, variant) triple in output order.
    fn jobs(&self) -> impl Iterator<Item = (&KitePlacement, usize, Variant)> + '_ {
        self.placements.iter().enumerate().flat_map(|(index, placement)| {
            Variant::ALL
                .into_iter()
                .map(move |variant| (placement, index, variant))
        })
    }

    /// Lazily build every solid: for each kite, its base and then its groove.
    ///
    /// The config is validated once up front; if it is invalid the iterator
    /// yields that single error and nothing else.
    pub fn solids(&self) -> impl Iterator<Item = Result<NamedSolid, ValidationError>> + '_ {
        let checked = self.config.validate();
        let jobs = checked.is_ok().then(|| self.jobs()).into_iter().flatten();
        checked
            .err()
            .map(Err)
            .into_iter()
            .chain(jobs.map(move |(placement, index, variant)| {
                self.build_solid(placement, index, variant)
            }))
    }

    /// Build every solid up front, stopping at the first failure.
    pub fn build(&self) -> Result<Vec<NamedSolid>, ValidationError> {
        let solids = self.solids().collect::<Result<Vec<_>, _>>()?;
        debug!(solids = solids.len(), reflect = self.reflect, "built monotile");
        Ok(solids)
    }

    /// Build every solid on the rayon pool, keeping the sequential order.
    #[cfg(feature = "parallel")]
    pub fn solids_par(&self) -> Result<Vec<NamedSolid>, ValidationError> {
        self.config.validate()?;
        self.jobs()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(placement, index, variant)| self.build_solid(placement, index, variant))
            .collect()
    }

    /// Number of solids [`Monotile::solids`] yields.
    pub fn solid_count(&self) -> usize {
        self.placements.len() * Variant::ALL.len()
    }
}
