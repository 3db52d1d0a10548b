//! Physical dimensions of the printed tiles.

use crate::errors::ValidationError;
use crate::float_types::{MM, Real};

/// Size parameters shared by every tile of one generated monotile.
///
/// Lengths other than `unit` are expressed in kite units and scaled by
/// `unit` during the build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileConfig {
    /// Millimetres per kite unit.
    pub unit: Real,
    /// Fraction of a unit the groove solid is inset by.
    pub inset: Real,
    /// Thickness of a tile before the groove lift, in kite units.
    pub base_height: Real,
}

impl Default for TileConfig {
    fn default() -> Self {
        TileConfig {
            unit: 12.0 * MM,
            inset: 0.03,
            base_height: 0.2,
        }
    }
}

impl TileConfig {
    pub const fn with_unit(mut self, unit: Real) -> Self {
        self.unit = unit;
        self
    }

    pub const fn with_inset(mut self, inset: Real) -> Self {
        self.inset = inset;
        self
    }

    pub const fn with_base_height(mut self, base_height: Real) -> Self {
        self.base_height = base_height;
        self
    }

    /// Check every field is usable for building solids.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.unit.is_finite() || self.unit <= 0.0 {
            return Err(ValidationError::InvalidUnit(self.unit));
        }
        validate_inset(self.inset)?;
        if !self.base_height.is_finite() || self.base_height <= 0.0 {
            return Err(ValidationError::InvalidHeight(self.base_height));
        }
        Ok(())
    }

    /// Cap height in millimetres for a solid built with `inset`.
    pub fn height(&self, inset: Real) -> Real {
        (self.base_height + inset) * self.unit
    }
}

/// An inset is a finite fraction in `[0, 1)`.
pub fn validate_inset(inset: Real) -> Result<(), ValidationError> {
    if inset.is_finite() && (0.0..1.0).contains(&inset) {
        Ok(())
    } else {
        Err(ValidationError::InvalidInset(inset))
    }
}
