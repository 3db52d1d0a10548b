//! Validation errors

use crate::float_types::Real;
use nalgebra::Vector3;

/// All the possible validation issues we might encounter while building tile solids.
///
/// Cap orientation failures can only come from a bug in the transform
/// pipeline; parameter failures come from user supplied configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (BottomNormal) The bottom cap of a prism does not face -Z
    #[error("(BottomNormal) bad bottom normal: ({}, {}, {})", .normal.x, .normal.y, .normal.z)]
    BottomNormal { normal: Vector3<Real> },
    /// (TopNormal) The top cap of a prism does not face +Z
    #[error("(TopNormal) bad top normal: ({}, {}, {})", .normal.x, .normal.y, .normal.z)]
    TopNormal { normal: Vector3<Real> },
    /// (InvalidInset) The inset fraction is outside `[0, 1)` or not finite
    #[error("(InvalidInset) inset must be a finite fraction in [0, 1), got {0}")]
    InvalidInset(Real),
    /// (InvalidUnit) The unit size is not finite and positive
    #[error("(InvalidUnit) unit size must be finite and positive, got {0}")]
    InvalidUnit(Real),
    /// (InvalidHeight) The cap height is not finite and positive
    #[error("(InvalidHeight) base height must be finite and positive, got {0}")]
    InvalidHeight(Real),
}

impl ValidationError {
    /// True for the internal-consistency failures raised by prism construction.
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            ValidationError::BottomNormal { .. } | ValidationError::TopNormal { .. }
        )
    }
}
