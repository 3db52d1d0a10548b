pub mod stl;

use crate::errors::ValidationError;

/// Errors raised while writing solids out.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    /// A solid failed to build while it was being streamed.
    #[error("Invalid geometry: {0}")]
    Validation(#[from] ValidationError),
}
