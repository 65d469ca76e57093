//! Dry/wet cell masking.
//!
//! # Example
//!
//! ```
//! use drymask_rs::grid::Field2D;
//! use drymask_rs::mask::{DryMaskStatistics, compute_dry_mask};
//!
//! let h2 = Field2D::from_rows(&[[0.0, 0.001], [0.0005, 1.0]]).unwrap();
//! let mask = compute_dry_mask(&h2, &h2).unwrap();
//!
//! assert!(mask.get(0, 0).is_nan());
//! assert_eq!(mask.get(1, 1), 1.0);
//! assert_eq!(DryMaskStatistics::from_mask(&mask).dry_cells, 2);
//! ```

mod apply;
mod config;
mod dry_mask;
mod statistics;

use thiserror::Error;

use crate::grid::GridError;
use crate::types::GridShape;

pub use apply::{
    NEVER_INUNDATED_DEPTH, apply_dry_mask, negative_sentinel_mask, never_inundated_mask,
    zero_sentinel_mask,
};
pub use config::{DRY_CUTOFF, DryMaskConfig};
#[cfg(feature = "parallel")]
pub use dry_mask::compute_dry_mask_parallel;
pub use dry_mask::{
    DRY_VALUE, WET_VALUE, WetState, compute_dry_mask, compute_dry_mask_with_config,
    is_dry_depth, wet_states,
};
pub use statistics::DryMaskStatistics;

/// Error type for mask operations.
#[derive(Debug, Error, PartialEq)]
pub enum MaskError {
    /// Depth field and shape reference differ in shape
    #[error("Shape mismatch: expected {expected}, got {found}")]
    ShapeMismatch { expected: GridShape, found: GridShape },

    /// Cutoff is not a finite positive depth
    #[error("Invalid cutoff: {0} (must be finite and positive)")]
    InvalidCutoff(f64),

    /// NaN or infinite depth with strict checking enabled
    #[error("Non-finite depth {value} at cell ({row}, {col})")]
    NonFiniteDepth { row: usize, col: usize, value: f64 },

    /// Grid construction error
    #[error(transparent)]
    Grid(#[from] GridError),
}
