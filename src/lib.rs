//! # drymask-rs
//!
//! Dry/wet cell masking for gridded shallow water output.
//!
//! This crate provides:
//! - Row-major 2D scalar fields with explicit grid shapes
//! - Dry indicator masks (`1.0` wet, NaN dry) from water depth fields
//! - A typed wet/dry view and mask statistics
//! - Helpers for blanking dry, never-inundated or fill-value cells in derived fields
//!
//! The `parallel` feature adds a rayon-based mask computation.

pub mod grid;
pub mod mask;
pub mod types;

// Re-export main types for convenience
pub use grid::{Field2D, GridError};
pub use mask::{
    DRY_CUTOFF, DryMaskConfig, DryMaskStatistics, MaskError, NEVER_INUNDATED_DEPTH, WetState,
    apply_dry_mask, compute_dry_mask, compute_dry_mask_with_config, negative_sentinel_mask,
    never_inundated_mask, wet_states, zero_sentinel_mask,
};
#[cfg(feature = "parallel")]
pub use mask::compute_dry_mask_parallel;
pub use types::GridShape;
