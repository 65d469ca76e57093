//! Dry indicator mask computation.
//!
//! A dry indicator mask has the shape of the grid and holds `1.0` for wet
//! cells and NaN for dry cells. Multiplying any field by the mask blanks the
//! dry cells, and NaN propagates through later sums and means.
//!
//! The wet/dry test is `h / cutoff < 1`, with the division carried out so
//! that floating-point behavior at the boundary is exact. A depth equal to
//! the cutoff is wet.
//!
//! NaN depths compare false and are therefore classified **wet**. Use
//! [`DryMaskConfig::with_reject_non_finite`] to turn them into an error.

use crate::grid::Field2D;
use crate::types::GridShape;

use super::{DryMaskConfig, MaskError};

/// Mask value for a wet cell.
pub const WET_VALUE: f64 = 1.0;

/// Mask value for a dry cell.
pub const DRY_VALUE: f64 = f64::NAN;

/// Wet/dry classification of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WetState {
    /// Depth at or above the cutoff
    Wet,
    /// Depth below the cutoff
    Dry,
}

impl WetState {
    /// Classify a depth against a cutoff.
    #[inline]
    pub fn from_depth(h: f64, cutoff: f64) -> Self {
        if is_dry_depth(h, cutoff) {
            Self::Dry
        } else {
            Self::Wet
        }
    }

    /// Read back a cell of a dry indicator mask.
    #[inline]
    pub fn from_mask_value(value: f64) -> Self {
        if value.is_nan() { Self::Dry } else { Self::Wet }
    }

    /// Mask value for this state (`1.0` or NaN).
    #[inline]
    pub fn mask_value(self) -> f64 {
        match self {
            Self::Wet => WET_VALUE,
            Self::Dry => DRY_VALUE,
        }
    }

    /// True for [`WetState::Wet`].
    #[inline]
    pub fn is_wet(self) -> bool {
        matches!(self, Self::Wet)
    }

    /// True for [`WetState::Dry`].
    #[inline]
    pub fn is_dry(self) -> bool {
        matches!(self, Self::Dry)
    }
}

/// True if depth `h` is below `cutoff`.
#[inline(always)]
pub fn is_dry_depth(h: f64, cutoff: f64) -> bool {
    h / cutoff < 1.0
}

/// Compute the dry indicator mask with the standard cutoff.
///
/// # Arguments
/// * `h2` - Water depth at each cell
/// * `shape_ref` - Field whose shape defines the mask shape (values unused)
///
/// # Errors
/// [`MaskError::ShapeMismatch`] if `h2` and `shape_ref` differ in shape.
pub fn compute_dry_mask(h2: &Field2D, shape_ref: &Field2D) -> Result<Field2D, MaskError> {
    compute_dry_mask_with_config(h2, shape_ref, &DryMaskConfig::default())
}

/// Compute the dry indicator mask with a custom configuration.
pub fn compute_dry_mask_with_config(
    h2: &Field2D,
    shape_ref: &Field2D,
    config: &DryMaskConfig,
) -> Result<Field2D, MaskError> {
    let shape = prepare(h2, shape_ref, config)?;
    let cutoff = config.cutoff;

    let mut mask = Field2D::filled(shape, WET_VALUE)?;
    for (m, &h) in mask.data_mut().iter_mut().zip(h2.data()) {
        if is_dry_depth(h, cutoff) {
            *m = DRY_VALUE;
        }
    }

    tracing::trace!(dry_cells = mask.count_nan(), "dry mask computed");
    Ok(mask)
}

/// Compute the dry indicator mask in parallel, one grid row per task.
///
/// Produces the same mask as [`compute_dry_mask_with_config`].
#[cfg(feature = "parallel")]
pub fn compute_dry_mask_parallel(
    h2: &Field2D,
    shape_ref: &Field2D,
    config: &DryMaskConfig,
) -> Result<Field2D, MaskError> {
    use rayon::prelude::*;

    let shape = prepare(h2, shape_ref, config)?;
    let cutoff = config.cutoff;

    // par_chunks panics on a zero chunk size; an empty grid has no rows to visit anyway
    let chunk_size = shape.cols().max(1);

    let mut mask = Field2D::filled(shape, WET_VALUE)?;
    mask.data_mut()
        .par_chunks_mut(chunk_size)
        .zip(h2.data().par_chunks(chunk_size))
        .for_each(|(mask_row, depth_row)| {
            for (m, &h) in mask_row.iter_mut().zip(depth_row) {
                if is_dry_depth(h, cutoff) {
                    *m = DRY_VALUE;
                }
            }
        });

    tracing::trace!(dry_cells = mask.count_nan(), "dry mask computed");
    Ok(mask)
}

/// Validate inputs and return the output shape.
fn prepare(
    h2: &Field2D,
    shape_ref: &Field2D,
    config: &DryMaskConfig,
) -> Result<GridShape, MaskError> {
    config.validate()?;

    let shape = shape_ref.shape();
    if h2.shape() != shape {
        return Err(MaskError::ShapeMismatch {
            expected: shape,
            found: h2.shape(),
        });
    }

    if config.reject_non_finite {
        if let Some((row, col, value)) = h2.indexed_iter().find(|(_, _, h)| !h.is_finite()) {
            return Err(MaskError::NonFiniteDepth { row, col, value });
        }
    }

    tracing::debug!(%shape, cutoff = config.cutoff, "computing dry mask");
    Ok(shape)
}

/// Classify every cell of a dry indicator mask, row-major.
pub fn wet_states(mask: &Field2D) -> Vec<WetState> {
    mask.data()
        .iter()
        .map(|&v| WetState::from_mask_value(v))
        .collect()
}
