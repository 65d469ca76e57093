//! Applying dry indicator masks to gridded fields.
//!
//! Post-processing blanks cells that never held water so they drop out of
//! maps and statistics. It also blanks cells still holding the fill value of
//! a running accumulator: `-1` for arrival times the flow never reached, `0`
//! for a minimum depth that touched bare ground. Every helper here produces or
//! consumes the same `{1.0, NaN}` sentinel masks as
//! [`compute_dry_mask`](super::compute_dry_mask).

use crate::grid::Field2D;

use super::{DRY_VALUE, MaskError, WET_VALUE};

/// Maximum depth below which a cell is treated as never inundated (m).
pub const NEVER_INUNDATED_DEPTH: f64 = 1e-5;

/// Multiply a field by a dry indicator mask.
///
/// Wet cells keep their value, dry cells become NaN.
pub fn apply_dry_mask(field: &Field2D, mask: &Field2D) -> Result<Field2D, MaskError> {
    if field.shape() != mask.shape() {
        return Err(MaskError::ShapeMismatch {
            expected: mask.shape(),
            found: field.shape(),
        });
    }

    let data = field
        .data()
        .iter()
        .zip(mask.data())
        .map(|(&v, &m)| v * m)
        .collect();

    Ok(Field2D::from_data(data, field.shape())?)
}

/// Build a dry indicator mask from a maximum-depth field.
///
/// Cells whose maximum depth over a run stayed below
/// [`NEVER_INUNDATED_DEPTH`] are dry. The test is the direct comparison
/// `h_max < threshold`, so NaN maxima are wet.
pub fn never_inundated_mask(h_max: &Field2D) -> Field2D {
    h_max.map(|h| sentinel(h < NEVER_INUNDATED_DEPTH))
}

/// Mask out cells holding a negative fill value.
///
/// Arrival and peak times start at `-1` and stay negative where the wave never
/// arrived. NaN cells are kept.
pub fn negative_sentinel_mask(field: &Field2D) -> Field2D {
    field.map(|v| sentinel(v < 0.0))
}

/// Mask out cells that are exactly zero.
///
/// Used for minimum-depth fields, where zero means the cell was dry at some
/// point of the run.
pub fn zero_sentinel_mask(field: &Field2D) -> Field2D {
    field.map(|v| sentinel(v == 0.0))
}

#[inline]
fn sentinel(blank: bool) -> f64 {
    if blank { DRY_VALUE } else { WET_VALUE }
}
