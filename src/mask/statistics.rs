//! Summary counts for dry indicator masks.

use crate::grid::Field2D;

/// Statistics about a dry indicator mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DryMaskStatistics {
    /// Total number of cells
    pub total_cells: usize,
    /// Number of wet cells (mask value 1.0)
    pub wet_cells: usize,
    /// Number of dry cells (mask value NaN)
    pub dry_cells: usize,
}

impl DryMaskStatistics {
    /// Count wet and dry cells of a mask.
    pub fn from_mask(mask: &Field2D) -> Self {
        let total_cells = mask.shape().len();
        let dry_cells = mask.count_nan();

        Self {
            total_cells,
            wet_cells: total_cells - dry_cells,
            dry_cells,
        }
    }

    /// Fraction of cells that are dry (0.0 for an empty grid).
    pub fn dry_fraction(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.dry_cells as f64 / self.total_cells as f64
        }
    }

    /// Fraction of cells that are wet (0.0 for an empty grid).
    pub fn wet_fraction(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.wet_cells as f64 / self.total_cells as f64
        }
    }
}

impl std::fmt::Display for DryMaskStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dry Mask Statistics:")?;
        writeln!(f, "  Total cells: {}", self.total_cells)?;
        writeln!(
            f,
            "  Wet cells: {} ({:.1}%)",
            self.wet_cells,
            100.0 * self.wet_fraction()
        )?;
        write!(
            f,
            "  Dry cells: {} ({:.1}%)",
            self.dry_cells,
            100.0 * self.dry_fraction()
        )
    }
}
