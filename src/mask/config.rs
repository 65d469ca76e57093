//! Dry-cell cutoff configuration.

use super::MaskError;

/// Minimum water depth for a cell to count as wet (m).
///
/// Cells with `h / DRY_CUTOFF < 1` are dry.
pub const DRY_CUTOFF: f64 = 0.99e-3;

/// Configuration for dry mask computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DryMaskConfig {
    /// Depth cutoff (cells with h / cutoff < 1 are dry)
    pub cutoff: f64,
    /// Fail on NaN or infinite depths instead of classifying them
    pub reject_non_finite: bool,
}

impl DryMaskConfig {
    /// Create configuration with the standard cutoff.
    pub fn new() -> Self {
        Self {
            cutoff: DRY_CUTOFF,
            reject_non_finite: false,
        }
    }

    /// Create with custom depth cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Enable or disable rejection of non-finite depths.
    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    /// Check that the cutoff is finite and strictly positive.
    pub fn validate(&self) -> Result<(), MaskError> {
        if !self.cutoff.is_finite() || self.cutoff <= 0.0 {
            tracing::warn!(cutoff = self.cutoff, "rejecting dry mask cutoff");
            return Err(MaskError::InvalidCutoff(self.cutoff));
        }
        Ok(())
    }
}

impl Default for DryMaskConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoff() {
        let config = DryMaskConfig::default();
        assert_eq!(config.cutoff, 0.00099);
        assert!(!config.reject_non_finite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DryMaskConfig::new()
            .with_cutoff(0.05)
            .with_reject_non_finite(true);
        assert_eq!(config.cutoff, 0.05);
        assert!(config.reject_non_finite);
    }

    #[test]
    fn test_invalid_cutoffs() {
        for cutoff in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let result = DryMaskConfig::new().with_cutoff(cutoff).validate();
            assert!(
                matches!(result, Err(MaskError::InvalidCutoff(_))),
                "cutoff {} should be rejected",
                cutoff
            );
        }
    }
}
