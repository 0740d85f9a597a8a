//! Scan configuration

use crate::error::ConfigError;

/// ADC full scale in millivolts (3.3 V reference).
pub const FULL_SCALE_MV: u16 = 3300;

/// Electrical parameters of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Sense voltage below which a switch reads as closed, in millivolts.
    pub threshold_mv: u16,
    /// Settle time between row selection and sampling, in microseconds.
    pub settle_us: u32,
}

impl MatrixConfig {
    /// Create a scan configuration with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ThresholdOutOfRange` if the threshold is zero
    /// or at/above [`FULL_SCALE_MV`] (either would close every switch or
    /// none).
    pub fn new(threshold_mv: u16, settle_us: u32) -> Result<Self, ConfigError> {
        if threshold_mv == 0 || threshold_mv >= FULL_SCALE_MV {
            return Err(ConfigError::ThresholdOutOfRange(threshold_mv));
        }
        Ok(Self {
            threshold_mv,
            settle_us,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_plausible_threshold() {
        let config = MatrixConfig::new(550, 50).unwrap();
        assert_eq!(config.threshold_mv, 550);
        assert_eq!(config.settle_us, 50);
    }

    #[test]
    fn config_rejects_degenerate_thresholds() {
        assert_eq!(
            MatrixConfig::new(0, 50).unwrap_err(),
            ConfigError::ThresholdOutOfRange(0)
        );
        assert_eq!(
            MatrixConfig::new(FULL_SCALE_MV, 50).unwrap_err(),
            ConfigError::ThresholdOutOfRange(FULL_SCALE_MV)
        );
    }
}
