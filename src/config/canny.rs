use crate::edges::kernel::{
    calculate_filter_size, validate_scale_factor, validate_truncation, DEFAULT_SCALE_FACTOR,
};
use crate::error::{CannyError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// High/low hysteresis thresholds on the normalized 0..=255 scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThresholdPair {
    pub high: i32,
    pub low: i32,
}

impl ThresholdPair {
    pub const fn new(high: i32, low: i32) -> Self {
        Self { high, low }
    }
}

/// Parameters of one pipeline run over an image.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```json
/// { "sigmas": [1.0, 3.0], "thresholds": [{ "high": 120, "low": 40 }] }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CannyConfig {
    /// Gaussian smoothing scales, one full pass per value.
    pub sigmas: Vec<f64>,
    /// Truncation probability controlling kernel support, in (0, 1).
    pub truncation: f64,
    /// Fixed-point scale of the integer derivative kernels.
    pub scale_factor: i32,
    /// Hysteresis pairs, one edge map per pair and scale.
    pub thresholds: Vec<ThresholdPair>,
    /// Direction plot masks pixels below `mask_fraction * max(magnitude)`.
    pub mask_fraction: f64,
    /// Write a JSON summary next to the image artifacts.
    pub write_report: bool,
}

impl Default for CannyConfig {
    fn default() -> Self {
        Self {
            sigmas: vec![0.5, 1.0, 2.0],
            truncation: 0.3,
            scale_factor: DEFAULT_SCALE_FACTOR,
            thresholds: vec![ThresholdPair::new(100, 50), ThresholdPair::new(150, 75)],
            mask_fraction: 0.01,
            write_report: true,
        }
    }
}

impl CannyConfig {
    /// Reject parameters the kernel builders would refuse, before any work.
    pub fn validate(&self) -> Result<()> {
        if self.sigmas.is_empty() {
            return Err(CannyError::InvalidParameter(
                "at least one sigma is required".to_string(),
            ));
        }
        validate_truncation(self.truncation)?;
        for &sigma in &self.sigmas {
            calculate_filter_size(sigma, self.truncation)?;
        }
        validate_scale_factor(self.scale_factor)?;
        if !(self.mask_fraction.is_finite() && self.mask_fraction >= 0.0) {
            return Err(CannyError::InvalidParameter(format!(
                "mask fraction must be a non-negative number, got {}",
                self.mask_fraction
            )));
        }
        Ok(())
    }
}

pub fn load_canny_config(path: &Path) -> Result<CannyConfig> {
    let data = fs::read_to_string(path).map_err(|source| CannyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CannyError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_parameters() {
        let cfg = CannyConfig::default();
        assert_eq!(cfg.sigmas, vec![0.5, 1.0, 2.0]);
        assert_eq!(cfg.truncation, 0.3);
        assert_eq!(cfg.scale_factor, 255);
        assert_eq!(
            cfg.thresholds,
            vec![ThresholdPair::new(100, 50), ThresholdPair::new(150, 75)]
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: CannyConfig =
            serde_json::from_str(r#"{ "sigmas": [1.5], "write_report": false }"#).unwrap();
        assert_eq!(cfg.sigmas, vec![1.5]);
        assert!(!cfg.write_report);
        assert_eq!(cfg.truncation, 0.3);
        assert_eq!(cfg.thresholds.len(), 2);
    }

    #[test]
    fn validation_catches_bad_values() {
        let bad = [
            CannyConfig {
                sigmas: vec![],
                ..Default::default()
            },
            CannyConfig {
                sigmas: vec![1.0, 0.25],
                ..Default::default()
            },
            CannyConfig {
                truncation: 1.0,
                ..Default::default()
            },
            CannyConfig {
                scale_factor: 0,
                ..Default::default()
            },
            CannyConfig {
                mask_fraction: -0.5,
                ..Default::default()
            },
            CannyConfig {
                sigmas: vec![1.0, 1e160],
                ..Default::default()
            },
            CannyConfig {
                sigmas: vec![1e5],
                ..Default::default()
            },
        ];
        for cfg in bad {
            assert!(matches!(
                cfg.validate(),
                Err(CannyError::InvalidParameter(_))
            ));
        }
    }
}
