//! Forest hyperparameters with the dashboard's slider bounds.
//!
//! The embedding UI exposes four sliders; each has a fixed inclusive range.
//! `clamp` normalizes arbitrary input into range (logging when it does), and
//! `validate` is the strict alternative for callers that prefer an error over
//! silent correction.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inclusive bound pair for one slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: u32,
    pub max: u32,
}

impl ParamRange {
    const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Slider range for the number of trees in the forest.
pub const N_ESTIMATORS_RANGE: ParamRange = ParamRange::new(1, 20);
/// Slider range for maximum tree depth.
pub const MAX_DEPTH_RANGE: ParamRange = ParamRange::new(1, 10);
/// Slider range for the minimum samples required to split.
pub const MIN_SAMPLES_SPLIT_RANGE: ParamRange = ParamRange::new(2, 10);
/// Slider range for the minimum samples per leaf.
pub const MIN_SAMPLES_LEAF_RANGE: ParamRange = ParamRange::new(1, 10);

/// The four tunable forest hyperparameters.
///
/// `min_samples_split` and `min_samples_leaf` are carried for display
/// parity with the dashboard sliders; the synthetic generators only consume
/// `n_estimators` and `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestParameters {
    pub n_estimators: u32,
    pub max_depth: u32,
    pub min_samples_split: u32,
    pub min_samples_leaf: u32,
}

impl Default for ForestParameters {
    /// Dashboard defaults: 10 trees, depth 5, split 2, leaf 1.
    fn default() -> Self {
        Self {
            n_estimators: 10,
            max_depth: 5,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

impl ForestParameters {
    /// Returns a copy with every field clamped into its slider range.
    ///
    /// Out-of-range inputs are corrected rather than rejected, matching the
    /// slider behavior; each correction is logged at `warn`.
    #[must_use]
    pub fn clamp(self) -> Self {
        Self {
            n_estimators: clamp_field("n_estimators", self.n_estimators, N_ESTIMATORS_RANGE),
            max_depth: clamp_field("max_depth", self.max_depth, MAX_DEPTH_RANGE),
            min_samples_split: clamp_field(
                "min_samples_split",
                self.min_samples_split,
                MIN_SAMPLES_SPLIT_RANGE,
            ),
            min_samples_leaf: clamp_field(
                "min_samples_leaf",
                self.min_samples_leaf,
                MIN_SAMPLES_LEAF_RANGE,
            ),
        }
    }

    /// Strict check that every field is already within range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidParameter`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let checks = [
            ("n_estimators", self.n_estimators, N_ESTIMATORS_RANGE),
            ("max_depth", self.max_depth, MAX_DEPTH_RANGE),
            ("min_samples_split", self.min_samples_split, MIN_SAMPLES_SPLIT_RANGE),
            ("min_samples_leaf", self.min_samples_leaf, MIN_SAMPLES_LEAF_RANGE),
        ];
        for (name, value, range) in checks {
            if !range.contains(value) {
                return Err(CoreError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("{value} outside [{}, {}]", range.min, range.max),
                });
            }
        }
        Ok(())
    }
}

fn clamp_field(name: &str, value: u32, range: ParamRange) -> u32 {
    if range.contains(value) {
        value
    } else {
        let clamped = value.clamp(range.min, range.max);
        warn!("parameter {name}={value} outside [{}, {}], clamped to {clamped}", range.min, range.max);
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let params = ForestParameters::default();
        assert_eq!(params.n_estimators, 10);
        assert_eq!(params.max_depth, 5);
        assert_eq!(params.min_samples_split, 2);
        assert_eq!(params.min_samples_leaf, 1);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_clamp_corrects_out_of_range_fields() {
        let params = ForestParameters {
            n_estimators: 0,
            max_depth: 99,
            min_samples_split: 1,
            min_samples_leaf: 11,
        }
        .clamp();
        assert_eq!(params.n_estimators, 1);
        assert_eq!(params.max_depth, 10);
        assert_eq!(params.min_samples_split, 2);
        assert_eq!(params.min_samples_leaf, 10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_names_offending_field() {
        let params = ForestParameters {
            n_estimators: 25,
            ..ForestParameters::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("n_estimators"));
    }
}
