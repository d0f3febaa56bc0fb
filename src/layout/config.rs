//! Tolerances for the layout inference heuristics

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration options for layout inference
///
/// All distances are in pixels. Loaded from TOML, missing keys keep their defaults:
///
/// ```toml
/// overlap_tolerance = -12.0
/// grid_cluster_tolerance = 4.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// First-pass probe for sibling overlap
    pub overlap_probe_tolerance: f64,

    /// Overlap depth (negative) a sibling pair must exceed to be taken out of flow
    pub overlap_tolerance: f64,

    /// Overlap allowed between sequential items before a split is rejected
    pub split_tolerance: f64,

    /// Lower bound for alignment tolerance
    pub align_min_tolerance: f64,

    /// Alignment tolerance as a fraction of the container dimension
    pub align_tolerance_ratio: f64,

    /// Maximum spread between gaps for `space-between`
    pub space_between_gap_tolerance: f64,

    /// Distance under which left/top edges fall into the same grid track
    pub grid_cluster_tolerance: f64,

    /// Fewest framed children that can form a grid
    pub grid_min_children: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            overlap_probe_tolerance: -5.0,
            overlap_tolerance: -10.0,
            split_tolerance: 5.0,
            align_min_tolerance: 5.0,
            align_tolerance_ratio: 0.05,
            space_between_gap_tolerance: 10.0,
            grid_cluster_tolerance: 5.0,
            grid_min_children: 4,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration overrides from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration overrides from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the overlap probe and confirmation tolerances
    pub fn with_overlap_tolerances(mut self, probe: f64, confirm: f64) -> Self {
        self.overlap_probe_tolerance = probe;
        self.overlap_tolerance = confirm;
        self
    }

    pub fn with_split_tolerance(mut self, tolerance: f64) -> Self {
        self.split_tolerance = tolerance;
        self
    }

    /// Set the alignment tolerance floor and ratio
    pub fn with_align_tolerance(mut self, min: f64, ratio: f64) -> Self {
        self.align_min_tolerance = min;
        self.align_tolerance_ratio = ratio;
        self
    }

    pub fn with_space_between_gap_tolerance(mut self, tolerance: f64) -> Self {
        self.space_between_gap_tolerance = tolerance;
        self
    }

    pub fn with_grid_cluster_tolerance(mut self, tolerance: f64) -> Self {
        self.grid_cluster_tolerance = tolerance;
        self
    }

    /// Alignment tolerance for a container dimension
    pub fn align_tolerance(&self, dimension: f64) -> f64 {
        self.align_min_tolerance
            .max(dimension * self.align_tolerance_ratio)
    }

    /// Check that the tolerances describe a usable configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("overlap_probe_tolerance", self.overlap_probe_tolerance),
            ("overlap_tolerance", self.overlap_tolerance),
            ("split_tolerance", self.split_tolerance),
            ("align_min_tolerance", self.align_min_tolerance),
            ("align_tolerance_ratio", self.align_tolerance_ratio),
            ("space_between_gap_tolerance", self.space_between_gap_tolerance),
            ("grid_cluster_tolerance", self.grid_cluster_tolerance),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, "must be a finite number"));
            }
        }
        if self.overlap_tolerance > 0.0 {
            return Err(ConfigError::invalid(
                "overlap_tolerance",
                "must be zero or negative",
            ));
        }
        if self.overlap_probe_tolerance < self.overlap_tolerance {
            return Err(ConfigError::invalid(
                "overlap_probe_tolerance",
                "must not be deeper than overlap_tolerance",
            ));
        }
        for (field, value) in [
            ("split_tolerance", self.split_tolerance),
            ("align_min_tolerance", self.align_min_tolerance),
            ("align_tolerance_ratio", self.align_tolerance_ratio),
            ("space_between_gap_tolerance", self.space_between_gap_tolerance),
            ("grid_cluster_tolerance", self.grid_cluster_tolerance),
        ] {
            if value < 0.0 {
                return Err(ConfigError::invalid(field, "must not be negative"));
            }
        }
        if self.grid_min_children < 4 {
            return Err(ConfigError::invalid(
                "grid_min_children",
                "a grid needs at least 4 children",
            ));
        }
        Ok(())
    }
}
