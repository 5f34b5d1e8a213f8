//! Panel configuration: width bounds, anchoring edge, and width ownership.
//!
//! DESIGN
//! ======
//! Configuration is validated once, when the controller is built, so the
//! state machine itself never has to cope with inverted or non-finite bounds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CLOSE_THRESHOLD, DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH};

/// Viewport edge the panel is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Panel slides in from the left; dragging right widens it.
    Left,
    /// Panel slides in from the right; dragging left widens it.
    #[default]
    Right,
}

/// Who keeps the width between an open and the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidthOwnership {
    /// The last committed width survives closes; reopening restores it.
    #[default]
    Persist,
    /// Every `open` starts again from `default_width`.
    ResetOnOpen,
}

/// Errors raised while building or parsing a [`PanelConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("invalid width bounds: min {min} must be positive and not above max {max}")]
    InvalidBounds { min: f64, max: f64 },
    #[error("default width {default} outside [{min}, {max}]")]
    DefaultOutOfRange { default: f64, min: f64, max: f64 },
    #[error("close threshold {threshold} must be non-negative and below min width {min}")]
    InvalidCloseThreshold { threshold: f64, min: f64 },
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static configuration for one panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelConfig {
    pub edge: Edge,
    pub min_width: f64,
    pub max_width: f64,
    pub default_width: f64,
    pub close_threshold: f64,
    pub width_ownership: WidthOwnership,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            edge: Edge::Right,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            default_width: DEFAULT_WIDTH,
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            width_ownership: WidthOwnership::Persist,
        }
    }
}

impl PanelConfig {
    /// Parse a JSON config (camelCase keys, every field optional) and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// validation error for inconsistent values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the bounds are finite and consistent.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("min_width", self.min_width),
            ("max_width", self.max_width),
            ("default_width", self.default_width),
            ("close_threshold", self.close_threshold),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if self.min_width <= 0.0 || self.min_width > self.max_width {
            return Err(ConfigError::InvalidBounds { min: self.min_width, max: self.max_width });
        }
        if self.default_width < self.min_width || self.default_width > self.max_width {
            return Err(ConfigError::DefaultOutOfRange {
                default: self.default_width,
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.close_threshold < 0.0 || self.close_threshold >= self.min_width {
            return Err(ConfigError::InvalidCloseThreshold { threshold: self.close_threshold, min: self.min_width });
        }
        Ok(())
    }
}
