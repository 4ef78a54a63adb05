//! Configuration system for the Munkres solver.
//!
//! Load solver configuration from TOML or YAML to control size limits,
//! numeric tolerance, self-checking and trace capture without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use munkres_config::{EnvironmentMode, SolverConfig};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     environment_mode = "full_assert"
//!     max_dimension = 64
//!     trace = true
//! "#).unwrap();
//!
//! assert_eq!(config.max_dimension, 64);
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.tolerance, 1e-9);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use munkres_config::SolverConfig;
//!
//! let config = SolverConfig::load("munkres.toml").unwrap_or_default();
//! assert_eq!(config.max_dimension, 128);
//! ```

use std::path::Path;

use munkres_core::{DEFAULT_MAX_DIMENSION, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode controlling self-checks.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Largest accepted row or column count.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: usize,

    /// Absolute tolerance for every comparison against zero.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Whether convenience entry points record a step trace.
    #[serde(default)]
    pub trace: bool,
}

fn default_max_dimension() -> usize {
    DEFAULT_MAX_DIMENSION
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            environment_mode: EnvironmentMode::default(),
            max_dimension: DEFAULT_MAX_DIMENSION,
            tolerance: DEFAULT_TOLERANCE,
            trace: false,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the maximum dimension.
    pub fn with_max_dimension(mut self, max_dimension: usize) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Sets the zero tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Enables or disables trace capture.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] if `max_dimension` is zero or `tolerance` is
    /// not a finite positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_dimension == 0 {
            return Err(ConfigError::Invalid(
                "max_dimension must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be finite and positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Returns true if solves should verify their duality certificate.
    pub fn asserts_certificate(&self) -> bool {
        self.environment_mode == EnvironmentMode::FullAssert
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No extra checks.
    NonReproducible,

    /// Deterministic behavior; the solver is always deterministic, so this is
    /// equivalent to `NonReproducible`.
    #[default]
    Reproducible,

    /// Verify the duality certificate after every solve and panic on failure.
    FullAssert,
}
