use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_SOLVER_CONFIG_YAML: &str = include_str!("../../config/solver.default.yaml");

/// Convergence and safety parameters shared by both solving algorithms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub gamma: f64,
    pub epsilon: f64,
    pub max_sweeps: usize,
    pub max_rounds: usize,
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            gamma: 0.99,
            epsilon: 1e-4,
            max_sweeps: 10_000,
            max_rounds: 1_000,
            seed: 0,
        }
    }
}

impl SolverConfig {
    /// Parse a solver config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SolverConfigError> {
        let config: SolverConfig = serde_yaml::from_str(yaml).map_err(SolverConfigError::Yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a solver config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SolverConfigError> {
        let yaml = fs::read_to_string(path).map_err(SolverConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SOLVER_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SolverConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }

    /// Check that the parameters admit a convergent solve.
    ///
    /// `gamma` must stay strictly below 1: the Bellman update contracts only
    /// for discounted returns, and a gamma of 1 would sweep forever on models
    /// with recurrent states.
    pub fn validate(&self) -> Result<(), SolverConfigError> {
        if !self.gamma.is_finite() || self.gamma < 0.0 || self.gamma >= 1.0 {
            return Err(SolverConfigError::Invalid(
                "gamma must be finite and in [0, 1)".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SolverConfigError::Invalid(
                "epsilon must be finite and > 0".to_string(),
            ));
        }
        if self.max_sweeps == 0 {
            return Err(SolverConfigError::Invalid(
                "max_sweeps must be greater than 0".to_string(),
            ));
        }
        if self.max_rounds == 0 {
            return Err(SolverConfigError::Invalid(
                "max_rounds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error type for loading and validating `SolverConfig`.
#[derive(Debug)]
pub enum SolverConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for SolverConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            SolverConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
            SolverConfigError::Invalid(err) => write!(f, "invalid solver config: {err}"),
        }
    }
}

impl std::error::Error for SolverConfigError {}
