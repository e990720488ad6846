//! Configuration system for SquadForge.
//!
//! Load solver configuration from TOML or YAML files to control the search
//! budget and exploration order without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use squadforge_config::{ExplorationType, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     exploration_type = "best_bound_first"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//!     node_count_limit = 1000000
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! assert_eq!(config.node_count_limit(), Some(1_000_000));
//! assert_eq!(config.exploration_type, ExplorationType::BestBoundFirst);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use squadforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance under which a solver value counts as "assigned".
pub const DEFAULT_ASSIGNMENT_TOLERANCE: f64 = 1e-5;

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
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Order in which the search frontier is explored.
    #[serde(default)]
    pub exploration_type: ExplorationType,

    /// A variable whose value is at least `1 - assignment_tolerance` is read
    /// back as set.
    #[serde(default = "default_assignment_tolerance")]
    pub assignment_tolerance: f64,
}

fn default_assignment_tolerance() -> f64 {
    DEFAULT_ASSIGNMENT_TOLERANCE
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            termination: None,
            exploration_type: ExplorationType::default(),
            assignment_tolerance: DEFAULT_ASSIGNMENT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the maximum number of search nodes.
    pub fn with_node_count_limit(mut self, nodes: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(nodes),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the exploration order.
    pub fn with_exploration_type(mut self, exploration_type: ExplorationType) -> Self {
        self.exploration_type = exploration_type;
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the node count limit, if configured.
    pub fn node_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_count_limit)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(0.0..0.5).contains(&self.assignment_tolerance) {
            return Err(ConfigError::Invalid(format!(
                "assignment_tolerance must be in [0, 0.5), got {}",
                self.assignment_tolerance
            )));
        }
        Ok(self)
    }
}

/// Order in which open search nodes are expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationType {
    /// Deepest node first. Finds a complete team early and keeps memory low.
    #[default]
    DepthFirst,

    /// Node with the best optimistic bound first.
    BestBoundFirst,
}

impl fmt::Display for ExplorationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplorationType::DepthFirst => write!(f, "DepthFirst"),
            ExplorationType::BestBoundFirst => write!(f, "BestBoundFirst"),
        }
    }
}

/// Termination configuration.
///
/// With no limit set the search runs until optimality is proven.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum minutes to spend solving.
    pub minutes_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search nodes to explore.
    pub node_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .millis_spent_limit
            .unwrap_or(0)
            .saturating_add(self.seconds_spent_limit.unwrap_or(0).saturating_mul(1_000))
            .saturating_add(self.minutes_spent_limit.unwrap_or(0).saturating_mul(60_000));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}
