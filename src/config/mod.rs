//! Configuration system with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{OrreryError, OrreryResult};

/// Top-level simulation configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct OrreryConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Simulation metadata.
    #[validate(nested)]
    #[serde(default)]
    pub simulation: SimulationMeta,

    /// Playback command configuration.
    #[validate(nested)]
    #[serde(default)]
    pub playback: PlaybackConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl OrreryConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> OrreryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> OrreryResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        // Schema constraints
        config.validate()?;

        // Additional semantic validation
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> OrreryConfigBuilder {
        OrreryConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> OrreryResult<()> {
        let steps = self.playback.fast_forward_steps;
        if steps == 0 {
            return Err(OrreryError::config(
                "fast_forward_steps must be at least 1",
            ));
        }
        if steps > 10_000 {
            return Err(OrreryError::config(format!(
                "fast_forward_steps should not exceed 10000, got {steps}"
            )));
        }

        Ok(())
    }
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            simulation: SimulationMeta::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct OrreryConfigBuilder {
    start_paused: Option<bool>,
    fast_forward_steps: Option<u32>,
    name: Option<String>,
}

impl OrreryConfigBuilder {
    /// Start the simulation in the `Paused` state.
    #[must_use]
    pub const fn start_paused(mut self, paused: bool) -> Self {
        self.start_paused = Some(paused);
        self
    }

    /// Set how many phase steps a single forward command performs.
    #[must_use]
    pub const fn fast_forward_steps(mut self, steps: u32) -> Self {
        self.fast_forward_steps = Some(steps);
        self
    }

    /// Set the simulation name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> OrreryConfig {
        let mut config = OrreryConfig::default();

        if let Some(paused) = self.start_paused {
            config.playback.start_paused = paused;
        }

        if let Some(steps) = self.fast_forward_steps {
            config.playback.fast_forward_steps = steps;
        }

        if let Some(name) = self.name {
            config.simulation.name = name;
        }

        config
    }
}

/// Simulation metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SimulationMeta {
    /// Simulation name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Version.
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Playback command configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaybackConfig {
    /// Start in the `Paused` state instead of `Playing`.
    #[serde(default)]
    pub start_paused: bool,

    /// Number of extra phase steps one forward command performs.
    ///
    /// The forward control's effect size is not dictated by the body
    /// data; it is an operator choice.
    #[validate(range(min = 1))]
    #[serde(default = "default_fast_forward_steps")]
    pub fast_forward_steps: u32,
}

const fn default_fast_forward_steps() -> u32 {
    1
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            start_paused: false,
            fast_forward_steps: default_fast_forward_steps(),
        }
    }
}
